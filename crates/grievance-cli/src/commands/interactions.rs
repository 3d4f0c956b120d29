use crate::commands::{print_json, Context};
use crate::util::{arg_or_stdin, parse_complaint_id, parse_customer_id, single_line};
use anyhow::Result;
use clap::Args;
use grievance_core::dto::InteractionDto;
use grievance_desk::InteractionScope;

#[derive(Debug, Args)]
pub struct LogArgs {
    #[arg(long)]
    pub customer_id: String,
    #[arg(long)]
    pub complaint_id: Option<String>,
    /// Message text; read from stdin when omitted
    #[arg(long)]
    pub message: Option<String>,
    #[arg(long)]
    pub sender: Option<String>,
}

#[derive(Debug, Args)]
pub struct ListArgs {
    #[arg(long, required_unless_present = "complaint_id", conflicts_with = "complaint_id")]
    pub customer_id: Option<String>,
    #[arg(long)]
    pub complaint_id: Option<String>,
}

pub fn log(ctx: &Context<'_>, args: LogArgs) -> Result<()> {
    let customer_id = parse_customer_id(&args.customer_id)?;
    let complaint_id = match args.complaint_id {
        Some(raw) => Some(parse_complaint_id(&raw)?),
        None => None,
    };
    let message = arg_or_stdin(args.message)?;

    let interaction =
        ctx.desk
            .log_interaction(customer_id, complaint_id, &message, args.sender.as_deref())?;

    if ctx.json {
        print_json(&InteractionDto::from(interaction))?;
    } else {
        println!(
            "logged interaction {} ({})",
            interaction.id, interaction.sentiment
        );
    }
    Ok(())
}

pub fn list(ctx: &Context<'_>, args: ListArgs) -> Result<()> {
    let scope = match (args.complaint_id, args.customer_id) {
        (Some(raw), _) => InteractionScope::Complaint(parse_complaint_id(&raw)?),
        (None, Some(raw)) => InteractionScope::Customer(parse_customer_id(&raw)?),
        (None, None) => unreachable!("clap requires one of --customer-id or --complaint-id"),
    };

    let interactions = ctx.desk.list_interactions(scope)?;
    if ctx.json {
        print_json(&interactions)?;
        return Ok(());
    }

    for interaction in interactions {
        println!(
            "{}  {:<6}  {:<8}  {}",
            interaction.timestamp,
            interaction.sender,
            interaction.sentiment.as_str(),
            single_line(&interaction.message)
        );
    }
    Ok(())
}
