use crate::commands::{print_json, Context};
use crate::util::{parse_complaint_id, single_line};
use anyhow::Result;
use clap::Args;
use grievance_core::dto::ComplaintSummaryDto;

#[derive(Debug, Args)]
pub struct RegisterArgs {
    #[arg(long)]
    pub name: String,
    #[arg(long)]
    pub contact: String,
    #[arg(long)]
    pub category: String,
    #[arg(long)]
    pub description: String,
}

#[derive(Debug, Args)]
pub struct ComplaintArgs {
    pub id: String,
}

#[derive(Debug, Args)]
pub struct EscalateArgs {
    pub id: String,
    #[arg(long)]
    pub reason: String,
}

#[derive(Debug, Args)]
pub struct CustomerArgs {
    pub name: String,
}

pub fn register(ctx: &Context<'_>, args: RegisterArgs) -> Result<()> {
    let outcome = ctx
        .desk
        .register(&args.name, &args.contact, &args.category, &args.description)?;
    if ctx.json {
        print_json(&outcome)?;
    } else {
        println!("{} (sentiment: {})", outcome.message, outcome.sentiment);
    }
    Ok(())
}

pub fn status(ctx: &Context<'_>, args: ComplaintArgs) -> Result<()> {
    let id = parse_complaint_id(&args.id)?;
    let status = ctx.desk.get_status(id)?;
    if ctx.json {
        print_json(&status)?;
        return Ok(());
    }

    println!("complaint {}", status.complaint_id);
    println!("customer: {} <{}>", status.customer, status.contact);
    println!("category: {}", status.category);
    println!("status: {}", status.status);
    println!("sentiment: {}", status.sentiment);
    println!("created: {}", status.created_at);
    println!("description: {}", single_line(&status.description));
    Ok(())
}

pub fn history(ctx: &Context<'_>, args: CustomerArgs) -> Result<()> {
    let history = ctx.desk.get_history(&args.name)?;
    if ctx.json {
        print_json(&history)?;
        return Ok(());
    }

    println!("{}", history.customer);
    for complaint in &history.history {
        println!("{}", summary_line(complaint));
    }
    Ok(())
}

pub fn escalate(ctx: &Context<'_>, args: EscalateArgs) -> Result<()> {
    let id = parse_complaint_id(&args.id)?;
    let escalation = ctx.desk.escalate(id, &args.reason)?;
    if ctx.json {
        print_json(&escalation)?;
    } else {
        println!("{}", escalation.message);
    }
    Ok(())
}

pub fn resolve(ctx: &Context<'_>, args: ComplaintArgs) -> Result<()> {
    let id = parse_complaint_id(&args.id)?;
    let resolution = ctx.desk.resolve(id)?;
    if ctx.json {
        print_json(&resolution)?;
    } else {
        println!("{}", resolution.message);
    }
    Ok(())
}

pub fn export(ctx: &Context<'_>, args: CustomerArgs) -> Result<()> {
    let report = ctx.desk.export_report(&args.name)?;
    if ctx.json {
        print_json(&report)?;
    } else {
        println!("{}", report.message);
    }
    Ok(())
}

fn summary_line(complaint: &ComplaintSummaryDto) -> String {
    format!(
        "{:>5}  {:<9}  {:<8}  {}  {}: {}",
        complaint.id.get(),
        complaint.status.as_str(),
        complaint.sentiment.as_str(),
        complaint.created_at,
        complaint.category,
        single_line(&complaint.description)
    )
}
