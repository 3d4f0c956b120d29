use crate::commands::{print_json, Context};
use anyhow::Result;
use clap::Args;
use grievance_core::time::{local_date_key, now_utc, parse_date_key};

#[derive(Debug, Args)]
pub struct MetricsArgs {
    /// Day as YYYY-MM-DD (defaults to today)
    #[arg(long)]
    pub date: Option<String>,
}

pub fn show(ctx: &Context<'_>, args: MetricsArgs) -> Result<()> {
    let date = match args.date {
        Some(raw) => parse_date_key(&raw)?,
        None => local_date_key(now_utc()),
    };
    let metrics = ctx.desk.daily_metrics(&date)?;
    if ctx.json {
        print_json(&metrics)?;
    } else {
        println!("{}", metrics.date);
        println!("total complaints: {}", metrics.total_complaints);
        println!("resolved: {}", metrics.resolved_complaints);
        println!("escalations: {}", metrics.escalations);
    }
    Ok(())
}
