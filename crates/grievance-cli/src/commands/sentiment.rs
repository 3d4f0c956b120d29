use crate::commands::{print_json, Context};
use crate::util::{arg_or_stdin, single_line};
use anyhow::Result;
use clap::Args;

#[derive(Debug, Args)]
pub struct ClassifyArgs {
    /// Text to classify; read from stdin when omitted
    pub text: Option<String>,
}

#[derive(Debug, Args)]
pub struct BySentimentArgs {
    pub sentiment: String,
}

pub fn classify(ctx: &Context<'_>, args: ClassifyArgs) -> Result<()> {
    let text = arg_or_stdin(args.text)?;
    let sentiment = ctx.desk.classify(&text);
    if ctx.json {
        print_json(&sentiment)?;
    } else {
        println!("{sentiment}");
    }
    Ok(())
}

pub fn by_sentiment(ctx: &Context<'_>, args: BySentimentArgs) -> Result<()> {
    let matches = ctx.desk.get_by_sentiment(&args.sentiment)?;
    if ctx.json {
        print_json(&matches)?;
        return Ok(());
    }

    for complaint in matches {
        println!(
            "{:>5}  {:<9}  {} <{}>  {}: {}",
            complaint.id.get(),
            complaint.status.as_str(),
            complaint.customer,
            complaint.contact,
            complaint.category,
            single_line(&complaint.description)
        );
    }
    Ok(())
}
