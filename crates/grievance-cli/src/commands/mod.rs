use anyhow::Result;
use grievance_desk::Desk;
use serde::Serialize;
use std::io::{self, Write};
use std::path::Path;

pub mod complaints;
pub mod dispatch;
pub mod interactions;
pub mod metrics;
pub mod sentiment;

pub struct Context<'a> {
    pub desk: &'a Desk,
    pub json: bool,
}

pub fn print_json<T: Serialize>(value: &T) -> Result<()> {
    let mut stdout = io::stdout().lock();
    serde_json::to_writer_pretty(&mut stdout, value)?;
    writeln!(stdout)?;
    Ok(())
}

/// Opening the store already created and migrated the database.
pub fn init(ctx: &Context<'_>, db_path: &Path) -> Result<()> {
    let version = ctx.desk.store().schema_version()?;
    if ctx.json {
        print_json(&serde_json::json!({
            "database": db_path.display().to_string(),
            "schema_version": version,
        }))?;
    } else {
        println!("database ready at {} (schema {})", db_path.display(), version);
    }
    Ok(())
}
