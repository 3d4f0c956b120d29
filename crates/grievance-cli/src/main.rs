mod commands;
mod error;
mod util;

use anyhow::{Context as _, Result};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::process::ExitCode;
use std::time::Duration;
use tracing::debug;

use crate::commands::{complaints, dispatch, interactions, metrics, sentiment, Context};
use crate::error::{exit_code_for, report_error};
use grievance_config as config;
use grievance_desk::{Desk, DeskConfig};
use grievance_store::{paths, Store, StoreOptions};

#[derive(Debug, Parser)]
#[command(name = "grievance", version, about = "Customer complaint desk")]
struct Cli {
    #[arg(long, global = true)]
    db_path: Option<PathBuf>,
    #[arg(long, global = true)]
    config: Option<PathBuf>,
    #[arg(long, global = true)]
    json: bool,
    #[arg(long, short, global = true)]
    verbose: bool,
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Create the database and apply migrations
    Init,
    Register(complaints::RegisterArgs),
    Status(complaints::ComplaintArgs),
    History(complaints::CustomerArgs),
    Escalate(complaints::EscalateArgs),
    Resolve(complaints::ComplaintArgs),
    /// Write a customer's complaints to a CSV report
    Export(complaints::CustomerArgs),
    Classify(sentiment::ClassifyArgs),
    #[command(name = "by-sentiment")]
    BySentiment(sentiment::BySentimentArgs),
    /// Record a message exchanged with a customer
    Log(interactions::LogArgs),
    Interactions(interactions::ListArgs),
    Metrics(metrics::MetricsArgs),
    /// Run one JSON-encoded operation and print its JSON result
    Dispatch(dispatch::DispatchArgs),
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    let verbose = cli.verbose;
    init_logging(verbose);
    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            report_error(&err, verbose);
            exit_code_for(&err)
        }
    }
}

fn run(cli: Cli) -> Result<()> {
    let Cli {
        db_path,
        config: config_path,
        json,
        verbose,
        command,
    } = cli;

    let app_config = config::load(config_path.clone()).with_context(|| "load config")?;
    if verbose {
        match config::resolve_config_path(config_path) {
            Ok(path) => {
                if path.exists() {
                    debug!(path = %path.display(), "config resolved");
                } else {
                    debug!(path = %path.display(), "config missing, using defaults");
                }
            }
            Err(err) => {
                debug!(error = %err, "config unavailable");
            }
        }
    }

    let db_path = paths::resolve_db_path(db_path.or_else(|| app_config.database.clone()))
        .with_context(|| "resolve database path")?;
    if verbose {
        debug!(path = %db_path.display(), "database path resolved");
    }

    let options = StoreOptions {
        busy_timeout: Duration::from_millis(app_config.busy_timeout_ms),
    };
    let store = Store::open_with(&db_path, &options)
        .with_context(|| format!("open database {}", db_path.display()))?;
    store.migrate().with_context(|| "run migrations")?;

    let desk = Desk::new(
        store,
        DeskConfig {
            reports_dir: app_config.reports_dir.clone(),
            policy: app_config.lifecycle.policy,
        },
    );
    let ctx = Context {
        desk: &desk,
        json,
    };

    match command {
        Command::Init => commands::init(&ctx, &db_path),
        Command::Register(args) => complaints::register(&ctx, args),
        Command::Status(args) => complaints::status(&ctx, args),
        Command::History(args) => complaints::history(&ctx, args),
        Command::Escalate(args) => complaints::escalate(&ctx, args),
        Command::Resolve(args) => complaints::resolve(&ctx, args),
        Command::Export(args) => complaints::export(&ctx, args),
        Command::Classify(args) => sentiment::classify(&ctx, args),
        Command::BySentiment(args) => sentiment::by_sentiment(&ctx, args),
        Command::Log(args) => interactions::log(&ctx, args),
        Command::Interactions(args) => interactions::list(&ctx, args),
        Command::Metrics(args) => metrics::show(&ctx, args),
        Command::Dispatch(args) => dispatch::dispatch(&ctx, args),
    }
}

fn init_logging(verbose: bool) {
    use tracing_subscriber::{fmt, EnvFilter};
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    let _ = fmt()
        .with_env_filter(filter)
        .with_target(false)
        .without_time()
        .with_writer(std::io::stderr)
        .try_init();
}
