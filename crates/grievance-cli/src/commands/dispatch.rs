use crate::commands::{print_json, Context};
use crate::error::invalid_input;
use crate::util::arg_or_stdin;
use anyhow::Result;
use clap::Args;
use grievance_desk::Operation;
use tracing::debug;

#[derive(Debug, Args)]
pub struct DispatchArgs {
    /// JSON object such as {"op": "check_status", "complaint_id": 1}; read
    /// from stdin when omitted
    pub request: Option<String>,
}

/// Output is always JSON: the operation result, or `{"error": ..}` when the
/// operation reports a domain error.
pub fn dispatch(ctx: &Context<'_>, args: DispatchArgs) -> Result<()> {
    let raw = arg_or_stdin(args.request)?;
    let op: Operation = serde_json::from_str(&raw)
        .map_err(|err| invalid_input(format!("invalid operation: {err}")))?;
    debug!(op = op.name(), "dispatching");
    let response = ctx.desk.respond(op)?;
    print_json(&response)
}
