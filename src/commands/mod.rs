//! Command dispatch and handlers.

pub mod files;
pub mod generate;

use std::env;
use std::path::PathBuf;

use crate::cli::Command;
use crate::context::ServiceContext;

/// Dispatch a parsed command to its handler.
///
/// A `.env` file in the working directory is loaded first, if present.
/// When `CODEDOC_RECORD` is set to a file path, all port interactions are
/// recorded to a cassette at that path.
///
/// # Errors
///
/// Returns an error string if the selected command handler fails.
pub fn dispatch(command: &Command) -> Result<(), String> {
    dotenvy::dotenv().ok();

    let ctx = match env::var("CODEDOC_RECORD") {
        Ok(path) => ServiceContext::recording(&PathBuf::from(path)),
        Err(_) => ServiceContext::live(),
    };

    dispatch_with_context(command, &ctx)
}

/// Dispatch a command with the given service context.
///
/// # Errors
///
/// Returns an error string if the selected command handler fails.
pub fn dispatch_with_context(command: &Command, ctx: &ServiceContext) -> Result<(), String> {
    match command {
        Command::Generate { root, output } => generate::run_with_context(ctx, root, output),
        Command::Files { root } => files::run_with_context(ctx, root),
    }
}
