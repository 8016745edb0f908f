//! `codedoc generate` command.

use std::path::Path;

use crate::config::{FilterConfig, ModelConfig};
use crate::context::ServiceContext;
use crate::filter::PathFilter;
use crate::walk;

/// Execute the `generate` command against the given context.
///
/// Builds the model configuration from the environment, runs the
/// documentation walk on a current-thread runtime, and prints a summary.
///
/// # Errors
///
/// Returns an error string when configuration, the walk, or any
/// collaborator call fails.
pub fn run_with_context(ctx: &ServiceContext, root: &Path, output: &Path) -> Result<(), String> {
    let model = ModelConfig::from_env()?;
    let filter = PathFilter::new(FilterConfig::default());

    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .map_err(|e| format!("failed to start async runtime: {e}"))?;

    let result = runtime.block_on(walk::generate(ctx, root, output, &model, &filter))?;

    let summary = &result.summary;
    println!(
        "documented {} function(s) and {} whole file(s) across {} source file(s)",
        summary.functions_documented, summary.files_documented, summary.files_processed
    );
    if summary.units_skipped > 0 {
        println!("skipped {} unit(s) with unrecoverable names", summary.units_skipped);
    }

    Ok(())
}
