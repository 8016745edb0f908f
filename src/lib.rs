//! Core library for the `codedoc` CLI: walks a project's source tree,
//! extracts function-level code snippets, and assembles a Markdown report
//! from LLM-generated descriptions.

pub mod adapters;
pub mod cassette;
pub mod cli;
pub mod commands;
pub mod config;
pub mod context;
pub mod extract;
pub mod filter;
pub mod ports;
pub mod prompt;
pub mod report;
pub mod walk;

use clap::Parser;

/// Run the CLI with the provided arguments.
///
/// # Errors
///
/// Returns an error string when argument parsing fails or command execution
/// fails.
pub fn run<I, T>(args: I) -> Result<(), String>
where
    I: IntoIterator<Item = T>,
    T: Into<std::ffi::OsString> + Clone,
{
    let cli = cli::Cli::try_parse_from(args).map_err(|err| err.to_string())?;
    commands::dispatch(&cli.command)
}
