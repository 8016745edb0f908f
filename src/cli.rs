//! CLI argument definitions.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Top-level CLI parser for `codedoc`.
#[derive(Debug, Parser)]
#[command(name = "codedoc", version, about = "Document a source tree with LLM profiling")]
pub struct Cli {
    /// The command to execute.
    #[command(subcommand)]
    pub command: Command,
}

/// Supported top-level subcommands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Walk the tree and generate the documentation report.
    Generate {
        /// Root directory of the project to document.
        #[arg(long, default_value = ".")]
        root: PathBuf,
        /// Path of the generated Markdown report.
        #[arg(long, default_value = "documentation.md")]
        output: PathBuf,
    },
    /// List the source files the filter would admit, without calling the
    /// collaborator.
    Files {
        /// Root directory of the project to inspect.
        #[arg(long, default_value = ".")]
        root: PathBuf,
    },
}
