//! Tree walker and orchestrator: discovers source files through the
//! filesystem port, extracts their functions, and drives one collaborator
//! call per documented unit.

use std::path::{Path, PathBuf};

use crate::config::ModelConfig;
use crate::context::ServiceContext;
use crate::extract;
use crate::filter::PathFilter;
use crate::ports::llm::CompletionRequest;
use crate::prompt;
use crate::report::{self, ReportWriter, RunSummary};

/// Extension of the source files this tool documents.
const SOURCE_EXTENSION: &str = ".py";

/// A source file selected for documentation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceEntry {
    /// Real path used for reading the file.
    pub full_path: PathBuf,
    /// Slash-normalized path relative to the walk root, `./`-prefixed.
    /// This is the form the filter matched against and the form printed in
    /// the report.
    pub display_path: String,
}

/// The outcome of a documentation run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedReport {
    /// The full Markdown written to the output file.
    pub markdown: String,
    /// Counts accumulated over the run.
    pub summary: RunSummary,
}

/// Walks the tree under `root` and returns the files the filter admits,
/// sorted lexicographically by display path so report order is stable
/// across filesystems.
///
/// # Errors
///
/// Returns an error if a directory listing fails.
pub fn collect_source_files(
    ctx: &ServiceContext,
    root: &Path,
    filter: &PathFilter,
) -> Result<Vec<SourceEntry>, String> {
    let mut entries = Vec::new();
    walk_dir(ctx, root, ".", filter, &mut entries)?;
    entries.sort_by(|a, b| a.display_path.cmp(&b.display_path));
    Ok(entries)
}

/// Depth-first walk of one directory, appending admitted files to `out`.
fn walk_dir(
    ctx: &ServiceContext,
    dir: &Path,
    display_dir: &str,
    filter: &PathFilter,
    out: &mut Vec<SourceEntry>,
) -> Result<(), String> {
    println!("scanning {display_dir}");

    let names = ctx
        .fs
        .list_dir(dir)
        .map_err(|e| format!("failed to list directory {display_dir}: {e}"))?;

    for name in names {
        let full_path = dir.join(&name);
        let display_path = format!("{display_dir}/{name}");

        if ctx.fs.is_dir(&full_path) {
            walk_dir(ctx, &full_path, &display_path, filter, out)?;
        } else if name.ends_with(SOURCE_EXTENSION) && !filter.is_excluded(&display_path) {
            out.push(SourceEntry { full_path, display_path });
        }
    }

    Ok(())
}

/// Runs the full documentation pipeline: walk, extract, describe, append.
///
/// Each extracted function becomes one function-section; a file with no
/// function definitions becomes one file-section. Sections are flushed to
/// `output` as they are produced, so a mid-run failure keeps the completed
/// part of the report.
///
/// # Errors
///
/// Returns an error when a file fails to parse, a filesystem operation
/// fails, or the collaborator rejects a request. Only name recovery is
/// non-fatal: a definition without a recoverable name is logged and
/// skipped.
pub async fn generate(
    ctx: &ServiceContext,
    root: &Path,
    output: &Path,
    model: &ModelConfig,
    filter: &PathFilter,
) -> Result<GeneratedReport, String> {
    let entries = collect_source_files(ctx, root, filter)?;

    let mut writer = ReportWriter::start(ctx.fs.as_ref(), output)?;
    let mut summary = RunSummary::default();

    for entry in &entries {
        println!("documenting {}", entry.display_path);

        let code = ctx
            .fs
            .read_to_string(&entry.full_path)
            .map_err(|e| format!("failed to read {}: {e}", entry.display_path))?;

        let slices = extract::extract_functions(&code)
            .map_err(|e| format!("failed to parse {}: {e}", entry.display_path))?;

        if slices.is_empty() {
            let description = describe(ctx, model, &code)
                .await
                .map_err(|e| format!("documentation failed for {}: {e}", entry.display_path))?;
            let file_name = base_name(&entry.display_path);
            writer.push_section(&report::file_section(
                file_name,
                &entry.display_path,
                &description,
            ))?;
            summary.files_documented += 1;
        } else {
            document_units(ctx, model, &mut writer, &entry.display_path, slices, &mut summary)
                .await?;
        }

        summary.files_processed += 1;
    }

    println!("report written to {}", output.display());
    Ok(GeneratedReport { markdown: writer.into_markdown(), summary })
}

/// Documents every named function slice of one file, appending a
/// function-section per unit.
///
/// A slice without a recoverable name is logged with its text and skipped;
/// its siblings are still documented.
async fn document_units(
    ctx: &ServiceContext,
    model: &ModelConfig,
    writer: &mut ReportWriter<'_>,
    display_path: &str,
    slices: Vec<extract::FunctionSlice>,
    summary: &mut RunSummary,
) -> Result<(), String> {
    for slice in slices {
        let Some(name) = slice.name else {
            eprintln!(
                "Warning: skipping definition without a recoverable name at {display_path}:{}-{}:\n{}",
                slice.start_line, slice.end_line, slice.text
            );
            summary.units_skipped += 1;
            continue;
        };

        let description = describe(ctx, model, &slice.text)
            .await
            .map_err(|e| format!("documentation failed for {name} in {display_path}: {e}"))?;
        writer.push_section(&report::function_section(&name, display_path, &description))?;
        summary.functions_documented += 1;
    }
    Ok(())
}

/// Requests one description from the collaborator.
async fn describe(
    ctx: &ServiceContext,
    model: &ModelConfig,
    code: &str,
) -> Result<String, Box<dyn std::error::Error + Send + Sync>> {
    let request = CompletionRequest {
        model: model.model.clone(),
        prompt: prompt::documentation_prompt(code),
        max_tokens: model.max_tokens,
        temperature: model.temperature,
    };
    let response = ctx.llm.complete(&request).await?;
    Ok(response.text)
}

/// Final path component of a slash-normalized display path.
fn base_name(display_path: &str) -> &str {
    display_path.rsplit('/').next().unwrap_or(display_path)
}
