//! Report section rendering and the append-as-you-go writer.

use std::path::Path;

use crate::ports::filesystem::FileSystem;

/// Fixed report title, followed by the blank line separating it from the
/// first section.
pub const REPORT_TITLE: &str = "# Project Overview\n\n";

/// Renders a section for one documented function.
#[must_use]
pub fn function_section(name: &str, path: &str, description: &str) -> String {
    format!("### Function: {name}\n\n#### Path: {path}\n\n{description}\n\n")
}

/// Renders a section for a whole file that contained no function
/// definitions.
#[must_use]
pub fn file_section(file_name: &str, path: &str, description: &str) -> String {
    format!("## File: {file_name}\n\nPath: {path}\n\n{description}\n\n")
}

/// Counts accumulated over one documentation run.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct RunSummary {
    /// Source files read and extracted.
    pub files_processed: usize,
    /// Function sections emitted.
    pub functions_documented: usize,
    /// Whole-file sections emitted.
    pub files_documented: usize,
    /// Extracted units skipped because no name could be recovered.
    pub units_skipped: usize,
}

/// Writes the report incrementally: the title truncates the output file,
/// then each section is appended as soon as it is produced, so a failed run
/// leaves the completed sections on disk. The assembled Markdown is kept
/// alongside for the caller.
pub struct ReportWriter<'a> {
    fs: &'a dyn FileSystem,
    path: &'a Path,
    contents: String,
}

impl<'a> ReportWriter<'a> {
    /// Starts a report at `path`, writing the title and truncating any
    /// previous report.
    ///
    /// # Errors
    ///
    /// Returns an error if the title cannot be written.
    pub fn start(fs: &'a dyn FileSystem, path: &'a Path) -> Result<Self, String> {
        fs.write(path, REPORT_TITLE)
            .map_err(|e| format!("failed to write report to {}: {e}", path.display()))?;
        Ok(Self { fs, path, contents: REPORT_TITLE.to_string() })
    }

    /// Appends one rendered section to the report file.
    ///
    /// # Errors
    ///
    /// Returns an error if the append fails.
    pub fn push_section(&mut self, section: &str) -> Result<(), String> {
        self.fs
            .append(self.path, section)
            .map_err(|e| format!("failed to append to report {}: {e}", self.path.display()))?;
        self.contents.push_str(section);
        Ok(())
    }

    /// Consumes the writer, returning the full Markdown written so far.
    #[must_use]
    pub fn into_markdown(self) -> String {
        self.contents
    }
}
