//! Path inclusion/exclusion rules for the documentation walk.

use crate::config::FilterConfig;

/// Decides whether a discovered file takes part in the documentation run.
///
/// Rules are evaluated in a fixed order: excluded basenames, excluded path
/// substrings, allowed path prefixes, then default-deny. A substring
/// exclusion beats an allowed prefix because it is checked first.
pub struct PathFilter {
    config: FilterConfig,
}

impl PathFilter {
    /// Creates a filter from an explicit rule set.
    #[must_use]
    pub fn new(config: FilterConfig) -> Self {
        Self { config }
    }

    /// Returns `true` if the file at `path` must not be processed.
    ///
    /// `path` may use either separator style; it is normalized to forward
    /// slashes before any comparison. Paths matching no rule at all are
    /// excluded: only an allowed prefix admits a file.
    #[must_use]
    pub fn is_excluded(&self, path: &str) -> bool {
        let unified = path.replace('\\', "/");
        let base = unified.rsplit('/').next().unwrap_or(&unified);

        if self.config.excluded_files.iter().any(|name| name == base) {
            return true;
        }

        if self.config.excluded_path_patterns.iter().any(|pat| unified.contains(pat.as_str())) {
            return true;
        }

        if self.config.allowed_prefixes.iter().any(|prefix| unified.starts_with(prefix.as_str())) {
            return false;
        }

        true
    }
}
