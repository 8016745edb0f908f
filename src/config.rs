//! Runtime configuration: model parameters and path-filter rules.

use std::env;

/// Default model identifier used for documentation completions.
const DEFAULT_MODEL: &str = "claude-sonnet-4-20250514";

/// Default sampling temperature, matching the tool's house style of varied,
/// natural-language descriptions.
const DEFAULT_TEMPERATURE: f32 = 0.9;

/// Default completion budget per documented unit.
const DEFAULT_MAX_TOKENS: u32 = 1024;

/// Model parameters for the documentation collaborator.
///
/// All three values can be overridden through the environment
/// (`CODEDOC_MODEL`, `CODEDOC_TEMPERATURE`, `CODEDOC_MAX_TOKENS`); they are
/// configuration, not core logic.
#[derive(Debug, Clone, PartialEq)]
pub struct ModelConfig {
    /// Model identifier sent with every completion request.
    pub model: String,
    /// Sampling temperature sent with every completion request.
    pub temperature: f32,
    /// Maximum tokens to generate per unit description.
    pub max_tokens: u32,
}

impl Default for ModelConfig {
    fn default() -> Self {
        Self {
            model: DEFAULT_MODEL.to_string(),
            temperature: DEFAULT_TEMPERATURE,
            max_tokens: DEFAULT_MAX_TOKENS,
        }
    }
}

impl ModelConfig {
    /// Builds a config from the process environment, falling back to the
    /// defaults for unset variables.
    ///
    /// # Errors
    ///
    /// Returns an error string if a set variable cannot be parsed.
    pub fn from_env() -> Result<Self, String> {
        let mut config = Self::default();

        if let Ok(model) = env::var("CODEDOC_MODEL") {
            config.model = model;
        }
        if let Ok(raw) = env::var("CODEDOC_TEMPERATURE") {
            config.temperature = raw
                .parse()
                .map_err(|e| format!("CODEDOC_TEMPERATURE is not a number ({raw:?}): {e}"))?;
        }
        if let Ok(raw) = env::var("CODEDOC_MAX_TOKENS") {
            config.max_tokens = raw
                .parse()
                .map_err(|e| format!("CODEDOC_MAX_TOKENS is not an integer ({raw:?}): {e}"))?;
        }

        Ok(config)
    }
}

/// Rule lists consumed by [`crate::filter::PathFilter`].
///
/// The default set mirrors the project layout this tool grew up around:
/// only files under `./app/` are documented, minus caches and
/// configuration files.
#[derive(Debug, Clone, PartialEq)]
pub struct FilterConfig {
    /// Exact basenames that are never processed.
    pub excluded_files: Vec<String>,
    /// Literal substrings that exclude any path containing them.
    pub excluded_path_patterns: Vec<String>,
    /// Path prefixes that admit a file once the exclusion checks pass.
    pub allowed_prefixes: Vec<String>,
}

impl Default for FilterConfig {
    fn default() -> Self {
        Self {
            excluded_files: vec![
                ".env".into(),
                ".gitignore".into(),
                "alembic_config.py".into(),
                "alembic.ini".into(),
                "CODE_OF_CONDUCT.md".into(),
            ],
            excluded_path_patterns: vec!["__pycache__/".into()],
            allowed_prefixes: vec!["./app/".into()],
        }
    }
}
