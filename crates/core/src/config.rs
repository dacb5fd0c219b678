use crate::error::{GlintError, Result};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Overrides the directory log files are written to.
pub const LOG_DIR_ENV: &str = "GLINT_LOG_DIR";
/// Overrides the default filter used when `RUST_LOG` is unset.
pub const LOG_FILTER_ENV: &str = "GLINT_LOG";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogConfig {
    /// Prefix of the rolling log files, e.g. `lsp` produces `lsp.log.2024-01-21`.
    pub component: String,
    pub log_dir: PathBuf,
    pub default_filter: String,
    pub to_stderr: bool,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            component: "glint".to_string(),
            log_dir: default_log_dir(),
            default_filter: "info".to_string(),
            to_stderr: false,
        }
    }
}

impl LogConfig {
    /// Configuration for `component`, with environment overrides applied.
    pub fn for_component(component: &str) -> Self {
        Self {
            component: component.to_string(),
            ..Self::default()
        }
        .with_overrides(|key| std::env::var(key).ok())
    }

    pub fn with_overrides(mut self, lookup: impl Fn(&str) -> Option<String>) -> Self {
        if let Some(dir) = lookup(LOG_DIR_ENV).filter(|v| !v.is_empty()) {
            self.log_dir = PathBuf::from(dir);
        }
        if let Some(filter) = lookup(LOG_FILTER_ENV).filter(|v| !v.is_empty()) {
            self.default_filter = filter;
        }
        self
    }

    pub fn with_stderr(mut self, to_stderr: bool) -> Self {
        self.to_stderr = to_stderr;
        self
    }
}

fn default_log_dir() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".glint")
        .join("logs")
}

/// Tunables for highlight lookups, read from the client's `initializationOptions`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct HighlightOptions {
    /// Retry one byte to the left when the cursor sits just past a name.
    pub word_end_fallback: bool,
}

impl HighlightOptions {
    pub fn from_initialization_options(value: Option<&serde_json::Value>) -> Result<Self> {
        match value {
            None | Some(serde_json::Value::Null) => Ok(Self::default()),
            Some(value) => serde_json::from_value(value.clone()).map_err(|e| {
                GlintError::Config(format!("invalid initializationOptions: {}", e))
            }),
        }
    }
}
