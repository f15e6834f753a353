//! Output and logging configuration types.

use serde::{Deserialize, Serialize};

/// How layout reports are written.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Pretty-print JSON output.
    pub pretty: bool,
}

/// Log level.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
#[derive(Default)]
pub enum LogLevel {
    Debug,
    #[default]
    Info,
    Warning,
    Error,
}

impl LogLevel {
    /// `tracing_subscriber` filter directive scoped to the weekgrid crates.
    pub fn directive(self) -> &'static str {
        match self {
            LogLevel::Debug => "weekgrid=debug",
            LogLevel::Info => "weekgrid=info",
            LogLevel::Warning => "weekgrid=warn",
            LogLevel::Error => "weekgrid=error",
        }
    }
}

/// Logging configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: LogLevel,
}
