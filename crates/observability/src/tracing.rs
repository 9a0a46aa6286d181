//! Tracing/logging initialization.

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing_subscriber::EnvFilter;

const FORMAT_KEY: &str = "ORDERING_LOG_FORMAT";
const FILTER_KEY: &str = "RUST_LOG";

/// Output format of log lines.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Json,
    Compact,
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("unsupported value {value:?} for {key}")]
pub struct LogConfigError {
    pub key: &'static str,
    pub value: String,
}

/// Logging settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogConfig {
    /// `EnvFilter` directives, e.g. `info,ordering_order=debug`.
    pub filter: String,
    pub format: LogFormat,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            filter: "info".to_string(),
            format: LogFormat::default(),
        }
    }
}

impl LogConfig {
    /// Read `RUST_LOG` and `ORDERING_LOG_FORMAT`, falling back to defaults.
    pub fn from_env() -> Result<Self, LogConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, LogConfigError> {
        let mut config = Self::default();
        if let Some(filter) = lookup(FILTER_KEY) {
            config.filter = filter;
        }
        if let Some(raw) = lookup(FORMAT_KEY) {
            config.format = match raw.trim().to_ascii_lowercase().as_str() {
                "json" => LogFormat::Json,
                "compact" | "text" => LogFormat::Compact,
                _ => {
                    return Err(LogConfigError {
                        key: FORMAT_KEY,
                        value: raw,
                    });
                }
            };
        }
        Ok(config)
    }

    fn env_filter(&self) -> EnvFilter {
        EnvFilter::try_new(&self.filter).unwrap_or_else(|_| EnvFilter::new("info"))
    }
}

/// Initialize tracing/logging for the process from the environment.
///
/// Safe to call multiple times (subsequent calls are no-ops). An unreadable
/// configuration falls back to the defaults.
pub fn init() {
    match LogConfig::from_env() {
        Ok(config) => {
            init_with(&config);
        }
        Err(err) => {
            init_with(&LogConfig::default());
            ::tracing::warn!(error = %err, "invalid log configuration; using defaults");
        }
    }
}

/// Initialize tracing/logging with an explicit configuration.
///
/// Returns `false` when a global subscriber was already installed.
pub fn init_with(config: &LogConfig) -> bool {
    let builder = tracing_subscriber::fmt()
        .with_env_filter(config.env_filter())
        .with_timer(tracing_subscriber::fmt::time::SystemTime)
        .with_target(false);

    match config.format {
        LogFormat::Json => builder.json().try_init().is_ok(),
        LogFormat::Compact => builder.compact().try_init().is_ok(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_to_json_at_info() {
        let config = LogConfig::from_lookup(|_| None).unwrap();
        assert_eq!(config, LogConfig::default());
        assert_eq!(config.format, LogFormat::Json);
        assert_eq!(config.filter, "info");
    }

    #[test]
    fn reads_filter_and_format() {
        let config = LogConfig::from_lookup(|key| match key {
            "RUST_LOG" => Some("ordering_order=debug".to_string()),
            "ORDERING_LOG_FORMAT" => Some("Compact".to_string()),
            _ => None,
        })
        .unwrap();
        assert_eq!(config.filter, "ordering_order=debug");
        assert_eq!(config.format, LogFormat::Compact);
    }

    #[test]
    fn rejects_unknown_format() {
        let err = LogConfig::from_lookup(|key| {
            (key == "ORDERING_LOG_FORMAT").then(|| "xml".to_string())
        })
        .unwrap_err();
        assert_eq!(err.key, "ORDERING_LOG_FORMAT");
        assert_eq!(err.value, "xml");
    }

    #[test]
    fn second_initialization_is_a_no_op() {
        let config = LogConfig::default();
        init_with(&config);
        assert!(!init_with(&config));
    }
}
