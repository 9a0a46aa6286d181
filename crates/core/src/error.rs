//! Domain error model.

use thiserror::Error;

/// Result type used across the domain layer.
pub type DomainResult<T> = Result<T, DomainError>;

/// Domain-level error.
///
/// Only deterministic business failures live here. Every aggregate invariant
/// check surfaces as [`DomainError::Validation`] with a human-readable message;
/// callers decide whether to discard, log or translate it.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// An aggregate or value failed validation.
    #[error("{0}")]
    Validation(String),

    /// An identifier was invalid (e.g. parse failure).
    #[error("invalid identifier: {0}")]
    InvalidId(String),
}

impl DomainError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn invalid_id(msg: impl Into<String>) -> Self {
        Self::InvalidId(msg.into())
    }

    /// Message carried by the error, without the variant prefix.
    pub fn message(&self) -> &str {
        match self {
            Self::Validation(msg) | Self::InvalidId(msg) => msg,
        }
    }
}

/// Configuration could not be read from its source.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("unsupported value {value:?} for {key}")]
    UnsupportedValue { key: &'static str, value: String },
}
