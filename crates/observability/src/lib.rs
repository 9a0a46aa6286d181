//! Tracing and logging setup shared by binaries and tests.

/// Tracing configuration (filters, formats).
pub mod tracing;

pub use self::tracing::{LogConfig, LogConfigError, LogFormat, init_with};

/// Initialize process-wide observability (tracing/logging).
///
/// This is safe to call multiple times; subsequent calls become no-ops.
pub fn init() {
    self::tracing::init();
}
