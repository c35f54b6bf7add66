//! Tracing and logging setup shared by the service binaries.

/// Initialize process-wide logging.
///
/// This is safe to call multiple times; subsequent calls become no-ops.
pub fn init() {
    tracing::init(tracing::LogFormat::from_env());
}

/// Tracing subscriber configuration (filters, output format).
pub mod tracing;
