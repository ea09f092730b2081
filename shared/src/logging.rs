//! Shared logging utilities for consistent tracing across the workspace

use chrono::{DateTime, Utc};
use tracing::error;

/// Crate targets that receive the configured level
const TRACED_CRATES: &[&str] = &["exclusions", "shared"];

/// Build the filter directive string for a base level
fn filter_directives(base_level: &str) -> String {
    TRACED_CRATES
        .iter()
        .map(|target| format!("{target}={base_level}"))
        .collect::<Vec<_>>()
        .join(",")
}

/// Initialize the stdout tracing subscriber with an optional log level.
///
/// Defaults to `info`. Must be called at most once per process.
pub fn init_tracing_with_level(log_level: Option<&str>) {
    use tracing_subscriber::{EnvFilter, fmt};

    let base_level = log_level.unwrap_or("info");

    fmt()
        .with_env_filter(EnvFilter::new(filter_directives(base_level)))
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .with_line_number(false)
        .with_writer(std::io::stderr)
        .init();
}

/// Get formatted timestamp for consistent logging
pub fn format_timestamp() -> String {
    let now: DateTime<Utc> = Utc::now();
    now.format("%H:%M:%S%.3f").to_string()
}

/// Macro for store-aware info logging
#[macro_export]
macro_rules! registry_info {
    ($store:expr, $($arg:tt)*) => {
        tracing::info!(
            store = %$store,
            timestamp = $crate::logging::format_timestamp(),
            $($arg)*
        );
    };
}

/// Macro for store-aware debug logging
#[macro_export]
macro_rules! registry_debug {
    ($store:expr, $($arg:tt)*) => {
        tracing::debug!(
            store = %$store,
            timestamp = $crate::logging::format_timestamp(),
            $($arg)*
        );
    };
}

/// Contextual logging helper for error conditions
pub fn log_error(context: &str, error: &dyn std::fmt::Display) {
    error!(
        timestamp = format_timestamp(),
        error = %error,
        "❌ {} failed: {}",
        context,
        error
    );
}
