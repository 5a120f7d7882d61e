use std::io;
use tracing_subscriber::{EnvFilter, fmt};

/// Default filter when `RUST_LOG` is unset: only protocol violations and
/// problems show up next to the report.
pub const DEFAULT_FILTER: &str = "warn";

/// Initialize diagnostics with JSON formatting and environment-based filtering.
///
/// - `RUST_LOG` selects the level (defaults to [`DEFAULT_FILTER`])
/// - events are flattened JSON objects
/// - everything goes to stderr; stdout carries only the report
pub fn init_logging() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .json()
        .flatten_event(true)
        .init();
}
