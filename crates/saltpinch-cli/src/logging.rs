//! Tracing subscriber setup

use tracing_subscriber::EnvFilter;

/// Filter used when `RUST_LOG` is unset
pub(crate) const DEFAULT_FILTER: &str = "saltpinch=info,warn";

/// Install the global subscriber, writing to stderr
///
/// Stdout stays reserved for the run summary.
pub(crate) fn init() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
