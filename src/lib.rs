//! Borderchain engine library.
//!
//! Exposes the country graph, match state, move validation, opponent
//! strategies, the turn engine, and the text protocol for use by the
//! binaries and integration tests.

pub mod board;
pub mod engine;
pub mod eval;
pub mod movegen;
pub mod protocol;
pub mod search;
pub mod selfplay;

/// Installs the stderr `tracing` subscriber used by the binaries.
///
/// The filter comes from `RUST_LOG`, falling back to `default_filter`.
pub fn init_logging(default_filter: &str) {
    use tracing_subscriber::EnvFilter;

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));
    // A second call (e.g. from tests) keeps the first subscriber.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}
