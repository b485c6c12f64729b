//! Logging setup shared by the binaries.
//!
//! Uses `tracing` with a `tracing-subscriber` fmt layer. The level comes from
//! `RUST_LOG` (default `info`), e.g. `RUST_LOG=pv_core=debug`.

use tracing_subscriber::{fmt, EnvFilter};

/// Install the global subscriber. Call once at startup.
///
/// # Example
/// ```no_run
/// pv_core::logging::init();
/// ```
pub fn init() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(std::io::stderr)
        .init();
}

/// Subscriber for tests: debug level, captured by the test harness.
/// Safe to call more than once.
pub fn init_test() {
    let _ = fmt()
        .with_env_filter(EnvFilter::new("debug"))
        .with_test_writer()
        .try_init();
}
