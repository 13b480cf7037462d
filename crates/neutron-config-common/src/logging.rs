//! Logging setup for the generator binaries.
//!
//! Logs go to stderr so that generated configuration can be written to
//! stdout. `RUST_LOG` takes precedence over the level passed in.

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Installs the global tracing subscriber.
///
/// # Arguments
/// * `log_level` - Default log level if RUST_LOG not set (e.g., "info", "debug")
/// * `json` - Emit one JSON object per event instead of human-readable lines
pub fn init_logging(log_level: &str, json: bool) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));

    let layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true);

    if json {
        tracing_subscriber::registry()
            .with(filter)
            .with(layer.json())
            .init();
    } else {
        tracing_subscriber::registry().with(filter).with(layer).init();
    }
}
