//! Logging initialization.
//!
//! Reads the level filter from `RUST_LOG` (default `info`) and writes formatted
//! events to stderr.

use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

use whisper_config::{DEFAULT_LOG_FILTER, RUST_LOG};

/// Install the global tracing subscriber; fails if one is already set
pub fn init() -> Result<(), tracing_subscriber::util::TryInitError> {
    let filter = EnvFilter::try_from_env(RUST_LOG)
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));

    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .try_init()
}
