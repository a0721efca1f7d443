//! Logging setup.
//!
//! One `tracing` subscriber writes to stderr so stdout stays free for the
//! run summary. `RUST_LOG` wins when set; otherwise `-v` flags raise the
//! level from `warn`. `log` records from config loading are bridged into
//! the same subscriber.

use anyhow::{anyhow, Result};
use tracing_subscriber::EnvFilter;

/// Default filter directive for a verbosity count.
pub fn level_for_verbosity(verbosity: u8) -> &'static str {
    match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

pub fn init_logging(verbosity: u8) -> Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(level_for_verbosity(verbosity)))
        .map_err(|e| anyhow!("failed to configure tracing level: {}", e))?;

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init()
        .map_err(|e| anyhow!("logging already initialized: {}", e))
}
