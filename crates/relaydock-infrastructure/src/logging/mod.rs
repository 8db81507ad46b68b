//! Tracing setup for the headless runner.
//!
//! Human-readable output on stdout, level controlled by `RUST_LOG` with a
//! default of `info` globally and `debug` for our own crates.

use std::sync::OnceLock;

use tracing_subscriber::EnvFilter;

static LOGGER_READY: OnceLock<()> = OnceLock::new();

pub fn init_logger() {
    if LOGGER_READY.get().is_some() {
        return;
    }

    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new("info,relaydock=debug"))
        .unwrap_or_else(|_| EnvFilter::new("info"));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .try_init();

    let _ = LOGGER_READY.set(());
}
