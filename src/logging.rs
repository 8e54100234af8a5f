// src/logging.rs
//!
//! Diagnostic logging
//!
//! Diagnostics are written to stderr so they never mix with command output.
//! The filter comes from `FILE_EXPLORER_LOG`, then `RUST_LOG`, then `warn`.

use tracing_subscriber::EnvFilter;

pub const LOG_ENV: &str = "FILE_EXPLORER_LOG";

pub fn init() {
    let filter = EnvFilter::try_from_env(LOG_ENV)
        .or_else(|_| EnvFilter::try_from_default_env())
        .unwrap_or_else(|_| EnvFilter::new("warn"));

    // Ignore the error when a subscriber is already installed (tests, embedding)
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
