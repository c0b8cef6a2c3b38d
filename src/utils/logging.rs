//! Diagnostic logging setup.
//!
//! User-facing output goes through `ui::messages`; this only wires `tracing`
//! to stderr so that `WORKLOG_LOG=debug` shows what the store and the
//! import/export paths are doing.

use tracing_subscriber::EnvFilter;

pub const LOG_ENV: &str = "WORKLOG_LOG";

pub fn enable_logging() {
    let level = std::env::var(LOG_ENV).unwrap_or_else(|_| "warn".into());

    let filter = EnvFilter::try_new(format!(
        "{}={level}",
        env!("CARGO_PKG_NAME").replace('-', "_")
    ))
    .unwrap_or_else(|_| EnvFilter::new("warn"));

    // A second init (e.g. from tests calling run twice) is not an error worth reporting.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
