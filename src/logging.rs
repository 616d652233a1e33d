//! Diagnostic logging
//!
//! Tree output goes to the sink; diagnostics go to stderr through `tracing`.

use std::io::IsTerminal;

use tracing_subscriber::EnvFilter;

/// Environment variable holding the log filter, e.g. `debug` or `rec_traverse=trace`.
pub const LOG_ENV: &str = "REC_TRAVERSE_LOG";

const DEFAULT_FILTER: &str = "warn";

/// Build the filter from `REC_TRAVERSE_LOG`, falling back to warnings and errors.
pub fn env_filter() -> EnvFilter {
    EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
}

/// Install the stderr subscriber. Safe to call more than once; later calls are no-ops.
pub fn init_logging() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter())
        .with_writer(std::io::stderr)
        .with_ansi(std::io::stderr().is_terminal())
        .with_target(false)
        .without_time()
        .try_init();
}
