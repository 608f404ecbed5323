//! Diagnostic logging for the binaries.
//!
//! Output goes to stderr so stdout only ever carries palette or swatch text.

use tracing_subscriber::EnvFilter;

/// Environment variable holding the log filter, e.g. `DANK16_LOG=debug`.
pub const LOG_ENV: &str = "DANK16_LOG";

const DEFAULT_FILTER: &str = "warn";

/// Install the global subscriber. Safe to call more than once.
#[cfg(not(tarpaulin_include))]
pub fn init() {
    let filter =
        EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
