//! Diagnostic logging. Reports and prompts own stdout, so traces go to stderr.

use tracing_subscriber::{EnvFilter, fmt};

/// Environment variable holding the filter directive (e.g. `debug`).
pub const LOG_ENV: &str = "RBIKESHARE_LOG";

/// Install the global subscriber. Defaults to `warn` when `RBIKESHARE_LOG`
/// is unset or invalid; calling it twice is a no-op.
pub fn init_logging() {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"));

    let _ = fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
