//! Logging initialization

use tracing_subscriber::EnvFilter;

/// Initialize logging based on debug flag
///
/// Logs always go to stderr so stdout carries only lookup output. `RUST_LOG`
/// takes precedence over the flag when set.
pub fn init_logging(debug: bool) {
    let default_level = if debug { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    let result = tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(filter)
        .with_target(debug)
        .with_file(debug)
        .with_line_number(debug)
        .try_init();

    if result.is_err() {
        // Already initialized (tests may call this more than once)
        return;
    }

    if debug {
        tracing::debug!("Debug logging enabled");
    }
}
