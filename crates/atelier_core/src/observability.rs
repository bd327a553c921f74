//! Tracing subscriber initialization.

use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

/// Install the global tracing subscriber.
///
/// The filter comes from `RUST_LOG`, falling back to `info`. With `json`
/// set, events are written as one JSON object per line. Logs go to stderr.
///
/// Returns an error message if a global subscriber is already installed.
pub fn init_tracing(json: bool) -> Result<(), String> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let installed = if json {
        tracing_subscriber::fmt()
            .json()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .with_current_span(true)
            .try_init()
    } else {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .with_target(false)
            .try_init()
    };

    installed.map_err(|e| format!("Failed to install tracing subscriber: {}", e))?;
    debug!(json, "Tracing subscriber installed");
    info!("Logging initialized");
    Ok(())
}
