use tracing_subscriber::{EnvFilter, fmt};

use crate::env::ENV_LOG;

/// Install the global tracing subscriber.
///
/// The filter is read from `RUST_LOG`, then `COSMIC_LOG`, falling back to
/// `default_level`. Output goes to stderr so that stdout stays clean for
/// command output. Calling this twice is a no-op.
pub fn init_tracing(default_level: &str) {
    let filter = EnvFilter::try_from_env("RUST_LOG")
        .or_else(|_| EnvFilter::try_from_env(ENV_LOG))
        .unwrap_or_else(|_| EnvFilter::new(default_level));

    let _ = fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(std::io::stderr)
        .try_init();
}
