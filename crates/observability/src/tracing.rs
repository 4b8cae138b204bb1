//! Subscriber installation: JSON lines to stderr, filtered via `RUST_LOG`.

use tracing_subscriber::EnvFilter;

/// Install the process-wide subscriber.
///
/// Defaults to `info` when `RUST_LOG` is unset. A second call is a no-op;
/// the already-installed subscriber wins.
pub fn init() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .json()
        .with_timer(tracing_subscriber::fmt::time::SystemTime)
        .with_target(false)
        .try_init();
}
