//! Shared logging setup for the pantry services and tools.

/// Subscriber configuration (filter, output format).
pub mod tracing;

/// Install process-wide structured logging.
///
/// Safe to call more than once; only the first call installs a subscriber.
pub fn init() {
    tracing::init();
}
