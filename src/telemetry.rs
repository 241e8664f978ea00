//! Log output for simulator runs.
//!
//! Strategies emit `debug` events per dispatch and `warn` events on rejected
//! input; comparison runs log one `info` line per strategy. None of that is
//! printed until a subscriber is installed.

use tracing_subscriber::EnvFilter;

/// Filter applied when `RUST_LOG` is unset or unparsable.
pub const DEFAULT_LOG_FILTER: &str = "u_cpu_schedule=info";

/// Installs a formatted stderr subscriber for the simulator's events.
///
/// The filter comes from `RUST_LOG`, falling back to [`DEFAULT_LOG_FILTER`].
/// Does nothing when the process already has a global subscriber, so an
/// embedding application keeps its own.
pub fn init_tracing() {
    if tracing::dispatcher::has_been_set() {
        return;
    }
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}
