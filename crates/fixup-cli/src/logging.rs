//! Tracing setup shared by the binaries

use tracing_subscriber::EnvFilter;

/// Filter used when `RUST_LOG` is unset
pub const DEFAULT_FILTER: &str = "warn";

/// Install a stderr `fmt` subscriber filtered by `RUST_LOG`
///
/// Stdout stays reserved for the user-facing messages. Calling this twice
/// is harmless.
pub fn init() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
