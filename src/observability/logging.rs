//! Structured logging setup
//!
//! One `tracing` subscriber per process, filtered by `RUST_LOG` and falling
//! back to the given directive.

use tracing_subscriber::{fmt, EnvFilter};

/// Default filter when `RUST_LOG` is unset
pub const DEFAULT_DIRECTIVE: &str = "info,shelfbench=debug";

/// Install the global subscriber.
///
/// Returns `false` if a subscriber was already installed (e.g. by another
/// test in the same process); that is not an error.
pub fn init_logging(default_directive: &str) -> bool {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_directive));

    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_thread_ids(true)
        .try_init()
        .is_ok()
}
