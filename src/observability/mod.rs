//! Observability for the session
//!
//! - Diagnostics through `tracing`, written to stderr
//! - stdout is reserved for the interactive menu and results
//! - Phase scopes and timers (see [`ObservationScope`])

mod scope;

pub use scope::{ObservationScope, Timer};

use tracing_subscriber::EnvFilter;

/// Filter used when `RUST_LOG` is unset
///
/// Silent: the styled stdout transcript and the error printed by `main`
/// are the only user-facing output.
pub const DEFAULT_FILTER: &str = "off";

/// Install the global subscriber
///
/// Safe to call more than once; later calls are ignored.
pub fn init_logging() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
