//! Structured logging.
//!
//! Library code only emits `tracing` events; binaries install a subscriber
//! once at start-up with [`init_tracing`]. The filter comes from `RUST_LOG`
//! when set, otherwise from the caller's default directive.

use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

/// Default filter directive for docshard binaries.
pub const DEFAULT_LOG_DIRECTIVE: &str = "docshard=info";

/// Builds the log filter from `RUST_LOG`, falling back to `default_directive`.
#[must_use]
pub fn env_filter(default_directive: &str) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_directive))
}

/// Installs the global subscriber.
///
/// # Errors
///
/// Returns an error when a global subscriber is already installed.
pub fn init_tracing(
    default_directive: &str,
) -> Result<(), tracing_subscriber::util::TryInitError> {
    tracing_subscriber::registry()
        .with(env_filter(default_directive))
        .with(tracing_subscriber::fmt::layer().with_target(true))
        .try_init()
}
