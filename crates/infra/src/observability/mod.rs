//! Logging initialization
//!
//! Library code only emits `tracing` events; binaries and tests call
//! [`init_tracing`] once to install a subscriber.

use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

/// Directive used when `RUST_LOG` is unset or invalid.
pub const DEFAULT_DIRECTIVE: &str = "info";

/// Install a fmt subscriber filtered by `RUST_LOG`.
///
/// Returns `false` if a global subscriber was already installed, which makes
/// repeated calls harmless.
pub fn init_tracing() -> bool {
    init_tracing_with(DEFAULT_DIRECTIVE)
}

/// Like [`init_tracing`], with an explicit fallback directive.
pub fn init_tracing_with(default_directive: &str) -> bool {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_directive));

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_target(true))
        .try_init()
        .is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn second_init_is_a_no_op() {
        let _ = init_tracing();
        assert!(!init_tracing());
        assert!(!init_tracing_with("debug"));
    }
}
