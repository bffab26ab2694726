//! Global `tracing` subscriber for applications built on the SDK.
//!
//! The library itself only emits events; nothing is printed until a
//! subscriber is installed, either here or by the host application.

use tracing_subscriber::EnvFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::{SubscriberInitExt, TryInitError};

use crate::config::LoggingConfig;

/// `RUST_LOG` when set, otherwise `cfg.default_directive`.
fn filter(cfg: &LoggingConfig) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&cfg.default_directive))
}

/// Install a fmt subscriber as the global default.
///
/// # Errors
/// Returns an error when a global subscriber is already installed.
pub fn init_logging(cfg: &LoggingConfig) -> Result<(), TryInitError> {
    let registry = tracing_subscriber::registry().with(filter(cfg));
    if cfg.json {
        registry
            .with(tracing_subscriber::fmt::layer().json().with_target(true))
            .try_init()
    } else {
        registry
            .with(tracing_subscriber::fmt::layer().with_target(false).compact())
            .try_init()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;

    #[test]
    fn second_install_is_an_error() {
        temp_env::with_var_unset("RUST_LOG", || {
            let cfg = LoggingConfig::default();
            let _ = init_logging(&cfg);
            assert!(init_logging(&cfg).is_err());
        });
    }

    #[test]
    fn configured_directive_applies_without_rust_log() {
        temp_env::with_var_unset("RUST_LOG", || {
            let cfg = LoggingConfig {
                default_directive: "sherlock_sdk=debug".to_owned(),
                json: false,
            };
            assert_eq!(filter(&cfg).to_string(), "sherlock_sdk=debug");
        });
    }
}
