//! Tracing setup: subscriber installation and structured event helpers.

pub mod events;

use std::sync::Once;

use provenant_core::config::defaults::DEFAULT_LOG_FILTER;
use provenant_core::config::ObservabilityConfig;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

static INIT: Once = Once::new();

/// Install a `fmt` subscriber filtered by `config.log_filter`.
///
/// An invalid filter string falls back to `provenant=info`. Idempotent, and a
/// subscriber installed elsewhere first is left in place.
pub fn init_tracing(config: &ObservabilityConfig) {
    INIT.call_once(|| {
        let filter = EnvFilter::try_new(&config.log_filter)
            .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));

        let registry = tracing_subscriber::registry().with(filter);
        let installed = if config.json {
            registry
                .with(fmt::layer().json().with_target(true).with_thread_ids(true))
                .try_init()
        } else {
            registry
                .with(fmt::layer().with_target(true).with_thread_ids(true))
                .try_init()
        };

        if installed.is_err() {
            tracing::debug!("global subscriber already set, keeping it");
        }
    });
}
