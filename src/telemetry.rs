// src/telemetry.rs
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::AppConfig;

/// Install a global fmt subscriber. `RUST_LOG` wins over the configured
/// filter. Calling this twice keeps the first subscriber and logs a warning.
pub fn init_tracing(config: &AppConfig) {
    let env_filter = std::env::var("RUST_LOG")
        .ok()
        .unwrap_or_else(|| config.log_filter().to_string());

    let subscriber = tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(env_filter))
        .with(tracing_subscriber::fmt::layer());

    if subscriber.try_init().is_err() {
        tracing::warn!("tracing subscriber already initialised");
    }
}
