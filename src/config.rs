// src/config.rs
use std::env;
use thiserror::Error;

use crate::domain::article::IdStrategy;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AppConfig {
    id_strategy: IdStrategy,
    log_filter: String,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid configuration: {0}")]
    Invalid(String),
}

fn default_log_filter() -> String {
    "info".into()
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            id_strategy: IdStrategy::default(),
            log_filter: default_log_filter(),
        }
    }
}

impl AppConfig {
    /// Build configuration from environment variables, loading a `.env` file
    /// first when one is present.
    ///
    /// # Errors
    ///
    /// [`ConfigError::Invalid`] for an unknown `ARTICLE_ID_STRATEGY`.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Same parsing as [`AppConfig::from_env`] over an arbitrary source.
    ///
    /// # Errors
    ///
    /// [`ConfigError::Invalid`] for an unknown `ARTICLE_ID_STRATEGY`.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let id_strategy = lookup("ARTICLE_ID_STRATEGY")
            .map(|value| {
                value.parse::<IdStrategy>().map_err(|err| {
                    ConfigError::Invalid(format!("ARTICLE_ID_STRATEGY: {err}"))
                })
            })
            .transpose()?
            .unwrap_or_default();

        let log_filter = lookup("LOG_FILTER")
            .map(|value| value.trim().to_string())
            .filter(|value| !value.is_empty())
            .unwrap_or_else(default_log_filter);

        Ok(Self {
            id_strategy,
            log_filter,
        })
    }

    #[must_use]
    pub const fn id_strategy(&self) -> IdStrategy {
        self.id_strategy
    }

    /// Fallback tracing filter, used when `RUST_LOG` is not set.
    #[must_use]
    pub fn log_filter(&self) -> &str {
        &self.log_filter
    }
}
