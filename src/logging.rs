//! Diagnostics setup.
//!
//! The counter itself never needs a subscriber. A host that wants to watch
//! updates calls [`init_logging`] once at startup.

use crate::shell::{BINDINGS_TARGET, PERFORMANCE_TARGET, UPDATE_TARGET};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use thiserror::Error;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Error)]
pub enum LoggingError {
    #[error("Invalid filter directives '{directives}': {reason}")]
    InvalidFilter { directives: String, reason: String },

    #[error("Failed to install subscriber: {0}")]
    Install(String),
}

/// Subscriber configuration.
///
/// Deserializable so a host can keep it alongside its own settings; missing
/// fields take their defaults.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LogConfig {
    /// Level for every target without an override.
    pub level: String,
    /// Per-target level overrides.
    pub overrides: BTreeMap<String, String>,
    pub with_target: bool,
}

impl Default for LogConfig {
    fn default() -> Self {
        let overrides = [UPDATE_TARGET, BINDINGS_TARGET, PERFORMANCE_TARGET]
            .into_iter()
            .map(|target| (target.to_string(), "trace".to_string()))
            .collect();

        Self {
            level: "info".to_string(),
            overrides,
            with_target: true,
        }
    }
}

impl LogConfig {
    /// Render the config as `EnvFilter` directives, e.g.
    /// `info,single_counter::update=trace`.
    pub fn directives(&self) -> String {
        std::iter::once(self.level.clone())
            .chain(
                self.overrides
                    .iter()
                    .map(|(target, level)| format!("{target}={level}")),
            )
            .collect::<Vec<_>>()
            .join(",")
    }

    /// Filter from `env` directives when they parse, otherwise from the config.
    pub fn effective_filter(&self, env: Option<&str>) -> Result<EnvFilter, LoggingError> {
        match env.map(EnvFilter::try_new) {
            Some(Ok(filter)) => Ok(filter),
            _ => self.filter(),
        }
    }

    pub fn filter(&self) -> Result<EnvFilter, LoggingError> {
        let directives = self.directives();
        EnvFilter::try_new(&directives).map_err(|e| LoggingError::InvalidFilter {
            directives,
            reason: e.to_string(),
        })
    }
}

/// Install a global fmt subscriber configured by `config`.
///
/// `RUST_LOG`, when set and valid, takes precedence over the config
/// directives. Fails if the config directives do not parse or a global
/// subscriber is already set.
pub fn init_logging(config: &LogConfig) -> Result<(), LoggingError> {
    let env = std::env::var(EnvFilter::DEFAULT_ENV).ok();
    let filter = config.effective_filter(env.as_deref())?;

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(config.with_target)
        .with_level(true)
        .try_init()
        .map_err(|e| LoggingError::Install(e.to_string()))
}
