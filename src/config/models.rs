// src/config/models.rs
use std::collections::HashSet;
use std::time::Duration;

use reqwest::Method;
use serde::{Deserialize, Serialize};
use tracing::warn;
use url::Url;

use crate::probe::{ProbeSpec, DEFAULT_TIMEOUT_MS};

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("probe list must not be empty")]
    NoProbes,

    #[error("probe {id}: invalid HTTP method {method:?}")]
    InvalidMethod { id: String, method: String },

    #[error("probe {id}: timeout override must be greater than zero")]
    ZeroTimeout { id: String },

    #[error("default timeout must be greater than zero")]
    ZeroDefaultTimeout,
}

/// Static configuration for one console instance: where the services live
/// and which endpoint represents each of them.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthConfig {
    /// Base URL that base-relative probe paths resolve against.
    pub base_url: Url,
    /// Default per-probe ceiling in milliseconds.
    #[serde(default = "default_timeout_ms")]
    pub timeout_ms: u64,
    pub probes: Vec<ProbeSpec>,
}

fn default_timeout_ms() -> u64 {
    DEFAULT_TIMEOUT_MS
}

impl HealthConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.probes.is_empty() {
            return Err(ConfigError::NoProbes);
        }
        if self.timeout_ms == 0 {
            return Err(ConfigError::ZeroDefaultTimeout);
        }

        let mut seen = HashSet::new();
        for probe in &self.probes {
            if probe.method.parse::<Method>().is_err() {
                return Err(ConfigError::InvalidMethod {
                    id: probe.id.clone(),
                    method: probe.method.clone(),
                });
            }
            if probe.timeout_ms == Some(0) {
                return Err(ConfigError::ZeroTimeout {
                    id: probe.id.clone(),
                });
            }
            // Duplicate ids are tolerated; consumers keying on id just get
            // ambiguous rows, so flag them loudly.
            if !seen.insert(probe.id.as_str()) {
                warn!("Duplicate probe id in config: {}", probe.id);
            }
        }

        Ok(())
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_ms)
    }
}
