// src/probe/spec.rs
use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Static description of one endpoint check. Loaded once from configuration
/// and never mutated during a run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProbeSpec {
    /// Key report consumers use to identify this probe.
    pub id: String,
    /// Human label, e.g. "Auth Service".
    pub name: String,
    #[serde(default = "default_method")]
    pub method: String,
    /// Absolute URL or path resolved against the configured base URL.
    pub path: String,
    /// Optional JSON payload, for verbs that send one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub body: Option<serde_json::Value>,
    /// Per-probe ceiling override in milliseconds.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timeout_ms: Option<u64>,
}

fn default_method() -> String {
    "GET".to_string()
}

impl ProbeSpec {
    /// Effective ceiling for this probe.
    pub fn ceiling(&self, default: Duration) -> Duration {
        self.timeout_ms.map(Duration::from_millis).unwrap_or(default)
    }
}
