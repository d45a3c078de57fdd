// src/probe/status.rs
use std::fmt;

use serde::{Deserialize, Serialize};

/// Two-valued probe status. "Up" means the endpoint is reachable, not that
/// the request was authorized or business-successful.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Status {
    Up,
    Down,
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Status::Up => write!(f, "UP"),
            Status::Down => write!(f, "DOWN"),
        }
    }
}

/// Decision table mapping an observed HTTP status code to a probe status
/// and its fixed detail string.
///
/// Only responses reach this table; timeouts and transport failures are
/// classified at the probe boundary. A 401/403/404 still counts as Up: the
/// service answered, and reachability is the property being measured.
pub fn classify(code: u16) -> (Status, &'static str) {
    match code {
        200..=299 => (Status::Up, "Healthy response"),
        401 | 403 | 404 => (Status::Up, "Endpoint reachable (auth/not-found response)"),
        code if code >= 500 => (Status::Down, "Server error from endpoint"),
        _ => (Status::Up, "Endpoint reachable (non-2xx response)"),
    }
}
