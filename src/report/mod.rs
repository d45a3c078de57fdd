// src/report/mod.rs
use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::probe::Status;

/// One settled probe. Immutable once produced; a new run builds a new set.
///
/// Field names serialize in camelCase (`httpStatus`, `durationMs`,
/// `checkedAt`) for the console consumers of this report.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProbeOutcome {
    pub id: String,
    pub name: String,
    pub method: String,
    pub path: String,
    pub status: Status,
    /// Observed status code; `None` when the transport failed before any
    /// response was obtained.
    pub http_status: Option<u16>,
    /// Wall time from dispatch to resolution.
    pub duration_ms: u64,
    pub detail: String,
    pub checked_at: DateTime<Utc>,
}

/// Aggregate counts reduced from the result rows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Summary {
    pub up: usize,
    pub down: usize,
    pub total: usize,
}

impl Summary {
    pub fn from_results(results: &[ProbeOutcome]) -> Self {
        let up = results.iter().filter(|r| r.status == Status::Up).count();
        Self {
            up,
            down: results.len() - up,
            total: results.len(),
        }
    }
}

/// Complete result of one batch of probes, ordered as the input specs.
#[derive(Debug, Clone, Serialize)]
pub struct Report {
    pub results: Vec<ProbeOutcome>,
    pub summary: Summary,
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn outcome(id: &str, status: Status) -> ProbeOutcome {
        ProbeOutcome {
            id: id.to_string(),
            name: id.to_string(),
            method: "GET".to_string(),
            path: format!("/health/{}", id),
            status,
            http_status: match status {
                Status::Up => Some(200),
                Status::Down => None,
            },
            duration_ms: 12,
            detail: "Healthy response".to_string(),
            checked_at: Utc::now(),
        }
    }

    #[test]
    fn summary_counts_statuses() {
        let results = vec![
            outcome("a", Status::Up),
            outcome("b", Status::Down),
            outcome("c", Status::Up),
        ];
        let summary = Summary::from_results(&results);
        assert_eq!(
            summary,
            Summary {
                up: 2,
                down: 1,
                total: 3
            }
        );
    }

    #[test]
    fn summary_of_empty_results_is_zero() {
        let summary = Summary::from_results(&[]);
        assert_eq!(
            summary,
            Summary {
                up: 0,
                down: 0,
                total: 0
            }
        );
    }

    #[test]
    fn outcome_serializes_camel_case() {
        let row = outcome("auth-service", Status::Up);
        let json = serde_json::to_value(&row).unwrap();
        assert_eq!(json["status"], "UP");
        assert_eq!(json["httpStatus"], 200);
        assert_eq!(json["durationMs"], 12);
        assert!(json["checkedAt"].is_string());
    }

    #[test]
    fn missing_http_status_serializes_as_null() {
        let row = outcome("gateway", Status::Down);
        let json = serde_json::to_value(&row).unwrap();
        assert!(json["httpStatus"].is_null());
    }

    proptest! {
        #[test]
        fn summary_invariant_holds(statuses in prop::collection::vec(prop::bool::ANY, 0..64)) {
            let results: Vec<ProbeOutcome> = statuses
                .iter()
                .enumerate()
                .map(|(i, &up)| {
                    outcome(
                        &format!("probe-{}", i),
                        if up { Status::Up } else { Status::Down },
                    )
                })
                .collect();

            let summary = Summary::from_results(&results);
            prop_assert_eq!(summary.total, results.len());
            prop_assert_eq!(summary.up + summary.down, summary.total);
            prop_assert_eq!(summary.up, statuses.iter().filter(|&&b| b).count());
        }
    }
}
