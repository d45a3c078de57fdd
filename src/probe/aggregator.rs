// src/probe/aggregator.rs
use std::sync::Arc;
use std::time::{Duration, Instant};

use chrono::Utc;
use futures::future::join_all;
use tokio::time::timeout;
use tracing::{debug, error, info, warn};

use crate::report::{ProbeOutcome, Report, Summary};
use crate::transport::Transport;

use super::{classify, ProbeSpec, Status};

/// Default per-probe ceiling in milliseconds.
pub const DEFAULT_TIMEOUT_MS: u64 = 5000;

/// Runs one batch of probes concurrently and folds the settled outcomes
/// into an ordered [`Report`]. Holds no state between runs.
pub struct Aggregator {
    transport: Arc<dyn Transport>,
    default_ceiling: Duration,
}

impl Aggregator {
    pub fn new(transport: Arc<dyn Transport>) -> Self {
        Self::with_ceiling(transport, Duration::from_millis(DEFAULT_TIMEOUT_MS))
    }

    pub fn with_ceiling(transport: Arc<dyn Transport>, default_ceiling: Duration) -> Self {
        Self {
            transport,
            default_ceiling,
        }
    }

    /// Dispatch every probe at once, wait for all of them to settle, and
    /// report in input order. Never fails: every probe error is caught at
    /// the probe boundary and becomes a `Down` row.
    pub async fn run_all(&self, specs: &[ProbeSpec]) -> Report {
        info!("Running {} health probes", specs.len());

        let mut tasks = Vec::with_capacity(specs.len());
        for spec in specs {
            let transport = Arc::clone(&self.transport);
            let spec = spec.clone();
            let ceiling = spec.ceiling(self.default_ceiling);
            tasks.push(tokio::spawn(async move {
                run_probe(transport, spec, ceiling).await
            }));
        }

        // join_all preserves task order, so results[i] corresponds to specs[i]
        // no matter which probe settled first.
        let settled = join_all(tasks).await;

        let mut results = Vec::with_capacity(specs.len());
        for (joined, spec) in settled.into_iter().zip(specs) {
            let outcome = match joined {
                Ok(outcome) => outcome,
                Err(e) => {
                    error!("Probe task for {} failed to complete: {}", spec.id, e);
                    ProbeOutcome {
                        id: spec.id.clone(),
                        name: spec.name.clone(),
                        method: spec.method.clone(),
                        path: spec.path.clone(),
                        status: Status::Down,
                        http_status: None,
                        duration_ms: 0,
                        detail: "Probe task failed".to_string(),
                        checked_at: Utc::now(),
                    }
                }
            };
            results.push(outcome);
        }

        let summary = Summary::from_results(&results);
        info!(
            "Health check complete: {} up, {} down, {} total",
            summary.up, summary.down, summary.total
        );

        Report { results, summary }
    }
}

/// One bounded probe. The ceiling wraps the transport future; when it
/// elapses the future is dropped, cancelling this probe's in-flight request
/// without touching any other probe.
async fn run_probe(transport: Arc<dyn Transport>, spec: ProbeSpec, ceiling: Duration) -> ProbeOutcome {
    let start = Instant::now();

    let result = timeout(
        ceiling,
        transport.send(&spec.method, &spec.path, spec.body.as_ref()),
    )
    .await;

    let duration_ms = start.elapsed().as_millis() as u64;

    let (status, http_status, detail) = match result {
        Ok(Ok(response)) => {
            let (status, detail) = classify(response.status);
            (status, Some(response.status), detail.to_string())
        }
        Ok(Err(e)) => {
            let message = e.to_string();
            let detail = if message.is_empty() {
                "Network error".to_string()
            } else {
                message
            };
            (Status::Down, None, detail)
        }
        Err(_) => (
            Status::Down,
            None,
            format!("Timed out after {}ms", ceiling.as_millis()),
        ),
    };

    match status {
        Status::Up => debug!(
            "Probe {} is up ({:?}) in {}ms: {}",
            spec.id, http_status, duration_ms, detail
        ),
        Status::Down => warn!(
            "Probe {} is down ({:?}) in {}ms: {}",
            spec.id, http_status, duration_ms, detail
        ),
    }

    ProbeOutcome {
        id: spec.id,
        name: spec.name,
        method: spec.method,
        path: spec.path,
        status,
        http_status,
        duration_ms,
        detail,
        checked_at: Utc::now(),
    }
}
