// src/main.rs
use std::sync::Arc;

use anyhow::Result;
use tracing::info;

mod config;
mod probe;
mod report;
mod transport;

use crate::probe::Aggregator;
use crate::transport::HttpTransport;

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("service_health=debug".parse()?),
        )
        .init();

    // Load configuration
    let config_path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "health.yaml".to_string());

    info!("Loading configuration from: {}", config_path);
    let config = config::load_config(&config_path).await?;

    let transport = Arc::new(HttpTransport::new(config.base_url.clone())?);
    let aggregator = Aggregator::with_ceiling(transport, config.timeout());

    let report = aggregator.run_all(&config.probes).await;

    // Outages are data in the report, not process failures.
    println!("{}", serde_json::to_string_pretty(&report)?);

    Ok(())
}
