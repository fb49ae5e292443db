//! The `serve` command: answer tool calls on stdin/stdout until EOF.

use anyhow::{Context, Result};
use grafana_client::{GrafanaClient, HealthStatus};
use tokio::io::BufReader;
use tracing::{info, warn};

use crate::dispatch::{Dispatcher, GrafanaApi};
use crate::protocol::server::McpServer;

pub(crate) async fn run(client: GrafanaClient) -> Result<()> {
    info!("Starting Grafana Observer");

    probe(&client).await;
    info!("Connected to Grafana at {}", client.base_url());

    let server = McpServer::new(Dispatcher::new(client));
    server
        .run(BufReader::new(tokio::io::stdin()), tokio::io::stdout())
        .await
        .context("stdio transport failed")?;

    info!("Shutting down");
    Ok(())
}

/// Check `/api/health` once. A failure is logged and does not stop startup.
pub(crate) async fn probe<C: GrafanaApi>(client: &C) -> Option<HealthStatus> {
    match client.health().await {
        Ok(health) => {
            info!(
                version = health.version.as_deref().unwrap_or("unknown"),
                database = health.database.as_deref().unwrap_or("unknown"),
                "Grafana health check passed"
            );
            Some(health)
        }
        Err(e) => {
            warn!(error = %e, "Grafana health check failed");
            None
        }
    }
}
