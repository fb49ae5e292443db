//! The `check` command: verify the connection and summarize the instance.

use anyhow::{Context, Result};
use grafana_client::{DashboardSearch, GrafanaClient};
use grafana_config::constants::DEFAULT_SEARCH_LIMIT;
use tracing::info;

/// Dashboards listed by name in the summary.
const SAMPLE_DASHBOARDS: u64 = 5;

const RULE: &str = "--------------------------------------------------";

pub(crate) async fn run(client: &GrafanaClient) -> Result<()> {
    info!("Checking connection to {}", client.base_url());

    println!("Testing Grafana connection...");
    println!("{RULE}");
    println!("Connected to: {}", client.base_url());
    println!("Organization ID: {}", client.org_id());

    let health = client.health().await.context("health check failed")?;
    println!(
        "Grafana version: {} (database: {})",
        health.version.as_deref().unwrap_or("unknown"),
        health.database.as_deref().unwrap_or("unknown"),
    );

    let org = client.get_org().await.context("organization lookup failed")?;
    println!("Organization: {}", org.name.as_deref().unwrap_or("unknown"));

    let search = DashboardSearch {
        limit: SAMPLE_DASHBOARDS,
        ..DashboardSearch::default()
    };
    let dashboards = client
        .search_dashboards(&search)
        .await
        .context("dashboard search failed")?;
    println!("\nFound {} dashboards (showing max {SAMPLE_DASHBOARDS})", dashboards.len());
    for dashboard in &dashboards {
        println!(
            "  - {} (UID: {})",
            dashboard.title.as_deref().unwrap_or("Untitled"),
            dashboard.uid.as_deref().unwrap_or("-"),
        );
    }

    let folders = client
        .list_folders(DEFAULT_SEARCH_LIMIT)
        .await
        .context("folder listing failed")?;
    println!("\nFound {} folders", folders.len());

    let datasources = client
        .get_datasources()
        .await
        .context("data source listing failed")?;
    println!("Found {} data sources", datasources.len());

    println!("{RULE}");
    println!("Connection test successful!");
    Ok(())
}
