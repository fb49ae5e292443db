//! Grafana Observer - read-only Grafana inspection tools over JSON-RPC.
//!
//! Responsibilities:
//! - Parse command-line arguments and environment variables.
//! - Build the one Grafana client the process uses.
//! - Serve tool calls on stdio, or run the `check` diagnostic.
//!
//! Does NOT handle:
//! - REST API details (see `crates/client`).
//! - Settings validation (see `crates/config`).
//!
//! Invariants:
//! - `load_dotenv()` is called BEFORE CLI parsing so `.env` can supply clap env defaults.
//! - Nothing but JSON-RPC responses is written to stdout while serving.

mod args;
mod commands;
mod dispatch;
mod error;
mod logging;
mod protocol;
#[cfg(test)]
mod test_support;
mod tools;

use std::time::Duration;

use args::{Cli, Commands};
use clap::Parser;
use error::ExitCode;
use grafana_client::{ClientError, GrafanaClient};
use grafana_config::ConfigLoader;

#[tokio::main]
async fn main() {
    // Load .env file BEFORE CLI parsing so clap env defaults can read .env values
    if let Err(e) = ConfigLoader::new().load_dotenv() {
        eprintln!("Failed to load environment: {e}");
        std::process::exit(ExitCode::ConfigError.as_i32());
    }

    let cli = Cli::parse();
    logging::init(cli.log_format);

    let client = match build_client(&cli) {
        Ok(client) => client,
        Err(e) => {
            tracing::error!(error = %e, "Failed to initialize Grafana client");
            eprintln!("Failed to initialize Grafana client: {e}");
            std::process::exit(ExitCode::from(&e).as_i32());
        }
    };

    let result = match cli.subcommand() {
        Commands::Serve => commands::serve::run(client).await,
        Commands::Check => commands::check::run(&client).await,
    };

    let code = match result {
        Ok(()) => ExitCode::Success,
        Err(e) => {
            eprintln!("Error: {e:#}");
            e.downcast_ref::<ClientError>()
                .map(ExitCode::from)
                .unwrap_or(ExitCode::ConnectionError)
        }
    };
    std::process::exit(code.as_i32());
}

/// Merge CLI flags over the environment and build the client.
fn build_client(cli: &Cli) -> Result<GrafanaClient, ClientError> {
    let mut loader = ConfigLoader::new().from_env()?;

    if let Some(ref url) = cli.url {
        loader = loader.with_base_url(url.clone());
    }
    if let Some(ref token) = cli.token {
        loader = loader.with_token(token.clone());
    }
    if let Some(ref org_id) = cli.org_id {
        loader = loader.with_org_id(org_id.clone());
    }
    if let Some(secs) = cli.timeout {
        loader = loader.with_timeout(Duration::from_secs(secs));
    }
    if cli.no_verify_ssl {
        loader = loader.with_verify_ssl(false);
    }

    let config = loader.build()?;
    GrafanaClient::builder().from_config(&config).build()
}
