//! CLI argument definitions and parsing.
//!
//! Responsibilities:
//! - Define the CLI structure using clap derive macros.
//! - Read connection settings from flags or `GRAFANA_*` environment variables.
//!
//! Non-responsibilities:
//! - Does not validate settings (see `grafana_config::ConfigLoader`).
//! - Does not run commands (see `main` and the `commands` module).

use clap::{Parser, Subcommand, ValueEnum};

#[derive(Parser, Debug)]
#[command(name = "grafana-observer")]
#[command(
    about = "Read-only Grafana dashboard inspection over a JSON-RPC tool protocol",
    long_about = None
)]
#[command(version)]
#[command(
    after_help = "Examples:\n  grafana-observer --url https://grafana.example.com --token $GRAFANA_TOKEN\n  grafana-observer check\n  RUST_LOG=debug grafana-observer --log-format json serve\n"
)]
pub struct Cli {
    /// Base URL of the Grafana server (e.g., https://grafana.example.com)
    #[arg(long, global = true, env = "GRAFANA_URL")]
    pub url: Option<String>,

    /// API or service-account token
    #[arg(long, global = true, env = "GRAFANA_TOKEN", hide_env_values = true)]
    pub token: Option<String>,

    /// Organization id the token belongs to
    #[arg(long, global = true, env = "GRAFANA_ORG_ID")]
    pub org_id: Option<String>,

    /// Skip TLS certificate verification (for self-signed certificates)
    #[arg(long, global = true)]
    pub no_verify_ssl: bool,

    /// Per-request timeout in seconds
    #[arg(long, global = true, value_name = "SECS")]
    pub timeout: Option<u64>,

    /// Log line format on stderr
    #[arg(long, global = true, value_enum, default_value_t = LogFormat::Text)]
    pub log_format: LogFormat,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Commands {
    /// Serve tool calls as JSON-RPC over stdin/stdout (default)
    Serve,

    /// Verify the connection and print a short summary of the instance
    Check,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    Text,
    Json,
}

impl Cli {
    /// The subcommand to run; `serve` when none was given.
    pub fn subcommand(&self) -> Commands {
        self.command.unwrap_or(Commands::Serve)
    }
}
