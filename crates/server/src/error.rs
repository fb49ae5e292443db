//! Tool errors and process exit codes.
//!
//! Responsibilities:
//! - Define [`ToolError`], the internal failure type of every tool.
//! - Define the exit codes of the `check` subcommand and startup failures.
//!
//! Does NOT handle:
//! - Turning tool failures into payloads (see `dispatch::Dispatcher::call`).
//!
//! Invariants:
//! - Exit code 1 is configuration, exit code 2 is any request failure.

use grafana_client::ClientError;
use thiserror::Error;

/// Why a tool call produced no result.
#[derive(Error, Debug)]
pub enum ToolError {
    #[error(transparent)]
    Client(#[from] ClientError),

    #[error("Missing required argument: {0}")]
    MissingArgument(String),

    #[error("Invalid argument '{name}': {message}")]
    InvalidArgument { name: String, message: String },

    #[error("Panel {panel_id} not found in dashboard {dashboard_uid}")]
    PanelNotFound {
        panel_id: i64,
        dashboard_uid: String,
    },

    #[error("Unknown tool: {0}")]
    UnknownTool(String),

    #[error("Failed to serialize tool result: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl ToolError {
    pub(crate) fn invalid(name: &str, message: impl Into<String>) -> Self {
        Self::InvalidArgument {
            name: name.to_string(),
            message: message.into(),
        }
    }
}

/// Process exit codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum ExitCode {
    /// Command completed successfully.
    Success = 0,

    /// Missing or invalid settings, or an unreadable `.env` file.
    ConfigError = 1,

    /// Grafana could not be reached or answered with an error.
    ConnectionError = 2,
}

impl ExitCode {
    /// Convert the exit code to an i32 for use with std::process::exit().
    pub const fn as_i32(self) -> i32 {
        self as u8 as i32
    }
}

impl From<&ClientError> for ExitCode {
    fn from(err: &ClientError) -> Self {
        if err.is_config_error() {
            ExitCode::ConfigError
        } else {
            ExitCode::ConnectionError
        }
    }
}
