//! Configuration management for the Grafana observer.
//!
//! This crate provides the settings model and a loader that merges `.env`
//! files, environment variables and explicit overrides into a validated
//! [`Config`].

pub mod constants;
mod loader;
pub mod types;

pub use loader::{ConfigError, ConfigLoader, env_var_or_none};
pub use types::{AuthConfig, Config, ConnectionConfig};
