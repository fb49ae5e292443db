//! Configuration types for the Grafana observer.
//!
//! Responsibilities:
//! - Define the connection settings and the bearer credential.
//! - Combine them into the top-level [`Config`].
//!
//! Does NOT handle:
//! - Loading values from the environment (see the `loader` module).
//! - Network connections (see the client crate).

mod auth;
mod connection;

pub use auth::AuthConfig;
pub use connection::{Config, ConnectionConfig};
