//! HTTP API endpoint implementations.
//!
//! Each function issues exactly one GET request against a Grafana base URL
//! using a `reqwest::Client` that already carries the auth headers.

mod dashboards;
mod datasources;
mod folders;
mod request;
mod search;
mod server;
pub mod url_encoding;

pub use dashboards::{get_dashboard, get_dashboard_tags, get_home_dashboard};
pub use datasources::{get_datasource, get_datasources};
pub use folders::{get_folder, list_folders};
pub use request::send_request;
pub use search::{search_dashboards, search_with_pagination};
pub use server::{get_health, get_org};
