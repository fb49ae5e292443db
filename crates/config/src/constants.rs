//! Centralized constants for the Grafana observer workspace.
//!
//! This module contains default values used across crates to avoid
//! magic number duplication.

// =============================================================================
// Connection & Timeout Defaults
// =============================================================================

/// Default HTTP request timeout in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Maximum allowed request timeout in seconds (1 hour).
pub const MAX_TIMEOUT_SECS: u64 = 3600;

/// Default maximum number of HTTP redirects to follow.
pub const DEFAULT_MAX_REDIRECTS: usize = 5;

/// Organization id used when `GRAFANA_ORG_ID` is not set.
pub const DEFAULT_ORG_ID: &str = "1";

// =============================================================================
// Search Defaults
// =============================================================================

/// Default result-count limit for dashboard and folder searches.
pub const DEFAULT_SEARCH_LIMIT: u64 = 100;

/// First page of a paginated search (pages are 1-indexed).
pub const DEFAULT_SEARCH_PAGE: u64 = 1;

// =============================================================================
// Output Shaping
// =============================================================================

/// Maximum number of options reported per template variable.
pub const MAX_VARIABLE_OPTIONS: usize = 10;

// =============================================================================
// Environment Variable Names
// =============================================================================

pub const ENV_URL: &str = "GRAFANA_URL";
pub const ENV_TOKEN: &str = "GRAFANA_TOKEN";
pub const ENV_ORG_ID: &str = "GRAFANA_ORG_ID";
pub const ENV_VERIFY_SSL: &str = "GRAFANA_VERIFY_SSL";
pub const ENV_TIMEOUT: &str = "GRAFANA_TIMEOUT";
