//! Read-only Grafana tools.
//!
//! Each tool reads arguments through [`ToolArgs`], performs one or more
//! [`GrafanaApi`](crate::dispatch::GrafanaApi) reads, and reshapes the result
//! into a small record serialized as a JSON value.

mod args;
mod catalog;
pub(crate) mod dashboards;
pub(crate) mod datasources;
pub(crate) mod folders;
pub(crate) mod panels;
pub(crate) mod tags;

pub(crate) use args::ToolArgs;
pub(crate) use catalog::{Tool, definitions};
