//! Tool argument extraction.
//!
//! A `null` value counts as absent. Type mismatches are reported as
//! [`ToolError::InvalidArgument`], absent required keys as
//! [`ToolError::MissingArgument`].

use serde_json::{Map, Value};

use crate::error::ToolError;

/// The argument object of one tool call.
#[derive(Debug, Default)]
pub(crate) struct ToolArgs {
    values: Map<String, Value>,
}

impl ToolArgs {
    /// Accept an object, or `null` for no arguments.
    pub(crate) fn from_value(arguments: Value) -> Result<Self, ToolError> {
        match arguments {
            Value::Null => Ok(Self::default()),
            Value::Object(values) => Ok(Self { values }),
            other => Err(ToolError::invalid(
                "arguments",
                format!("expected an object, got {}", kind(&other)),
            )),
        }
    }

    fn get(&self, name: &str) -> Option<&Value> {
        self.values.get(name).filter(|value| !value.is_null())
    }

    pub(crate) fn required_str(&self, name: &str) -> Result<&str, ToolError> {
        self.optional_str(name)?
            .ok_or_else(|| ToolError::MissingArgument(name.to_string()))
    }

    pub(crate) fn optional_str(&self, name: &str) -> Result<Option<&str>, ToolError> {
        match self.get(name) {
            None => Ok(None),
            Some(Value::String(value)) => Ok(Some(value)),
            Some(other) => Err(mismatch(name, "a string", other)),
        }
    }

    pub(crate) fn bool_or(&self, name: &str, default: bool) -> Result<bool, ToolError> {
        match self.get(name) {
            None => Ok(default),
            Some(Value::Bool(value)) => Ok(*value),
            Some(other) => Err(mismatch(name, "a boolean", other)),
        }
    }

    pub(crate) fn u64_or(&self, name: &str, default: u64) -> Result<u64, ToolError> {
        match self.get(name) {
            None => Ok(default),
            Some(value) => value
                .as_u64()
                .ok_or_else(|| mismatch(name, "a non-negative integer", value)),
        }
    }

    /// A required integer id, also accepted as a decimal string.
    pub(crate) fn required_id(&self, name: &str) -> Result<i64, ToolError> {
        match self.get(name) {
            None => Err(ToolError::MissingArgument(name.to_string())),
            Some(Value::String(raw)) => raw
                .trim()
                .parse()
                .map_err(|_| ToolError::invalid(name, format!("expected an integer, got '{raw}'"))),
            Some(value) => value
                .as_i64()
                .ok_or_else(|| mismatch(name, "an integer", value)),
        }
    }
}

/// Parse a comma-separated list of integer ids; blank input means no ids.
pub(crate) fn parse_id_list(name: &str, raw: &str) -> Result<Vec<i64>, ToolError> {
    if raw.trim().is_empty() {
        return Ok(Vec::new());
    }
    raw.split(',')
        .map(str::trim)
        .map(|id| {
            id.parse()
                .map_err(|_| ToolError::invalid(name, format!("'{id}' is not an integer id")))
        })
        .collect()
}

fn mismatch(name: &str, expected: &str, got: &Value) -> ToolError {
    ToolError::invalid(name, format!("expected {expected}, got {}", kind(got)))
}

fn kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
