//! Serde helpers for Grafana's loosely typed JSON.
//!
//! Responsibilities:
//! - Treat explicit `null` the same as a missing field for collection and flag types.
//! - Accept numeric fields that older dashboards store as strings, and read
//!   values that are not a count at all as absent.
//!
//! Invariants / assumptions:
//! - Dashboard JSON is user-edited and may carry `null` or stringified numbers
//!   anywhere; a single odd field must not fail the whole dashboard decode.

use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// Deserialize `null` as `T::default()`.
pub fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Deserialize an optional count that may be a number or a numeric string.
///
/// Blank strings, negative numbers, fractions and any other shape read as `None`.
pub fn opt_u64_from_string_or_number<'de, D>(deserializer: D) -> Result<Option<u64>, D::Error>
where
    D: Deserializer<'de>,
{
    let count = match Option::<Value>::deserialize(deserializer)? {
        Some(Value::Number(n)) => n.as_u64().or_else(|| {
            n.as_f64()
                .filter(|v| *v >= 0.0 && v.fract() == 0.0 && *v <= u64::MAX as f64)
                .map(|v| v as u64)
        }),
        Some(Value::String(s)) => s.trim().parse::<u64>().ok(),
        _ => None,
    };
    Ok(count)
}
