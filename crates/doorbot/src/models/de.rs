//! Deserializers for loosely typed fields.

use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// Accept a string, a number, a bool or null, rendering it as a string.
///
/// `battery_life` is a string on some devices, a number on others and null
/// on wired ones.
pub(crate) fn lenient_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::Null => String::new(),
        Value::String(s) => s,
        Value::Number(n) => n.to_string(),
        Value::Bool(b) => b.to_string(),
        other => return Err(serde::de::Error::custom(format!("expected a scalar, got {other}"))),
    })
}

/// Treat an explicit `null` like a missing field and fall back to the default.
pub(crate) fn null_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Option::unwrap_or_default)
}
