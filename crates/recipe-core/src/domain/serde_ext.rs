//! Lenient field decoding for backend payloads.
//!
//! The backend stores times and servings as integers while the forms edit
//! them as text, and unset columns come back as `null`.

use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// Accept a string, a number or `null` and produce a string.
pub fn string_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<Value>::deserialize(deserializer)? {
        None | Some(Value::Null) => Ok(String::new()),
        Some(Value::String(s)) => Ok(s),
        // -1 is the backend's "unset" marker
        Some(Value::Number(n)) if n.as_i64().is_some_and(|v| v < 0) => Ok(String::new()),
        Some(Value::Number(n)) => Ok(n.to_string()),
        Some(other) => Err(serde::de::Error::custom(format!(
            "expected string or number, got {}",
            other
        ))),
    }
}

/// Accept a non-negative integer, a negative "unset" marker or `null`.
pub fn optional_count<'de, D>(deserializer: D) -> Result<Option<u32>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<i64>::deserialize(deserializer)?;
    Ok(value.and_then(|v| u32::try_from(v).ok()))
}

/// Treat `null` like a missing value.
pub fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
