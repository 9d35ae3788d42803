//! Request/response records exchanged with the backend.
//!
//! Every response record carries an optional `error` string; the client
//! inspects it before handing the record back (see [`crate::ApiClient`]).

pub mod ask;
pub mod metadata;
pub mod status_log;
pub mod upload;

use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// Accepts a JSON string or number (or null) and keeps it as text.
///
/// The backend is not consistent about page numbers in citation lookups.
pub(crate) fn string_or_number<'de, D>(de: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    match Value::deserialize(de)? {
        Value::String(s) => Ok(s),
        Value::Number(n) => Ok(n.to_string()),
        Value::Null => Ok(String::new()),
        other => Err(serde::de::Error::custom(format!(
            "expected string or number, got {other}"
        ))),
    }
}

/// Treats JSON `null` like a missing field.
pub(crate) fn null_as_default<'de, D, T>(de: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(de)?.unwrap_or_default())
}
