//! Serde helpers for documents written by the browser admin
//!
//! The browser stores whatever `JSON.stringify` produced: `NaN` prices come
//! out as `null`, and a price typed into a form may still be a string.

use serde::{Deserialize, Deserializer};
use serde_json::Value;

use super::coerce_price;

/// Deserialize any `Default` value that treats null as the default
pub fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(|opt| opt.unwrap_or_default())
}

/// Deserialize a price from a number, a numeric string or null.
///
/// Anything that is not a finite number becomes 0.
pub fn lenient_price<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    let price = match Option::<Value>::deserialize(deserializer)? {
        Some(Value::Number(n)) => n.as_f64().filter(|v| v.is_finite()).unwrap_or(0.0),
        Some(Value::String(s)) => coerce_price(&s),
        _ => 0.0,
    };
    Ok(price)
}
