//! Pure helper functions for extracting typed settings from a `serde_json::Value` object.
//!
//! Each helper takes a JSON value, a key name, and a default. If the key is
//! missing or the value is not the expected type, the default is returned.

use serde_json::Value;

use crate::color::Hsv;

/// Extracts a `usize` from `params[name]`, returning `default` if missing or wrong type.
///
/// Only succeeds if the JSON value is a non-negative integer that fits in `usize`.
pub fn param_usize(params: &Value, name: &str, default: usize) -> usize {
    params
        .get(name)
        .and_then(Value::as_u64)
        .and_then(|v| usize::try_from(v).ok())
        .unwrap_or(default)
}

/// Extracts a `String` from `params[name]`, returning `default` if missing or wrong type.
pub fn param_string(params: &Value, name: &str, default: &str) -> String {
    params
        .get(name)
        .and_then(Value::as_str)
        .map(String::from)
        .unwrap_or_else(|| default.to_owned())
}

/// Extracts an [`Hsv`] written as `[h, s, v]` from `params[name]`.
///
/// Falls back to `default` unless the value is an array of exactly three
/// integers in `0..=255`.
pub fn param_hsv(params: &Value, name: &str, default: Hsv) -> Hsv {
    params
        .get(name)
        .and_then(|v| serde_json::from_value::<[u8; 3]>(v.clone()).ok())
        .map(Hsv::from)
        .unwrap_or(default)
}
