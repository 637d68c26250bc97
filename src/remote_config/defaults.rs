//! Conversion of host supplied JSON defaults into the typed map accepted by the SDK.
//!
//! Hosts describe defaults as a plain JSON object. Integers are widened to `i64`, floats,
//! strings and booleans pass through, and arrays describe byte sequences in one of two
//! encodings:
//!
//! * a single string element holds the bytes as standard padded base64, e.g. `["aGVsbG8="]`;
//! * any other array lists the bytes as integers, e.g. `[1, 2, -1]`.
//!
//! `null` and nested objects have no default representation and are rejected.

use std::collections::HashMap;

use serde_json::{Map as JsonMap, Number, Value as JsonValue};

use crate::remote_config::error::{byte_range, malformed_input, RemoteConfigResult};
use crate::remote_config::value::DefaultValue;
use crate::util::base64::base64_decode_bytes;

/// Typed defaults keyed by parameter name.
pub type DefaultsMap = HashMap<String, DefaultValue>;

/// Parses JSON text and coerces the resulting object.
///
/// # Examples
///
/// ```
/// use firebase_config_bridge::remote_config::defaults::parse_defaults;
/// use firebase_config_bridge::remote_config::value::DefaultValue;
///
/// let defaults = parse_defaults(r#"{"retries": 3, "banner": ["aGVsbG8="]}"#).unwrap();
/// assert_eq!(defaults["retries"], DefaultValue::Int64(3));
/// assert_eq!(defaults["banner"], DefaultValue::Bytes(b"hello".to_vec()));
/// ```
pub fn parse_defaults(text: &str) -> RemoteConfigResult<DefaultsMap> {
    let value: JsonValue = serde_json::from_str(text)
        .map_err(|err| malformed_input(format!("defaults are not valid JSON: {err}")))?;
    coerce_defaults(&value)
}

/// Coerces a JSON object into a [`DefaultsMap`].
///
/// Each entry is converted independently. The first entry that cannot be represented
/// aborts the whole conversion, so callers never hand a partial map to the SDK.
pub fn coerce_defaults(config: &JsonValue) -> RemoteConfigResult<DefaultsMap> {
    match config {
        JsonValue::Object(object) => coerce_object(object),
        other => Err(malformed_input(format!(
            "defaults must be a JSON object, got {}",
            json_kind(other)
        ))),
    }
}

fn coerce_object(object: &JsonMap<String, JsonValue>) -> RemoteConfigResult<DefaultsMap> {
    let mut map = DefaultsMap::with_capacity(object.len());
    for (key, value) in object {
        map.insert(key.clone(), coerce_value(key, value)?);
    }
    Ok(map)
}

/// Converts a single default value.
pub fn coerce_value(key: &str, value: &JsonValue) -> RemoteConfigResult<DefaultValue> {
    match value {
        JsonValue::Number(number) => coerce_number(key, number),
        JsonValue::String(text) => Ok(DefaultValue::String(text.clone())),
        JsonValue::Bool(flag) => Ok(DefaultValue::Bool(*flag)),
        JsonValue::Array(items) => coerce_array(key, items).map(DefaultValue::Bytes),
        JsonValue::Null | JsonValue::Object(_) => Err(malformed_input(format!(
            "default `{key}` has unsupported type {}",
            json_kind(value)
        ))),
    }
}

fn coerce_number(key: &str, number: &Number) -> RemoteConfigResult<DefaultValue> {
    if let Some(int) = number.as_i64() {
        return Ok(DefaultValue::Int64(int));
    }
    if number.is_u64() {
        return Err(malformed_input(format!(
            "default `{key}` is outside the signed 64-bit range"
        )));
    }
    match number.as_f64() {
        Some(float) => Ok(DefaultValue::Float64(float)),
        None => Err(malformed_input(format!(
            "default `{key}` is not a representable number"
        ))),
    }
}

fn coerce_array(key: &str, items: &[JsonValue]) -> RemoteConfigResult<Vec<u8>> {
    if let [JsonValue::String(encoded)] = items {
        return base64_decode_bytes(encoded).map_err(|err| {
            malformed_input(format!("default `{key}` is not valid base64: {err}"))
        });
    }

    items
        .iter()
        .enumerate()
        .map(|(index, item)| integer_to_byte(item).ok_or_else(|| {
            byte_range(format!(
                "element {index} of default `{key}` is {}, expected an integer byte",
                json_kind(item)
            ))
        }))
        .collect()
}

/// Keeps the low 8 bits of an integer, so `-1` and `255` both become `0xFF`.
fn integer_to_byte(item: &JsonValue) -> Option<u8> {
    let JsonValue::Number(number) = item else {
        return None;
    };
    number
        .as_i64()
        .map(|value| value as u8)
        .or_else(|| number.as_u64().map(|value| value as u8))
}

fn json_kind(value: &JsonValue) -> &'static str {
    match value {
        JsonValue::Null => "null",
        JsonValue::Bool(_) => "a boolean",
        JsonValue::Number(number) if number.is_f64() => "a floating point number",
        JsonValue::Number(_) => "an integer",
        JsonValue::String(_) => "a string",
        JsonValue::Array(_) => "an array",
        JsonValue::Object(_) => "an object",
    }
}
