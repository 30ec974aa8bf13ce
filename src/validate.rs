//! Field extraction from untyped JSON objects.
//!
//! Each helper reports failures against a dotted field path so nested
//! errors read like `female.preference`.

use serde_json::{Map, Value};

use crate::error::{LayerCakeError, Result};

/// Join a parent path and a key; an empty parent yields the bare key.
pub(crate) fn field_path(parent: &str, key: &str) -> String {
    if parent.is_empty() {
        key.to_string()
    } else {
        format!("{}.{}", parent, key)
    }
}

/// Name of the JSON type, for error messages
fn type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

pub(crate) fn as_object<'a>(value: &'a Value, path: &str) -> Result<&'a Map<String, Value>> {
    value.as_object().ok_or_else(|| {
        LayerCakeError::validation(
            if path.is_empty() { "<root>" } else { path },
            format!("expected object, found {}", type_name(value)),
        )
    })
}

/// Reject keys outside `allowed`.
pub(crate) fn deny_unknown(
    obj: &Map<String, Value>,
    allowed: &[&str],
    parent: &str,
) -> Result<()> {
    match obj.keys().find(|k| !allowed.contains(&k.as_str())) {
        Some(key) => Err(LayerCakeError::validation(
            field_path(parent, key),
            format!("unknown field, expected one of: {}", allowed.join(", ")),
        )),
        None => Ok(()),
    }
}

pub(crate) fn require<'a>(
    obj: &'a Map<String, Value>,
    key: &str,
    parent: &str,
) -> Result<&'a Value> {
    obj.get(key).ok_or_else(|| {
        LayerCakeError::validation(field_path(parent, key), "missing required field")
    })
}

pub(crate) fn require_bool(obj: &Map<String, Value>, key: &str, parent: &str) -> Result<bool> {
    let value = require(obj, key, parent)?;
    to_bool(value, key, parent)
}

/// An absent key stays unset; an explicit `null` is treated the same way.
pub(crate) fn optional_bool(
    obj: &Map<String, Value>,
    key: &str,
    parent: &str,
) -> Result<Option<bool>> {
    match obj.get(key) {
        None | Some(Value::Null) => Ok(None),
        Some(value) => to_bool(value, key, parent).map(Some),
    }
}

pub(crate) fn require_number(obj: &Map<String, Value>, key: &str, parent: &str) -> Result<f64> {
    let value = require(obj, key, parent)?;
    let number = value.as_f64().ok_or_else(|| {
        LayerCakeError::validation(
            field_path(parent, key),
            format!("expected number, found {}", type_name(value)),
        )
    })?;
    check_finite(number, &field_path(parent, key))?;
    Ok(number)
}

pub(crate) fn check_finite(number: f64, path: &str) -> Result<()> {
    if number.is_finite() {
        Ok(())
    } else {
        Err(LayerCakeError::validation(
            path,
            format!("expected finite number, found {}", number),
        ))
    }
}

fn to_bool(value: &Value, key: &str, parent: &str) -> Result<bool> {
    value.as_bool().ok_or_else(|| {
        LayerCakeError::validation(
            field_path(parent, key),
            format!("expected boolean, found {}", type_name(value)),
        )
    })
}
