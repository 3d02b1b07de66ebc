//! Accessors for loosely shaped CMS JSON.
//!
//! Exported records use `null`, missing keys and empty strings
//! interchangeably; all three read as "absent" here.

use serde_json::Value;

use super::ImageRef;

/// A non-blank string field
pub(crate) fn str_field(value: &Value, key: &str) -> Option<String> {
    value
        .get(key)
        .and_then(Value::as_str)
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
}

/// A non-blank string field, falling back through alternative keys in order
pub(crate) fn str_field_any(value: &Value, keys: &[&str]) -> Option<String> {
    keys.iter().find_map(|key| str_field(value, key))
}

pub(crate) fn bool_field(value: &Value, key: &str) -> Option<bool> {
    value.get(key).and_then(Value::as_bool)
}

/// An array field; anything that is not an array reads as empty
pub(crate) fn array_field<'a>(value: &'a Value, key: &str) -> &'a [Value] {
    value
        .get(key)
        .and_then(Value::as_array)
        .map(Vec::as_slice)
        .unwrap_or(&[])
}

/// An object field; `null` and non-objects read as absent
pub(crate) fn object_field<'a>(value: &'a Value, key: &str) -> Option<&'a Value> {
    value.get(key).filter(|v| v.is_object())
}

pub(crate) fn image_field(value: &Value, key: &str) -> Option<ImageRef> {
    value.get(key).and_then(ImageRef::from_value)
}
