//! Read-only accessor over an untyped props value.

use serde_json::{Map, Value};

/// View of a props object used by the section templates.
///
/// Every accessor is total: a missing key, a value of the wrong shape and a
/// non-object root all read as absent.
#[derive(Debug, Clone, Copy)]
pub struct Props<'a> {
    map: Option<&'a Map<String, Value>>,
}

impl<'a> Props<'a> {
    /// Wrap a value; anything but an object behaves as an empty object.
    pub fn new(value: &'a Value) -> Self {
        Self {
            map: value.as_object(),
        }
    }

    /// Underlying object, if the value was one.
    pub fn map(&self) -> Option<&'a Map<String, Value>> {
        self.map
    }

    /// Raw value under a key.
    pub fn get(&self, key: &str) -> Option<&'a Value> {
        self.map.and_then(|m| m.get(key))
    }

    /// Displayable scalar under a key: non-blank strings, numbers, booleans.
    pub fn text(&self, key: &str) -> Option<String> {
        match self.get(key)? {
            Value::String(s) if !s.trim().is_empty() => Some(s.clone()),
            Value::Number(n) => Some(n.to_string()),
            Value::Bool(b) => Some(b.to_string()),
            _ => None,
        }
    }

    /// Whether a key holds a displayable scalar.
    pub fn has_text(&self, key: &str) -> bool {
        self.text(key).is_some()
    }

    /// Nested object under a key.
    pub fn object(&self, key: &str) -> Option<Props<'a>> {
        self.get(key)
            .filter(|v| v.is_object())
            .map(Props::new)
    }

    /// Array under a key.
    pub fn list(&self, key: &str) -> Option<&'a [Value]> {
        self.get(key).and_then(|v| v.as_array()).map(Vec::as_slice)
    }

    /// First of several alias keys that holds an array.
    pub fn first_list(&self, keys: &[&'static str]) -> Option<(&'static str, &'a [Value])> {
        keys.iter()
            .find_map(|key| self.list(key).map(|items| (*key, items)))
    }

    /// Number under a key, also accepting numeric strings.
    pub fn number(&self, key: &str) -> Option<f64> {
        match self.get(key)? {
            Value::Number(n) => n.as_f64(),
            Value::String(s) => s.trim().parse().ok(),
            _ => None,
        }
    }

    /// Whether a key holds `true`.
    pub fn flag(&self, key: &str) -> bool {
        matches!(self.get(key), Some(Value::Bool(true)))
    }
}
