//! Component instances placed on a page.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// One section of an assembled page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComponentInstance {
    /// Opaque identifier, unique within a design
    #[serde(default)]
    pub id: String,

    /// Kind tag from the catalog (e.g. "HeroSection")
    pub name: String,

    /// Untyped prop data
    #[serde(default)]
    pub props: Value,

    /// Validation descriptor, informational only
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub schema: Option<Value>,
}

impl ComponentInstance {
    /// Create an instance with the given id, kind and props.
    pub fn new(id: impl Into<String>, name: impl Into<String>, props: Value) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            props,
            schema: None,
        }
    }

    /// Props as an object, the shape every generator works from.
    ///
    /// `null` becomes an empty object and any other non-object value is
    /// wrapped under a `value` key.
    pub fn props_object(&self) -> Value {
        match &self.props {
            Value::Object(_) => self.props.clone(),
            Value::Null => Value::Object(Map::new()),
            other => {
                let mut map = Map::new();
                map.insert("value".to_string(), other.clone());
                Value::Object(map)
            }
        }
    }
}
