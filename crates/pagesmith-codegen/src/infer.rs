//! Structural type inference for schema-less props.

use serde_json::Value;

use crate::literal::property_key;

/// Primitive leaf kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PrimitiveKind {
    String,
    Number,
    Boolean,
    /// `null` leaves carry no type information
    Any,
}

/// Shape of a JSON value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TypeDescriptor {
    Primitive(PrimitiveKind),
    /// Element type of an empty array
    Unknown,
    Array(Box<TypeDescriptor>),
    /// Fields in the order they were encountered
    Record(Vec<(String, TypeDescriptor)>),
}

/// Infer the structural type of a value.
///
/// Arrays take their element type from the first element only; later
/// elements are not checked for consistency.
pub fn infer(value: &Value) -> TypeDescriptor {
    match value {
        Value::Null => TypeDescriptor::Primitive(PrimitiveKind::Any),
        Value::Bool(_) => TypeDescriptor::Primitive(PrimitiveKind::Boolean),
        Value::Number(_) => TypeDescriptor::Primitive(PrimitiveKind::Number),
        Value::String(_) => TypeDescriptor::Primitive(PrimitiveKind::String),
        Value::Array(items) => match items.first() {
            Some(first) => TypeDescriptor::Array(Box::new(infer(first))),
            None => TypeDescriptor::Array(Box::new(TypeDescriptor::Unknown)),
        },
        Value::Object(map) => TypeDescriptor::Record(
            map.iter()
                .map(|(key, value)| (key.clone(), infer(value)))
                .collect(),
        ),
    }
}

impl TypeDescriptor {
    /// Record fields, if this is a record.
    pub fn fields(&self) -> Option<&[(String, TypeDescriptor)]> {
        match self {
            Self::Record(fields) => Some(fields),
            _ => None,
        }
    }

    /// Render as inline TypeScript type syntax.
    pub fn to_typescript(&self) -> String {
        match self {
            Self::Primitive(PrimitiveKind::String) => "string".to_string(),
            Self::Primitive(PrimitiveKind::Number) => "number".to_string(),
            Self::Primitive(PrimitiveKind::Boolean) => "boolean".to_string(),
            Self::Primitive(PrimitiveKind::Any) => "any".to_string(),
            Self::Unknown => "unknown".to_string(),
            Self::Array(item) => format!("{}[]", item.to_typescript()),
            Self::Record(fields) if fields.is_empty() => "Record<string, unknown>".to_string(),
            Self::Record(fields) => {
                let body = fields
                    .iter()
                    .map(|(key, ty)| format!("{}: {}", property_key(key), ty.to_typescript()))
                    .collect::<Vec<_>>()
                    .join("; ");
                format!("{{ {} }}", body)
            }
        }
    }
}
