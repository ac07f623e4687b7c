//! Source-level literals and escaping helpers.

use std::sync::LazyLock;

use regex::Regex;
use serde_json::Value;

static IDENTIFIER_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[A-Za-z_$][A-Za-z0-9_$]*$").expect("Invalid identifier regex")
});

/// Whether a string can be used bare as a JS property name.
pub fn is_identifier(s: &str) -> bool {
    IDENTIFIER_RE.is_match(s)
}

/// Property key as it must appear in an object literal or type.
pub fn property_key(key: &str) -> String {
    if is_identifier(key) {
        key.to_string()
    } else {
        js_string(key)
    }
}

/// Double-quoted JS string literal.
pub fn js_string(s: &str) -> String {
    Value::String(s.to_string())
        .to_string()
        .replace('\u{2028}', "\\u2028")
        .replace('\u{2029}', "\\u2029")
}

/// Literal text inside JSX, emitted as an expression so no character needs
/// JSX-specific escaping.
pub fn jsx_text(s: &str) -> String {
    format!("{{{}}}", js_string(s))
}

/// Render a JSON value as a JS object/array literal.
///
/// `level` is the indentation level (two spaces each) of the line the
/// literal starts on; nested lines are indented one level deeper.
pub fn js_literal(value: &Value, level: usize) -> String {
    let pad = "  ".repeat(level + 1);
    let close = "  ".repeat(level);

    match value {
        Value::Null => "null".to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => n.to_string(),
        Value::String(s) => js_string(s),
        Value::Array(items) if items.is_empty() => "[]".to_string(),
        Value::Array(items) => {
            let body: String = items
                .iter()
                .map(|item| format!("{}{},\n", pad, js_literal(item, level + 1)))
                .collect();
            format!("[\n{}{}]", body, close)
        }
        Value::Object(map) if map.is_empty() => "{}".to_string(),
        Value::Object(map) => {
            let body: String = map
                .iter()
                .map(|(key, item)| {
                    format!(
                        "{}{}: {},\n",
                        pad,
                        property_key(key),
                        js_literal(item, level + 1)
                    )
                })
                .collect();
            format!("{{\n{}{}}}", body, close)
        }
    }
}

/// Escape HTML special characters including single quotes for XSS prevention.
pub fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#x27;")
}

/// Convert a kind name to PascalCase, keeping only ASCII alphanumerics.
pub fn to_pascal_case(s: &str) -> String {
    s.split(|c: char| !c.is_ascii_alphanumeric())
        .map(|part| {
            let mut chars = part.chars();
            match chars.next() {
                Some(c) => c.to_ascii_uppercase().to_string() + chars.as_str(),
                None => String::new(),
            }
        })
        .collect()
}

/// Indent every non-empty line by `spaces`.
pub fn indent(text: &str, spaces: usize) -> String {
    let pad = " ".repeat(spaces);
    text.lines()
        .map(|line| {
            if line.is_empty() {
                String::new()
            } else {
                format!("{}{}", pad, line)
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}
