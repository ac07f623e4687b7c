//! Design documents: a page's component list stored as JSON or YAML.

use std::collections::HashSet;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::instance::ComponentInstance;

/// A saved page design.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DesignDocument {
    /// Display name, used as the default project name
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// Sections in page order
    #[serde(default)]
    pub components: Vec<ComponentInstance>,
}

/// Serialization format of a design document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DocumentFormat {
    #[default]
    Json,
    Yaml,
}

impl DocumentFormat {
    /// Pick the format from a file extension, if it is a design file at all.
    pub fn from_path(path: &Path) -> Option<Self> {
        let ext = path.extension().and_then(|e| e.to_str())?;
        match ext.to_lowercase().as_str() {
            "json" => Some(Self::Json),
            "yaml" | "yml" => Some(Self::Yaml),
            _ => None,
        }
    }
}

/// Either a full document or a bare list of instances.
#[derive(Deserialize)]
#[serde(untagged)]
enum RawDesign {
    List(Vec<ComponentInstance>),
    Document(DesignDocument),
}

/// Parse a design document.
///
/// Instances without an id get `component-<index>` (suffixed if an explicit id
/// already uses it); duplicate explicit ids are rejected.
pub fn parse_design(source: &str, format: DocumentFormat) -> Result<DesignDocument, DesignError> {
    let raw: RawDesign = match format {
        DocumentFormat::Json => {
            serde_json::from_str(source).map_err(|e| DesignError::InvalidJson(e.to_string()))?
        }
        DocumentFormat::Yaml => {
            serde_yaml::from_str(source).map_err(|e| DesignError::InvalidYaml(e.to_string()))?
        }
    };

    let mut doc = match raw {
        RawDesign::List(components) => DesignDocument {
            name: None,
            components,
        },
        RawDesign::Document(doc) => doc,
    };

    let mut seen = HashSet::new();
    for component in doc.components.iter().filter(|c| !c.id.trim().is_empty()) {
        if !seen.insert(component.id.clone()) {
            return Err(DesignError::DuplicateId(component.id.clone()));
        }
    }

    for (index, component) in doc.components.iter_mut().enumerate() {
        if !component.id.trim().is_empty() {
            continue;
        }
        let mut id = format!("component-{}", index);
        let mut suffix = 1;
        while seen.contains(&id) {
            id = format!("component-{}-{}", index, suffix);
            suffix += 1;
        }
        seen.insert(id.clone());
        component.id = id;
    }

    Ok(doc)
}

/// Read and parse a design file, choosing the format from its extension.
pub fn load_design(path: &Path) -> Result<DesignDocument, DesignError> {
    let format = DocumentFormat::from_path(path)
        .ok_or_else(|| DesignError::UnsupportedFile(path.display().to_string()))?;

    let source = fs::read_to_string(path)
        .map_err(|e| DesignError::ReadError(format!("{}: {}", path.display(), e)))?;

    parse_design(&source, format)
}

/// Errors that can occur when loading a design.
#[derive(Debug, thiserror::Error)]
pub enum DesignError {
    #[error("Failed to read design: {0}")]
    ReadError(String),

    #[error("Not a design file (expected .json, .yaml or .yml): {0}")]
    UnsupportedFile(String),

    #[error("Invalid JSON in design: {0}")]
    InvalidJson(String),

    #[error("Invalid YAML in design: {0}")]
    InvalidYaml(String),

    #[error("Duplicate component id: {0}")]
    DuplicateId(String),
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;
    use tempfile::tempdir;

    #[test]
    fn parses_json_document() {
        let source = r#"{
  "name": "Acme",
  "components": [
    { "id": "hero", "name": "HeroSection", "props": { "headline": "Hi", "subheadline": "There" } }
  ]
}"#;

        let doc = parse_design(source, DocumentFormat::Json).unwrap();

        assert_eq!(doc.name.as_deref(), Some("Acme"));
        assert_eq!(doc.components.len(), 1);
        assert_eq!(doc.components[0].id, "hero");
        assert_eq!(
            doc.components[0].props,
            json!({ "headline": "Hi", "subheadline": "There" })
        );
    }

    #[test]
    fn parses_bare_list_and_assigns_ids() {
        let source = r#"[{ "name": "FAQ" }, { "name": "Stats", "id": "s" }]"#;

        let doc = parse_design(source, DocumentFormat::Json).unwrap();

        assert!(doc.name.is_none());
        assert_eq!(doc.components[0].id, "component-0");
        assert_eq!(doc.components[1].id, "s");
    }

    #[test]
    fn parses_yaml_preserving_key_order() {
        let source = r#"
name: Launch
components:
  - name: FeatureGrid
    props:
      title: Features
      columns: 3
      features:
        - title: Fast
          description: Very
"#;

        let doc = parse_design(source, DocumentFormat::Yaml).unwrap();
        let keys: Vec<&String> = doc.components[0]
            .props
            .as_object()
            .unwrap()
            .keys()
            .collect();

        assert_eq!(keys, vec!["title", "columns", "features"]);
    }

    #[test]
    fn assigned_ids_skip_explicit_ones() {
        let source = r#"[
  { "id": "component-1", "name": "FAQ" },
  { "name": "Stats" },
  { "name": "Team" }
]"#;

        let doc = parse_design(source, DocumentFormat::Json).unwrap();

        let ids: Vec<&str> = doc.components.iter().map(|c| c.id.as_str()).collect();
        assert_eq!(ids, vec!["component-1", "component-1-1", "component-2"]);
    }

    #[test]
    fn rejects_duplicate_ids() {
        let source = r#"[{ "id": "a", "name": "FAQ" }, { "id": "a", "name": "Stats" }]"#;

        let result = parse_design(source, DocumentFormat::Json);

        assert!(matches!(result, Err(DesignError::DuplicateId(id)) if id == "a"));
    }

    #[test]
    fn errors_on_invalid_json() {
        let result = parse_design("{ not json", DocumentFormat::Json);
        assert!(matches!(result, Err(DesignError::InvalidJson(_))));
    }

    #[test]
    fn loads_design_from_file() {
        let temp = tempdir().unwrap();
        let path = temp.path().join("page.yml");
        fs::write(&path, "- name: Newsletter\n").unwrap();

        let doc = load_design(&path).unwrap();

        assert_eq!(doc.components[0].name, "Newsletter");
    }

    #[test]
    fn rejects_unknown_extension() {
        let result = load_design(Path::new("design.txt"));
        assert!(matches!(result, Err(DesignError::UnsupportedFile(_))));
    }
}
