//! Complete React component modules for component instances.

use pagesmith_design::{ComponentInstance, ExportFile, FileKind};

use crate::infer::{infer, TypeDescriptor};
use crate::literal::{jsx_text, property_key, to_pascal_case};
use crate::registry::TemplateRegistry;
use crate::syntax::check_tsx;
use crate::traits::GenerationError;

/// Options that affect generated component text.
#[derive(Debug, Clone, Copy, Default)]
pub struct ComponentOptions {
    /// Prepend a header comment naming the component and its kind
    pub include_comments: bool,
}

/// Identifier for the component generated from the instance at `index`.
///
/// The kind is PascalCased and suffixed with the zero-based position, so
/// repeated kinds never collide. Kinds that yield no usable identifier get a
/// `Section` prefix. A base ending in a digit is separated from the index by
/// `_`, so `Stats1` at 0 and `Stats` at 10 stay distinct.
pub fn component_name(kind: &str, index: usize) -> String {
    let mut base = to_pascal_case(kind);
    if base.is_empty() || base.starts_with(|c: char| c.is_ascii_digit()) {
        base.insert_str(0, "Section");
    }
    if base.ends_with(|c: char| c.is_ascii_digit()) {
        format!("{}_{}", base, index)
    } else {
        format!("{}{}", base, index)
    }
}

/// Project-relative path of a component module.
pub fn component_path(name: &str) -> String {
    format!("components/{}.tsx", name)
}

fn props_interface(name: &str, ty: &TypeDescriptor) -> String {
    let fields = ty.fields().unwrap_or_default();
    if fields.is_empty() {
        return format!("interface {}Props {{}}", name);
    }

    let body: String = fields
        .iter()
        .map(|(key, field)| format!("  {}: {};\n", property_key(key), field.to_typescript()))
        .collect();
    format!("interface {}Props {{\n{}}}", name, body)
}

fn header_comment(name: &str, kind: &str) -> String {
    let kind = kind.replace("*/", "* /").replace(['\n', '\r'], " ");
    format!(
        "/**\n * {}: {} section\n * Generated by pagesmith\n */\n\n",
        name, kind
    )
}

/// Generate the module source for one instance and check that it parses.
pub fn component_source(
    instance: &ComponentInstance,
    index: usize,
    registry: &TemplateRegistry,
    options: ComponentOptions,
) -> Result<String, GenerationError> {
    let name = component_name(&instance.name, index);
    let props = instance.props_object();
    let template = registry.resolve(&instance.name);

    let mut source = String::new();
    if options.include_comments {
        source.push_str(&header_comment(&name, &instance.name));
    }
    source.push_str("import React from 'react';\n\n");
    source.push_str(&props_interface(&name, &infer(&props)));
    source.push_str("\n\n");
    source.push_str(&format!(
        "export default function {}(props: {}Props) {{\n{}\n}}\n",
        name,
        name,
        template.jsx(&instance.name, &props)
    ));

    check_tsx(&source).map_err(|message| GenerationError::InvalidSyntax {
        component: name.clone(),
        message,
    })?;

    Ok(source)
}

/// Build the component file for one instance.
///
/// Never fails: if generation goes wrong the instance gets a placeholder
/// module that renders the error instead.
pub fn build_component_file(
    instance: &ComponentInstance,
    index: usize,
    registry: &TemplateRegistry,
    options: ComponentOptions,
) -> ExportFile {
    let name = component_name(&instance.name, index);

    match component_source(instance, index, registry, options) {
        Ok(source) => ExportFile::new(component_path(&name), source, FileKind::Component),
        Err(e) => {
            tracing::warn!("Component {} ({}) replaced by placeholder: {}", name, instance.id, e);
            placeholder_component_file(&name, &instance.name, &e.to_string())
        }
    }
}

/// Placeholder module for a component that could not be generated.
pub fn placeholder_component_file(name: &str, kind: &str, reason: &str) -> ExportFile {
    let message = format!("Section {} could not be generated: {}", kind, reason);
    let source = format!(
        r#"import React from 'react';

export default function {name}(props: Record<string, unknown>) {{
  return (
    <section className="py-16 px-4">
      <div className="max-w-6xl mx-auto">
        <p className="text-red-600">{message}</p>
      </div>
    </section>
  );
}}
"#,
        name = name,
        message = jsx_text(&message)
    );

    ExportFile::new(component_path(name), source, FileKind::Component)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::markup::Node;
    use crate::props::Props;
    use crate::traits::SectionTemplate;
    use pretty_assertions::assert_eq;
    use serde_json::{json, Value};
    use std::sync::Arc;

    fn options() -> ComponentOptions {
        ComponentOptions {
            include_comments: true,
        }
    }

    #[test]
    fn names_components_by_kind_and_position() {
        assert_eq!(component_name("HeroSection", 0), "HeroSection0");
        assert_eq!(component_name("FAQ", 3), "FAQ3");
        assert_eq!(component_name("custom-block", 1), "CustomBlock1");
        assert_eq!(component_name("", 2), "Section2");
        assert_eq!(component_name("3col", 4), "Section3col4");
        assert_eq!(component_name("Stats1", 0), "Stats1_0");
        assert_eq!(component_name("2024", 1), "Section2024_1");
    }

    #[test]
    fn digit_ending_kinds_keep_names_unique() {
        let mut kinds = vec!["Stats1"];
        kinds.extend(std::iter::repeat("FAQ").take(9));
        kinds.push("Stats");

        let names: Vec<String> = kinds
            .iter()
            .enumerate()
            .map(|(index, kind)| component_name(kind, index))
            .collect();

        assert_eq!(names[0], "Stats1_0");
        assert_eq!(names[10], "Stats10");
        let unique: std::collections::HashSet<&String> = names.iter().collect();
        assert_eq!(unique.len(), names.len());
    }

    #[test]
    fn builds_hero_module() {
        let instance = ComponentInstance::new(
            "a",
            "HeroSection",
            json!({ "headline": "Hi", "subheadline": "There" }),
        );

        let file = build_component_file(&instance, 0, &TemplateRegistry::new(), options());

        assert_eq!(file.path, "components/HeroSection0.tsx");
        assert_eq!(file.kind, FileKind::Component);
        assert!(file.content.starts_with("/**\n * HeroSection0: HeroSection section\n"));
        assert!(file.content.contains(
            "interface HeroSection0Props {\n  headline: string;\n  subheadline: string;\n}"
        ));
        assert!(file
            .content
            .contains("export default function HeroSection0(props: HeroSection0Props) {"));
        assert!(file.content.contains("{props.headline}"));
        assert!(file.content.contains("{props.subheadline}"));
    }

    #[test]
    fn omits_header_without_comments() {
        let instance = ComponentInstance::new("a", "FAQ", Value::Null);

        let file = build_component_file(
            &instance,
            0,
            &TemplateRegistry::new(),
            ComponentOptions::default(),
        );

        assert!(file.content.starts_with("import React from 'react';"));
        assert!(file.content.contains("interface FAQ0Props {}"));
    }

    #[test]
    fn every_catalog_kind_produces_valid_tsx() {
        let registry = TemplateRegistry::new();
        let rich = json!({
            "title": "Title",
            "description": "Desc",
            "headline": "Head",
            "features": [{ "title": "A", "description": "B", "icon": "x" }],
            "tiers": [{ "name": "Pro", "price": "$9", "features": ["x"] }],
            "questions": [{ "question": "Q", "answer": "A" }],
            "stats": [{ "value": "1", "label": "L" }],
            "logos": [{ "name": "N" }],
            "fields": [{ "name": "n", "label": "N" }],
            "members": [{ "name": "M", "role": "R" }],
            "testimonials": [{ "name": "T", "content": "C", "rating": 4 }],
            "steps": [{ "title": "S" }],
            "plans": [{ "name": "P", "values": [true] }],
            "videoUrl": "https://x.dev/v"
        });

        for (index, (kind, _)) in crate::CATALOG.iter().enumerate() {
            for props in [json!({}), rich.clone()] {
                let instance = ComponentInstance::new("id", *kind, props);
                let source = component_source(&instance, index, &registry, options());
                assert!(source.is_ok(), "{}: {:?}", kind, source.err());
            }
        }
    }

    #[test]
    fn unknown_kind_uses_generic_template() {
        let instance = ComponentInstance::new("x", "Marquee", json!({ "speed": 3 }));

        let file = build_component_file(&instance, 5, &TemplateRegistry::new(), options());

        assert_eq!(file.path, "components/Marquee5.tsx");
        assert!(file.content.contains("Unsupported section: Marquee"));
        assert!(file.content.contains("speed: number;"));
    }

    struct Broken;

    impl SectionTemplate for Broken {
        fn family(&self) -> &'static str {
            "broken"
        }

        fn build(&self, _kind: &str, _props: &Props<'_>) -> Node {
            crate::markup::el("div").into()
        }

        fn jsx(&self, _kind: &str, _props: &Value) -> String {
            "  return (<div><span></div>);".to_string()
        }
    }

    #[test]
    fn failing_generation_yields_placeholder() {
        let mut registry = TemplateRegistry::new();
        registry.register("Broken", Arc::new(Broken));
        let instance = ComponentInstance::new("b", "Broken", json!({}));

        assert!(component_source(&instance, 0, &registry, options()).is_err());

        let file = build_component_file(&instance, 0, &registry, options());

        assert_eq!(file.path, "components/Broken0.tsx");
        assert!(file.content.contains("could not be generated"));
        assert!(check_tsx(&file.content).is_ok());
    }
}
