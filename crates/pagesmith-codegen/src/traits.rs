//! Trait definitions for section templates.

use serde_json::Value;

use crate::literal::indent;
use crate::markup::{render_html, render_jsx, Node};
use crate::props::Props;

/// Errors that can occur while generating a component module.
#[derive(Debug, thiserror::Error)]
pub enum GenerationError {
    #[error("Generated source for {component} does not parse: {message}")]
    InvalidSyntax { component: String, message: String },
}

/// Markup generator for one family of section kinds.
///
/// Implementors only describe the element tree; the JSX and HTML renderings
/// are derived from it so both export formats show the same structure.
pub trait SectionTemplate: Send + Sync {
    /// Family identifier (e.g., "hero", "pricing")
    fn family(&self) -> &'static str;

    /// Build the element tree for one instance.
    ///
    /// # Arguments
    /// * `kind` - The instance's kind name as written in the design
    /// * `props` - The instance's normalized props
    fn build(&self, kind: &str, props: &Props<'_>) -> Node;

    /// Body of the component function: a `return (...)` statement.
    fn jsx(&self, kind: &str, props: &Value) -> String {
        let tree = self.build(kind, &Props::new(props));
        format!("  return (\n{}\n  );", indent(&render_jsx(&tree, props), 4))
    }

    /// Static HTML markup for the section.
    fn html(&self, kind: &str, props: &Value) -> String {
        render_html(&self.build(kind, &Props::new(props)), props)
    }
}
