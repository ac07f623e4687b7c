//! Code generation for pagesmith exports.
//!
//! This crate turns component instances into source text. It infers a
//! structural TypeScript type for schema-less props, dispatches each kind to
//! its section template and wraps the result in a complete component module.
//! Section templates describe their markup once as an element tree that
//! renders to JSX for React projects and to escaped HTML for static pages.

pub mod component;
pub mod infer;
pub mod literal;
pub mod markup;
pub mod props;
pub mod registry;
pub mod sections;
pub mod syntax;
pub mod traits;

pub use component::{
    build_component_file, component_name, component_path, component_source,
    placeholder_component_file, ComponentOptions,
};
pub use infer::{infer, PrimitiveKind, TypeDescriptor};
pub use literal::{html_escape, is_identifier, js_literal, js_string, to_pascal_case};
pub use markup::{is_safe_url, render_html, render_jsx, Attr, Element, Node};
pub use props::Props;
pub use registry::{TemplateRegistry, CATALOG};
pub use syntax::check_tsx;
pub use traits::{GenerationError, SectionTemplate};
