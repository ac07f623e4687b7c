//! Design model for the pagesmith export engine.
//!
//! This crate holds the data that flows through an export: the component
//! instances a page is built from, the export configuration, and the files and
//! metadata an export produces. It also loads design documents from JSON or YAML.

pub mod config;
pub mod document;
pub mod instance;
pub mod output;

pub use config::{slugify, ConfigError, ExportConfig, ExportFormat};
pub use document::{load_design, parse_design, DesignDocument, DesignError, DocumentFormat};
pub use instance::ComponentInstance;
pub use output::{count_lines, ExportFile, ExportMetadata, ExportResult, FileKind};
