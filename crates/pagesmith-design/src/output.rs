//! Files and metadata produced by an export.

use serde::{Deserialize, Serialize};

use crate::config::ExportFormat;

/// Role of a generated file within the project.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FileKind {
    Component,
    Style,
    Config,
    Readme,
}

/// A generated file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExportFile {
    /// Path relative to the project root (forward slashes)
    pub path: String,

    /// Full file text
    pub content: String,

    /// Role of the file
    pub kind: FileKind,
}

impl ExportFile {
    /// Create a file descriptor.
    pub fn new(path: impl Into<String>, content: impl Into<String>, kind: FileKind) -> Self {
        Self {
            path: path.into(),
            content: content.into(),
            kind,
        }
    }
}

/// Summary of an export.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExportMetadata {
    /// Number of component instances exported
    pub component_count: usize,

    /// Sum of newline counts across all files
    pub total_line_count: usize,

    /// Toolchain the generated project requires
    pub dependencies: Vec<String>,

    /// Format that was produced
    pub format: ExportFormat,

    /// Generation time in milliseconds since the Unix epoch
    pub generated_at: u64,
}

/// Complete output of an export.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExportResult {
    /// Generated files in emission order
    pub files: Vec<ExportFile>,

    /// Export summary
    pub metadata: ExportMetadata,
}

impl ExportResult {
    /// Look up a file by its relative path.
    pub fn file(&self, path: &str) -> Option<&ExportFile> {
        self.files.iter().find(|f| f.path == path)
    }

    /// Files of the given kind, in emission order.
    pub fn files_of_kind(&self, kind: FileKind) -> impl Iterator<Item = &ExportFile> {
        self.files.iter().filter(move |f| f.kind == kind)
    }
}

/// Number of newline characters in a text.
pub fn count_lines(content: &str) -> usize {
    content.bytes().filter(|b| *b == b'\n').count()
}
