//! Trait definitions for project assemblers.

use pagesmith_codegen::component_name;
use pagesmith_design::{ComponentInstance, ExportConfig, ExportFile, ExportFormat};

use crate::manager::ExportError;
use crate::templates::ReadmeEntry;

/// Builds one complete project in a target format.
pub trait ProjectAssembler: Send + Sync {
    /// Format this assembler produces.
    fn format(&self) -> ExportFormat;

    /// Toolchain the generated project needs, reported in export metadata.
    fn dependencies(&self) -> &'static [&'static str];

    /// Generate every project file in emission order.
    ///
    /// # Arguments
    /// * `components` - Page sections in display order
    /// * `config` - A validated export configuration
    fn assemble(
        &self,
        components: &[ComponentInstance],
        config: &ExportConfig,
    ) -> Result<Vec<ExportFile>, ExportError>;
}

/// README listing for a page, one entry per section in order.
pub(crate) fn readme_entries(components: &[ComponentInstance]) -> Vec<ReadmeEntry> {
    components
        .iter()
        .enumerate()
        .map(|(index, instance)| ReadmeEntry {
            name: component_name(&instance.name, index),
            kind: instance.name.clone(),
        })
        .collect()
}
