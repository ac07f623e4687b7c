//! Export orchestration.

use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::{Instant, SystemTime, UNIX_EPOCH};

use pagesmith_codegen::TemplateRegistry;
use pagesmith_design::{
    count_lines, ComponentInstance, ConfigError, ExportConfig, ExportFormat, ExportMetadata,
    ExportResult,
};

use crate::archive::{archive_filename, write_project, ArchiveBuilder, ArchiveError};
use crate::assembler::ProjectAssembler;
use crate::format::Formatter;
use crate::html::HtmlAssembler;
use crate::react::ReactAssembler;
use crate::sink::DownloadSink;

/// Errors that can occur during an export.
#[derive(Debug, thiserror::Error)]
pub enum ExportError {
    #[error("Invalid export configuration: {0}")]
    Config(#[from] ConfigError),

    #[error("Failed to render template: {0}")]
    Template(String),

    #[error("Failed to package project: {0}")]
    Archive(#[from] ArchiveError),

    #[error("Failed to deliver archive: {0}")]
    Delivery(String),
}

/// Turns component instances into a project and delivers it.
///
/// Cloning is cheap; clones share the template registry.
#[derive(Clone)]
pub struct ExportManager {
    registry: Arc<TemplateRegistry>,
    formatter: Option<Formatter>,
    archive: ArchiveBuilder,
}

impl ExportManager {
    /// Create a manager with the built-in catalog and no formatter.
    pub fn new() -> Self {
        Self::with_registry(TemplateRegistry::new())
    }

    /// Create a manager that resolves kinds through `registry`.
    pub fn with_registry(registry: TemplateRegistry) -> Self {
        Self {
            registry: Arc::new(registry),
            formatter: None,
            archive: ArchiveBuilder::new(),
        }
    }

    /// Apply `formatter` to every generated file.
    pub fn with_formatter(mut self, formatter: Formatter) -> Self {
        self.formatter = Some(formatter);
        self
    }

    /// Use `archive` for packaging.
    pub fn with_archive(mut self, archive: ArchiveBuilder) -> Self {
        self.archive = archive;
        self
    }

    fn assembler(&self, format: ExportFormat) -> Box<dyn ProjectAssembler> {
        match format {
            ExportFormat::ReactSource => Box::new(ReactAssembler::new(self.registry.clone())),
            ExportFormat::StaticHtml => Box::new(HtmlAssembler::new(self.registry.clone())),
        }
    }

    /// Generate every project file for `components`.
    ///
    /// Only the metadata timestamp differs between two exports of the same
    /// input.
    pub fn export(
        &self,
        components: &[ComponentInstance],
        config: &ExportConfig,
    ) -> Result<ExportResult, ExportError> {
        let start = Instant::now();
        config.validate()?;

        let assembler = self.assembler(config.format);
        let mut files = assembler.assemble(components, config)?;

        if let Some(formatter) = &self.formatter {
            for file in &mut files {
                file.content = formatter(&file.content);
            }
        }

        let metadata = ExportMetadata {
            component_count: components.len(),
            total_line_count: files.iter().map(|f| count_lines(&f.content)).sum(),
            dependencies: assembler
                .dependencies()
                .iter()
                .map(|d| d.to_string())
                .collect(),
            format: assembler.format(),
            generated_at: now_millis(),
        };

        tracing::info!(
            "Exported {} components as {} ({} files, {} lines) in {}ms",
            metadata.component_count,
            metadata.format,
            files.len(),
            metadata.total_line_count,
            start.elapsed().as_millis()
        );

        Ok(ExportResult { files, metadata })
    }

    /// Compress an export result into archive bytes.
    pub fn package(&self, result: &ExportResult, config: &ExportConfig) -> Result<Vec<u8>, ExportError> {
        Ok(self.archive.package(&result.files, &config.project_name)?)
    }

    /// Write an export result unpacked under `out_dir/<slug>/`.
    pub fn write_unpacked(
        &self,
        result: &ExportResult,
        config: &ExportConfig,
        out_dir: &Path,
    ) -> Result<PathBuf, ExportError> {
        Ok(write_project(&result.files, &config.project_name, out_dir)?)
    }

    /// Export, compress on a blocking task, and hand the archive to `sink`.
    ///
    /// Nothing reaches the sink unless generation and packaging both succeed.
    pub async fn export_and_download(
        &self,
        components: &[ComponentInstance],
        config: &ExportConfig,
        sink: Arc<dyn DownloadSink>,
    ) -> Result<ExportResult, ExportError> {
        let result = self.export(components, config)?;

        let archive = self.archive;
        let files = result.files.clone();
        let project_name = config.project_name.clone();
        let bytes = tokio::task::spawn_blocking(move || archive.package(&files, &project_name))
            .await
            .map_err(|e| ArchiveError::Interrupted(e.to_string()))??;

        let filename = archive_filename(&config.project_name);
        tokio::task::spawn_blocking(move || sink.deliver(&filename, &bytes))
            .await
            .map_err(|e| ExportError::Delivery(e.to_string()))?
            .map_err(|e| ExportError::Delivery(e.to_string()))?;

        Ok(result)
    }
}

impl Default for ExportManager {
    fn default() -> Self {
        Self::new()
    }
}

fn now_millis() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(0)
}
