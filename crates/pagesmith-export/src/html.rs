//! Standalone static HTML assembler.

use std::sync::Arc;

use pagesmith_codegen::literal::indent;
use pagesmith_codegen::{component_name, TemplateRegistry};
use pagesmith_design::{ComponentInstance, ExportConfig, ExportFile, ExportFormat, FileKind};

use crate::assembler::{readme_entries, ProjectAssembler};
use crate::assets::StyleAssets;
use crate::manager::ExportError;
use crate::templates::{PageSection, TemplateEngine};

const DEPENDENCIES: &[&str] = &["tailwindcss"];

/// Assembles a single `index.html` that opens directly in a browser.
pub struct HtmlAssembler {
    registry: Arc<TemplateRegistry>,
    templates: TemplateEngine,
}

impl HtmlAssembler {
    /// Create an assembler that resolves kinds through `registry`.
    pub fn new(registry: Arc<TemplateRegistry>) -> Self {
        Self {
            registry,
            templates: TemplateEngine::new(),
        }
    }

    fn sections(&self, components: &[ComponentInstance]) -> Vec<PageSection> {
        components
            .iter()
            .enumerate()
            .map(|(index, instance)| {
                let props = instance.props_object();
                let markup = self.registry.resolve(&instance.name).html(&instance.name, &props);
                PageSection {
                    comment: section_comment(&component_name(&instance.name, index), &instance.name),
                    markup: indent(&markup, 4),
                }
            })
            .collect()
    }
}

/// `Name (kind)` with anything that would end an HTML comment removed.
fn section_comment(name: &str, kind: &str) -> String {
    let mut comment = format!("{} ({})", name, kind).replace(['\n', '\r'], " ");
    while comment.contains("--") {
        comment = comment.replace("--", "-");
    }
    comment.replace('>', "")
}

impl ProjectAssembler for HtmlAssembler {
    fn format(&self) -> ExportFormat {
        ExportFormat::StaticHtml
    }

    fn dependencies(&self) -> &'static [&'static str] {
        DEPENDENCIES
    }

    fn assemble(
        &self,
        components: &[ComponentInstance],
        config: &ExportConfig,
    ) -> Result<Vec<ExportFile>, ExportError> {
        let index = self
            .templates
            .render_index(
                &config.project_name,
                &self.sections(components),
                config.include_style_config,
                config.include_comments,
            )
            .map_err(|e| ExportError::Template(e.to_string()))?;

        let mut files = vec![ExportFile::new("index.html", index, FileKind::Component)];

        if config.include_style_config {
            files.push(ExportFile::new(
                "styles.css",
                StyleAssets::finish_css(StyleAssets::static_css(), config.minify_styles),
                FileKind::Style,
            ));
        }

        if config.include_readme {
            let readme = self
                .templates
                .render_readme(false, &config.project_name, &readme_entries(components))
                .map_err(|e| ExportError::Template(e.to_string()))?;
            files.push(ExportFile::new("README.md", readme, FileKind::Readme));
        }

        for file in &files {
            tracing::debug!("Generated {} ({} bytes)", file.path, file.content.len());
        }

        Ok(files)
    }
}
