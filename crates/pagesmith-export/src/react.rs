//! Next.js + React + TypeScript project assembler.

use std::sync::Arc;

use rayon::prelude::*;
use serde_json::json;

use pagesmith_codegen::{
    build_component_file, component_name, js_literal, js_string, ComponentOptions,
    TemplateRegistry,
};
use pagesmith_design::{ComponentInstance, ExportConfig, ExportFile, ExportFormat, FileKind};

use crate::assembler::{readme_entries, ProjectAssembler};
use crate::assets::StyleAssets;
use crate::manager::ExportError;
use crate::templates::TemplateEngine;

const DEPENDENCIES: &[&str] = &["next", "react", "react-dom", "tailwindcss", "typescript"];

/// Assembles an app-router Next.js project with one module per section.
pub struct ReactAssembler {
    registry: Arc<TemplateRegistry>,
    templates: TemplateEngine,
}

impl ReactAssembler {
    /// Create an assembler that resolves kinds through `registry`.
    pub fn new(registry: Arc<TemplateRegistry>) -> Self {
        Self {
            registry,
            templates: TemplateEngine::new(),
        }
    }

    fn page_source(&self, components: &[ComponentInstance], config: &ExportConfig) -> String {
        let mut source = String::new();
        if config.include_comments {
            source.push_str("/**\n * Page entry point rendering every section in order\n * Generated by pagesmith\n */\n\n");
        }
        source.push_str("import React from 'react';\n");

        let names: Vec<String> = components
            .iter()
            .enumerate()
            .map(|(index, instance)| component_name(&instance.name, index))
            .collect();
        for name in &names {
            source.push_str(&format!("import {} from '../components/{}';\n", name, name));
        }

        source.push_str("\nexport default function Page() {\n  return (\n    <main className=\"min-h-screen\">\n");
        for (name, instance) in names.iter().zip(components) {
            source.push_str(&format!(
                "      <{} {{...{}}} />\n",
                name,
                js_literal(&instance.props_object(), 3)
            ));
        }
        source.push_str("    </main>\n  );\n}\n");

        source
    }

    fn package_json(config: &ExportConfig) -> String {
        let manifest = json!({
            "name": config.project_slug(),
            "version": "0.1.0",
            "private": true,
            "scripts": {
                "dev": "next dev",
                "build": "next build",
                "start": "next start"
            },
            "dependencies": {
                "next": "^14.2.0",
                "react": "^18.3.0",
                "react-dom": "^18.3.0"
            },
            "devDependencies": {
                "typescript": "^5.4.0",
                "@types/react": "^18.3.0",
                "@types/react-dom": "^18.3.0",
                "@types/node": "^20.12.0",
                "tailwindcss": "^3.4.0",
                "postcss": "^8.4.0",
                "autoprefixer": "^10.4.0"
            }
        });

        // Serializing a Value cannot fail.
        let text = serde_json::to_string_pretty(&manifest).unwrap_or_default();
        format!("{}\n", text)
    }
}

impl ProjectAssembler for ReactAssembler {
    fn format(&self) -> ExportFormat {
        ExportFormat::ReactSource
    }

    fn dependencies(&self) -> &'static [&'static str] {
        DEPENDENCIES
    }

    fn assemble(
        &self,
        components: &[ComponentInstance],
        config: &ExportConfig,
    ) -> Result<Vec<ExportFile>, ExportError> {
        let options = ComponentOptions {
            include_comments: config.include_comments,
        };

        let mut files: Vec<ExportFile> = components
            .par_iter()
            .enumerate()
            .map(|(index, instance)| build_component_file(instance, index, &self.registry, options))
            .collect();

        files.push(ExportFile::new(
            "app/page.tsx",
            self.page_source(components, config),
            FileKind::Component,
        ));

        let layout = self
            .templates
            .render_layout(&js_string(&config.project_name))
            .map_err(|e| ExportError::Template(e.to_string()))?;
        files.push(ExportFile::new("app/layout.tsx", layout, FileKind::Config));

        files.push(ExportFile::new(
            "app/globals.css",
            StyleAssets::finish_css(
                StyleAssets::globals_css(config.include_style_config),
                config.minify_styles,
            ),
            FileKind::Style,
        ));

        files.push(ExportFile::new(
            "package.json",
            Self::package_json(config),
            FileKind::Config,
        ));
        files.push(ExportFile::new("tsconfig.json", StyleAssets::tsconfig(), FileKind::Config));

        if config.include_style_config {
            files.push(ExportFile::new(
                "tailwind.config.js",
                StyleAssets::tailwind_config(),
                FileKind::Config,
            ));
            files.push(ExportFile::new(
                "postcss.config.js",
                StyleAssets::postcss_config(),
                FileKind::Config,
            ));
        }

        if config.include_readme {
            let readme = self
                .templates
                .render_readme(true, &config.project_name, &readme_entries(components))
                .map_err(|e| ExportError::Template(e.to_string()))?;
            files.push(ExportFile::new("README.md", readme, FileKind::Readme));
        }

        for file in &files {
            tracing::debug!("Generated {} ({} bytes)", file.path, file.content.len());
        }

        Ok(files)
    }
}
