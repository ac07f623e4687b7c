//! Export command.

use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Instant;

use anyhow::{Context, Result};
use clap::Args;
use walkdir::WalkDir;

use pagesmith_design::{load_design, DocumentFormat, ExportConfig, ExportFormat};
use pagesmith_export::{tidy_formatter, ArchiveBuilder, DirectorySink, ExportManager};

use super::config::{load_config, ExportSettings};

#[derive(Debug, Args)]
pub struct ExportArgs {
    /// Design file (.json, .yaml, .yml) or a directory of designs
    pub input: PathBuf,

    /// Target format: react-source or static-html
    #[arg(short, long)]
    pub format: Option<String>,

    /// Output directory (defaults to config or "dist")
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Project name (defaults to config, then the design's name)
    #[arg(short, long)]
    pub name: Option<String>,

    /// Write the project tree instead of a ZIP archive
    #[arg(long)]
    pub unpacked: bool,

    /// Omit header comments
    #[arg(long)]
    pub no_comments: bool,

    /// Omit the README
    #[arg(long)]
    pub no_readme: bool,

    /// Omit the Tailwind/PostCSS configuration and stylesheet
    #[arg(long)]
    pub no_style_config: bool,

    /// Minify generated stylesheets
    #[arg(long)]
    pub minify: bool,
}

/// Run the export command.
pub async fn run(config_path: &Path, args: ExportArgs) -> Result<()> {
    let start = Instant::now();
    let file_config = load_config(config_path)?;
    let settings = &file_config.export;

    let designs = collect_designs(&args.input)?;
    if designs.is_empty() {
        anyhow::bail!("No design files found in {}", args.input.display());
    }

    let output = args
        .output
        .clone()
        .unwrap_or_else(|| PathBuf::from(&settings.output));

    let mut manager = ExportManager::new()
        .with_archive(ArchiveBuilder::new().with_compression_level(settings.compression_level));
    if settings.tidy {
        manager = manager.with_formatter(tidy_formatter());
    }
    let sink = Arc::new(DirectorySink::new(&output));

    for path in &designs {
        let doc = load_design(path).with_context(|| format!("Failed to load {}", path.display()))?;
        let fallback_name = doc.name.clone().unwrap_or_else(|| file_stem(path));
        let config = export_config(settings, &args, &fallback_name)?;

        tracing::info!(
            "Exporting {} ({} sections) as {}",
            path.display(),
            doc.components.len(),
            config.format
        );

        if args.unpacked {
            let result = manager.export(&doc.components, &config)?;
            let root = manager.write_unpacked(&result, &config, &output)?;
            tracing::info!("Wrote {} files to {}", result.files.len(), root.display());
        } else {
            let result = manager
                .export_and_download(&doc.components, &config, sink.clone())
                .await?;
            tracing::info!(
                "Packaged {} files ({} lines)",
                result.files.len(),
                result.metadata.total_line_count
            );
        }
    }

    tracing::info!(
        "Exported {} designs in {}ms",
        designs.len(),
        start.elapsed().as_millis()
    );

    Ok(())
}

/// Merge file settings and flags; flags win.
fn export_config(settings: &ExportSettings, args: &ExportArgs, fallback_name: &str) -> Result<ExportConfig> {
    let format: ExportFormat = args
        .format
        .as_deref()
        .unwrap_or(&settings.format)
        .parse()?;

    let project_name = args
        .name
        .clone()
        .or_else(|| settings.project_name.clone())
        .unwrap_or_else(|| fallback_name.to_string());

    Ok(ExportConfig {
        format,
        include_comments: settings.include_comments && !args.no_comments,
        include_style_config: settings.include_style_config && !args.no_style_config,
        include_readme: settings.include_readme && !args.no_readme,
        project_name,
        minify_styles: settings.minify_styles || args.minify,
    })
}

/// Design files under `input`, sorted by path.
fn collect_designs(input: &Path) -> Result<Vec<PathBuf>> {
    if !input.exists() {
        anyhow::bail!("Input not found: {}", input.display());
    }
    if input.is_file() {
        return Ok(vec![input.to_path_buf()]);
    }

    let mut designs: Vec<PathBuf> = WalkDir::new(input)
        .follow_links(true)
        .into_iter()
        .filter_map(|e| e.ok())
        .map(|entry| entry.into_path())
        .filter(|path| path.is_file() && DocumentFormat::from_path(path).is_some())
        .collect();
    designs.sort();

    Ok(designs)
}

fn file_stem(path: &Path) -> String {
    path.file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("landing-page")
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::fs;
    use tempfile::tempdir;

    fn args(input: &str) -> ExportArgs {
        ExportArgs {
            input: PathBuf::from(input),
            format: None,
            output: None,
            name: None,
            unpacked: false,
            no_comments: false,
            no_readme: false,
            no_style_config: false,
            minify: false,
        }
    }

    #[test]
    fn flags_override_settings() {
        let settings = ExportSettings::default();
        let args = ExportArgs {
            format: Some("static-html".to_string()),
            name: Some("Flag Name".to_string()),
            no_readme: true,
            minify: true,
            ..args("design.json")
        };

        let config = export_config(&settings, &args, "Design").unwrap();

        assert_eq!(config.format, ExportFormat::StaticHtml);
        assert_eq!(config.project_name, "Flag Name");
        assert!(!config.include_readme);
        assert!(config.include_comments);
        assert!(config.minify_styles);
    }

    #[test]
    fn falls_back_to_design_name() {
        let config = export_config(&ExportSettings::default(), &args("d.json"), "Acme").unwrap();

        assert_eq!(config.project_name, "Acme");
        assert_eq!(config.format, ExportFormat::ReactSource);
    }

    #[test]
    fn rejects_unknown_format() {
        let args = ExportArgs {
            format: Some("bogus".to_string()),
            ..args("d.json")
        };

        assert!(export_config(&ExportSettings::default(), &args, "Acme").is_err());
    }

    #[test]
    fn collects_design_files_sorted() {
        let temp = tempdir().unwrap();
        fs::create_dir_all(temp.path().join("nested")).unwrap();
        fs::write(temp.path().join("b.yaml"), "[]").unwrap();
        fs::write(temp.path().join("a.json"), "[]").unwrap();
        fs::write(temp.path().join("nested/c.yml"), "[]").unwrap();
        fs::write(temp.path().join("notes.txt"), "x").unwrap();

        let designs = collect_designs(temp.path()).unwrap();

        let names: Vec<String> = designs
            .iter()
            .map(|p| p.strip_prefix(temp.path()).unwrap().display().to_string())
            .collect();
        assert_eq!(names, vec!["a.json", "b.yaml", "nested/c.yml"]);
    }

    #[tokio::test]
    async fn exports_archive_and_unpacked_tree() {
        let temp = tempdir().unwrap();
        let design = temp.path().join("site.json");
        fs::write(
            &design,
            r#"{ "name": "Demo", "components": [{ "id": "h", "name": "HeroSection", "props": { "headline": "Hi" } }] }"#,
        )
        .unwrap();
        let out = temp.path().join("out");
        let config_path = temp.path().join("pagesmith.toml");

        let zipped = ExportArgs {
            output: Some(out.clone()),
            ..args(design.to_str().unwrap())
        };
        run(&config_path, zipped).await.unwrap();
        assert!(out.join("demo.zip").exists());

        let unpacked = ExportArgs {
            output: Some(out.clone()),
            unpacked: true,
            ..args(design.to_str().unwrap())
        };
        run(&config_path, unpacked).await.unwrap();
        assert!(out.join("demo/components/HeroSection0.tsx").exists());
        assert!(out.join("demo/app/page.tsx").exists());
    }
}
