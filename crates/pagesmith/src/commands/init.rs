//! Initialize pagesmith in the current directory.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};

/// Run the init command.
pub async fn run(config_path: &Path, yes: bool) -> Result<()> {
    tracing::info!("Initializing pagesmith...");

    write_if_absent(config_path, DEFAULT_CONFIG, yes)?;
    write_if_absent(Path::new("design.json"), DEFAULT_DESIGN, yes)?;

    tracing::info!("Initialization complete!");
    tracing::info!("Run 'pagesmith export design.json' to generate a project.");

    Ok(())
}

fn write_if_absent(path: &Path, content: &str, overwrite: bool) -> Result<()> {
    if path.exists() && !overwrite {
        tracing::warn!("{} already exists. Use --yes to overwrite.", path.display());
        return Ok(());
    }

    fs::write(path, content).with_context(|| format!("Failed to write {}", path.display()))?;
    tracing::info!("Created {}", path.display());
    Ok(())
}

pub const DEFAULT_CONFIG: &str = r#"# pagesmith configuration

[export]
# "react-source" (Next.js + TypeScript) or "static-html"
format = "react-source"

# Where archives or unpacked projects are written
output = "dist"

# Project name; defaults to the design's name
# project_name = "My Landing Page"

include_comments = true
include_readme = true
include_style_config = true
minify_styles = false

# Deflate level for archives (1-9)
compression_level = 6

# Strip trailing whitespace and collapse blank lines in generated files
tidy = false
"#;

const DEFAULT_DESIGN: &str = r#"{
  "name": "My Landing Page",
  "components": [
    {
      "id": "hero",
      "name": "HeroSection",
      "props": {
        "headline": "Build pages in minutes",
        "subheadline": "Design once, export anywhere.",
        "primaryButton": { "text": "Get started", "link": "https://example.com/signup" }
      }
    },
    {
      "id": "features",
      "name": "FeatureGrid",
      "props": {
        "title": "Why teams choose us",
        "features": [
          { "title": "Fast", "description": "Pages load instantly.", "icon": "⚡" },
          { "title": "Typed", "description": "Every component ships with props types.", "icon": "🔒" },
          { "title": "Portable", "description": "Export to React or plain HTML.", "icon": "📦" }
        ]
      }
    },
    {
      "id": "pricing",
      "name": "PricingTable",
      "props": {
        "title": "Pricing",
        "tiers": [
          { "name": "Starter", "price": "$0", "features": ["1 project"] },
          { "name": "Pro", "price": "$12", "features": ["Unlimited projects", "Priority support"], "highlighted": true }
        ]
      }
    },
    {
      "id": "faq",
      "name": "FAQ",
      "props": {
        "questions": [
          { "question": "Can I edit the code?", "answer": "Yes, the export is plain source." }
        ]
      }
    },
    {
      "id": "cta",
      "name": "CallToAction",
      "props": {
        "headline": "Ready to launch?",
        "ctaText": "Start free",
        "ctaLink": "https://example.com/signup"
      }
    }
  ]
}
"#;
