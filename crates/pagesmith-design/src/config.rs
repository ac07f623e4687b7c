//! Export configuration.

use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

/// Target format of an export.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum ExportFormat {
    /// Next.js + React + TypeScript project
    #[default]
    ReactSource,
    /// Standalone HTML document
    StaticHtml,
}

impl ExportFormat {
    /// Wire name of the format.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::ReactSource => "react-source",
            Self::StaticHtml => "static-html",
        }
    }
}

impl fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ExportFormat {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "react-source" => Ok(Self::ReactSource),
            "static-html" => Ok(Self::StaticHtml),
            other => Err(ConfigError::UnsupportedFormat(other.to_string())),
        }
    }
}

impl TryFrom<String> for ExportFormat {
    type Error = ConfigError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<ExportFormat> for String {
    fn from(format: ExportFormat) -> Self {
        format.as_str().to_string()
    }
}

/// Options controlling what an export produces.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ExportConfig {
    /// Target format
    pub format: ExportFormat,

    /// Emit header comments in generated sources
    pub include_comments: bool,

    /// Emit the style framework configuration
    pub include_style_config: bool,

    /// Emit a setup guide
    pub include_readme: bool,

    /// Human-readable project name; slugged for paths and package names
    pub project_name: String,

    /// Minify generated stylesheets
    pub minify_styles: bool,
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            format: ExportFormat::ReactSource,
            include_comments: true,
            include_style_config: true,
            include_readme: true,
            project_name: "landing-page".to_string(),
            minify_styles: false,
        }
    }
}

impl ExportConfig {
    /// Default configuration for the given format.
    pub fn for_format(format: ExportFormat) -> Self {
        Self {
            format,
            ..Default::default()
        }
    }

    /// Reject configurations that cannot produce a project.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.project_name.trim().is_empty() {
            return Err(ConfigError::InvalidProjectName(
                "project name is empty".to_string(),
            ));
        }

        if slugify(&self.project_name).is_empty() {
            return Err(ConfigError::InvalidProjectName(format!(
                "'{}' contains no filesystem-safe characters",
                self.project_name
            )));
        }

        Ok(())
    }

    /// Filesystem and package-name safe form of the project name.
    pub fn project_slug(&self) -> String {
        slugify(&self.project_name)
    }
}

static UNSAFE_CHARS_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^a-z0-9._-]+").expect("Invalid unsafe chars regex"));

static DASH_RUN_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"-{2,}").expect("Invalid dash run regex"));

/// Convert a display name to a lowercase slug (`"My Page!"` -> `"my-page"`).
pub fn slugify(name: &str) -> String {
    let lower = name.trim().to_lowercase();
    let replaced = UNSAFE_CHARS_RE.replace_all(&lower, "-");
    let collapsed = DASH_RUN_RE.replace_all(&replaced, "-");

    collapsed
        .trim_matches(|c| c == '-' || c == '.' || c == '_')
        .to_string()
}

/// Errors in an export configuration.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("Unsupported export format '{0}' (expected \"react-source\" or \"static-html\")")]
    UnsupportedFormat(String),

    #[error("Invalid project name: {0}")]
    InvalidProjectName(String),
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn parses_known_formats() {
        assert_eq!(
            "react-source".parse::<ExportFormat>(),
            Ok(ExportFormat::ReactSource)
        );
        assert_eq!(
            "static-html".parse::<ExportFormat>(),
            Ok(ExportFormat::StaticHtml)
        );
    }

    #[test]
    fn rejects_unknown_format() {
        let err = "bogus".parse::<ExportFormat>().unwrap_err();
        assert_eq!(err, ConfigError::UnsupportedFormat("bogus".to_string()));
    }

    #[test]
    fn rejects_unknown_format_when_deserializing() {
        let result: Result<ExportConfig, _> = serde_json::from_str(r#"{ "format": "bogus" }"#);

        let err = result.unwrap_err().to_string();
        assert!(err.contains("Unsupported export format 'bogus'"));
    }

    #[test]
    fn deserializes_camel_case_with_defaults() {
        let config: ExportConfig = serde_json::from_str(
            r#"{ "format": "static-html", "includeReadme": false, "projectName": "Acme" }"#,
        )
        .unwrap();

        assert_eq!(config.format, ExportFormat::StaticHtml);
        assert!(!config.include_readme);
        assert!(config.include_comments);
        assert!(config.include_style_config);
        assert_eq!(config.project_name, "Acme");
    }

    #[test]
    fn slugifies_project_names() {
        assert_eq!(slugify("My Landing Page"), "my-landing-page");
        assert_eq!(slugify("  Acme  Inc. "), "acme-inc");
        assert_eq!(slugify("../../etc/passwd"), "etc-passwd");
        assert_eq!(slugify("already-slugged_1.0"), "already-slugged_1.0");
        assert_eq!(slugify("!!!"), "");
    }

    #[test]
    fn validates_project_name() {
        let mut config = ExportConfig::default();
        assert!(config.validate().is_ok());

        config.project_name = "   ".to_string();
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidProjectName(_))
        ));

        config.project_name = "???".to_string();
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidProjectName(_))
        ));
    }
}
