//! Packaging of generated files as a ZIP archive or an unpacked tree.

use std::collections::HashSet;
use std::fs;
use std::io::{Cursor, Write};
use std::path::{Path, PathBuf};

use pagesmith_design::{slugify, ExportFile};
use zip::write::{FileOptions, ZipWriter};
use zip::{CompressionMethod, DateTime};

/// Default Deflate level.
pub const DEFAULT_COMPRESSION_LEVEL: i64 = 6;

/// Errors that can occur while packaging a project.
#[derive(Debug, thiserror::Error)]
pub enum ArchiveError {
    #[error("Unsafe path in export: {0:?}")]
    UnsafePath(String),

    #[error("Duplicate path in export: {0}")]
    DuplicatePath(String),

    #[error("Zip error: {0}")]
    Zip(#[from] zip::result::ZipError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Packaging task did not complete: {0}")]
    Interrupted(String),
}

/// Builds ZIP archives with every file under a `<slug>/` folder.
///
/// Entry timestamps and permissions are fixed, so identical input always
/// yields identical bytes.
#[derive(Debug, Clone, Copy)]
pub struct ArchiveBuilder {
    compression_level: i64,
}

impl ArchiveBuilder {
    /// Create a builder using the default compression level.
    pub fn new() -> Self {
        Self {
            compression_level: DEFAULT_COMPRESSION_LEVEL,
        }
    }

    /// Set the Deflate level, clamped to 1..=9.
    pub fn with_compression_level(mut self, level: i64) -> Self {
        self.compression_level = level.clamp(1, 9);
        self
    }

    pub fn compression_level(&self) -> i64 {
        self.compression_level
    }

    /// Compress `files` into a ZIP archive rooted at the project slug.
    pub fn package(&self, files: &[ExportFile], project_name: &str) -> Result<Vec<u8>, ArchiveError> {
        check_paths(files)?;
        let root = project_root(project_name);

        let options: FileOptions<'_, ()> = FileOptions::default()
            .compression_method(CompressionMethod::Deflated)
            .compression_level(Some(self.compression_level))
            .last_modified_time(DateTime::default())
            .unix_permissions(0o644);
        let dir_options: FileOptions<'_, ()> = FileOptions::default()
            .last_modified_time(DateTime::default())
            .unix_permissions(0o755);

        let mut zip = ZipWriter::new(Cursor::new(Vec::new()));
        let mut dirs = HashSet::new();

        zip.add_directory(format!("{}/", root), dir_options.clone())?;
        for file in files {
            let mut prefix = root.clone();
            let mut parts: Vec<&str> = file.path.split('/').collect();
            parts.pop();
            for part in parts {
                prefix = format!("{}/{}", prefix, part);
                if dirs.insert(prefix.clone()) {
                    zip.add_directory(format!("{}/", prefix), dir_options.clone())?;
                }
            }

            zip.start_file(format!("{}/{}", root, file.path), options.clone())?;
            zip.write_all(file.content.as_bytes())?;
        }

        let cursor = zip.finish()?;
        let bytes = cursor.into_inner();

        tracing::debug!(
            "Packaged {} files into {} bytes under {}/",
            files.len(),
            bytes.len(),
            root
        );

        Ok(bytes)
    }
}

impl Default for ArchiveBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Download filename for a project: `<slug>.zip`.
pub fn archive_filename(project_name: &str) -> String {
    format!("{}.zip", project_root(project_name))
}

/// Write `files` unpacked under `out_dir/<slug>/`, returning the project directory.
pub fn write_project(
    files: &[ExportFile],
    project_name: &str,
    out_dir: &Path,
) -> Result<PathBuf, ArchiveError> {
    check_paths(files)?;
    let root = out_dir.join(project_root(project_name));

    for file in files {
        let path = root.join(&file.path);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, &file.content)?;
    }

    tracing::debug!("Wrote {} files to {}", files.len(), root.display());

    Ok(root)
}

fn project_root(project_name: &str) -> String {
    let slug = slugify(project_name);
    if slug.is_empty() {
        "project".to_string()
    } else {
        slug
    }
}

/// Whether a relative path stays inside the project folder.
pub fn is_safe_path(path: &str) -> bool {
    !path.is_empty()
        && !path.starts_with('/')
        && !path.contains('\\')
        && !path.contains(':')
        && path
            .split('/')
            .all(|part| !part.is_empty() && part != "." && part != "..")
}

fn check_paths(files: &[ExportFile]) -> Result<(), ArchiveError> {
    let mut seen = HashSet::new();
    for file in files {
        if !is_safe_path(&file.path) {
            return Err(ArchiveError::UnsafePath(file.path.clone()));
        }
        if !seen.insert(file.path.as_str()) {
            return Err(ArchiveError::DuplicatePath(file.path.clone()));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pagesmith_design::FileKind;
    use pretty_assertions::assert_eq;
    use std::io::Read;
    use tempfile::tempdir;

    fn files() -> Vec<ExportFile> {
        vec![
            ExportFile::new("components/Hero0.tsx", "export default 1;\n", FileKind::Component),
            ExportFile::new("app/page.tsx", "page\n", FileKind::Component),
            ExportFile::new("README.md", "# Hi\n", FileKind::Readme),
        ]
    }

    fn entries(bytes: &[u8]) -> Vec<(String, String)> {
        let mut archive = zip::ZipArchive::new(Cursor::new(bytes)).unwrap();
        let mut out = Vec::new();
        for i in 0..archive.len() {
            let mut entry = archive.by_index(i).unwrap();
            let mut content = String::new();
            entry.read_to_string(&mut content).unwrap();
            out.push((entry.name().to_string(), content));
        }
        out
    }

    #[test]
    fn packages_files_under_slug_folder() {
        let bytes = ArchiveBuilder::new().package(&files(), "My Landing Page").unwrap();

        let files_only: Vec<(String, String)> = entries(&bytes)
            .into_iter()
            .filter(|(name, _)| !name.ends_with('/'))
            .collect();

        assert_eq!(
            files_only,
            vec![
                ("my-landing-page/components/Hero0.tsx".to_string(), "export default 1;\n".to_string()),
                ("my-landing-page/app/page.tsx".to_string(), "page\n".to_string()),
                ("my-landing-page/README.md".to_string(), "# Hi\n".to_string()),
            ]
        );
    }

    #[test]
    fn adds_directory_entries_once() {
        let bytes = ArchiveBuilder::new().package(&files(), "site").unwrap();

        let dirs: Vec<String> = entries(&bytes)
            .into_iter()
            .map(|(name, _)| name)
            .filter(|name| name.ends_with('/'))
            .collect();

        assert_eq!(dirs, vec!["site/", "site/components/", "site/app/"]);
    }

    #[test]
    fn identical_input_gives_identical_bytes() {
        let builder = ArchiveBuilder::new();

        let a = builder.package(&files(), "site").unwrap();
        let b = builder.package(&files(), "site").unwrap();

        assert_eq!(a, b);
    }

    #[test]
    fn rejects_unsafe_paths() {
        for path in ["../evil.txt", "/etc/passwd", "a//b", "", "C:/x", "a\\b", "./a"] {
            let bad = vec![ExportFile::new(path, "x", FileKind::Config)];
            let result = ArchiveBuilder::new().package(&bad, "site");
            assert!(matches!(result, Err(ArchiveError::UnsafePath(_))), "{}", path);
        }
    }

    #[test]
    fn rejects_duplicate_paths() {
        let dup = vec![
            ExportFile::new("a.txt", "1", FileKind::Config),
            ExportFile::new("a.txt", "2", FileKind::Config),
        ];

        let result = ArchiveBuilder::new().package(&dup, "site");

        assert!(matches!(result, Err(ArchiveError::DuplicatePath(_))));
    }

    #[test]
    fn clamps_compression_level() {
        assert_eq!(ArchiveBuilder::new().with_compression_level(42).compression_level(), 9);
        assert_eq!(ArchiveBuilder::new().with_compression_level(-1).compression_level(), 1);
    }

    #[test]
    fn names_archive_after_slug() {
        assert_eq!(archive_filename("My Landing Page"), "my-landing-page.zip");
        assert_eq!(archive_filename("!!!"), "project.zip");
    }

    #[test]
    fn writes_unpacked_project() {
        let temp = tempdir().unwrap();

        let root = write_project(&files(), "Acme Site", temp.path()).unwrap();

        assert_eq!(root, temp.path().join("acme-site"));
        assert_eq!(
            fs::read_to_string(root.join("components/Hero0.tsx")).unwrap(),
            "export default 1;\n"
        );
        assert!(root.join("README.md").exists());
    }
}
