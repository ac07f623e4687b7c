//! Destinations for packaged archives.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

/// Accepts archive bytes under a filename.
pub trait DownloadSink: Send + Sync {
    fn deliver(&self, filename: &str, bytes: &[u8]) -> io::Result<()>;
}

/// Writes archives into a directory, creating it if needed.
#[derive(Debug, Clone)]
pub struct DirectorySink {
    dir: PathBuf,
}

impl DirectorySink {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }
}

impl DownloadSink for DirectorySink {
    fn deliver(&self, filename: &str, bytes: &[u8]) -> io::Result<()> {
        let name = Path::new(filename)
            .file_name()
            .ok_or_else(|| io::Error::new(io::ErrorKind::InvalidInput, format!("invalid filename: {}", filename)))?;

        fs::create_dir_all(&self.dir)?;
        let path = self.dir.join(name);
        fs::write(&path, bytes)?;

        tracing::info!("Wrote {} ({} bytes)", path.display(), bytes.len());
        Ok(())
    }
}

/// Keeps delivered archives in memory.
#[derive(Debug, Default)]
pub struct MemorySink {
    delivered: Mutex<Vec<(String, Vec<u8>)>>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Everything delivered so far, oldest first.
    pub fn deliveries(&self) -> Vec<(String, Vec<u8>)> {
        match self.delivered.lock() {
            Ok(delivered) => delivered.clone(),
            Err(poisoned) => poisoned.into_inner().clone(),
        }
    }
}

impl DownloadSink for MemorySink {
    fn deliver(&self, filename: &str, bytes: &[u8]) -> io::Result<()> {
        let mut delivered = self
            .delivered
            .lock()
            .map_err(|_| io::Error::other("memory sink lock poisoned"))?;
        delivered.push((filename.to_string(), bytes.to_vec()));
        Ok(())
    }
}
