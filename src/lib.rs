//! Fixtures shared by the end-to-end tests of the isolgen workspace.

use std::fs;
use std::path::Path;
use tempfile::TempDir;

/// A throwaway project directory laid out like a Foundry repository.
pub struct Project {
    dir: TempDir,
}

impl Project {
    pub fn new() -> std::io::Result<Self> {
        Ok(Self {
            dir: TempDir::new()?,
        })
    }

    /// Writes `contents` to `path` (relative to the project root), creating parent directories.
    pub fn write(&self, path: &str, contents: &str) -> std::io::Result<()> {
        let path = self.dir.path().join(path);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, contents)
    }

    pub fn with_file(self, path: &str, contents: &str) -> std::io::Result<Self> {
        self.write(path, contents)?;
        Ok(self)
    }

    pub fn read(&self, path: &str) -> std::io::Result<String> {
        fs::read_to_string(self.dir.path().join(path))
    }

    pub fn exists(&self, path: &str) -> bool {
        self.dir.path().join(path).exists()
    }

    pub fn root(&self) -> &Path {
        self.dir.path()
    }
}
