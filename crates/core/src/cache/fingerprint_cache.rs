use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// md5 hex digest of a file's contents.
pub fn fingerprint(contents: &str) -> String {
    format!("{:x}", md5::compute(contents.as_bytes()))
}

/// Content hashes of the files processed by the previous run, persisted as JSON.
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct FingerprintCache {
    #[serde(default)]
    files: BTreeMap<String, CacheEntry>,
    #[serde(skip)]
    path: Option<PathBuf>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct CacheEntry {
    content_hash: String,
}

impl FingerprintCache {
    pub fn new(path: Option<PathBuf>) -> Self {
        Self {
            files: BTreeMap::new(),
            path,
        }
    }

    /// Reads the cache at `path`. A missing or unreadable file yields an empty cache.
    pub fn load(path: PathBuf) -> Self {
        let contents = match std::fs::read_to_string(&path) {
            Ok(contents) => contents,
            Err(_) => {
                debug!("no fingerprint cache at {}", path.display());
                return Self::new(Some(path));
            }
        };

        match serde_json::from_str::<FingerprintCache>(&contents) {
            Ok(mut cache) => {
                debug!("loaded {} fingerprints from {}", cache.files.len(), path.display());
                cache.path = Some(path);
                cache
            }
            Err(e) => {
                warn!("ignoring corrupt fingerprint cache {}: {e}", path.display());
                Self::new(Some(path))
            }
        }
    }

    /// Whether `file` was last processed with exactly this content hash.
    pub fn is_fresh(&self, file: &str, hash: &str) -> bool {
        self.files
            .get(file)
            .is_some_and(|entry| entry.content_hash == hash)
    }

    pub fn insert(&mut self, file: impl Into<String>, hash: impl Into<String>) {
        self.files.insert(
            file.into(),
            CacheEntry {
                content_hash: hash.into(),
            },
        );
    }

    pub fn len(&self) -> usize {
        self.files.len()
    }

    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }

    pub fn clear(&mut self) {
        self.files.clear();
    }

    pub fn save(&self) -> Result<()> {
        let Some(path) = &self.path else {
            return Ok(());
        };
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)?;
        }

        let contents = serde_json::to_string_pretty(self)
            .map_err(|e| Error::CacheError(format!("Failed to serialize fingerprint cache: {e}")))?;
        std::fs::write(path, contents)?;
        Ok(())
    }

    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_fingerprint_is_md5_hex() {
        assert_eq!(fingerprint(""), "d41d8cd98f00b204e9800998ecf8427e");
        assert_ne!(fingerprint("contract A {}"), fingerprint("contract B {}"));
    }

    #[test]
    fn test_cache_basic_operations() {
        let mut cache = FingerprintCache::new(None);
        let hash = fingerprint("contract A {}");

        assert!(!cache.is_fresh("contracts/A.sol", &hash));
        cache.insert("contracts/A.sol", hash.clone());
        assert!(cache.is_fresh("contracts/A.sol", &hash));
        assert!(!cache.is_fresh("contracts/A.sol", &fingerprint("contract A { }")));

        cache.clear();
        assert!(cache.is_empty());
    }

    #[test]
    fn test_cache_with_disk_persistence() -> Result<()> {
        let temp_dir = TempDir::new()?;
        let path = temp_dir.path().join("cache/isolgen-files-cache.json");

        let mut cache = FingerprintCache::load(path.clone());
        assert!(cache.is_empty());
        cache.insert("contracts/A.sol", "abc");
        cache.save()?;

        let json = std::fs::read_to_string(&path)?;
        assert!(json.contains("\"contentHash\": \"abc\""));

        let reloaded = FingerprintCache::load(path);
        assert!(reloaded.is_fresh("contracts/A.sol", "abc"));
        assert_eq!(reloaded.len(), 1);
        Ok(())
    }

    #[test]
    fn test_corrupt_cache_is_ignored() -> Result<()> {
        let temp_dir = TempDir::new()?;
        let path = temp_dir.path().join("cache.json");
        std::fs::write(&path, "{ \"files\": 42 }")?;

        let cache = FingerprintCache::load(path.clone());
        assert!(cache.is_empty());
        assert_eq!(cache.path(), Some(path.as_path()));
        Ok(())
    }
}
