use super::{ParsedSource, SolidityParser};
use crate::error::{Error, Result};
use lru::LruCache;
use std::num::NonZeroUsize;
use std::path::{Path, PathBuf};
use std::rc::Rc;
use tracing::trace;

const DEFAULT_CAPACITY: usize = 256;

/// Parsed files keyed by root-relative path, so a base contract inherited by
/// many files is read and parsed once per run.
pub struct SourceCache {
    root: PathBuf,
    parser: SolidityParser,
    entries: LruCache<PathBuf, Rc<ParsedSource>>,
}

impl SourceCache {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self::with_capacity(root, DEFAULT_CAPACITY)
    }

    pub fn with_capacity(root: impl Into<PathBuf>, capacity: usize) -> Self {
        let capacity = NonZeroUsize::new(capacity).unwrap_or(NonZeroUsize::MIN);
        Self {
            root: root.into(),
            parser: SolidityParser::new(),
            entries: LruCache::new(capacity),
        }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Returns the parsed file at `path` (relative to the root), reading it on a miss.
    pub fn load(&mut self, path: &Path) -> Result<Rc<ParsedSource>> {
        if let Some(parsed) = self.entries.get(path) {
            trace!("source cache hit: {}", path.display());
            return Ok(Rc::clone(parsed));
        }

        let absolute = self.root.join(path);
        let source = std::fs::read_to_string(&absolute).map_err(|source| Error::ReadError {
            path: absolute.clone(),
            source,
        })?;
        self.insert_source(path, source)
    }

    /// Parses `source` as the contents of `path` and caches the result.
    pub fn insert_source(&mut self, path: &Path, source: String) -> Result<Rc<ParsedSource>> {
        let parsed = Rc::new(self.parser.parse(source, path)?);
        self.entries.put(path.to_path_buf(), Rc::clone(&parsed));
        Ok(parsed)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
