//! Incremental batch generation over a whole project

pub mod discovery;
pub mod writer;

use crate::{
    aggregator::FacetAggregator,
    cache::{FingerprintCache, fingerprint},
    config::Config,
    error::{Error, Result},
    generator::Session,
    utils::display_path,
};
use std::path::{Path, PathBuf};
use tracing::{debug, info, trace};
use writer::{WriteOutcome, write_if_changed};

#[derive(Debug, Clone, Copy, Default)]
pub struct RunOptions {
    /// Regenerate every file regardless of the fingerprint cache
    pub force: bool,
    /// Delete the output directory first
    pub clear: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileStatus {
    /// A new interface file was written
    Created,
    /// An existing interface file was rewritten with new content
    Updated,
    /// The interface was regenerated and matched the file on disk
    Unchanged,
    /// The source needs no interface
    Skipped,
    /// The source is unchanged since the last run and was not regenerated
    Cached,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileOutcome {
    pub source: PathBuf,
    pub status: FileStatus,
    /// Interface file, for `Created`, `Updated` and `Unchanged`
    pub interface: Option<PathBuf>,
}

#[derive(Debug, Clone, Default)]
pub struct RunReport {
    pub outcomes: Vec<FileOutcome>,
}

impl RunReport {
    pub fn count(&self, status: FileStatus) -> usize {
        self.outcomes.iter().filter(|o| o.status == status).count()
    }

    pub fn status_of(&self, source: &Path) -> Option<FileStatus> {
        self.outcomes
            .iter()
            .find(|o| o.source == source)
            .map(|o| o.status)
    }
}

/// Runs discovery, fingerprinting, generation and writing for one project root.
pub struct Driver {
    root: PathBuf,
    config: Config,
}

impl Driver {
    pub fn new(root: impl Into<PathBuf>, config: Config) -> Self {
        Self {
            root: root.into(),
            config,
        }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn out_dir(&self) -> PathBuf {
        self.root.join(&self.config.out_dir)
    }

    pub fn discover(&self) -> Vec<PathBuf> {
        discovery::discover(&self.root, &self.config)
    }

    /// A session in the state a forced run reaches just before `target`: every
    /// discovered file ordered ahead of it has been generated, so facets are
    /// recorded and shared types registered. Nothing is written.
    pub fn session_for(&self, target: &Path) -> Result<Session> {
        let mut session = Session::from_config(&self.root, &self.config);
        for path in self.discover() {
            if path == target {
                break;
            }
            trace!("replaying {}", display_path(&path));
            session.generate_file(&path)?;
        }
        Ok(session)
    }

    pub fn run(&self, options: RunOptions) -> Result<RunReport> {
        let out_dir = self.out_dir();
        if options.clear && out_dir.exists() {
            info!("clearing {}", out_dir.display());
            std::fs::remove_dir_all(&out_dir)?;
        }
        let force = options.force || !out_dir.exists();

        let mut cache = FingerprintCache::load(self.root.join(&self.config.cache_file));
        if options.clear {
            cache.clear();
        }
        let files = self.discover();

        let mut pending = Vec::with_capacity(files.len());
        for path in files {
            let absolute = self.root.join(&path);
            let contents = std::fs::read_to_string(&absolute).map_err(|source| Error::ReadError {
                path: absolute,
                source,
            })?;
            let hash = fingerprint(&contents);
            let stale = force || !cache.is_fresh(&display_path(&path), &hash);
            pending.push((path, hash, stale));
        }
        self.propagate_aggregation_staleness(&mut pending);

        let mut session = Session::from_config(&self.root, &self.config);
        let mut report = RunReport::default();

        for (path, hash, stale) in pending {
            let key = display_path(&path);
            if !stale {
                trace!("{key} unchanged since last run");
                session.register_file(&path)?;
                report.outcomes.push(FileOutcome {
                    source: path,
                    status: FileStatus::Cached,
                    interface: None,
                });
                continue;
            }

            let outcome = match session.generate_file(&path)? {
                Some(text) => {
                    let interface = out_dir.join(interface_file_name(&path));
                    let status = match write_if_changed(&interface, &text)? {
                        WriteOutcome::Created => FileStatus::Created,
                        WriteOutcome::Updated => FileStatus::Updated,
                        WriteOutcome::Unchanged => FileStatus::Unchanged,
                    };
                    FileOutcome {
                        source: path,
                        status,
                        interface: Some(interface),
                    }
                }
                None => FileOutcome {
                    source: path,
                    status: FileStatus::Skipped,
                    interface: None,
                },
            };
            debug!("{key}: {:?}", outcome.status);
            report.outcomes.push(outcome);
            cache.insert(key, hash);
        }

        cache.save()?;
        Ok(report)
    }

    /// A root is only complete when every unit was generated in the same run, so a
    /// stale root or unit makes the root and all units stale.
    fn propagate_aggregation_staleness(&self, pending: &mut [(PathBuf, String, bool)]) {
        let aggregation = &self.config.aggregation;
        let aggregator = FacetAggregator::new(&aggregation.unit_suffix, &aggregation.root_name);
        let takes_part = |path: &Path| {
            path.file_stem()
                .and_then(|s| s.to_str())
                .is_some_and(|stem| aggregator.is_unit(stem) || aggregator.is_root(stem))
        };

        let any_stale = pending
            .iter()
            .any(|(path, _, stale)| *stale && takes_part(path));
        if !any_stale {
            return;
        }
        for (path, _, stale) in pending.iter_mut() {
            if takes_part(path) {
                *stale = true;
            }
        }
    }
}

/// `contracts/facets/OrdersFacet.sol` -> `IOrdersFacet.sol`
pub fn interface_file_name(source: &Path) -> String {
    let name = source
        .file_name()
        .map(|n| n.to_string_lossy())
        .unwrap_or_default();
    format!("I{name}")
}
