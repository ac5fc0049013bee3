use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

pub const CONFIG_FILE_NAMES: [&str; 2] = [".isolgen.json", "isolgen.json"];

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "snake_case", default)]
pub struct Config {
    /// Directory scanned recursively for `.sol` files
    pub source_dir: PathBuf,
    /// Files scanned in addition to `source_dir`
    pub extra_sources: Vec<PathBuf>,
    pub out_dir: PathBuf,
    pub cache_file: PathBuf,
    pub remappings_file: PathBuf,
    /// SPDX identifier written at the top of every interface
    pub license: String,
    /// Public state variables that never get a getter stub
    pub excluded_getters: Vec<String>,
    pub filter: FilterConfig,
    pub aggregation: AggregationConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            source_dir: PathBuf::from("contracts"),
            extra_sources: Vec::new(),
            out_dir: PathBuf::from("interfaces"),
            cache_file: PathBuf::from("cache/isolgen-files-cache.json"),
            remappings_file: PathBuf::from("remappings.txt"),
            license: "GPL-3.0-only".to_string(),
            excluded_getters: vec!["HEAD".to_string()],
            filter: FilterConfig::default(),
            aggregation: AggregationConfig::default(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "snake_case", default)]
pub struct FilterConfig {
    /// Directories whose files never get an interface
    pub excluded_dirs: Vec<PathBuf>,
    pub library_dir: Option<PathBuf>,
    /// File names inside `library_dir` that are still processed
    pub library_allow_list: Vec<String>,
}

impl Default for FilterConfig {
    fn default() -> Self {
        Self {
            excluded_dirs: vec![PathBuf::from("contracts/governance")],
            library_dir: Some(PathBuf::from("contracts/libraries")),
            library_allow_list: vec!["console.sol".to_string()],
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "snake_case", default)]
pub struct AggregationConfig {
    pub unit_suffix: String,
    pub root_name: String,
    /// Import lines emitted verbatim in the root interface only
    pub root_imports: Vec<String>,
}

impl Default for AggregationConfig {
    fn default() -> Self {
        Self {
            unit_suffix: "Facet".to_string(),
            root_name: "Diamond".to_string(),
            root_imports: Vec::new(),
        }
    }
}

impl Config {
    pub fn load_from_file(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        let config = serde_json::from_str(&contents)
            .map_err(|e| Error::ConfigError(format!("Failed to parse config: {e}")))?;
        Ok(config)
    }

    pub fn save_to_file(&self, path: &Path) -> Result<()> {
        let contents = serde_json::to_string_pretty(self)
            .map_err(|e| Error::ConfigError(format!("Failed to serialize config: {e}")))?;
        std::fs::write(path, contents)?;
        Ok(())
    }

    pub fn find_config_file(start_path: &Path) -> Option<PathBuf> {
        let mut current = start_path;

        loop {
            for name in CONFIG_FILE_NAMES {
                let config_path = current.join(name);
                if config_path.exists() {
                    return Some(config_path);
                }
            }

            current = current.parent()?;
        }
    }

    /// Loads the nearest config file above `start_path`, or the defaults when there is none.
    pub fn load_or_default(start_path: &Path) -> Result<Self> {
        match Self::find_config_file(start_path) {
            Some(path) => {
                tracing::debug!("using config {}", path.display());
                Self::load_from_file(&path)
            }
            None => Ok(Self::default()),
        }
    }
}
