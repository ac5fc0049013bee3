//! Import path remappings (`from=to` prefix substitutions)

use crate::utils::normalize;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Remapping {
    pub from: String,
    pub to: String,
}

impl Remapping {
    /// Parses one `from=to` line. Returns `None` for blank or malformed lines.
    pub fn parse(line: &str) -> Option<Self> {
        let (from, to) = line.trim().split_once('=')?;
        if from.is_empty() {
            return None;
        }
        Some(Self {
            from: from.to_string(),
            to: to.to_string(),
        })
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Remappings {
    entries: Vec<Remapping>,
}

impl Remappings {
    pub fn new(entries: Vec<Remapping>) -> Self {
        Self { entries }
    }

    pub fn parse(contents: &str) -> Self {
        Self::new(contents.lines().filter_map(Remapping::parse).collect())
    }

    /// Loads `file` (relative to `root`), falling back to the `remappings` array of
    /// `[profile.default]` in `foundry.toml`. Absence of both yields an empty table.
    pub fn load(root: &Path, file: &Path) -> Self {
        let path = root.join(file);
        match std::fs::read_to_string(&path) {
            Ok(contents) => {
                let remappings = Self::parse(&contents);
                debug!("loaded {} remappings from {}", remappings.len(), path.display());
                remappings
            }
            Err(e) => match Self::from_foundry_toml(root) {
                Some(remappings) => remappings,
                None => {
                    warn!(
                        "no remappings loaded ({}: {e}); imports resolve relative to their file",
                        path.display()
                    );
                    Self::default()
                }
            },
        }
    }

    fn from_foundry_toml(root: &Path) -> Option<Self> {
        let contents = std::fs::read_to_string(root.join("foundry.toml")).ok()?;
        let value: toml::Value = toml::from_str(&contents).ok()?;
        let lines = value
            .get("profile")?
            .get("default")?
            .get("remappings")?
            .as_array()?;
        Some(Self::new(
            lines
                .iter()
                .filter_map(|line| line.as_str())
                .filter_map(Remapping::parse)
                .collect(),
        ))
    }

    /// The longest `from` prefix matching `import`; the earliest entry wins a tie.
    pub fn best_match(&self, import: &str) -> Option<&Remapping> {
        self.entries
            .iter()
            .filter(|r| import.starts_with(&r.from))
            .fold(None, |best: Option<&Remapping>, candidate| match best {
                Some(b) if b.from.len() >= candidate.from.len() => Some(b),
                _ => Some(candidate),
            })
    }

    /// Resolves an import string to a root-relative path.
    ///
    /// Relative imports (`./`, `../`) and imports without a matching remapping are joined
    /// to the importing file's directory.
    pub fn resolve(&self, import: &str, importing_file: &Path) -> PathBuf {
        let is_relative = import.starts_with("./") || import.starts_with("../");
        if !is_relative {
            if let Some(remapping) = self.best_match(import) {
                let remapped = format!("{}{}", remapping.to, &import[remapping.from.len()..]);
                return normalize(Path::new(&remapped));
            }
        }

        let dir = importing_file.parent().unwrap_or_else(|| Path::new(""));
        normalize(&dir.join(import))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_parse_skips_blank_and_malformed_lines() {
        let remappings = Remappings::parse("forge-std/=lib/forge-std/src/\n\nnot a remapping\n=x\n");
        assert_eq!(remappings.len(), 1);
        assert_eq!(
            remappings.best_match("forge-std/Test.sol").unwrap().to,
            "lib/forge-std/src/"
        );
    }

    #[test]
    fn test_longest_prefix_wins() {
        let remappings = Remappings::parse(
            "@oz/=lib/openzeppelin/\n@oz/contracts/=lib/openzeppelin-contracts/contracts/\n",
        );
        assert_eq!(
            remappings.resolve("@oz/contracts/token/ERC20.sol", Path::new("contracts/A.sol")),
            PathBuf::from("lib/openzeppelin-contracts/contracts/token/ERC20.sol")
        );
    }

    #[test]
    fn test_first_entry_wins_tie() {
        let remappings = Remappings::parse("a/=first/\na/=second/\n");
        assert_eq!(remappings.best_match("a/X.sol").unwrap().to, "first/");
    }

    #[test]
    fn test_relative_resolution() {
        let remappings = Remappings::parse("contracts/=src/\n");
        assert_eq!(
            remappings.resolve("../libraries/DataTypes.sol", Path::new("contracts/facets/A.sol")),
            PathBuf::from("contracts/libraries/DataTypes.sol")
        );
        assert_eq!(
            remappings.resolve("./Base.sol", Path::new("contracts/facets/A.sol")),
            PathBuf::from("contracts/facets/Base.sol")
        );
    }

    #[test]
    fn test_unmatched_import_joins_directory() {
        let remappings = Remappings::default();
        assert_eq!(
            remappings.resolve("Base.sol", Path::new("contracts/A.sol")),
            PathBuf::from("contracts/Base.sol")
        );
    }

    #[test]
    fn test_load_missing_files_is_empty() {
        let temp_dir = TempDir::new().unwrap();
        let remappings = Remappings::load(temp_dir.path(), Path::new("remappings.txt"));
        assert!(remappings.is_empty());
    }

    #[test]
    fn test_load_falls_back_to_foundry_toml() {
        let temp_dir = TempDir::new().unwrap();
        std::fs::write(
            temp_dir.path().join("foundry.toml"),
            "[profile.default]\nsrc = \"contracts\"\nremappings = [\"contracts/=contracts/\", \"test/=test/\"]\n",
        )
        .unwrap();

        let remappings = Remappings::load(temp_dir.path(), Path::new("remappings.txt"));
        assert_eq!(remappings.len(), 2);
    }
}
