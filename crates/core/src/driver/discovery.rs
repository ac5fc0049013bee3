use crate::{config::Config, utils::is_interface_name};
use std::cmp::Ordering;
use std::path::{Path, PathBuf};
use tracing::{debug, trace, warn};
use walkdir::WalkDir;

/// Finds every source file that should get an interface, root-relative and in
/// processing order.
pub fn discover(root: &Path, config: &Config) -> Vec<PathBuf> {
    let source_dir = root.join(&config.source_dir);
    let mut files = Vec::new();

    if source_dir.is_dir() {
        for entry in WalkDir::new(&source_dir)
            .follow_links(true)
            .into_iter()
            .filter_map(|e| e.ok())
            .filter(|e| e.file_type().is_file())
        {
            if let Ok(relative) = entry.path().strip_prefix(root) {
                files.push(relative.to_path_buf());
            }
        }
    } else {
        warn!("source directory {} does not exist", source_dir.display());
    }

    for extra in &config.extra_sources {
        if root.join(extra).is_file() {
            files.push(extra.clone());
        } else {
            warn!("extra source {} does not exist", extra.display());
        }
    }

    files.retain(|path| {
        let keep = is_candidate(path, config);
        if !keep {
            trace!("excluded {}", path.display());
        }
        keep
    });
    order(&mut files, &config.aggregation.root_name);
    files.dedup();

    debug!("discovered {} source files", files.len());
    files
}

/// Applies the file-name and directory exclusions to a root-relative path.
pub fn is_candidate(path: &Path, config: &Config) -> bool {
    if path.extension().and_then(|e| e.to_str()) != Some("sol") {
        return false;
    }
    let Some(name) = path.file_name().and_then(|n| n.to_str()) else {
        return false;
    };
    let stem = name.split('.').next().unwrap_or_default();

    if name.ends_with("Interface.sol") || name.contains(".t.sol") || is_interface_name(stem) {
        return false;
    }
    if config
        .filter
        .excluded_dirs
        .iter()
        .any(|dir| path.starts_with(dir))
    {
        return false;
    }
    if let Some(library_dir) = &config.filter.library_dir {
        if path.starts_with(library_dir)
            && !config.filter.library_allow_list.iter().any(|allowed| allowed == name)
        {
            return false;
        }
    }
    true
}

/// Alphabetical, except that aggregation roots go last.
pub fn order(files: &mut [PathBuf], root_name: &str) {
    files.sort_by(|a, b| {
        match (
            is_aggregation_root(a, root_name),
            is_aggregation_root(b, root_name),
        ) {
            (false, true) => Ordering::Less,
            (true, false) => Ordering::Greater,
            _ => a.cmp(b),
        }
    });
}

pub fn is_aggregation_root(path: &Path, root_name: &str) -> bool {
    path.file_stem().and_then(|s| s.to_str()) == Some(root_name)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn candidate(path: &str) -> bool {
        is_candidate(Path::new(path), &Config::default())
    }

    #[test]
    fn test_exclusions() {
        assert!(candidate("contracts/facets/OrdersFacet.sol"));
        assert!(candidate("contracts/Ignition.sol"));
        assert!(!candidate("contracts/interfaces/IOrdersFacet.sol"));
        assert!(!candidate("contracts/OracleInterface.sol"));
        assert!(!candidate("contracts/Orders.t.sol"));
        assert!(!candidate("contracts/governance/Governor.sol"));
        assert!(!candidate("contracts/libraries/DataTypes.sol"));
        assert!(candidate("contracts/libraries/console.sol"));
        assert!(!candidate("contracts/README.md"));
    }

    #[test]
    fn test_order_puts_root_last() {
        let mut files = vec![
            PathBuf::from("contracts/facets/BFacet.sol"),
            PathBuf::from("contracts/Diamond.sol"),
            PathBuf::from("contracts/facets/AFacet.sol"),
            PathBuf::from("contracts/Asset.sol"),
        ];
        order(&mut files, "Diamond");

        assert_eq!(
            files,
            vec![
                PathBuf::from("contracts/Asset.sol"),
                PathBuf::from("contracts/facets/AFacet.sol"),
                PathBuf::from("contracts/facets/BFacet.sol"),
                PathBuf::from("contracts/Diamond.sol"),
            ]
        );
    }

    #[test]
    fn test_discover_walks_source_dir_and_extras() {
        let temp_dir = TempDir::new().unwrap();
        let root = temp_dir.path();
        for path in [
            "contracts/Diamond.sol",
            "contracts/facets/AFacet.sol",
            "contracts/interfaces/IAFacet.sol",
            "contracts/libraries/DataTypes.sol",
            "test/utils/Fixture.sol",
        ] {
            std::fs::create_dir_all(root.join(path).parent().unwrap()).unwrap();
            std::fs::write(root.join(path), "contract X {}").unwrap();
        }

        let config = Config {
            extra_sources: vec![PathBuf::from("test/utils/Fixture.sol")],
            ..Default::default()
        };

        assert_eq!(
            discover(root, &config),
            vec![
                PathBuf::from("contracts/facets/AFacet.sol"),
                PathBuf::from("test/utils/Fixture.sol"),
                PathBuf::from("contracts/Diamond.sol"),
            ]
        );
    }

    #[test]
    fn test_discover_missing_source_dir_is_empty() {
        let temp_dir = TempDir::new().unwrap();
        assert!(discover(temp_dir.path(), &Config::default()).is_empty());
    }
}
