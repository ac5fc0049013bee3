use std::path::{Component, Path, PathBuf};

/// Renders a path with forward slashes, as it appears in import statements and cache keys.
pub fn display_path(path: &Path) -> String {
    path.to_string_lossy().replace('\\', "/")
}

/// Collapses `.` and `..` components without touching the file system.
pub fn normalize(path: &Path) -> PathBuf {
    let mut normalized = PathBuf::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => match normalized.components().next_back() {
                Some(Component::Normal(_)) => {
                    normalized.pop();
                }
                _ => normalized.push(".."),
            },
            other => normalized.push(other),
        }
    }
    normalized
}

/// Interface naming convention: `I` followed by an uppercase letter (`IERC20`, `IDiamondCut`).
pub fn is_interface_name(name: &str) -> bool {
    let mut chars = name.chars();
    chars.next() == Some('I') && chars.next().is_some_and(|c| c.is_ascii_uppercase())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize() {
        assert_eq!(
            normalize(Path::new("contracts/facets/../libraries/./DataTypes.sol")),
            PathBuf::from("contracts/libraries/DataTypes.sol")
        );
        assert_eq!(
            normalize(Path::new("contracts/../../lib/A.sol")),
            PathBuf::from("../lib/A.sol")
        );
    }

    #[test]
    fn test_is_interface_name() {
        assert!(is_interface_name("IERC20"));
        assert!(is_interface_name("IDiamondCut"));
        assert!(!is_interface_name("Initializable"));
        assert!(!is_interface_name("I"));
        assert!(!is_interface_name("Token"));
    }
}
