use anyhow::{Context, Result, bail};
use std::env;
use std::path::{Path, PathBuf};

/// The project root: `--root` when given, the current directory otherwise.
pub fn resolve_root(root: Option<&str>) -> Result<PathBuf> {
    let root = match root {
        Some(root) => PathBuf::from(root),
        None => env::current_dir().context("Failed to get current directory")?,
    };
    root.canonicalize()
        .with_context(|| format!("Failed to canonicalize project root {}", root.display()))
}

/// Turns a user-supplied file path into one relative to `root`.
pub fn relative_to_root(root: &Path, file: &str) -> Result<PathBuf> {
    let path = Path::new(file);
    let absolute = if path.is_absolute() {
        path.to_path_buf()
    } else {
        env::current_dir()
            .context("Failed to get current directory")?
            .join(path)
    };
    let absolute = absolute
        .canonicalize()
        .with_context(|| format!("File not found: {}", absolute.display()))?;

    match absolute.strip_prefix(root) {
        Ok(relative) => Ok(relative.to_path_buf()),
        Err(_) => bail!(
            "{} is outside the project root {}",
            absolute.display(),
            root.display()
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_relative_to_root() {
        let temp_dir = TempDir::new().unwrap();
        let root = temp_dir.path().canonicalize().unwrap();
        std::fs::create_dir_all(root.join("contracts")).unwrap();
        std::fs::write(root.join("contracts/Token.sol"), "contract Token {}").unwrap();

        let file = root.join("contracts/Token.sol");
        let relative = relative_to_root(&root, file.to_str().unwrap()).unwrap();
        assert_eq!(relative, PathBuf::from("contracts/Token.sol"));
    }

    #[test]
    fn test_file_outside_root_is_rejected() {
        let root = TempDir::new().unwrap();
        let other = TempDir::new().unwrap();
        let file = other.path().join("Token.sol");
        std::fs::write(&file, "contract Token {}").unwrap();

        let root = root.path().canonicalize().unwrap();
        assert!(relative_to_root(&root, file.to_str().unwrap()).is_err());
    }
}
