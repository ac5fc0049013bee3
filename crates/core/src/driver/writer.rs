use crate::error::Result;
use std::path::Path;
use tracing::trace;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriteOutcome {
    Created,
    Updated,
    Unchanged,
}

/// Writes `contents` to `path` unless the file already holds exactly that text.
pub fn write_if_changed(path: &Path, contents: &str) -> Result<WriteOutcome> {
    let outcome = match std::fs::read_to_string(path) {
        Ok(existing) if existing == contents => {
            trace!("{} is up to date", path.display());
            return Ok(WriteOutcome::Unchanged);
        }
        Ok(_) => WriteOutcome::Updated,
        Err(_) => WriteOutcome::Created,
    };

    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(path, contents)?;
    Ok(outcome)
}
