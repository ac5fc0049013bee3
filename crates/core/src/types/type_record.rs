use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TypeKind {
    Struct,
    Enum,
}

/// A struct or enum definition discovered while generating, keyed by name in the registry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TypeRecord {
    pub name: String,
    pub kind: TypeKind,
    /// Root-relative path of the defining file
    pub path: PathBuf,
    /// Verbatim definition text
    pub source: String,
}

impl TypeRecord {
    /// Prefix used to reference this type from another file: the defining file's
    /// basename up to the first dot (`contracts/libraries/DataTypes.sol` -> `DataTypes`).
    pub fn qualifier(&self) -> String {
        self.path
            .file_name()
            .and_then(|name| name.to_str())
            .and_then(|name| name.split('.').next())
            .unwrap_or_default()
            .to_string()
    }

    /// The defining file as it should appear in an `import` line.
    pub fn import_path(&self) -> String {
        crate::utils::display_path(&self.path)
    }
}
