use serde::{Deserialize, Serialize};

/// An `import` statement as written in a source file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImportDirective {
    /// Path string exactly as it appears between the quotes
    pub path: String,
    /// Imported symbols as written (`A`, `A as B`) or the unit alias; empty for plain imports
    pub symbols: Vec<String>,
    /// `import * as A from "<path>"` (or `import "<path>" as A`): `symbols` holds only `A`
    #[serde(default)]
    pub unit_alias: bool,
}

impl ImportDirective {
    /// Names the importing file uses for the imported symbols (`B` for `A as B`).
    pub fn local_names(&self) -> impl Iterator<Item = &str> {
        self.symbols
            .iter()
            .map(|symbol| symbol.rsplit(" as ").next().unwrap_or(symbol))
    }

    /// Whether any imported symbol is the head of `type_name` (`STypes` for `STypes.Order`).
    pub fn provides(&self, type_name: &str) -> bool {
        let head = type_name.split('.').next().unwrap_or(type_name);
        self.local_names().any(|name| name == head)
    }

    /// The directive as a line of Solidity. Plain imports have no symbol form.
    pub fn to_solidity(&self) -> String {
        if self.unit_alias {
            format!("import * as {} from \"{}\";", self.symbols.join(", "), self.path)
        } else if self.symbols.is_empty() {
            format!("import \"{}\";", self.path)
        } else {
            format!("import {{{}}} from \"{}\";", self.symbols.join(", "), self.path)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_provides_matches_qualified_and_bare_names() {
        let import = ImportDirective {
            path: "contracts/libraries/DataTypes.sol".to_string(),
            symbols: vec!["STypes".to_string(), "O".to_string()],
            unit_alias: false,
        };

        assert!(import.provides("STypes.Order"));
        assert!(import.provides("O"));
        assert!(!import.provides("MTypes.Order"));
        assert!(!import.provides("Order"));
    }

    #[test]
    fn test_renamed_symbol_is_provided_by_its_alias() {
        let import = ImportDirective {
            path: "contracts/libraries/DataTypes.sol".to_string(),
            symbols: vec!["STypes as S".to_string()],
            unit_alias: false,
        };

        assert!(import.provides("S.Order"));
        assert!(!import.provides("STypes.Order"));
        assert_eq!(
            import.to_solidity(),
            "import {STypes as S} from \"contracts/libraries/DataTypes.sol\";"
        );
    }

    #[test]
    fn test_unit_alias_keeps_star_form() {
        let import = ImportDirective {
            path: "contracts/libraries/Errors.sol".to_string(),
            symbols: vec!["Errors".to_string()],
            unit_alias: true,
        };

        assert!(import.provides("Errors.NotOwner"));
        assert_eq!(
            import.to_solidity(),
            "import * as Errors from \"contracts/libraries/Errors.sol\";"
        );
    }
}
