use super::ImportDirective;

/// Generated interface body for one contract together with everything it needs imported.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StubFragment {
    /// Stub lines grouped in blocks separated by blank lines
    pub body: String,
    /// Files to import whole (`import "<path>";`), in first-use order
    pub imports: Vec<String>,
    /// Symbol imports carried over from the implementation (`import {A} from "<path>";`)
    pub symbol_imports: Vec<ImportDirective>,
}

impl StubFragment {
    pub fn is_empty(&self) -> bool {
        self.body.trim().is_empty()
    }

    pub fn require_import(&mut self, path: impl Into<String>) {
        let path = path.into();
        if !self.imports.contains(&path) {
            self.imports.push(path);
        }
    }

    pub fn require_symbols(&mut self, import: &ImportDirective) {
        match self
            .symbol_imports
            .iter_mut()
            .find(|i| i.path == import.path && i.unit_alias == import.unit_alias)
        {
            Some(existing) => {
                for symbol in &import.symbols {
                    if !existing.symbols.contains(symbol) {
                        existing.symbols.push(symbol.clone());
                    }
                }
            }
            None => self.symbol_imports.push(import.clone()),
        }
    }

    /// Merges the import requirements of `other`, leaving the body untouched.
    pub fn absorb_requirements(&mut self, other: &StubFragment) {
        for path in &other.imports {
            self.require_import(path.as_str());
        }
        for import in &other.symbol_imports {
            self.require_symbols(import);
        }
    }
}

/// A facet's fragment, kept until the aggregation root is generated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AggregationRecord {
    pub contract: String,
    pub fragment: StubFragment,
}
