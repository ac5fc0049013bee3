use crate::{
    error::{Error, Result},
    types::ImportDirective,
};
use solang_parser::pt::{self, ContractDefinition, EnumDefinition, SourceUnitPart, StructDefinition};
use std::path::{Path, PathBuf};

/// Thin wrapper around `solang_parser` that keeps the source text next to the tree.
#[derive(Debug, Default, Clone, Copy)]
pub struct SolidityParser;

impl SolidityParser {
    pub fn new() -> Self {
        Self
    }

    pub fn parse(&self, source: String, path: &Path) -> Result<ParsedSource> {
        let (unit, _comments) = solang_parser::parse(&source, 0).map_err(|diagnostics| {
            let message = diagnostics
                .iter()
                .map(|d| d.message.as_str())
                .collect::<Vec<_>>()
                .join("; ");
            Error::ParseError {
                path: path.to_path_buf(),
                message,
            }
        })?;

        Ok(ParsedSource {
            path: path.to_path_buf(),
            source,
            unit,
        })
    }
}

/// One parsed file: its root-relative path, raw text and syntax tree.
#[derive(Debug)]
pub struct ParsedSource {
    path: PathBuf,
    source: String,
    unit: pt::SourceUnit,
}

impl ParsedSource {
    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn source(&self) -> &str {
        &self.source
    }

    pub fn unit(&self) -> &pt::SourceUnit {
        &self.unit
    }

    /// Returns the verbatim source text covered by `loc`.
    pub fn slice(&self, loc: &pt::Loc) -> &str {
        match loc {
            pt::Loc::File(_, start, end) => self.source.get(*start..*end).unwrap_or_default(),
            _ => "",
        }
    }

    /// The pragma directive text, always terminated by a semicolon.
    pub fn pragma(&self) -> Option<String> {
        self.unit.0.iter().find_map(|part| match part {
            SourceUnitPart::PragmaDirective(..) => {
                let text = self.slice(&pt::CodeLocation::loc(part)).trim();
                Some(if text.ends_with(';') {
                    text.to_string()
                } else {
                    format!("{text};")
                })
            }
            _ => None,
        })
    }

    /// Import directives in declaration order.
    pub fn imports(&self) -> Vec<ImportDirective> {
        self.unit
            .0
            .iter()
            .filter_map(|part| match part {
                SourceUnitPart::ImportDirective(import) => Some(import_directive(import)),
                _ => None,
            })
            .collect()
    }

    /// The first contract, interface or library in the file.
    pub fn contract(&self) -> Option<&ContractDefinition> {
        self.unit.0.iter().find_map(|part| match part {
            SourceUnitPart::ContractDefinition(contract) => Some(contract.as_ref()),
            _ => None,
        })
    }

    pub fn file_structs(&self) -> impl Iterator<Item = &StructDefinition> {
        self.unit.0.iter().filter_map(|part| match part {
            SourceUnitPart::StructDefinition(def) => Some(def.as_ref()),
            _ => None,
        })
    }

    pub fn file_enums(&self) -> impl Iterator<Item = &EnumDefinition> {
        self.unit.0.iter().filter_map(|part| match part {
            SourceUnitPart::EnumDefinition(def) => Some(def.as_ref()),
            _ => None,
        })
    }
}

fn import_directive(import: &pt::Import) -> ImportDirective {
    let (path, symbols, unit_alias) = match import {
        pt::Import::Plain(path, _) => (path, Vec::new(), false),
        pt::Import::GlobalSymbol(path, alias, _) => (path, vec![alias.name.clone()], true),
        pt::Import::Rename(path, names, _) => (
            path,
            names
                .iter()
                .map(|(name, alias)| match alias {
                    Some(alias) => format!("{} as {}", name.name, alias.name),
                    None => name.name.clone(),
                })
                .collect(),
            false,
        ),
    };
    let path = match path {
        pt::ImportPath::Filename(literal) => literal.string.clone(),
        pt::ImportPath::Path(path) => path.to_string(),
    };
    ImportDirective {
        path,
        symbols,
        unit_alias,
    }
}
