use super::{EnumEraser, GeneratorSettings, SignatureBuilder, render_interface, signature};
use crate::{
    aggregator::FacetAggregator,
    config::Config,
    error::{Error, Result},
    parser::{ParsedSource, SourceCache},
    registry::TypeRegistry,
    remappings::Remappings,
    types::{StubFragment, TypeKind, TypeRecord},
    utils::{display_path, is_interface_name},
};
use solang_parser::pt::{ContractDefinition, ContractPart, ContractTy, Loc};
use std::collections::{BTreeSet, HashSet};
use std::path::{Path, PathBuf};
use std::rc::Rc;
use tracing::{debug, trace};

/// State shared by every file generated in one run: the type registry, the facet
/// records and the parsed-source cache.
///
/// A fresh session must be used for each independent run; registrations made while
/// generating one file change how later files resolve their types.
pub struct Session {
    remappings: Remappings,
    settings: GeneratorSettings,
    registry: TypeRegistry,
    aggregator: FacetAggregator,
    sources: SourceCache,
}

impl Session {
    pub fn new(root: impl Into<PathBuf>, remappings: Remappings, settings: GeneratorSettings) -> Self {
        let aggregator = FacetAggregator::new(&settings.unit_suffix, &settings.root_name);
        Self {
            remappings,
            settings,
            registry: TypeRegistry::new(),
            aggregator,
            sources: SourceCache::new(root),
        }
    }

    pub fn from_config(root: &Path, config: &Config) -> Self {
        let remappings = Remappings::load(root, &config.remappings_file);
        Self::new(root, remappings, GeneratorSettings::from(config))
    }

    pub fn root(&self) -> &Path {
        self.sources.root()
    }

    pub fn registry(&self) -> &TypeRegistry {
        &self.registry
    }

    pub fn aggregator(&self) -> &FacetAggregator {
        &self.aggregator
    }

    pub fn settings(&self) -> &GeneratorSettings {
        &self.settings
    }

    /// Generates the interface for the file at `path` (relative to the root).
    ///
    /// Returns `None` when the file needs no interface.
    pub fn generate_file(&mut self, path: &Path) -> Result<Option<String>> {
        let parsed = self.sources.load(path)?;
        self.generate_parsed(&parsed)
    }

    /// Same as [`Session::generate_file`] for in-memory source text.
    pub fn generate(&mut self, source: &str, path: &Path) -> Result<Option<String>> {
        let parsed = self.sources.insert_source(path, source.to_string())?;
        self.generate_parsed(&parsed)
    }

    /// Registers the file's structs and enums without generating anything.
    pub fn register_file(&mut self, path: &Path) -> Result<()> {
        let parsed = self.sources.load(path)?;
        self.register_types(&parsed);
        Ok(())
    }

    fn generate_parsed(&mut self, parsed: &Rc<ParsedSource>) -> Result<Option<String>> {
        debug!("generating interface for {}", parsed.path().display());
        let mut chain = vec![parsed.path().to_path_buf()];
        let Some(fragment) = self.stub_unit(parsed, &mut chain)? else {
            return Ok(None);
        };
        let Some(contract) = parsed.contract() else {
            return Ok(None);
        };
        let name = contract.name.as_ref().map(|n| n.name.as_str()).unwrap_or_default();

        if matches!(contract.ty, ContractTy::Interface(_) | ContractTy::Library(_))
            || is_interface_name(name)
            || name.contains("Interface")
        {
            trace!("{name} is an interface or library");
            return Ok(None);
        }
        if declares_abstract(parsed.source(), name) {
            trace!("{name} is abstract");
            return Ok(None);
        }
        if fragment.is_empty() {
            trace!("{name} has no external surface");
            return Ok(None);
        }

        let extra_imports: &[String] = if self.aggregator.is_root(name) {
            &self.settings.root_imports
        } else {
            &[]
        };

        Ok(Some(render_interface(
            &self.settings.license,
            parsed.pragma().as_deref(),
            name,
            &fragment,
            extra_imports,
        )))
    }

    /// Builds the stub fragment of one file, recursing into the files of its base contracts.
    ///
    /// `chain` holds the files currently being resolved, outermost first.
    fn stub_unit(
        &mut self,
        parsed: &Rc<ParsedSource>,
        chain: &mut Vec<PathBuf>,
    ) -> Result<Option<StubFragment>> {
        let Some(contract) = parsed.contract() else {
            self.register_types(parsed);
            return Ok(None);
        };
        let Some(name) = contract.name.as_ref().map(|n| n.name.clone()) else {
            return Ok(None);
        };

        let mut fragment = StubFragment::default();
        let inherited = self.inherited_stubs(parsed, contract, chain, &mut fragment)?;
        let enums = self.register_types(parsed);

        if matches!(contract.ty, ContractTy::Interface(_) | ContractTy::Library(_)) {
            fragment.body = inherited.join("\n\n");
            return Ok(Some(fragment));
        }

        let eraser = EnumEraser::new(enums);
        let imports = parsed.imports();
        let builder = SignatureBuilder {
            parsed,
            registry: &self.registry,
            eraser: &eraser,
        };
        let mut used = BTreeSet::new();

        let mut getters = Vec::new();
        let mut functions = Vec::new();
        for part in &contract.parts {
            match part {
                ContractPart::VariableDefinition(var) if signature::is_public_variable(var) => {
                    let Some(var_name) = var.name.as_ref().map(|n| n.name.as_str()) else {
                        continue;
                    };
                    if self.settings.excluded_getters.iter().any(|g| g == var_name) {
                        trace!("skipping excluded getter {var_name}");
                        continue;
                    }
                    getters.push(builder.getter_stub(var_name, var, &mut fragment, &mut used));
                }
                ContractPart::FunctionDefinition(func) if signature::is_externally_visible(func) => {
                    let Some(head) = signature::function_head(func) else {
                        continue;
                    };
                    let declared = format!("{head}(");
                    if inherited.iter().any(|stub| stub.contains(&declared)) {
                        trace!("{head} already declared by a base contract");
                        continue;
                    }
                    functions.push(builder.function_stub(func, &head, &mut fragment, &mut used));
                }
                _ => {}
            }
        }

        for import in &imports {
            if !import.symbols.is_empty() && used.iter().any(|ty| import.provides(ty)) {
                fragment.require_symbols(import);
            }
        }

        let label = display_path(parsed.path());
        let mut blocks = inherited;
        if !getters.is_empty() {
            blocks.push(format!("  // public getters from {label}\n{}", getters.join("\n")));
        }
        if !functions.is_empty() {
            blocks.push(format!("  // functions from {label}\n{}", functions.join("\n")));
        }
        fragment.body = blocks.join("\n\n");

        if self.aggregator.is_unit(&name) {
            self.aggregator.record(&name, &fragment);
        }
        if self.aggregator.is_root(&name) {
            self.aggregator.merge_into(&mut fragment);
        }

        Ok(Some(fragment))
    }

    /// Stubs of the base contracts imported by this file, in import order.
    fn inherited_stubs(
        &mut self,
        parsed: &ParsedSource,
        contract: &ContractDefinition,
        chain: &mut Vec<PathBuf>,
        fragment: &mut StubFragment,
    ) -> Result<Vec<String>> {
        let bases: HashSet<String> = contract
            .base
            .iter()
            .map(|base| {
                base.name
                    .identifiers
                    .iter()
                    .map(|ident| ident.name.as_str())
                    .collect::<Vec<_>>()
                    .join(".")
            })
            .collect();
        if bases.is_empty() {
            return Ok(Vec::new());
        }

        let mut stubs = Vec::new();
        for import in parsed.imports() {
            let stem = Path::new(&import.path)
                .file_stem()
                .and_then(|s| s.to_str())
                .unwrap_or_default();
            if !bases.contains(stem) {
                continue;
            }

            let resolved = self.remappings.resolve(&import.path, parsed.path());
            if chain.contains(&resolved) {
                return Err(Error::InheritanceCycle(resolved));
            }
            debug!("resolving base {stem} from {}", resolved.display());

            let base = self.sources.load(&resolved).map_err(|e| match e {
                Error::ReadError { .. } => Error::UnresolvedImport {
                    import: import.path.clone(),
                    from: parsed.path().to_path_buf(),
                },
                other => other,
            })?;

            chain.push(resolved);
            let stub = self.stub_unit(&base, chain)?;
            chain.pop();

            if let Some(stub) = stub.filter(|s| !s.is_empty()) {
                fragment.absorb_requirements(&stub);
                stubs.push(stub.body);
            }
        }
        Ok(stubs)
    }

    /// Registers every struct and enum of the file. Returns the names of its enums.
    fn register_types(&mut self, parsed: &ParsedSource) -> Vec<String> {
        let mut found: Vec<(String, TypeKind, Loc)> = Vec::new();
        for def in parsed.file_structs() {
            if let Some(name) = &def.name {
                found.push((name.name.clone(), TypeKind::Struct, def.loc));
            }
        }
        for def in parsed.file_enums() {
            if let Some(name) = &def.name {
                found.push((name.name.clone(), TypeKind::Enum, def.loc));
            }
        }
        if let Some(contract) = parsed.contract() {
            for part in &contract.parts {
                match part {
                    ContractPart::StructDefinition(def) => {
                        if let Some(name) = &def.name {
                            found.push((name.name.clone(), TypeKind::Struct, def.loc));
                        }
                    }
                    ContractPart::EnumDefinition(def) => {
                        if let Some(name) = &def.name {
                            found.push((name.name.clone(), TypeKind::Enum, def.loc));
                        }
                    }
                    _ => {}
                }
            }
        }

        let enums: Vec<String> = found
            .iter()
            .filter(|(_, kind, _)| *kind == TypeKind::Enum)
            .map(|(name, ..)| name.clone())
            .collect();
        let eraser = EnumEraser::new(enums.iter().cloned());

        for (name, kind, loc) in found {
            self.registry.register(TypeRecord {
                name,
                kind,
                path: parsed.path().to_path_buf(),
                source: eraser.erase(parsed.slice(&loc)).into_owned(),
            });
        }
        enums
    }
}

/// Whether `source` declares `abstract contract <name>` (whole name).
fn declares_abstract(source: &str, name: &str) -> bool {
    let needle = format!("abstract contract {name}");
    source.match_indices(&needle).any(|(start, _)| {
        source[start + needle.len()..]
            .chars()
            .next()
            .is_none_or(|c| !(c.is_alphanumeric() || c == '_'))
    })
}
