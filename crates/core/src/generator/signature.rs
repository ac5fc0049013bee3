//! Builds single stub lines for functions and public state variables

use super::EnumEraser;
use crate::{
    parser::{ParsedSource, Terminal, TypeShape, type_shape::is_reference_elementary},
    registry::TypeRegistry,
    types::{StubFragment, TypeKind},
};
use solang_parser::pt::{
    Expression, FunctionAttribute, FunctionDefinition, FunctionTy, Mutability, VariableAttribute,
    VariableDefinition, Visibility,
};
use std::collections::BTreeSet;
use tracing::debug;

/// Type used for getters whose value type is a user type the registry does not know.
pub const UNRESOLVED_USER_TYPE: &str = "address";

/// Everything needed to turn one contract's members into stub lines.
pub struct SignatureBuilder<'a> {
    pub parsed: &'a ParsedSource,
    pub registry: &'a TypeRegistry,
    pub eraser: &'a EnumEraser,
}

/// `function name`, `receive` or `fallback`; `None` for constructors and modifiers.
pub fn function_head(func: &FunctionDefinition) -> Option<String> {
    match func.ty {
        FunctionTy::Function => func.name.as_ref().map(|n| format!("function {}", n.name)),
        FunctionTy::Receive => Some("receive".to_string()),
        FunctionTy::Fallback => Some("fallback".to_string()),
        FunctionTy::Constructor | FunctionTy::Modifier => None,
    }
}

pub fn is_externally_visible(func: &FunctionDefinition) -> bool {
    func.attributes.iter().any(|attr| {
        matches!(
            attr,
            FunctionAttribute::Visibility(Visibility::Public(_) | Visibility::External(_))
        )
    })
}

pub fn is_public_variable(var: &VariableDefinition) -> bool {
    var.attrs
        .iter()
        .any(|attr| matches!(attr, VariableAttribute::Visibility(Visibility::Public(_))))
}

fn mutability(func: &FunctionDefinition) -> Option<&'static str> {
    func.attributes.iter().find_map(|attr| match attr {
        FunctionAttribute::Mutability(m) => Some(match m {
            Mutability::Pure(_) => "pure",
            Mutability::View(_) | Mutability::Constant(_) => "view",
            Mutability::Payable(_) => "payable",
        }),
        _ => None,
    })
}

impl SignatureBuilder<'_> {
    /// `  <head>(<params>) external [mutability] [returns (...)];`
    pub fn function_stub(
        &self,
        func: &FunctionDefinition,
        head: &str,
        fragment: &mut StubFragment,
        used: &mut BTreeSet<String>,
    ) -> String {
        let params = self.parameters(func.params.iter().filter_map(|(_, p)| p.as_ref()), fragment, used);
        let returns = self.parameters(func.returns.iter().filter_map(|(_, p)| p.as_ref()), fragment, used);

        let mut line = format!("  {head}({}) external", params.join(", "));
        if let Some(mutability) = mutability(func) {
            line.push(' ');
            line.push_str(mutability);
        }
        if !returns.is_empty() {
            line.push_str(&format!(" returns ({})", returns.join(", ")));
        }
        line.push(';');
        line
    }

    fn parameters<'p>(
        &self,
        params: impl Iterator<Item = &'p solang_parser::pt::Parameter>,
        fragment: &mut StubFragment,
        used: &mut BTreeSet<String>,
    ) -> Vec<String> {
        params
            .map(|param| {
                self.note_used(&param.ty, used);
                let text = self.parsed.slice(&param.loc).trim();
                self.qualify(&self.eraser.erase(text), fragment)
            })
            .collect()
    }

    fn note_used(&self, ty: &Expression, used: &mut BTreeSet<String>) {
        if let Some(name) = TypeShape::from_expression(ty, self.parsed).user_name() {
            used.insert(name.to_string());
        }
    }

    /// Prefixes a parameter slice with its struct's origin file when the type is registered.
    pub fn qualify(&self, param: &str, fragment: &mut StubFragment) -> String {
        let bare = param.split_whitespace().next().unwrap_or_default();
        let bare = bare.split('[').next().unwrap_or(bare);
        match self.registry.get(bare) {
            Some(record) => {
                fragment.require_import(record.import_path());
                format!("{}.{param}", record.qualifier())
            }
            None => param.to_string(),
        }
    }

    /// `  function <name>(<keys>) external view returns (<value>);`
    pub fn getter_stub(
        &self,
        name: &str,
        var: &VariableDefinition,
        fragment: &mut StubFragment,
        used: &mut BTreeSet<String>,
    ) -> String {
        let shape = TypeShape::from_expression(&var.ty, self.parsed);
        let terminal = shape.terminal();
        if let Terminal::User(user) = terminal {
            used.insert(user.to_string());
        }

        let params: Vec<String> = shape
            .getter_params()
            .iter()
            .map(|key| {
                let key = self.eraser.erase(key);
                if is_reference_elementary(&key) {
                    format!("{key} memory")
                } else {
                    key.into_owned()
                }
            })
            .collect();

        let returns = self.getter_return(terminal, fragment);
        format!(
            "  function {name}({}) external view returns ({returns});",
            params.join(", ")
        )
    }

    fn getter_return(&self, terminal: Terminal<'_>, fragment: &mut StubFragment) -> String {
        match terminal {
            Terminal::Elementary(ty) if is_reference_elementary(ty) => format!("{ty} memory"),
            Terminal::Elementary(ty) => ty.to_string(),
            Terminal::User(ty) if self.eraser.is_enum(ty) => "uint".to_string(),
            Terminal::User(ty) => {
                if let Some(record) = self.registry.get(ty) {
                    fragment.require_import(record.import_path());
                    return match record.kind {
                        TypeKind::Struct => format!("{}.{ty} memory", record.qualifier()),
                        TypeKind::Enum => format!("{}.{ty}", record.qualifier()),
                    };
                }
                debug!("{ty} is not a known struct, returning {UNRESOLVED_USER_TYPE}");
                UNRESOLVED_USER_TYPE.to_string()
            }
        }
    }
}
