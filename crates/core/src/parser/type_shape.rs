//! Structural view of a declared type, enough to derive getter signatures
//! without a type checker.

use super::ParsedSource;
use solang_parser::pt::{CodeLocation, Expression, Type};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TypeShape {
    /// `uint256`, `address`, `string`, ...
    Elementary(String),
    /// A bare or dotted user type name (`Order`, `STypes.Order`)
    User(String),
    Array(Box<TypeShape>),
    Mapping { key: String, value: Box<TypeShape> },
}

impl TypeShape {
    pub fn from_expression(expr: &Expression, parsed: &ParsedSource) -> Self {
        match expr {
            Expression::Type(_, Type::Mapping { key, value, .. }) => TypeShape::Mapping {
                key: parsed.slice(&key.loc()).trim().to_string(),
                value: Box::new(Self::from_expression(value, parsed)),
            },
            Expression::ArraySubscript(_, base, _) => {
                TypeShape::Array(Box::new(Self::from_expression(base, parsed)))
            }
            Expression::Variable(ident) => TypeShape::User(ident.name.clone()),
            Expression::MemberAccess(loc, ..) => {
                TypeShape::User(parsed.slice(loc).trim().to_string())
            }
            Expression::Parenthesis(_, inner) => Self::from_expression(inner, parsed),
            other => TypeShape::Elementary(parsed.slice(&other.loc()).trim().to_string()),
        }
    }

    /// Name of the user type directly declared, or directly held by an array.
    pub fn user_name(&self) -> Option<&str> {
        match self {
            TypeShape::User(name) => Some(name),
            TypeShape::Array(inner) => match inner.as_ref() {
                TypeShape::User(name) => Some(name),
                _ => None,
            },
            _ => None,
        }
    }

    /// Key types a public getter for this shape takes, outermost first.
    ///
    /// Every mapping layer contributes its key, every array layer an index.
    pub fn getter_params(&self) -> Vec<String> {
        let mut params = Vec::new();
        let mut current = self;
        loop {
            match current {
                TypeShape::Array(inner) => {
                    params.push("uint256".to_string());
                    current = inner.as_ref();
                }
                TypeShape::Mapping { key, value } => {
                    params.push(key.clone());
                    current = value.as_ref();
                }
                _ => return params,
            }
        }
    }

    /// The value type a public getter returns once every index is applied.
    pub fn terminal(&self) -> Terminal<'_> {
        match self {
            TypeShape::Elementary(name) => Terminal::Elementary(name),
            TypeShape::User(name) => Terminal::User(name),
            TypeShape::Array(inner) => inner.terminal(),
            TypeShape::Mapping { value, .. } => value.terminal(),
        }
    }
}

/// Innermost value type of a [`TypeShape`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Terminal<'a> {
    Elementary(&'a str),
    User(&'a str),
}

/// Elementary types that need a data location when used in an external signature.
pub fn is_reference_elementary(name: &str) -> bool {
    matches!(name, "string" | "bytes")
}
