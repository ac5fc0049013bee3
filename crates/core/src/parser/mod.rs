//! Solidity source parsing on top of `solang_parser`

pub mod solidity_parser;
pub mod source_cache;
pub mod type_shape;

// Re-export commonly used items
pub use solidity_parser::{ParsedSource, SolidityParser};
pub use source_cache::SourceCache;
pub use type_shape::{Terminal, TypeShape};
