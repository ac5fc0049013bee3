//! isolgen - Solidity interface generation
//!
//! This crate provides functionality to:
//! - Parse Solidity sources and derive an `interface I<Name>` for every concrete contract
//! - Resolve inherited contracts, shared structs and enums across files
//! - Merge facet interfaces into a single diamond interface
//! - Regenerate only what changed since the last run
pub mod aggregator;
pub mod cache;
pub mod config;
pub mod driver;
pub mod error;
pub mod generator;
pub mod parser;
pub mod registry;
pub mod remappings;
pub mod types;
pub mod utils;

// Re-export commonly used types
pub use error::{Error, Result};
pub use types::*;

// Re-export main API components
pub use config::Config;
pub use driver::{Driver, FileStatus, RunOptions, RunReport};
pub use generator::{GeneratorSettings, Session};
pub use remappings::Remappings;
