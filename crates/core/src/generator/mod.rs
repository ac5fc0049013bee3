//! Interface generation: turns one parsed contract (and its bases) into an
//! `interface I<Name>` source file.

mod enum_eraser;
mod render;
mod session;
pub mod signature;

pub use enum_eraser::EnumEraser;
pub use render::render_interface;
pub use session::Session;
pub use signature::SignatureBuilder;

use crate::config::Config;

/// Knobs of the generator that do not depend on the project layout.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratorSettings {
    pub license: String,
    pub excluded_getters: Vec<String>,
    pub unit_suffix: String,
    pub root_name: String,
    pub root_imports: Vec<String>,
}

impl Default for GeneratorSettings {
    fn default() -> Self {
        Self::from(&Config::default())
    }
}

impl From<&Config> for GeneratorSettings {
    fn from(config: &Config) -> Self {
        Self {
            license: config.license.clone(),
            excluded_getters: config.excluded_getters.clone(),
            unit_suffix: config.aggregation.unit_suffix.clone(),
            root_name: config.aggregation.root_name.clone(),
            root_imports: config.aggregation.root_imports.clone(),
        }
    }
}
