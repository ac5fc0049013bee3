//! Configuration management for isolgen

mod settings;

pub use settings::{AggregationConfig, CONFIG_FILE_NAMES, Config, FilterConfig};
