//! Cross-file registry of struct and enum definitions

use crate::types::TypeRecord;
use std::collections::HashMap;
use tracing::{trace, warn};

/// Every struct and enum seen so far in a run, keyed by bare name.
///
/// The first definition of a name wins; later definitions from other files are ignored.
#[derive(Debug, Default)]
pub struct TypeRegistry {
    records: HashMap<String, TypeRecord>,
    order: Vec<String>,
}

impl TypeRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers `record` unless its name is already known. Returns whether it was added.
    pub fn register(&mut self, record: TypeRecord) -> bool {
        if let Some(existing) = self.records.get(&record.name) {
            if existing.path != record.path {
                warn!(
                    "{} defined in both {} and {}; keeping the first",
                    record.name,
                    existing.path.display(),
                    record.path.display()
                );
            }
            return false;
        }

        trace!("registered {} from {}", record.name, record.path.display());
        self.order.push(record.name.clone());
        self.records.insert(record.name.clone(), record);
        true
    }

    pub fn get(&self, name: &str) -> Option<&TypeRecord> {
        self.records.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.records.contains_key(name)
    }

    /// Records in registration order.
    pub fn iter(&self) -> impl Iterator<Item = &TypeRecord> {
        self.order.iter().filter_map(|name| self.records.get(name))
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
