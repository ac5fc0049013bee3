//! Collects facet fragments until the diamond (aggregation root) is generated

use crate::types::{AggregationRecord, StubFragment};
use tracing::debug;

#[derive(Debug, Clone)]
pub struct FacetAggregator {
    unit_suffix: String,
    root_name: String,
    records: Vec<AggregationRecord>,
}

impl FacetAggregator {
    pub fn new(unit_suffix: impl Into<String>, root_name: impl Into<String>) -> Self {
        Self {
            unit_suffix: unit_suffix.into(),
            root_name: root_name.into(),
            records: Vec::new(),
        }
    }

    pub fn is_unit(&self, contract: &str) -> bool {
        !self.unit_suffix.is_empty()
            && contract.ends_with(&self.unit_suffix)
            && contract != self.root_name
    }

    pub fn is_root(&self, contract: &str) -> bool {
        contract == self.root_name
    }

    /// Records `fragment` for `contract` the first time it is seen. Returns whether it was added.
    pub fn record(&mut self, contract: &str, fragment: &StubFragment) -> bool {
        if self.records.iter().any(|r| r.contract == contract) {
            return false;
        }
        debug!("recorded facet {contract}");
        self.records.push(AggregationRecord {
            contract: contract.to_string(),
            fragment: fragment.clone(),
        });
        true
    }

    /// Appends every recorded facet, in recording order, to the root's fragment.
    pub fn merge_into(&self, root: &mut StubFragment) {
        let mut blocks = Vec::with_capacity(self.records.len() + 1);
        if !root.is_empty() {
            blocks.push(root.body.clone());
        }
        for record in &self.records {
            if !record.fragment.is_empty() {
                blocks.push(record.fragment.body.clone());
            }
            root.absorb_requirements(&record.fragment);
        }
        root.body = blocks.join("\n\n");
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
