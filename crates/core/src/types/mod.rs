pub mod import;
pub mod stub;
pub mod type_record;

// Re-export commonly used types
pub use import::ImportDirective;
pub use stub::{AggregationRecord, StubFragment};
pub use type_record::{TypeKind, TypeRecord};
