pub mod project;

pub use project::{relative_to_root, resolve_root};
