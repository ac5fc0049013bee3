//! Content fingerprints of already-processed source files

pub mod fingerprint_cache;

pub use fingerprint_cache::{FingerprintCache, fingerprint};
