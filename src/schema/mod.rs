//! Normalized schema metadata and the raw-record normalizer

mod metadata;
mod normalizer;

pub use metadata::*;
pub use normalizer::*;
