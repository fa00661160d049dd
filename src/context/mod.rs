//! Template context assembly

mod builder;
pub mod naming;

pub use builder::*;
