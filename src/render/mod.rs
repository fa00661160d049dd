//! Template registry and rendering

mod registry;
mod renderer;
mod templates;

pub use registry::*;
pub use renderer::*;
