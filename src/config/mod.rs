//! Generator configuration

mod defaults;
mod settings;

pub use settings::GeneratorConfig;
