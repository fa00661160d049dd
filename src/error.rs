//! Error types for scaffgen

use thiserror::Error;

/// Result type alias for scaffgen operations
pub type Result<T> = std::result::Result<T, GenError>;

/// Errors that can occur during scaffold generation
#[derive(Error, Debug)]
pub enum GenError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("Validation error: {0}")]
    ValidationError(String),

    #[error("Template '{template}' failed to render: {message}")]
    TemplateRender {
        template: &'static str,
        message: String,
    },

    #[error("Packaging failed: {0}")]
    Packaging(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

impl From<config::ConfigError> for GenError {
    fn from(err: config::ConfigError) -> Self {
        GenError::ConfigError(err.to_string())
    }
}
