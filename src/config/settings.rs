//! Configuration settings for scaffgen

use config::{Config, Environment, File};
use serde::{Deserialize, Serialize};
use std::path::Path;

use super::defaults;
use crate::error::{GenError, Result};

/// Generator-level configuration, shared by every table in a batch
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneratorConfig {
    /// Table-name prefixes stripped when deriving names
    #[serde(default = "default_table_prefixes")]
    pub table_prefixes: Vec<String>,

    /// Module name used when a table's options carry none
    #[serde(default = "default_module_name")]
    pub module_name: String,

    /// API route prefix used when a table's options carry none
    #[serde(default = "default_api_prefix")]
    pub api_prefix: String,

    /// Column names treated as dictionary-backed
    #[serde(default = "default_dict_columns")]
    pub dict_columns: Vec<String>,

    /// Author tag stamped into generated file headers
    #[serde(default = "default_author")]
    pub author: String,

    /// Catalog fetch concurrency cap
    #[serde(default = "default_concurrency")]
    pub concurrency: usize,

    /// Log level (trace, debug, info, warn, error)
    /// Can be overridden by RUST_LOG env var
    #[serde(default)]
    pub log_level: Option<String>,
}

// Default value functions for serde
fn default_table_prefixes() -> Vec<String> {
    defaults::TABLE_PREFIXES.iter().map(|s| s.to_string()).collect()
}
fn default_module_name() -> String {
    defaults::MODULE_NAME.to_string()
}
fn default_api_prefix() -> String {
    defaults::API_PREFIX.to_string()
}
fn default_dict_columns() -> Vec<String> {
    defaults::DICT_COLUMNS.iter().map(|s| s.to_string()).collect()
}
fn default_author() -> String {
    defaults::AUTHOR.to_string()
}
fn default_concurrency() -> usize {
    defaults::CONCURRENCY
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            table_prefixes: default_table_prefixes(),
            module_name: default_module_name(),
            api_prefix: default_api_prefix(),
            dict_columns: default_dict_columns(),
            author: default_author(),
            concurrency: default_concurrency(),
            log_level: None,
        }
    }
}

impl GeneratorConfig {
    /// Load configuration from a TOML file
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: GeneratorConfig = toml::from_str(&content).map_err(|e| {
            GenError::ConfigError(format!(
                "Failed to parse config file {}: {}",
                path.display(),
                e
            ))
        })?;
        Ok(config)
    }

    /// Load configuration using config-rs (file + environment variables)
    pub fn load(config_path: Option<&Path>) -> Result<Self> {
        let mut builder = Config::builder();

        // Load from config file if specified
        if let Some(path) = config_path {
            builder = builder.add_source(File::from(path));
        } else {
            // Try default locations
            builder = builder.add_source(File::with_name("scaffgen").required(false));
        }

        // Override with environment variables (SCAFFGEN_*)
        builder = builder.add_source(Environment::with_prefix("SCAFFGEN").separator("_"));

        let config: GeneratorConfig = builder.build()?.try_deserialize()?;

        Ok(config)
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        if self.concurrency == 0 {
            return Err(GenError::ValidationError(
                "concurrency must be at least 1".into(),
            ));
        }
        if self.module_name.is_empty() {
            return Err(GenError::ValidationError(
                "module_name must not be empty".into(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = GeneratorConfig::default();
        assert_eq!(config.module_name, "system");
        assert_eq!(config.concurrency, 4);
        assert!(config.table_prefixes.contains(&"sys_".to_string()));
        assert!(config.log_level.is_none());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validation_rejects_zero_concurrency() {
        let config = GeneratorConfig {
            concurrency: 0,
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_config_from_toml() {
        let toml_content = r#"
            module_name = "shop"
            table_prefixes = ["shop_"]
            log_level = "debug"
        "#;
        let config: GeneratorConfig = toml::from_str(toml_content).unwrap();
        assert_eq!(config.module_name, "shop");
        assert_eq!(config.table_prefixes, vec!["shop_".to_string()]);
        assert_eq!(config.log_level, Some("debug".to_string()));
        // Unspecified fields keep their defaults
        assert_eq!(config.api_prefix, "/api");
    }
}
