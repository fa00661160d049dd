//! Default configuration values - single source of truth

/// Table-name prefixes stripped when deriving module/class names
pub const TABLE_PREFIXES: &[&str] = &["sys_", "tb_", "t_"];

/// Default module name when a table carries no explicit one
pub const MODULE_NAME: &str = "system";

/// Default API route prefix
pub const API_PREFIX: &str = "/api";

/// Column names treated as dictionary-backed by default
pub const DICT_COLUMNS: &[&str] = &["status"];

/// Author tag stamped into generated file headers
pub const AUTHOR: &str = "scaffgen";

/// Maximum number of tables fetched from the catalog concurrently
pub const CONCURRENCY: usize = 4;
