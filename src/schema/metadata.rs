//! Normalized metadata structures for a table under generation

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::mapping::{HtmlControl, LanguageType};

/// Metadata for a database table, normalized for one generation run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TableMetadata {
    /// Physical table name
    pub name: String,

    /// Table comment (if any)
    pub comment: Option<String>,

    /// When the definition was recorded
    pub create_time: Option<NaiveDateTime>,

    /// When the definition was last changed
    pub update_time: Option<NaiveDateTime>,

    /// Columns in physical order
    pub columns: Vec<ColumnMetadata>,
}

/// Metadata for a column, including its resolved target-language type
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ColumnMetadata {
    /// Physical column name
    pub name: String,

    /// camelCase field name used in generated sources
    pub field_name: String,

    /// Column comment (if any)
    pub comment: Option<String>,

    /// Native database type name, e.g. "int4"
    pub native_type: String,

    /// Resolved target-language type
    pub language_type: LanguageType,

    /// Resolved form/list control
    pub html_control: HtmlControl,

    /// Dictionary identifier when the column is dictionary-backed
    pub dict_type: Option<String>,

    pub nullable: bool,
    pub is_primary_key: bool,
    pub is_auto_increment: bool,
    pub default_value: Option<String>,
    pub max_length: Option<u32>,

    /// Physical column position
    pub sort_order: i32,

    /// Whether generated forms mark the field as required
    pub required: bool,
}

impl TableMetadata {
    /// Get a column by physical name
    pub fn get_column(&self, name: &str) -> Option<&ColumnMetadata> {
        self.columns.iter().find(|c| c.name == name)
    }

    /// First column flagged as primary key, if any
    pub fn primary_key(&self) -> Option<&ColumnMetadata> {
        self.columns.iter().find(|c| c.is_primary_key)
    }

    /// Label used in generated docs and menu entries
    pub fn label(&self) -> &str {
        self.comment
            .as_deref()
            .filter(|c| !c.is_empty())
            .unwrap_or(&self.name)
    }
}

impl ColumnMetadata {
    /// Whether the column is backed by a dictionary
    pub fn is_dict(&self) -> bool {
        self.dict_type.is_some()
    }

    /// Label used for form items and table headers
    pub fn label(&self) -> &str {
        self.comment
            .as_deref()
            .filter(|c| !c.is_empty())
            .unwrap_or(&self.field_name)
    }
}
