//! Catalog accessor: the external source of table definitions
//!
//! The pipeline never talks to a database itself; it consumes raw table and
//! column records through [`CatalogAccessor`], the only suspension point in
//! a generation run.

use std::collections::HashMap;

use async_trait::async_trait;
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::error::{GenError, Result};
use crate::options::{ColumnOptions, GenOptions};

/// Raw table record as stored by the definition catalog
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawTable {
    pub table_id: i64,

    /// Physical table name, e.g. `sys_post`
    pub name: String,

    #[serde(default)]
    pub comment: Option<String>,

    #[serde(default)]
    pub create_time: Option<NaiveDateTime>,

    #[serde(default)]
    pub update_time: Option<NaiveDateTime>,

    /// Generation toggles recorded against this table
    #[serde(default)]
    pub options: GenOptions,

    /// Per-column overrides keyed by column name
    #[serde(default)]
    pub column_options: HashMap<String, ColumnOptions>,

    /// Dependent table for the master/detail variant
    #[serde(default)]
    pub sub_table_id: Option<i64>,
}

/// Raw column record as stored by the definition catalog
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawColumn {
    pub name: String,

    #[serde(default)]
    pub comment: Option<String>,

    /// Native database type name, e.g. "int4", "varchar"
    pub native_type: String,

    #[serde(default = "default_nullable")]
    pub nullable: bool,

    #[serde(default)]
    pub is_primary_key: bool,

    #[serde(default)]
    pub is_auto_increment: bool,

    #[serde(default)]
    pub default_value: Option<String>,

    #[serde(default)]
    pub max_length: Option<u32>,

    /// Physical column position, drives list/form field ordering
    #[serde(default)]
    pub sort_order: i32,
}

fn default_nullable() -> bool {
    true
}

/// A fetched table definition: the table record plus its columns
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TableRecord {
    pub table: RawTable,
    pub columns: Vec<RawColumn>,
}

/// Source of table definitions, implemented by the caller.
///
/// `fetch_table` may fail with a not-found condition, which the pipeline
/// surfaces as a per-table error without affecting sibling tables.
#[async_trait]
pub trait CatalogAccessor: Send + Sync {
    async fn fetch_table(&self, table_id: i64) -> Result<TableRecord>;
}

/// In-memory catalog keyed by table id.
///
/// Backs the CLI's JSON catalog file and the test suites.
#[derive(Debug, Default, Clone)]
pub struct MemoryCatalog {
    tables: HashMap<i64, TableRecord>,
}

impl MemoryCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a catalog from a list of records (e.g. a parsed JSON file)
    pub fn from_records(records: Vec<TableRecord>) -> Self {
        let tables = records
            .into_iter()
            .map(|r| (r.table.table_id, r))
            .collect();
        Self { tables }
    }

    pub fn insert(&mut self, record: TableRecord) {
        self.tables.insert(record.table.table_id, record);
    }

    pub fn get(&self, table_id: i64) -> Option<&TableRecord> {
        self.tables.get(&table_id)
    }

    pub fn table_ids(&self) -> Vec<i64> {
        let mut ids: Vec<i64> = self.tables.keys().copied().collect();
        ids.sort_unstable();
        ids
    }

    pub fn len(&self) -> usize {
        self.tables.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tables.is_empty()
    }
}

#[async_trait]
impl CatalogAccessor for MemoryCatalog {
    async fn fetch_table(&self, table_id: i64) -> Result<TableRecord> {
        self.tables
            .get(&table_id)
            .cloned()
            .ok_or_else(|| GenError::NotFound(format!("table id {} not in catalog", table_id)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(id: i64, name: &str) -> TableRecord {
        TableRecord {
            table: RawTable {
                table_id: id,
                name: name.to_string(),
                comment: None,
                create_time: None,
                update_time: None,
                options: GenOptions::default(),
                column_options: HashMap::new(),
                sub_table_id: None,
            },
            columns: vec![RawColumn {
                name: "id".to_string(),
                comment: None,
                native_type: "int8".to_string(),
                nullable: false,
                is_primary_key: true,
                is_auto_increment: true,
                default_value: None,
                max_length: None,
                sort_order: 1,
            }],
        }
    }

    #[tokio::test]
    async fn test_memory_catalog_fetch() {
        let catalog = MemoryCatalog::from_records(vec![record(1, "sys_user")]);
        let fetched = catalog.fetch_table(1).await.unwrap();
        assert_eq!(fetched.table.name, "sys_user");
        assert!(matches!(
            catalog.fetch_table(99).await,
            Err(GenError::NotFound(_))
        ));
    }

    #[test]
    fn test_raw_column_deserialization_defaults() {
        let col: RawColumn =
            serde_json::from_str(r#"{"name": "remark", "nativeType": "varchar"}"#).unwrap();
        assert!(col.nullable);
        assert!(!col.is_primary_key);
        assert_eq!(col.sort_order, 0);
    }
}
