//! Column classification: partition columns into rendering role sets

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::options::{ColumnOptions, GenOptions, QueryType};
use crate::schema::{ColumnMetadata, TableMetadata};

/// Audit/bookkeeping columns managed by the generated base layer, never
/// surfaced in lists or forms.
const BOOKKEEPING_COLUMNS: &[&str] = &[
    "create_time",
    "created_at",
    "update_time",
    "updated_at",
    "create_by",
    "update_by",
    "deleted_at",
    "del_flag",
    "remark",
];

/// A query-role column together with its resolved comparison operator
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QueryField {
    pub column: ColumnMetadata,
    pub op: QueryType,
}

/// The five role subsets plus table-level classification facts
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ClassifiedColumns {
    /// Columns shown in the generated list view
    pub list: Vec<ColumnMetadata>,
    /// Columns exposed as list filters
    pub query: Vec<QueryField>,
    /// Columns rendered in the create/edit form
    pub form: Vec<ColumnMetadata>,
    /// Columns written on insert
    pub insert: Vec<ColumnMetadata>,
    /// Columns writable on update
    pub edit: Vec<ColumnMetadata>,
    /// The primary-key column, if the table has one
    pub pk: Option<ColumnMetadata>,
    /// Whether any column is dictionary-backed
    pub has_dict: bool,
    /// Distinct dictionary identifiers, first-seen order
    pub dict_types: Vec<String>,
}

fn is_bookkeeping(column: &ColumnMetadata, options: &GenOptions) -> bool {
    BOOKKEEPING_COLUMNS.contains(&column.name.as_str())
        || options.tenant_column.as_deref() == Some(column.name.as_str())
        || options.data_scope_column.as_deref() == Some(column.name.as_str())
}

fn is_status_like(name: &str) -> bool {
    name == "status" || name == "state" || name.ends_with("_status") || name.ends_with("_type")
}

/// Resolve whether (and how) a column participates in list queries
fn query_op(
    column: &ColumnMetadata,
    overrides: Option<&ColumnOptions>,
) -> Option<QueryType> {
    if let Some(op) = overrides.and_then(|o| o.query_type) {
        return Some(op);
    }
    let flagged = overrides.and_then(|o| o.queryable);
    let heuristic = || {
        if is_status_like(&column.name) {
            Some(QueryType::Eq)
        } else if column.name.ends_with("name") {
            Some(QueryType::Like)
        } else {
            None
        }
    };
    match flagged {
        Some(false) => None,
        // Explicitly queryable without an operator: strings filter by LIKE
        Some(true) => Some(heuristic().unwrap_or(match column.language_type {
            crate::mapping::LanguageType::TsString => QueryType::Like,
            _ => QueryType::Eq,
        })),
        None => heuristic(),
    }
}

/// Walk the columns once and build the role subsets.
///
/// A column may belong to more than one subset. A table with no primary key
/// classifies successfully with `pk = None`.
pub fn classify(
    table: &TableMetadata,
    options: &GenOptions,
    column_options: &HashMap<String, ColumnOptions>,
) -> ClassifiedColumns {
    let mut out = ClassifiedColumns::default();

    for column in &table.columns {
        let overrides = column_options.get(&column.name);
        let bookkeeping = is_bookkeeping(column, options);

        if out.pk.is_none() && column.is_primary_key {
            out.pk = Some(column.clone());
        }

        if let Some(dict) = &column.dict_type {
            out.has_dict = true;
            if !out.dict_types.contains(dict) {
                out.dict_types.push(dict.clone());
            }
        }

        // list: everything not excluded and not bookkeeping
        let list_visible = overrides.and_then(|o| o.list_visible).unwrap_or(true);
        if list_visible && !bookkeeping && !column.is_primary_key {
            out.list.push(column.clone());
        }

        // query: explicit operator, queryable flag, or name heuristic
        if !bookkeeping {
            if let Some(op) = query_op(column, overrides) {
                out.query.push(QueryField {
                    column: column.clone(),
                    op,
                });
            }
        }

        // form/insert/edit: writable business fields only
        let form_visible = overrides.and_then(|o| o.form_visible).unwrap_or(true);
        let writable =
            form_visible && !bookkeeping && !column.is_primary_key && !column.is_auto_increment;
        if writable {
            out.form.push(column.clone());
            out.insert.push(column.clone());
            if !overrides.and_then(|o| o.immutable).unwrap_or(false) {
                out.edit.push(column.clone());
            }
        }
    }

    debug!(
        "Classified '{}': list={} query={} form={} pk={:?}",
        table.name,
        out.list.len(),
        out.query.len(),
        out.form.len(),
        out.pk.as_ref().map(|c| c.name.as_str())
    );

    out
}
