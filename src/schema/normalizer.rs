//! Raw catalog records to normalized metadata

use heck::ToLowerCamelCase;
use tracing::debug;

use crate::catalog::TableRecord;
use crate::error::{GenError, Result};
use crate::mapping::{map_type, HtmlControl};

use super::metadata::{ColumnMetadata, TableMetadata};

/// Normalize a fetched table record into internal metadata.
///
/// Columns are ordered by physical position; each gets its resolved
/// language type and control from the type-mapping table, overridable by a
/// per-column `htmlType`. Columns named in `dict_columns`, or carrying an
/// explicit `dictType` override, are marked dictionary-backed and default
/// to a select control.
///
/// Fails with [`GenError::NotFound`] when the table has no columns: a CRUD
/// module cannot be scaffolded without fields.
pub fn normalize(record: &TableRecord, dict_columns: &[String]) -> Result<TableMetadata> {
    let raw = &record.table;
    if record.columns.is_empty() {
        return Err(GenError::NotFound(format!(
            "table '{}' has no columns",
            raw.name
        )));
    }

    let mut raw_columns: Vec<_> = record.columns.iter().collect();
    raw_columns.sort_by_key(|c| c.sort_order);

    let mut columns = Vec::with_capacity(raw_columns.len());
    for col in raw_columns {
        let overrides = raw.column_options.get(&col.name);
        let (language_type, mapped_control) = map_type(&col.native_type);

        let dict_type = overrides
            .and_then(|o| o.dict_type.clone())
            .or_else(|| dict_columns.iter().find(|d| **d == col.name).cloned());

        // Explicit htmlType wins; dict columns render a select by default
        let html_control = match overrides.and_then(|o| o.html_type) {
            Some(control) => control,
            None if dict_type.is_some() => HtmlControl::Select,
            None => mapped_control,
        };

        let required = overrides.and_then(|o| o.required).unwrap_or(
            !col.nullable && col.default_value.is_none() && !col.is_auto_increment,
        );

        columns.push(ColumnMetadata {
            field_name: col.name.to_lower_camel_case(),
            name: col.name.clone(),
            comment: col.comment.clone(),
            native_type: col.native_type.clone(),
            language_type,
            html_control,
            dict_type,
            nullable: col.nullable,
            is_primary_key: col.is_primary_key,
            is_auto_increment: col.is_auto_increment,
            default_value: col.default_value.clone(),
            max_length: col.max_length,
            sort_order: col.sort_order,
            required,
        });
    }

    debug!("Normalized table '{}' ({} columns)", raw.name, columns.len());

    Ok(TableMetadata {
        name: raw.name.clone(),
        comment: raw.comment.clone(),
        create_time: raw.create_time,
        update_time: raw.update_time,
        columns,
    })
}
