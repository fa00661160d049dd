//! Template context builder
//!
//! Composes the single value handed to every render function, resolving the
//! structural variant (crud/tree/sub) into a tagged type so that invalid
//! combinations cannot be represented.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::classify::ClassifiedColumns;
use crate::config::GeneratorConfig;
use crate::error::{GenError, Result};
use crate::options::{ColumnOptions, GenOptions, TplKind};
use crate::schema::{ColumnMetadata, TableMetadata};

use super::naming;

/// Tree-variant fields, present only when the variant is `tree`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TreeContext {
    /// Column holding a node's own code
    pub code: String,
    /// Column holding the parent node's code
    pub parent_code: String,
    /// Column shown as the node label
    pub name: Option<String>,
}

/// Nested context for the dependent table of the master/detail variant
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SubTableContext {
    pub table: TableMetadata,
    pub class_name: String,
    pub var_name: String,
    pub kebab_name: String,
    pub columns: ClassifiedColumns,
    /// Column on the sub table referencing the parent's primary key
    pub fk_column: ColumnMetadata,
}

/// Structural variant of the generated module, carrying only the fields
/// valid for that variant
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum TplCategory {
    Crud,
    Tree(TreeContext),
    Sub(Box<SubTableContext>),
}

impl TplCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            TplCategory::Crud => "crud",
            TplCategory::Tree(_) => "tree",
            TplCategory::Sub(_) => "sub",
        }
    }
}

/// The single read-only value passed to every render function
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TemplateContext {
    pub table: TableMetadata,

    /// Table name with the configured prefix stripped, e.g. "post"
    pub business_name: String,
    /// PascalCase type name, e.g. "Post"
    pub class_name: String,
    /// camelCase identifier, e.g. "post"
    pub var_name: String,
    /// kebab-case path segment, e.g. "order-item"
    pub kebab_name: String,
    /// Module the generated files belong to
    pub module_name: String,
    /// API route prefix
    pub api_prefix: String,
    /// Author tag for generated headers
    pub author: String,
    /// Human-readable feature name (table comment, falling back to the name)
    pub function_name: String,

    pub columns: ClassifiedColumns,
    pub category: TplCategory,

    /// Caller options, passed through verbatim for template bodies
    pub options: GenOptions,
    /// Per-column overrides, passed through verbatim
    pub column_options: HashMap<String, ColumnOptions>,
}

impl TemplateContext {
    /// The primary-key column, if the table has one
    pub fn pk(&self) -> Option<&ColumnMetadata> {
        self.columns.pk.as_ref()
    }

    /// Name of the primary-key column, e.g. "post_id"
    pub fn pk_name(&self) -> Option<&str> {
        self.pk().map(|c| c.name.as_str())
    }

    /// camelCase field name of the primary key, e.g. "postId"
    pub fn pk_field(&self) -> Option<&str> {
        self.pk().map(|c| c.field_name.as_str())
    }
}

fn resolve_category(
    options: &GenOptions,
    sub: Option<(TableMetadata, ClassifiedColumns)>,
    parent_pk: Option<&ColumnMetadata>,
    config: &GeneratorConfig,
) -> Result<TplCategory> {
    match options.tpl_category {
        TplKind::Crud => Ok(TplCategory::Crud),
        TplKind::Tree => {
            let code = options.tree_code.clone().filter(|s| !s.is_empty());
            let parent_code = options.tree_parent_code.clone().filter(|s| !s.is_empty());
            match (code, parent_code) {
                (Some(code), Some(parent_code)) => Ok(TplCategory::Tree(TreeContext {
                    code,
                    parent_code,
                    name: options.tree_name.clone(),
                })),
                _ => Err(GenError::ValidationError(
                    "tree tables require treeCode and treeParentCode".into(),
                )),
            }
        }
        TplKind::Sub => {
            let (sub_table, sub_columns) = sub.ok_or_else(|| {
                GenError::ValidationError("sub tables require a resolved sub table".into())
            })?;
            let pk = parent_pk.ok_or_else(|| {
                GenError::ValidationError(
                    "sub tables require the parent table to have a primary key".into(),
                )
            })?;
            let fk_column = sub_table
                .get_column(&pk.name)
                .cloned()
                .ok_or_else(|| {
                    GenError::ValidationError(format!(
                        "sub table '{}' has no column referencing parent key '{}'",
                        sub_table.name, pk.name
                    ))
                })?;
            let business = naming::strip_prefix(&sub_table.name, &config.table_prefixes);
            Ok(TplCategory::Sub(Box::new(SubTableContext {
                class_name: naming::to_class_name(business),
                var_name: naming::to_var_name(business),
                kebab_name: naming::to_kebab_name(business),
                table: sub_table,
                columns: sub_columns,
                fk_column,
            })))
        }
    }
}

/// Assemble the final context for one table.
///
/// `sub` carries the already-normalized and classified dependent table when
/// the caller requested the master/detail variant.
pub fn build_context(
    table: TableMetadata,
    columns: ClassifiedColumns,
    options: GenOptions,
    column_options: HashMap<String, ColumnOptions>,
    config: &GeneratorConfig,
    sub: Option<(TableMetadata, ClassifiedColumns)>,
) -> Result<TemplateContext> {
    let business_name = naming::strip_prefix(&table.name, &config.table_prefixes).to_string();
    let category = resolve_category(&options, sub, columns.pk.as_ref(), config)?;

    debug!(
        "Built context for '{}' (variant={}, class={})",
        table.name,
        category.as_str(),
        naming::to_class_name(&business_name)
    );

    Ok(TemplateContext {
        class_name: naming::to_class_name(&business_name),
        var_name: naming::to_var_name(&business_name),
        kebab_name: naming::to_kebab_name(&business_name),
        module_name: options
            .module_name
            .clone()
            .unwrap_or_else(|| config.module_name.clone()),
        api_prefix: options
            .api_prefix
            .clone()
            .unwrap_or_else(|| config.api_prefix.clone()),
        author: options
            .author
            .clone()
            .unwrap_or_else(|| config.author.clone()),
        function_name: table.label().to_string(),
        business_name,
        table,
        columns,
        category,
        options,
        column_options,
    })
}
