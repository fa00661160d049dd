//! Generation options supplied per table
//!
//! Every recognized toggle is enumerated explicitly; unknown keys in the
//! serialized form are rejected rather than silently ignored.

use serde::{Deserialize, Serialize};

use crate::mapping::HtmlControl;

/// Structural variant requested for a table's generated module
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TplKind {
    #[default]
    Crud,
    Tree,
    Sub,
}

/// Row-level access-control classification applied to generated list queries
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DataScope {
    #[default]
    All,
    Custom,
    Dept,
    DeptAndChild,
    #[serde(rename = "SELF")]
    Own,
}

impl DataScope {
    pub fn as_str(&self) -> &'static str {
        match self {
            DataScope::All => "ALL",
            DataScope::Custom => "CUSTOM",
            DataScope::Dept => "DEPT",
            DataScope::DeptAndChild => "DEPT_AND_CHILD",
            DataScope::Own => "SELF",
        }
    }
}

/// Comparison operator used in generated list queries
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum QueryType {
    Eq,
    Ne,
    Gt,
    Gte,
    Lt,
    Lte,
    Like,
    Between,
    In,
}

impl QueryType {
    pub fn as_str(&self) -> &'static str {
        match self {
            QueryType::Eq => "EQ",
            QueryType::Ne => "NE",
            QueryType::Gt => "GT",
            QueryType::Gte => "GTE",
            QueryType::Lt => "LT",
            QueryType::Lte => "LTE",
            QueryType::Like => "LIKE",
            QueryType::Between => "BETWEEN",
            QueryType::In => "IN",
        }
    }
}

/// Per-table generation toggles, grouped by concern.
///
/// Supplied by the caller on the table record; read-only to the pipeline.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields, rename_all = "camelCase")]
pub struct GenOptions {
    /// Requested structural variant (crud/tree/sub)
    #[serde(default)]
    pub tpl_category: TplKind,

    // Tree variant fields
    #[serde(default)]
    pub tree_code: Option<String>,
    #[serde(default)]
    pub tree_parent_code: Option<String>,
    #[serde(default)]
    pub tree_name: Option<String>,
    #[serde(default)]
    pub parent_menu_id: Option<i64>,

    // Data scope
    #[serde(default)]
    pub enable_data_scope: bool,
    #[serde(default)]
    pub data_scope_column: Option<String>,
    #[serde(default)]
    pub data_scope_type: DataScope,

    // Import/export
    #[serde(default)]
    pub enable_export: bool,
    #[serde(default)]
    pub enable_import: bool,
    #[serde(default)]
    pub export_file_name: Option<String>,

    // Tenancy and audit
    #[serde(default)]
    pub tenant_column: Option<String>,
    #[serde(default)]
    pub enable_audit_log: bool,

    /// Whether the advanced-search panel starts expanded
    #[serde(default)]
    pub search_expanded: bool,

    // Frontend UX
    #[serde(default = "default_true")]
    pub show_index_column: bool,
    #[serde(default = "default_true")]
    pub enable_pagination: bool,
    #[serde(default)]
    pub dialog_width: Option<String>,
    #[serde(default)]
    pub table_fixed_header: bool,

    // API metadata
    #[serde(default)]
    pub module_name: Option<String>,
    #[serde(default)]
    pub api_prefix: Option<String>,
    #[serde(default)]
    pub api_version: Option<String>,
    #[serde(default)]
    pub author: Option<String>,
}

fn default_true() -> bool {
    true
}

impl Default for GenOptions {
    fn default() -> Self {
        Self {
            tpl_category: TplKind::default(),
            tree_code: None,
            tree_parent_code: None,
            tree_name: None,
            parent_menu_id: None,
            enable_data_scope: false,
            data_scope_column: None,
            data_scope_type: DataScope::default(),
            enable_export: false,
            enable_import: false,
            export_file_name: None,
            tenant_column: None,
            enable_audit_log: false,
            search_expanded: false,
            show_index_column: default_true(),
            enable_pagination: default_true(),
            dialog_width: None,
            table_fixed_header: false,
            module_name: None,
            api_prefix: None,
            api_version: None,
            author: None,
        }
    }
}

/// Opaque per-column linkage rule, passed through to template bodies.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields, rename_all = "camelCase")]
pub struct LinkageRule {
    /// Column whose selected value drives this column's option set
    pub source_column: String,
    /// Dictionary or API key resolved against the source value
    pub target_key: String,
}

/// Per-column overrides; absence of a field means "use the default".
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields, rename_all = "camelCase")]
pub struct ColumnOptions {
    /// Override the control mapped from the native type
    #[serde(default)]
    pub html_type: Option<HtmlControl>,

    // Query behavior
    #[serde(default)]
    pub query_type: Option<QueryType>,
    #[serde(default)]
    pub queryable: Option<bool>,

    // Table and form display
    #[serde(default)]
    pub list_visible: Option<bool>,
    #[serde(default)]
    pub form_visible: Option<bool>,
    /// Not editable after create (excluded from the edit subset)
    #[serde(default)]
    pub immutable: Option<bool>,
    #[serde(default)]
    pub required: Option<bool>,
    #[serde(default)]
    pub form_span: Option<u8>,

    // Dictionary binding
    #[serde(default)]
    pub dict_type: Option<String>,

    // Import/export
    #[serde(default)]
    pub exportable: Option<bool>,
    #[serde(default)]
    pub importable: Option<bool>,

    // Opaque pass-through: rendered by template bodies, never interpreted here
    #[serde(default)]
    pub linkage: Option<LinkageRule>,
    #[serde(default)]
    pub min: Option<f64>,
    #[serde(default)]
    pub max: Option<f64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let opts = GenOptions::default();
        assert_eq!(opts.tpl_category, TplKind::Crud);
        assert_eq!(opts.data_scope_type, DataScope::All);
        assert!(!opts.enable_data_scope);
    }

    #[test]
    fn test_deserialize_with_defaults() {
        let opts: GenOptions = serde_json::from_str("{}").unwrap();
        assert!(opts.show_index_column);
        assert!(opts.enable_pagination);
        assert!(!opts.search_expanded);
    }

    #[test]
    fn test_unknown_keys_rejected() {
        let result: std::result::Result<GenOptions, _> =
            serde_json::from_str(r#"{"enableMagic": true}"#);
        assert!(result.is_err());

        let result: std::result::Result<ColumnOptions, _> =
            serde_json::from_str(r#"{"sparkles": 1}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_data_scope_wire_names() {
        let scope: DataScope = serde_json::from_str(r#""DEPT_AND_CHILD""#).unwrap();
        assert_eq!(scope, DataScope::DeptAndChild);
        let scope: DataScope = serde_json::from_str(r#""SELF""#).unwrap();
        assert_eq!(scope, DataScope::Own);
        assert_eq!(scope.as_str(), "SELF");
    }

    #[test]
    fn test_tpl_kind_wire_names() {
        let kind: TplKind = serde_json::from_str(r#""tree""#).unwrap();
        assert_eq!(kind, TplKind::Tree);
    }

    #[test]
    fn test_column_options_roundtrip() {
        let json = r#"{"queryType": "LIKE", "listVisible": false, "dictType": "status"}"#;
        let opts: ColumnOptions = serde_json::from_str(json).unwrap();
        assert_eq!(opts.query_type, Some(QueryType::Like));
        assert_eq!(opts.list_visible, Some(false));
        assert_eq!(opts.dict_type.as_deref(), Some("status"));
        assert!(opts.linkage.is_none());
    }
}
