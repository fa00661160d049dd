//! The template registry: the fixed table of generated output files
//!
//! Output-path patterns are a stable contract; downstream tooling depends
//! on them, so entries are compile-time registered and enumerable without
//! running a generation.

use serde::{Deserialize, Serialize};

use crate::context::{TemplateContext, TplCategory};
use crate::error::Result;

use super::templates;

/// Category of a generated artifact
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FileCategory {
    Backend,
    Frontend,
    Sql,
}

impl FileCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            FileCategory::Backend => "backend",
            FileCategory::Frontend => "frontend",
            FileCategory::Sql => "sql",
        }
    }
}

/// Which structural variants an entry renders for
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Applies {
    /// Every variant
    All,
    /// Flat list pages: crud and sub (the tree variant swaps in its own)
    FlatList,
    TreeOnly,
    SubOnly,
}

impl Applies {
    pub fn matches(&self, category: &TplCategory) -> bool {
        match self {
            Applies::All => true,
            Applies::FlatList => !matches!(category, TplCategory::Tree(_)),
            Applies::TreeOnly => matches!(category, TplCategory::Tree(_)),
            Applies::SubOnly => matches!(category, TplCategory::Sub(_)),
        }
    }
}

/// One registered output template
pub struct TemplateEntry {
    /// Stable template key, referenced in error entries
    pub name: &'static str,
    /// Output-path pattern; `{module}` and `{kebab}` are substituted
    pub path: &'static str,
    pub category: FileCategory,
    pub applies: Applies,
    pub render: fn(&TemplateContext) -> Result<String>,
}

impl TemplateEntry {
    /// Resolve the output path for a concrete context
    pub fn output_path(&self, ctx: &TemplateContext) -> String {
        self.path
            .replace("{module}", &ctx.module_name)
            .replace("{kebab}", &ctx.kebab_name)
    }
}

/// The full registry. Path patterns are versioned contract keys; keep them
/// stable across releases.
pub static REGISTRY: &[TemplateEntry] = &[
    TemplateEntry {
        name: "entity",
        path: "src/modules/{module}/entity/{kebab}.entity.ts",
        category: FileCategory::Backend,
        applies: Applies::All,
        render: templates::render_entity,
    },
    TemplateEntry {
        name: "dto",
        path: "src/modules/{module}/dto/{kebab}.dto.ts",
        category: FileCategory::Backend,
        applies: Applies::All,
        render: templates::render_dto,
    },
    TemplateEntry {
        name: "service",
        path: "src/modules/{module}/service/{kebab}.service.ts",
        category: FileCategory::Backend,
        applies: Applies::All,
        render: templates::render_service,
    },
    TemplateEntry {
        name: "controller",
        path: "src/modules/{module}/controller/{kebab}.controller.ts",
        category: FileCategory::Backend,
        applies: Applies::All,
        render: templates::render_controller,
    },
    TemplateEntry {
        name: "module",
        path: "src/modules/{module}/{kebab}.module.ts",
        category: FileCategory::Backend,
        applies: Applies::All,
        render: templates::render_module,
    },
    TemplateEntry {
        name: "api",
        path: "src/api/{module}/{kebab}.ts",
        category: FileCategory::Frontend,
        applies: Applies::All,
        render: templates::render_api,
    },
    TemplateEntry {
        name: "list-view",
        path: "src/views/{module}/{kebab}/index.vue",
        category: FileCategory::Frontend,
        applies: Applies::FlatList,
        render: templates::render_list_view,
    },
    TemplateEntry {
        name: "tree-view",
        path: "src/views/{module}/{kebab}/index.vue",
        category: FileCategory::Frontend,
        applies: Applies::TreeOnly,
        render: templates::render_tree_view,
    },
    TemplateEntry {
        name: "form-dialog",
        path: "src/views/{module}/{kebab}/edit-dialog.vue",
        category: FileCategory::Frontend,
        applies: Applies::All,
        render: templates::render_form_dialog,
    },
    TemplateEntry {
        name: "sub-table",
        path: "src/views/{module}/{kebab}/sub-table.vue",
        category: FileCategory::Frontend,
        applies: Applies::SubOnly,
        render: templates::render_sub_table,
    },
    TemplateEntry {
        name: "menu-sql",
        path: "sql/{kebab}_menu.sql",
        category: FileCategory::Sql,
        applies: Applies::All,
        render: templates::render_menu_sql,
    },
];

/// Entries applicable to the given structural variant
pub fn entries_for(category: &TplCategory) -> Vec<&'static TemplateEntry> {
    REGISTRY
        .iter()
        .filter(|e| e.applies.matches(category))
        .collect()
}
