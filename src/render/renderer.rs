//! Renders one context against the registry with per-file error isolation

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::context::TemplateContext;
use crate::error::GenError;

use super::registry::{entries_for, FileCategory, TemplateEntry};

/// One generated output file
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GeneratedFile {
    pub file_name: String,
    pub file_path: String,
    pub content: String,
    pub file_type: FileCategory,
}

/// A render failure for a single template, isolated from its siblings
#[derive(Debug)]
pub struct RenderFailure {
    pub template: &'static str,
    pub error: GenError,
}

/// Render every registry entry applicable to the context's variant.
///
/// A failing render function only loses its own file; all other entries
/// still produce output.
pub fn render_table(ctx: &TemplateContext) -> (Vec<GeneratedFile>, Vec<RenderFailure>) {
    render_with(&entries_for(&ctx.category), ctx)
}

/// Render an explicit entry list. Split out from [`render_table`] so the
/// failure-isolation policy can be exercised with arbitrary entries.
pub fn render_with(
    entries: &[&TemplateEntry],
    ctx: &TemplateContext,
) -> (Vec<GeneratedFile>, Vec<RenderFailure>) {
    let mut files = Vec::with_capacity(entries.len());
    let mut failures = Vec::new();

    for entry in entries {
        match (entry.render)(ctx) {
            Ok(content) => {
                let file_path = entry.output_path(ctx);
                let file_name = file_path
                    .rsplit('/')
                    .next()
                    .unwrap_or(file_path.as_str())
                    .to_string();
                debug!("Rendered '{}' -> {}", entry.name, file_path);
                files.push(GeneratedFile {
                    file_name,
                    file_path,
                    content,
                    file_type: entry.category,
                });
            }
            Err(error) => {
                warn!(
                    "Template '{}' failed for table '{}': {}",
                    entry.name, ctx.table.name, error
                );
                failures.push(RenderFailure {
                    template: entry.name,
                    error,
                });
            }
        }
    }

    (files, failures)
}
