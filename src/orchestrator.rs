//! Generation orchestrator: drives the per-table pipeline and aggregates
//! batch results
//!
//! Per-table pipelines share nothing mutable; the catalog fetch is the only
//! suspension point, so tables fan out with a bounded concurrency cap and
//! the synchronous stages run to completion once started.

use std::fmt;
use std::sync::Arc;

use futures::stream::{self, StreamExt};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::catalog::CatalogAccessor;
use crate::classify::{classify, ClassifiedColumns};
use crate::config::GeneratorConfig;
use crate::context::build_context;
use crate::error::{GenError, Result};
use crate::options::TplKind;
use crate::render::{render_table, GeneratedFile};
use crate::schema::{normalize, TableMetadata};

/// Output delivery mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum GenType {
    /// Hand the rendered files to the packaging collaborator
    Zip,
    /// Return files for an external filesystem writer
    Path,
}

/// One batch generation request
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateOptions {
    pub table_ids: Vec<i64>,
    pub gen_type: GenType,
    #[serde(default)]
    pub gen_path: Option<String>,
}

/// Pipeline stage a per-table failure occurred in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Stage {
    Fetching,
    Normalizing,
    Classifying,
    BuildingContext,
    Rendering,
}

impl Stage {
    pub fn as_str(&self) -> &'static str {
        match self {
            Stage::Fetching => "fetching",
            Stage::Normalizing => "normalizing",
            Stage::Classifying => "classifying",
            Stage::BuildingContext => "building-context",
            Stage::Rendering => "rendering",
        }
    }
}

/// Structured batch error entry: identifies the table and/or template the
/// failure belongs to
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BatchError {
    /// Table the error belongs to; `None` for batch-level failures
    pub table: Option<String>,
    /// Template key for file-level failures
    pub template: Option<String>,
    /// Pipeline stage for table-level failures
    pub stage: Option<Stage>,
    pub message: String,
}

impl fmt::Display for BatchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (&self.table, &self.template) {
            (Some(table), Some(template)) => {
                write!(f, "[{}/{}] {}", table, template, self.message)
            }
            (Some(table), None) => write!(f, "[{}] {}", table, self.message),
            _ => write!(f, "{}", self.message),
        }
    }
}

/// Terminal outcome of a batch generation call.
///
/// `success` means "no errors"; a batch can still return usable `files`
/// alongside `success = false`, so callers must inspect both fields.
#[derive(Debug, Default)]
pub struct GenerateResult {
    pub success: bool,
    pub files: Vec<GeneratedFile>,
    pub zip_buffer: Option<Vec<u8>>,
    pub errors: Vec<BatchError>,
}

/// Archive-building collaborator for ZIP delivery
pub trait Packager: Send + Sync {
    fn package(&self, files: &[GeneratedFile]) -> Result<Vec<u8>>;
}

/// Outcome of one table's pipeline: files plus any isolated file errors
struct TableOutcome {
    files: Vec<GeneratedFile>,
    errors: Vec<BatchError>,
}

/// The generation orchestrator
pub struct Generator {
    catalog: Arc<dyn CatalogAccessor>,
    config: GeneratorConfig,
    packager: Option<Box<dyn Packager>>,
}

impl Generator {
    pub fn new(catalog: Arc<dyn CatalogAccessor>, config: GeneratorConfig) -> Self {
        Self {
            catalog,
            config,
            packager: None,
        }
    }

    /// Attach the packaging collaborator used for ZIP delivery
    pub fn with_packager(mut self, packager: Box<dyn Packager>) -> Self {
        self.packager = Some(packager);
        self
    }

    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    /// Run the batch. Fails outright only on malformed input (empty
    /// `table_ids`); everything else is reported through `errors`.
    pub async fn generate(&self, opts: &GenerateOptions) -> Result<GenerateResult> {
        if opts.table_ids.is_empty() {
            return Err(GenError::ValidationError(
                "tableIds must not be empty".into(),
            ));
        }

        info!(
            "Generating {} table(s), delivery={:?}",
            opts.table_ids.len(),
            opts.gen_type
        );

        let outcomes: Vec<TableOutcome> = stream::iter(opts.table_ids.iter().copied())
            .map(|id| self.run_table(id))
            .buffered(self.config.concurrency.max(1))
            .collect()
            .await;

        let mut result = GenerateResult::default();
        for outcome in outcomes {
            result.files.extend(outcome.files);
            result.errors.extend(outcome.errors);
        }

        if opts.gen_type == GenType::Zip {
            match &self.packager {
                Some(packager) => match packager.package(&result.files) {
                    Ok(buffer) => result.zip_buffer = Some(buffer),
                    Err(e) => {
                        // Rendered files stay available so the caller can
                        // retry in PATH mode
                        warn!("Packaging failed: {}", e);
                        result.errors.push(BatchError {
                            table: None,
                            template: None,
                            stage: None,
                            message: format!("packaging failed: {}", e),
                        });
                    }
                },
                None => result.errors.push(BatchError {
                    table: None,
                    template: None,
                    stage: None,
                    message: "packaging failed: no packaging collaborator configured".into(),
                }),
            }
        }

        result.success = result.errors.is_empty();
        info!(
            "Batch finished: {} file(s), {} error(s)",
            result.files.len(),
            result.errors.len()
        );
        Ok(result)
    }

    /// Run one table through the staged pipeline. A failure is terminal for
    /// this table only.
    async fn run_table(&self, table_id: i64) -> TableOutcome {
        match self.try_run_table(table_id).await {
            Ok(outcome) => outcome,
            Err((table, stage, error)) => {
                warn!(
                    "Table {} failed while {}: {}",
                    table.as_deref().unwrap_or("?"),
                    stage.as_str(),
                    error
                );
                TableOutcome {
                    files: Vec::new(),
                    errors: vec![BatchError {
                        table: Some(table.unwrap_or_else(|| format!("#{}", table_id))),
                        template: None,
                        stage: Some(stage),
                        message: error.to_string(),
                    }],
                }
            }
        }
    }

    async fn try_run_table(
        &self,
        table_id: i64,
    ) -> std::result::Result<TableOutcome, (Option<String>, Stage, GenError)> {
        // Fetching: the only suspension point
        let record = self
            .catalog
            .fetch_table(table_id)
            .await
            .map_err(|e| (None, Stage::Fetching, e))?;
        let table_name = record.table.name.clone();
        debug!("Fetched table '{}' (id={})", table_name, table_id);

        let sub_record = match (record.table.options.tpl_category, record.table.sub_table_id) {
            (TplKind::Sub, Some(sub_id)) => Some(
                self.catalog
                    .fetch_table(sub_id)
                    .await
                    .map_err(|e| (Some(table_name.clone()), Stage::Fetching, e))?,
            ),
            _ => None,
        };

        let fail = |stage: Stage| {
            let name = table_name.clone();
            move |e: GenError| (Some(name), stage, e)
        };

        // Normalizing
        let table = normalize(&record, &self.config.dict_columns)
            .map_err(fail(Stage::Normalizing))?;
        let sub_table = sub_record
            .as_ref()
            .map(|r| normalize(r, &self.config.dict_columns))
            .transpose()
            .map_err(fail(Stage::Normalizing))?;

        // Classifying: pure, never fails
        let classified = classify(
            &table,
            &record.table.options,
            &record.table.column_options,
        );
        let sub: Option<(TableMetadata, ClassifiedColumns)> =
            match (sub_table, sub_record.as_ref()) {
                (Some(sub_table), Some(sub_rec)) => {
                    let sub_classified = classify(
                        &sub_table,
                        &sub_rec.table.options,
                        &sub_rec.table.column_options,
                    );
                    Some((sub_table, sub_classified))
                }
                _ => None,
            };

        // BuildingContext
        let ctx = build_context(
            table,
            classified,
            record.table.options.clone(),
            record.table.column_options.clone(),
            &self.config,
            sub,
        )
        .map_err(fail(Stage::BuildingContext))?;

        // Rendering: file failures are isolated, the table still completes
        let (files, failures) = render_table(&ctx);
        let errors = failures
            .into_iter()
            .map(|f| BatchError {
                table: Some(table_name.clone()),
                template: Some(f.template.to_string()),
                stage: Some(Stage::Rendering),
                message: f.error.to_string(),
            })
            .collect();

        Ok(TableOutcome { files, errors })
    }
}

/// Convenience seam used by tests and small callers: run one batch against
/// a catalog with default configuration.
pub async fn generate(
    catalog: Arc<dyn CatalogAccessor>,
    opts: &GenerateOptions,
) -> Result<GenerateResult> {
    Generator::new(catalog, GeneratorConfig::default())
        .generate(opts)
        .await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{MemoryCatalog, RawColumn, RawTable, TableRecord};
    use crate::options::GenOptions;
    use std::collections::HashMap;

    fn raw_column(name: &str, native: &str, order: i32, pk: bool) -> RawColumn {
        RawColumn {
            name: name.to_string(),
            comment: None,
            native_type: native.to_string(),
            nullable: !pk,
            is_primary_key: pk,
            is_auto_increment: pk,
            default_value: None,
            max_length: None,
            sort_order: order,
        }
    }

    fn post_record(id: i64, options: GenOptions) -> TableRecord {
        TableRecord {
            table: RawTable {
                table_id: id,
                name: "sys_post".to_string(),
                comment: Some("Post".to_string()),
                create_time: None,
                update_time: None,
                options,
                column_options: HashMap::new(),
                sub_table_id: None,
            },
            columns: vec![
                raw_column("post_id", "int4", 1, true),
                raw_column("post_code", "varchar", 2, false),
                raw_column("post_name", "varchar", 3, false),
                raw_column("post_sort", "int4", 4, false),
                raw_column("status", "varchar", 5, false),
            ],
        }
    }

    fn request(ids: &[i64], gen_type: GenType) -> GenerateOptions {
        GenerateOptions {
            table_ids: ids.to_vec(),
            gen_type,
            gen_path: None,
        }
    }

    #[tokio::test]
    async fn test_crud_batch_success() {
        let catalog = MemoryCatalog::from_records(vec![post_record(1, GenOptions::default())]);
        let result = generate(Arc::new(catalog), &request(&[1], GenType::Path))
            .await
            .unwrap();
        assert!(result.success);
        assert_eq!(result.files.len(), 9);
        assert!(result.zip_buffer.is_none());
    }

    #[tokio::test]
    async fn test_empty_table_ids_is_malformed_input() {
        let catalog = MemoryCatalog::new();
        let err = generate(Arc::new(catalog), &request(&[], GenType::Path))
            .await
            .unwrap_err();
        assert!(matches!(err, GenError::ValidationError(_)));
    }

    #[tokio::test]
    async fn test_missing_table_does_not_abort_batch() {
        let catalog = MemoryCatalog::from_records(vec![post_record(1, GenOptions::default())]);
        let result = generate(Arc::new(catalog), &request(&[1, 99], GenType::Path))
            .await
            .unwrap();
        assert!(!result.success);
        // All files come from the valid table
        assert_eq!(result.files.len(), 9);
        assert_eq!(result.errors.len(), 1);
        let error = &result.errors[0];
        assert_eq!(error.stage, Some(Stage::Fetching));
        assert_eq!(error.table.as_deref(), Some("#99"));
        assert!(error.message.contains("not in catalog"));
    }

    #[tokio::test]
    async fn test_tree_validation_failure_is_per_table() {
        let tree_options = GenOptions {
            tpl_category: TplKind::Tree,
            ..Default::default()
        };
        let mut bad_tree = post_record(2, tree_options);
        bad_tree.table.name = "sys_dept".to_string();
        let catalog = MemoryCatalog::from_records(vec![
            post_record(1, GenOptions::default()),
            bad_tree,
        ]);
        let result = generate(Arc::new(catalog), &request(&[1, 2], GenType::Path))
            .await
            .unwrap();
        assert!(!result.success);
        assert_eq!(result.files.len(), 9);
        let error = &result.errors[0];
        assert_eq!(error.table.as_deref(), Some("sys_dept"));
        assert_eq!(error.stage, Some(Stage::BuildingContext));
    }

    #[tokio::test]
    async fn test_tree_with_codes_generates() {
        let options = GenOptions {
            tpl_category: TplKind::Tree,
            tree_code: Some("post_code".to_string()),
            tree_parent_code: Some("post_sort".to_string()),
            ..Default::default()
        };
        let catalog = MemoryCatalog::from_records(vec![post_record(1, options)]);
        let result = generate(Arc::new(catalog), &request(&[1], GenType::Path))
            .await
            .unwrap();
        assert!(result.success);
        assert_eq!(result.files.len(), 9);
        let index = result
            .files
            .iter()
            .find(|f| f.file_path.ends_with("index.vue"))
            .unwrap();
        assert!(index.content.contains("tree-props"));
    }

    #[tokio::test]
    async fn test_sub_variant_fetches_dependent_table() {
        let mut parent = post_record(1, GenOptions {
            tpl_category: TplKind::Sub,
            ..Default::default()
        });
        parent.table.name = "sys_order".to_string();
        parent.table.sub_table_id = Some(2);
        parent.columns = vec![
            raw_column("order_id", "int8", 1, true),
            raw_column("order_no", "varchar", 2, false),
        ];

        let child = TableRecord {
            table: RawTable {
                table_id: 2,
                name: "sys_order_item".to_string(),
                comment: None,
                create_time: None,
                update_time: None,
                options: GenOptions::default(),
                column_options: HashMap::new(),
                sub_table_id: None,
            },
            columns: vec![
                raw_column("item_id", "int8", 1, true),
                raw_column("order_id", "int8", 2, false),
                raw_column("sku", "varchar", 3, false),
            ],
        };

        let catalog = MemoryCatalog::from_records(vec![parent, child]);
        let result = generate(Arc::new(catalog), &request(&[1], GenType::Path))
            .await
            .unwrap();
        assert!(result.success, "errors: {:?}", result.errors);
        // Sub variant adds the child-table panel
        assert_eq!(result.files.len(), 10);
        assert!(result
            .files
            .iter()
            .any(|f| f.file_path.ends_with("sub-table.vue")));
    }

    struct FailingPackager;
    impl Packager for FailingPackager {
        fn package(&self, _: &[GeneratedFile]) -> Result<Vec<u8>> {
            Err(GenError::Packaging("disk full".into()))
        }
    }

    struct CountingPackager;
    impl Packager for CountingPackager {
        fn package(&self, files: &[GeneratedFile]) -> Result<Vec<u8>> {
            Ok(vec![files.len() as u8])
        }
    }

    #[tokio::test]
    async fn test_zip_packaging_failure_keeps_files() {
        let catalog = MemoryCatalog::from_records(vec![post_record(1, GenOptions::default())]);
        let generator = Generator::new(Arc::new(catalog), GeneratorConfig::default())
            .with_packager(Box::new(FailingPackager));
        let result = generator
            .generate(&request(&[1], GenType::Zip))
            .await
            .unwrap();
        assert!(!result.success);
        assert!(result.zip_buffer.is_none());
        assert_eq!(result.files.len(), 9);
        assert!(result.errors[0].message.contains("packaging failed"));
    }

    #[tokio::test]
    async fn test_zip_delivery() {
        let catalog = MemoryCatalog::from_records(vec![post_record(1, GenOptions::default())]);
        let generator = Generator::new(Arc::new(catalog), GeneratorConfig::default())
            .with_packager(Box::new(CountingPackager));
        let result = generator
            .generate(&request(&[1], GenType::Zip))
            .await
            .unwrap();
        assert!(result.success);
        assert_eq!(result.zip_buffer, Some(vec![9]));
    }

    #[tokio::test]
    async fn test_batch_preserves_request_order() {
        let mut other = post_record(2, GenOptions::default());
        other.table.name = "sys_role".to_string();
        let catalog =
            MemoryCatalog::from_records(vec![post_record(1, GenOptions::default()), other]);
        let result = generate(Arc::new(catalog), &request(&[2, 1], GenType::Path))
            .await
            .unwrap();
        assert!(result.success);
        // Files for table 2 come first: buffered() merges in request order
        assert!(result.files[0].file_path.contains("role"));
        assert!(result.files[9].file_path.contains("post"));
    }
}
