//! scaffgen: generate admin-module scaffolds from database table metadata
//!
//! This crate turns normalized table definitions into a complete set of
//! generated artifacts: backend entity/dto/service/controller/module files,
//! frontend api/list/form files, and a menu-registration SQL script. Table
//! definitions are pulled through a [`catalog::CatalogAccessor`], so the
//! crate performs no database access or filesystem writes of its own.
//!
//! # Library usage
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use scaffgen::{Generator, GenerateOptions, GenType, GeneratorConfig};
//!
//! let generator = Generator::new(Arc::new(my_catalog), GeneratorConfig::default());
//! let result = generator
//!     .generate(&GenerateOptions {
//!         table_ids: vec![1, 2],
//!         gen_type: GenType::Path,
//!         gen_path: Some("./out".into()),
//!     })
//!     .await?;
//!
//! for file in &result.files {
//!     println!("{}", file.file_path);
//! }
//! ```
//!
//! A batch never fails as a whole (except on an empty id list): per-table
//! and per-file errors are collected in `result.errors` while every other
//! table and file still renders.
//!
//! # CLI usage
//!
//! ```bash
//! scaffgen --catalog tables.json --output ./generated generate
//! ```

pub mod catalog;
pub mod classify;
pub mod config;
pub mod context;
pub mod error;
pub mod mapping;
pub mod options;
pub mod orchestrator;
pub mod render;
pub mod schema;

pub use config::GeneratorConfig;
pub use error::{GenError, Result};
pub use orchestrator::{
    generate, GenType, GenerateOptions, GenerateResult, Generator, Packager,
};
pub use render::{FileCategory, GeneratedFile};
