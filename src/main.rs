//! CLI entry point for scaffgen

use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing::info;
use tracing_subscriber::EnvFilter;

use scaffgen::catalog::{MemoryCatalog, TableRecord};
use scaffgen::config::GeneratorConfig;
use scaffgen::orchestrator::{GenType, GenerateOptions, Generator};
use scaffgen::render::entries_for;

#[derive(Parser)]
#[command(name = "scaffgen")]
#[command(about = "Generate admin-module scaffolds from database table metadata")]
#[command(version)]
struct Cli {
    /// Path to configuration file (TOML format)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Path to the JSON catalog file holding table definitions
    #[arg(long)]
    catalog: PathBuf,

    /// Table ids to generate (defaults to every table in the catalog)
    #[arg(long, value_delimiter = ',')]
    ids: Vec<i64>,

    /// Output directory for generated files
    #[arg(short, long, default_value = "./generated")]
    output: PathBuf,

    /// Dry run - list output paths without writing files
    #[arg(long)]
    dry_run: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate all scaffolds
    Generate,
    /// Inspect the catalog (show parsed tables for debugging)
    Inspect,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Load configuration first (before logging, so we can use config.log_level)
    let config = if let Some(config_path) = &cli.config {
        GeneratorConfig::from_file(config_path)?
    } else {
        GeneratorConfig::default()
    };

    // Initialize logging
    // Priority: RUST_LOG env var > config.log_level > default (debug for dev, info for release)
    let default_level = if cfg!(debug_assertions) {
        "debug"
    } else {
        "info"
    };
    let log_level = config.log_level.as_deref().unwrap_or(default_level);

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level)),
        )
        .init();

    config.validate()?;

    let catalog = load_catalog(&cli.catalog)?;
    let table_ids = if cli.ids.is_empty() {
        catalog.table_ids()
    } else {
        cli.ids.clone()
    };

    match cli.command {
        Some(Commands::Inspect) => return inspect_catalog(&catalog),
        _ => {}
    }

    let generator = Generator::new(Arc::new(catalog), config);
    let request = GenerateOptions {
        table_ids,
        gen_type: GenType::Path,
        gen_path: Some(cli.output.display().to_string()),
    };

    info!("Generating from catalog: {:?}", cli.catalog);
    let result = generator.generate(&request).await?;

    if cli.dry_run {
        println!("Dry run mode - would generate:");
        for file in &result.files {
            println!("  {}", file.file_path);
        }
    } else {
        // PATH mode: the binary is the filesystem-write collaborator
        for file in &result.files {
            let target = cli.output.join(&file.file_path);
            if let Some(parent) = target.parent() {
                tokio::fs::create_dir_all(parent)
                    .await
                    .with_context(|| format!("creating {}", parent.display()))?;
            }
            tokio::fs::write(&target, &file.content)
                .await
                .with_context(|| format!("writing {}", target.display()))?;
        }
        info!("Wrote {} file(s) under {:?}", result.files.len(), cli.output);
    }

    for error in &result.errors {
        eprintln!("error: {}", error);
    }
    if !result.success {
        anyhow::bail!("generation finished with {} error(s)", result.errors.len());
    }

    info!("Code generation completed successfully");
    Ok(())
}

fn load_catalog(path: &Path) -> Result<MemoryCatalog> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("reading catalog {}", path.display()))?;
    let records: Vec<TableRecord> = serde_json::from_str(&content)
        .with_context(|| format!("parsing catalog {}", path.display()))?;
    Ok(MemoryCatalog::from_records(records))
}

fn inspect_catalog(catalog: &MemoryCatalog) -> Result<()> {
    println!("Catalog holds {} table(s):\n", catalog.len());
    for id in catalog.table_ids() {
        let record = catalog
            .get(id)
            .context("catalog entry vanished during inspection")?;
        let table = &record.table;
        println!("Table: {} (id={})", table.name, id);
        if let Some(comment) = &table.comment {
            println!("  Comment: {}", comment);
        }
        println!("  Variant: {:?}", table.options.tpl_category);
        println!("  Columns:");
        for col in &record.columns {
            let nullable = if col.nullable { "NULL" } else { "NOT NULL" };
            let pk = if col.is_primary_key { " PRIMARY KEY" } else { "" };
            println!("    - {} {} {}{}", col.name, col.native_type, nullable, pk);
        }
        println!();
    }

    // The output-path contract, independent of any table
    println!("Registered templates (crud variant):");
    for entry in entries_for(&scaffgen::context::TplCategory::Crud) {
        println!("  {:<12} {}", entry.name, entry.path);
    }

    Ok(())
}
