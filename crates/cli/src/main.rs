//! sdk-stubgen CLI
//!
//! Command-line interface for generating typed stub packages from SDK
//! service schema bundles.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::*;
use sdk_stubgen_common::structures::ServicePackage;
use sdk_stubgen_common::StubConfig;
use sdk_stubgen_generator::StubGenerator;
use sdk_stubgen_parser::{SchemaParser, ServicePackageParser, ServiceSchema};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::warn;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "sdk-stubgen")]
#[command(version, about = "Generate typed stub packages from SDK service schemas", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Parse a schema bundle and display the extracted service package
    #[command(after_help = "EXAMPLES:\n  \
        sdk-stubgen parse --schema schemas/s3.json")]
    Parse {
        /// Path to the schema bundle
        #[arg(short, long)]
        schema: PathBuf,
    },

    /// Generate stub packages from one or more schema bundles
    #[command(after_help = "EXAMPLES:\n  \
        # Generate S3 and EC2 stubs\n  \
        sdk-stubgen generate \\\n    \
        --schema s3.json,ec2.json \\\n    \
        --output ./typings\n\n  \
        # Scan a directory, keeping only matching services\n  \
        sdk-stubgen generate \\\n    \
        --schema-dir ./schemas \\\n    \
        --filter s3,sqs \\\n    \
        --config stubgen.yaml \\\n    \
        --output ./typings")]
    Generate {
        /// Comma-separated list of schema bundle paths
        #[arg(short, long, value_delimiter = ',', required_unless_present = "schema_dir")]
        schema: Vec<PathBuf>,

        /// Directory containing schema bundles (searched recursively)
        #[arg(long)]
        schema_dir: Option<PathBuf>,

        /// Comma-separated service names to keep from --schema-dir
        #[arg(long, value_delimiter = ',')]
        filter: Option<Vec<String>>,

        /// Output directory
        #[arg(short, long, default_value = "./typings")]
        output: PathBuf,

        /// Generator configuration (YAML)
        #[arg(short, long)]
        config: Option<PathBuf>,
    },
}

/// Initialize the tracing subscriber
///
/// Uses `RUST_LOG` if set, otherwise `debug` in verbose mode and `warn`
/// without it.
fn init_tracing(verbose: bool) -> Result<()> {
    let filter = if std::env::var("RUST_LOG").is_ok() {
        EnvFilter::from_default_env()
    } else {
        let level = if verbose { "debug" } else { "warn" };
        EnvFilter::try_new(level).with_context(|| format!("invalid log level filter: {level}"))?
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose)?;

    if cli.verbose {
        println!("{} Verbose mode enabled", "→".cyan());
    }

    match cli.command {
        Commands::Parse { schema } => parse_command(&schema, cli.verbose)?,
        Commands::Generate {
            schema,
            schema_dir,
            filter,
            output,
            config,
        } => {
            let mut schema_paths = schema;
            if let Some(dir) = schema_dir {
                schema_paths.extend(discover_schemas(&dir, filter.as_deref(), cli.verbose)?);
            }
            let config = load_config(config.as_deref())?;
            generate_command(&schema_paths, &output, config, cli.verbose)?;
        }
    }

    Ok(())
}

fn load_schema(schema_path: &Path) -> Result<ServiceSchema> {
    SchemaParser::from_file(schema_path)
        .with_context(|| format!("Failed to load schema bundle: {}", schema_path.display()))?
        .parse()
        .with_context(|| format!("Invalid schema bundle: {}", schema_path.display()))
}

fn build_package(schema: &ServiceSchema) -> Result<ServicePackage> {
    ServicePackageParser::new(schema)
        .parse()
        .with_context(|| format!("Failed to parse service {}", schema.service_name))
}

fn load_config(path: Option<&Path>) -> Result<StubConfig> {
    match path {
        Some(path) => StubConfig::load(path)
            .with_context(|| format!("Failed to load config: {}", path.display())),
        None => Ok(StubConfig::default()),
    }
}

fn parse_command(schema_path: &Path, verbose: bool) -> Result<()> {
    println!("{} Parsing schema: {}", "→".cyan(), schema_path.display());

    let schema = load_schema(schema_path)?;
    let package = build_package(&schema)?;

    println!("\n{}", "✓ Parse successful!".green().bold());
    println!("\n{}", "Service Package:".bold());
    println!("  Service: {}", package.service_name.name.yellow());
    println!("  Client: {}", package.client.name());
    println!("  Client methods: {}", package.client.class.methods.len());
    println!("  Paginators: {}", package.paginators.len());
    println!("  Waiters: {}", package.waiters.len());

    match &package.service_resource {
        Some(service_resource) => {
            println!("  Service resource: {}", service_resource.name());
            println!("  Resources: {}", service_resource.sub_resources.len());
            println!("  Collections: {}", service_resource.all_collections().len());
        }
        None => println!("  Service resource: none"),
    }

    let type_defs = package.extract_type_defs();
    println!("  Type definitions: {}", type_defs.len());

    if verbose {
        if let Some(service_resource) = &package.service_resource {
            println!("\n{}", "Resources:".bold());
            for resource in &service_resource.sub_resources {
                println!(
                    "  • {} ({} methods, {} attributes)",
                    resource.name().cyan(),
                    resource.class.methods.len(),
                    resource.class.attributes.len()
                );
            }
        }

        println!("\n{}", "Type definitions:".bold());
        for type_def in &type_defs {
            println!("  • {} ({} fields)", type_def.name.cyan(), type_def.fields.len());
        }
    }

    Ok(())
}

fn generate_command(
    schema_paths: &[PathBuf],
    output: &Path,
    config: StubConfig,
    verbose: bool,
) -> Result<()> {
    if schema_paths.is_empty() {
        anyhow::bail!("No schema bundles to generate from");
    }

    println!(
        "{} Generating stubs for {} schema bundle(s)",
        "→".cyan(),
        schema_paths.len()
    );
    if verbose {
        println!("  Module prefix: {}", config.module_prefix);
        println!("  Output: {}", output.display());
    }

    let generator = StubGenerator::new(config).context("Failed to create generator")?;
    let mut generated = Vec::new();
    let mut skipped = 0;

    for schema_path in schema_paths {
        let result = (|| -> Result<Option<PathBuf>> {
            let schema = load_schema(schema_path)?;
            if generator.config().is_skipped(&schema.service_name) {
                println!(
                    "  Skipping {} (listed in skip_services)",
                    schema.service_name.yellow()
                );
                return Ok(None);
            }

            let package = build_package(&schema)?;
            let package_dir = generator
                .generate_to_directory(&package, output)
                .with_context(|| format!("Failed to generate stubs for {}", schema.service_name))?;
            Ok(Some(package_dir))
        })();

        match result {
            Ok(Some(package_dir)) => {
                println!("{} Generated {}", "✓".green(), package_dir.display());
                generated.push(package_dir);
            }
            Ok(None) => {}
            Err(e) => {
                warn!(schema = %schema_path.display(), error = %e, "Skipping service");
                eprintln!("{} Skipping {}: {:#}", "⚠".yellow(), schema_path.display(), e);
                skipped += 1;
            }
        }
    }

    if skipped > 0 {
        println!(
            "\n{} Skipped {} schema bundle(s) due to errors",
            "⚠".yellow(),
            skipped
        );
    }
    if generated.is_empty() && skipped > 0 {
        anyhow::bail!("No stub packages were generated");
    }

    println!("\n{}", "✓ Generation complete!".green().bold());
    println!("\n{}", "Generated packages:".bold());
    for package_dir in &generated {
        println!("  📦 {}", package_dir.display());
    }

    Ok(())
}

/// Discover schema bundles (`*.json`) in a directory
///
/// With a filter, only files whose stem is one of the listed service names
/// are kept.
fn discover_schemas(dir: &Path, filter: Option<&[String]>, verbose: bool) -> Result<Vec<PathBuf>> {
    if !dir.is_dir() {
        anyhow::bail!("Not a directory: {}", dir.display());
    }

    fn walk_dir(
        dir: &Path,
        schemas: &mut Vec<PathBuf>,
        filter: Option<&[String]>,
        verbose: bool,
    ) -> Result<()> {
        let mut entries: Vec<PathBuf> = fs::read_dir(dir)?
            .map(|entry| entry.map(|e| e.path()))
            .collect::<std::io::Result<_>>()?;
        entries.sort();

        for path in entries {
            if path.is_dir() {
                walk_dir(&path, schemas, filter, verbose)?;
                continue;
            }
            if path.extension().and_then(|e| e.to_str()) != Some("json") {
                continue;
            }

            if let Some(filter_list) = filter {
                let stem = path.file_stem().and_then(|s| s.to_str()).unwrap_or_default();
                if !filter_list.iter().any(|f| f == stem) {
                    if verbose {
                        println!("  Skipping {} (not in filter)", path.display());
                    }
                    continue;
                }
            }

            if verbose {
                println!("  Found: {}", path.display());
            }
            schemas.push(path);
        }
        Ok(())
    }

    let mut schemas = Vec::new();
    walk_dir(dir, &mut schemas, filter, verbose)?;

    println!("{} Discovered {} schema bundles", "✓".green(), schemas.len());
    Ok(schemas)
}
