//! Command-line interface for schema-datagen
//!
//! # Usage Examples
//!
//! ## Generate
//! ```bash
//! # Three documents on stdout, reproducible with the same seed
//! schema-datagen generate --schema demos/event_schema.json --count 3 --seed 42
//!
//! # 10k documents to a file, resuming a previous run at document 10000
//! schema-datagen generate -s schema.yaml -n 10000 --seed 42 \
//!   --start-index 10000 -o events.jsonl --append
//!
//! # Human-friendly output with tuned generator options
//! schema-datagen generate -s schema.json --format pretty --config datagen.toml
//! ```
//!
//! ## Inspect
//! ```bash
//! schema-datagen inspect --schema demos/event_schema.json
//! ```
//!
//! Logs go to stderr; set `RUST_LOG=schema_datagen=debug` for more detail.

use anyhow::Context;
use clap::{Parser, Subcommand};
use populate_jsonl::{GenerateArgs, JsonlPopulator, PopulateMetrics};
use schema_core::SchemaDocument;
use schema_datagen::config::Config;
use schema_datagen::inspect::describe_schema;
use std::io::BufWriter;
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "schema-datagen")]
#[command(about = "Generate synthetic JSON documents from a declarative schema")]
#[command(long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate documents from a schema
    Generate(GenerateArgs),

    /// Parse a schema and print how each property will be generated
    Inspect {
        /// Path to schema file (JSON, or YAML with a .yaml/.yml extension)
        #[arg(long, short = 's')]
        schema: PathBuf,
    },
}

fn main() -> anyhow::Result<()> {
    if let Err(e) = run() {
        eprintln!("Error: {e:#}");
        std::process::exit(1);
    }
    Ok(())
}

fn run() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Generate(args) => run_generate(args),
        Commands::Inspect { schema } => {
            let schema = load_schema(&schema)?;
            print!("{}", describe_schema(&schema));
            Ok(())
        }
    }
}

fn load_schema(path: &Path) -> anyhow::Result<SchemaDocument> {
    SchemaDocument::from_file(path)
        .with_context(|| format!("Failed to load schema: {}", path.display()))
}

fn run_generate(args: GenerateArgs) -> anyhow::Result<()> {
    let schema = load_schema(&args.schema)?;
    let config = Config::load(args.config.as_deref())?;

    let seed = args.seed.unwrap_or_else(rand::random);
    tracing::info!(
        "Generating {} documents from {} (seed {}, start index {})",
        args.count,
        args.schema.display(),
        seed,
        args.start_index
    );

    let mut populator = JsonlPopulator::new(schema, seed, config.generator)
        .context("Failed to create generator")?
        .with_start_index(args.start_index)
        .with_format(args.format);

    let metrics = match &args.output {
        Some(path) if args.append => populator.populate_append(path, args.count),
        Some(path) => populator.populate(path, args.count),
        None => {
            let stdout = std::io::stdout().lock();
            populator.populate_to_writer(BufWriter::new(stdout), args.count)
        }
    }
    .context("Failed to generate documents")?;

    log_metrics(&metrics);
    Ok(())
}

fn log_metrics(metrics: &PopulateMetrics) {
    tracing::info!(
        "Wrote {} documents ({} bytes); generation {:?}, write {:?}",
        metrics.documents_written,
        metrics.bytes_written,
        metrics.generation_duration,
        metrics.write_duration
    );
}
