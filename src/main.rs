//! Command-line interface for textdatagen
//!
//! # Usage Examples
//!
//! ## Inspecting generator types
//! ```bash
//! textdatagen list
//! textdatagen list --json
//! ```
//!
//! ## Single generator
//! ```bash
//! # Ten dates in 2024, one per line
//! textdatagen generate datetime \
//!   -p start=2024-01-01 -p end=2024-12-31 -p format=%d/%m/%Y \
//!   --count 10
//!
//! # Names picked from a file
//! textdatagen generate fileline -p path=names.txt -p seed=7
//! ```
//!
//! ## Generation documents
//! ```bash
//! textdatagen run --config people.yaml
//! TEXTDATAGEN_CONFIG=people.yaml textdatagen run --count 1000
//! ```
//!
//! Set `RUST_LOG=debug` to trace registration and parameter binding.

use anyhow::Context;
use clap::{Parser, Subcommand};
use datagen_factory::FactoryRegistry;
use std::io::{BufWriter, Write};
use std::path::PathBuf;
use textdatagen::config::parse_params;
use textdatagen::list::format_descriptors;
use textdatagen::{GenerationDocument, RowRenderer};

#[derive(Parser)]
#[command(name = "textdatagen")]
#[command(about = "Generate text data from typed generator definitions")]
#[command(long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List registered generator types and their parameters
    List {
        /// Print the listing as JSON
        #[arg(long)]
        json: bool,
    },

    /// Create one generator and print its values, one per line
    Generate {
        /// Generator type (see `list`)
        #[arg(value_name = "TYPE")]
        generator_type: String,

        /// Generator parameter, repeatable
        #[arg(short = 'p', long = "param", value_name = "KEY=VALUE")]
        params: Vec<String>,

        /// Number of values to print
        #[arg(long, default_value = "10")]
        count: u64,
    },

    /// Render rows described by a YAML generation document
    Run {
        /// Generation document path
        #[arg(long, short = 'c', value_name = "PATH", env = "TEXTDATAGEN_CONFIG")]
        config: PathBuf,

        /// Override the document's row count
        #[arg(long)]
        count: Option<u64>,
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

    let registry =
        FactoryRegistry::with_builtins().context("Failed to register built-in generators")?;

    let stdout = std::io::stdout();
    let mut out = BufWriter::new(stdout.lock());

    match cli.command {
        Commands::List { json } => {
            let descriptors = registry.descriptors();
            if json {
                writeln!(out, "{}", serde_json::to_string_pretty(&descriptors)?)?;
            } else {
                write!(out, "{}", format_descriptors(&descriptors))?;
            }
        }
        Commands::Generate {
            generator_type,
            params,
            count,
        } => {
            let parameters = parse_params(&params)?;
            let mut generator = registry
                .create(&generator_type, &parameters)
                .with_context(|| format!("Failed to create '{generator_type}' generator"))?;

            tracing::info!("Generating {} value(s) of type '{}'", count, generator_type);
            for _ in 0..count {
                writeln!(out, "{}", generator.next_value())?;
            }
        }
        Commands::Run { config, count } => {
            let document = GenerationDocument::from_file(&config)
                .with_context(|| format!("Failed to load generation document from {config:?}"))?;
            let mut renderer = RowRenderer::from_document(&document, &registry)?;

            let count = count.unwrap_or(document.count);
            renderer.write_rows(&mut out, count, document.header)?;
        }
    }

    out.flush()?;
    Ok(())
}
