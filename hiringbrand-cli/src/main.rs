//! HiringBrand command-line tool
//!
//! Scores employer comparison files and prints the differentiation ranking.
//!
//! Run with: cargo run -p hiringbrand-cli -- score comparison.yaml

mod output;

use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use tracing_subscriber::EnvFilter;

use hiringbrand_common::{default_dimensions, Comparison, ComparisonConfig};
use hiringbrand_ranker::analyse_comparison;

#[derive(Debug, Parser)]
#[command(name = "hiringbrand", version, about = "Employer differentiation scoring")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Score a comparison file (YAML or JSON) and print the ranking
    Score {
        /// Comparison file
        file: PathBuf,

        /// Scoring/tier policy file (YAML or JSON)
        #[arg(short, long)]
        config: Option<PathBuf>,

        #[arg(short, long, value_enum, default_value_t = OutputFormat::Table)]
        format: OutputFormat,
    },

    /// Print the default dimension catalogue
    Dimensions,

    /// Write a sample comparison file
    Init {
        file: PathBuf,

        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Table,
    Json,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .init();

    let cli = Cli::parse();
    let stdout = run(cli.command)?;
    print!("{stdout}");
    Ok(())
}

/// Execute a command and return what it prints.
fn run(command: Command) -> Result<String> {
    match command {
        Command::Score { file, config, format } => score(&file, config.as_deref(), format),
        Command::Dimensions => Ok(output::render_dimensions(&default_dimensions())),
        Command::Init { file, force } => init(&file, force),
    }
}

fn score(file: &Path, config: Option<&Path>, format: OutputFormat) -> Result<String> {
    let config = match config {
        Some(path) => ComparisonConfig::load(path)
            .with_context(|| format!("Failed to load config {}", path.display()))?,
        None => ComparisonConfig::default(),
    };

    let comparison = Comparison::from_path(file)
        .with_context(|| format!("Failed to read comparison {}", file.display()))?;
    comparison
        .validate()
        .with_context(|| format!("Invalid comparison {}", file.display()))?;

    tracing::info!(file = %file.display(), employers = comparison.employers.len(), "scoring");
    let analysis = analyse_comparison(&comparison, &config)?;

    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(&analysis)? + "\n"),
        OutputFormat::Table => Ok(output::render_analysis(&analysis)),
    }
}

fn init(file: &Path, force: bool) -> Result<String> {
    if file.exists() && !force {
        bail!("{} already exists (use --force to overwrite)", file.display());
    }
    std::fs::write(file, Comparison::sample().to_yaml()?)
        .with_context(|| format!("Failed to write {}", file.display()))?;
    Ok(format!("Wrote sample comparison to {}\n", file.display()))
}
