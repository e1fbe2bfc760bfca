use anyhow::{Context, Result};
use clap::{CommandFactory, Parser};
use colored::*;
use std::path::{Path, PathBuf};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;
use vlanscan_core::writer::write_csv;
use vlanscan_core::{ExtractConfig, Extraction, Extractor, OutputConfig};

mod formatter;

#[derive(Parser)]
#[command(name = "vlanscan")]
#[command(about = "Extract VLAN definitions from spreadsheet worksheets into CSV", long_about = None)]
#[command(version)]
struct Cli {
    /// Path to the spreadsheet file to parse
    #[arg(long = "in", value_name = "PATH")]
    input: Option<String>,

    /// Path to the output CSV file
    #[arg(long = "out", value_name = "PATH")]
    output: Option<String>,

    /// Path to configuration file (TOML)
    #[arg(short, long, value_name = "CONFIG")]
    config: Option<PathBuf>,

    /// Leave out the slug column
    #[arg(long)]
    no_slug: bool,

    /// Log progress to stderr (-v info, -vv debug)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

// Errors are printed and the process still exits 0.
fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let (Some(input), Some(output)) = (non_empty(&cli.input), non_empty(&cli.output)) else {
        if let Err(e) = Cli::command().print_help() {
            print_error(&e.into());
        }
        return;
    };

    if let Err(e) = run(&cli, input, output) {
        print_error(&e);
    }
}

fn run(cli: &Cli, input: &Path, output: &Path) -> Result<()> {
    let mut config = match &cli.config {
        Some(config_path) => ExtractConfig::from_file(config_path)
            .with_context(|| format!("Failed to load config from {}", config_path.display()))?,
        None => ExtractConfig::default(),
    };
    if cli.no_slug {
        config.output.slug = false;
    }

    let extractor = Extractor::with_config(config);

    // An unopenable workbook still yields an empty table and a header-only CSV
    let extraction = extractor.extract_file(input).unwrap_or_else(|e| {
        print_error(&e.into());
        Extraction::default()
    });

    write_outputs(&extraction, &extractor.config().output, output)
}

/// Report skipped sheets, print the table and write the CSV
fn write_outputs(
    extraction: &Extraction,
    output_config: &OutputConfig,
    output: &Path,
) -> Result<()> {
    if !extraction.failures.is_empty() {
        warn!(skipped = extraction.failures.len(), "some sheets were not scanned");
    }
    for err in sheet_errors(extraction) {
        print_error(&err);
    }

    formatter::print_table(&extraction.records, output_config);

    write_csv(output, &extraction.records, output_config.slug)
        .with_context(|| format!("Failed to write {}", output.display()))?;
    info!(
        path = %output.display(),
        records = extraction.records.len(),
        "wrote csv"
    );
    Ok(())
}

fn sheet_errors(extraction: &Extraction) -> Vec<anyhow::Error> {
    extraction
        .failures
        .iter()
        .map(|failure| anyhow::anyhow!("Skipped sheet '{}': {:#}", failure.sheet, failure.error))
        .collect()
}

fn non_empty(path: &Option<String>) -> Option<&Path> {
    path.as_deref().filter(|p| !p.is_empty()).map(Path::new)
}

fn print_error(err: &anyhow::Error) {
    println!("{} {:#}", "error:".red().bold(), err);
}

fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => "error",
        1 => "info",
        _ => "debug",
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| format!("vlanscan={level},vlanscan_core={level}").into()),
        )
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
