//! Process command - mine records from a single case document.

use std::fs;
use std::path::PathBuf;

use clap::Args;
use console::style;
use tracing::info;

use casemine_core::{CaseMiner, OutputRecord, COLUMNS};

use super::load_config;

/// Arguments for the process command.
#[derive(Args)]
pub struct ProcessArgs {
    /// Input HTML file
    #[arg(required = true)]
    input: PathBuf,

    /// Output file (default: stdout)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "json")]
    format: OutputFormat,
}

#[derive(Clone, Copy, Debug, clap::ValueEnum)]
pub enum OutputFormat {
    /// JSON output
    Json,
    /// CSV output
    Csv,
    /// Plain text summary
    Text,
}

pub fn run(args: ProcessArgs, config_path: Option<&str>) -> anyhow::Result<()> {
    let config = load_config(config_path)?;

    if !args.input.exists() {
        anyhow::bail!("Input file not found: {}", args.input.display());
    }

    info!("Processing file: {}", args.input.display());

    let html = fs::read_to_string(&args.input)?;
    let miner = CaseMiner::new(&config.extraction)?;
    let result = miner.mine(&html);

    if result.is_skipped() {
        eprintln!(
            "{} {} is not a case information page",
            style("⚠").yellow(),
            args.input.display()
        );
    }
    for notice in &result.notices {
        eprintln!("{} {}", style("⚠").yellow(), notice);
    }

    let output = format_records(&result.records, args.format)?;

    if let Some(output_path) = &args.output {
        fs::write(output_path, &output)?;
        println!(
            "{} {} records written to {}",
            style("✓").green(),
            result.records.len(),
            output_path.display()
        );
    } else {
        print!("{}", output);
    }

    Ok(())
}

fn format_records(records: &[OutputRecord], format: OutputFormat) -> anyhow::Result<String> {
    match format {
        OutputFormat::Json => {
            let mut json = serde_json::to_string_pretty(records)?;
            json.push('\n');
            Ok(json)
        }
        OutputFormat::Csv => format_csv(records),
        OutputFormat::Text => Ok(format_text(records)),
    }
}

fn format_csv(records: &[OutputRecord]) -> anyhow::Result<String> {
    let mut wtr = csv::Writer::from_writer(vec![]);

    // serialize() writes the header from the serde field names
    for record in records {
        wtr.serialize(record)?;
    }
    if records.is_empty() {
        wtr.write_record(COLUMNS)?;
    }

    let data = String::from_utf8(wtr.into_inner()?)?;
    Ok(data)
}

fn format_text(records: &[OutputRecord]) -> String {
    let mut output = String::new();

    for (i, record) in records.iter().enumerate() {
        if i > 0 {
            output.push('\n');
        }
        for (column, value) in COLUMNS.iter().zip(record.values()) {
            output.push_str(&format!("{:<13} {}\n", format!("{}:", column), value));
        }
    }

    output
}
