//! Batch command - mine a directory of case documents into a CSV file.

use std::path::PathBuf;
use std::time::Instant;

use clap::Args;
use console::style;
use glob::Pattern;
use indicatif::{ProgressBar, ProgressStyle};
use tracing::debug;

use casemine_core::{
    list_documents, CaseMiner, Exporter, FileCaseLog, ProgressReporter, TemplateSource,
};

use super::load_config;

/// Arguments for the batch command.
#[derive(Args)]
pub struct BatchArgs {
    /// Directory holding the case documents
    #[arg(required = true)]
    input: PathBuf,

    /// Output CSV file (appended to if it exists)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Only mine files whose name matches this glob
    #[arg(short, long)]
    pattern: Option<String>,

    /// Document path template relative to the input directory ("{case}" is the file name)
    #[arg(long)]
    template: Option<String>,

    /// Log of case numbers that produced no records
    #[arg(long)]
    empty_log: Option<PathBuf>,

    /// Hide the progress bar
    #[arg(short, long)]
    quiet: bool,
}

/// Progress bar over the documents of a batch.
struct BarProgress {
    bar: ProgressBar,
}

impl BarProgress {
    fn new(quiet: bool) -> anyhow::Result<Self> {
        if quiet {
            return Ok(Self { bar: ProgressBar::hidden() });
        }

        let bar = ProgressBar::new(0);
        bar.set_style(
            ProgressStyle::default_bar()
                .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} {msg}")?
                .progress_chars("=>-"),
        );
        Ok(Self { bar })
    }
}

impl ProgressReporter for BarProgress {
    fn start(&self, total: usize) {
        self.bar.set_length(total as u64);
    }

    fn advance(&self, description: &str) {
        self.bar.set_message(description.to_string());
        self.bar.inc(1);
    }

    fn finish(&self) {
        self.bar.finish_with_message("Complete");
    }
}

pub fn run(args: BatchArgs, config_path: Option<&str>) -> anyhow::Result<()> {
    let start = Instant::now();
    let config = load_config(config_path)?;

    if !args.input.is_dir() {
        anyhow::bail!("Input directory not found: {}", args.input.display());
    }

    let mut ids = list_documents(&args.input)?;

    if let Some(pattern) = args.pattern.as_ref().or(config.export.pattern.as_ref()) {
        let pattern = Pattern::new(pattern)?;
        ids.retain(|id| pattern.matches(id));
        debug!("{} documents match {}", ids.len(), pattern);
    }

    if ids.is_empty() {
        println!(
            "{} No documents found in {}",
            style("⚠").yellow(),
            args.input.display()
        );
    } else {
        println!(
            "{} Found {} documents to mine",
            style("ℹ").blue(),
            ids.len()
        );
    }

    let template = args
        .template
        .unwrap_or_else(|| config.export.document_template.clone());
    let source = TemplateSource::new(&args.input, template);
    let miner = CaseMiner::new(&config.extraction)?;
    let exporter = Exporter::new(miner, source);

    let output = args.output.unwrap_or_else(|| config.export.output.clone());
    let mut case_log = FileCaseLog::new(
        args.empty_log
            .unwrap_or_else(|| config.export.empty_case_log.clone()),
    );
    let progress = BarProgress::new(args.quiet)?;

    let summary = exporter.export(&ids, &output, &mut case_log, &progress)?;

    println!();
    println!(
        "{} Mined {} documents in {:?}",
        style("✓").green(),
        summary.documents,
        start.elapsed()
    );
    println!(
        "   {} records written to {}",
        style(summary.records).green(),
        output.display()
    );
    if summary.skipped > 0 {
        println!(
            "   {} documents were not case pages",
            style(summary.skipped).yellow()
        );
    }
    if summary.notices > 0 {
        println!(
            "   {} empty cases logged to {}",
            style(summary.notices).red(),
            case_log.path().display()
        );
    }

    Ok(())
}
