//! Batch export of mined case records to CSV.

use std::fs::{File, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};
use std::time::Instant;

use tracing::{debug, info, warn};

use crate::case::CaseMiner;
use crate::error::Result;
use crate::models::case::{CaseNotice, OutputRecord, COLUMNS};
use crate::source::DocumentSource;

/// Observer for batch progress. Has no effect on results.
pub trait ProgressReporter {
    /// Called once with the number of documents.
    fn start(&self, total: usize);

    /// Called after each document.
    fn advance(&self, description: &str);

    /// Called when the batch is done.
    fn finish(&self);
}

/// Progress reporter that ignores everything.
pub struct NoProgress;

impl ProgressReporter for NoProgress {
    fn start(&self, _total: usize) {}
    fn advance(&self, _description: &str) {}
    fn finish(&self) {}
}

/// Side channel for documents that yielded no records.
pub trait CaseLog {
    fn record(&mut self, notice: &CaseNotice) -> Result<()>;
}

/// Appends one case number per line to a text file.
pub struct FileCaseLog {
    path: PathBuf,
    file: Option<File>,
}

impl FileCaseLog {
    /// The file is created on the first write.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            file: None,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn file(&mut self) -> Result<&mut File> {
        let file = match self.file.take() {
            Some(file) => file,
            None => OpenOptions::new()
                .create(true)
                .append(true)
                .open(&self.path)?,
        };
        Ok(self.file.insert(file))
    }
}

impl CaseLog for FileCaseLog {
    fn record(&mut self, notice: &CaseNotice) -> Result<()> {
        let case_number = notice.case_number();
        if case_number.is_empty() {
            warn!("{} (document has no case number)", notice);
            return Ok(());
        }
        writeln!(self.file()?, "{}", case_number)?;
        Ok(())
    }
}

/// Keeps notices in memory.
#[derive(Debug, Default)]
pub struct MemoryCaseLog {
    pub notices: Vec<CaseNotice>,
}

impl CaseLog for MemoryCaseLog {
    fn record(&mut self, notice: &CaseNotice) -> Result<()> {
        self.notices.push(notice.clone());
        Ok(())
    }
}

/// Totals of one export run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExportSummary {
    /// Documents processed.
    pub documents: usize,
    /// Documents that were not case pages.
    pub skipped: usize,
    /// Records written to the sink.
    pub records: usize,
    /// Notices sent to the case log.
    pub notices: usize,
    /// Whether the header row was written.
    pub wrote_header: bool,
    /// Processing time in milliseconds.
    pub processing_time_ms: u64,
}

/// Mines a batch of documents and appends their records to a CSV sink.
pub struct Exporter<S> {
    miner: CaseMiner,
    source: S,
}

impl<S: DocumentSource> Exporter<S> {
    pub fn new(miner: CaseMiner, source: S) -> Self {
        Self { miner, source }
    }

    /// Mine every document in `ids`, then append all records to `sink`.
    ///
    /// The header row is written only when `sink` did not exist before the
    /// run. Unreadable documents and sink failures abort the run.
    pub fn export(
        &self,
        ids: &[String],
        sink: &Path,
        case_log: &mut dyn CaseLog,
        progress: &dyn ProgressReporter,
    ) -> Result<ExportSummary> {
        let start = Instant::now();
        let sink_exists = sink.exists();
        let mut summary = ExportSummary::default();
        let mut dataset: Vec<OutputRecord> = Vec::new();

        info!("Mining {} documents into {}", ids.len(), sink.display());
        progress.start(ids.len());

        for id in ids {
            let html = self.source.load(id)?;
            let result = self.miner.mine(&html);

            if result.is_skipped() {
                debug!("Skipped {}", id);
                summary.skipped += 1;
            }
            for notice in &result.notices {
                warn!("{}: {}", id, notice);
                case_log.record(notice)?;
            }

            summary.documents += 1;
            summary.notices += result.notices.len();
            dataset.extend(result.records);
            progress.advance(&format!("Mining {}", id));
        }

        progress.finish();

        write_records(sink, &dataset, !sink_exists)?;
        summary.records = dataset.len();
        summary.wrote_header = !sink_exists;
        summary.processing_time_ms = start.elapsed().as_millis() as u64;

        info!(
            "Wrote {} records from {} documents in {}ms",
            summary.records, summary.documents, summary.processing_time_ms
        );

        Ok(summary)
    }
}

/// Append records to a CSV file, optionally preceded by the header row.
pub fn write_records(sink: &Path, records: &[OutputRecord], header: bool) -> Result<()> {
    let file = OpenOptions::new().create(true).append(true).open(sink)?;
    let mut wtr = csv::WriterBuilder::new()
        .has_headers(false)
        .terminator(csv::Terminator::CRLF)
        .from_writer(file);

    if header {
        wtr.write_record(COLUMNS)?;
    }
    for record in records {
        wtr.serialize(record)?;
    }

    wtr.flush()?;
    Ok(())
}
