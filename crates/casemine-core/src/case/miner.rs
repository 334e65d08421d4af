//! Per-document mining pipeline: extraction followed by assembly.

use std::time::Instant;

use tracing::debug;

use crate::error::Result;
use crate::models::case::{CaseNotice, OutputRecord};
use crate::models::config::ExtractionConfig;

use super::{FieldExtractor, RecordAssembler, TokenExtractor};

/// Result of mining one document.
#[derive(Debug, Clone, Default)]
pub struct DocumentResult {
    /// Number of label/value tokens found.
    pub token_count: usize,
    /// Extracted records.
    pub records: Vec<OutputRecord>,
    /// Non-fatal issues for the empty-case log.
    pub notices: Vec<CaseNotice>,
    /// Processing time in milliseconds.
    pub processing_time_ms: u64,
}

impl DocumentResult {
    /// The document was not a case page, or had no recognized rows.
    pub fn is_skipped(&self) -> bool {
        self.token_count == 0
    }
}

/// Extracts tokens from HTML and assembles them into records.
pub struct CaseMiner {
    extractor: FieldExtractor,
    assembler: RecordAssembler,
}

impl CaseMiner {
    pub fn new(config: &ExtractionConfig) -> Result<Self> {
        Ok(Self {
            extractor: FieldExtractor::new(config)?,
            assembler: RecordAssembler::new(config),
        })
    }

    /// Mine one HTML document.
    ///
    /// Documents without tokens are skipped silently and produce no notices.
    pub fn mine(&self, html: &str) -> DocumentResult {
        let start = Instant::now();
        let tokens = self.extractor.extract_from_html(html);

        if tokens.is_empty() {
            debug!("No tokens extracted, document skipped");
            return DocumentResult {
                processing_time_ms: start.elapsed().as_millis() as u64,
                ..Default::default()
            };
        }

        let assembly = self.assembler.assemble(&tokens);

        debug!(
            "Assembled {} records from {} tokens",
            assembly.records.len(),
            tokens.len()
        );

        DocumentResult {
            token_count: tokens.len(),
            records: assembly.records,
            notices: assembly.notices,
            processing_time_ms: start.elapsed().as_millis() as u64,
        }
    }
}
