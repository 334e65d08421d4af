//! Core library for court case record mining.
//!
//! This crate provides:
//! - Label/value token extraction from case document HTML
//! - Record assembly (party stream pairing, title split, case type mapping)
//! - Address, zip code and dollar amount rules
//! - Batch export to CSV with an empty-case side log

pub mod case;
pub mod error;
pub mod export;
pub mod models;
pub mod source;

pub use case::{Assembly, CaseMiner, DocumentResult, FieldExtractor, RecordAssembler, TokenExtractor};
pub use error::{MinerError, Result};
pub use export::{CaseLog, ExportSummary, Exporter, FileCaseLog, MemoryCaseLog, NoProgress, ProgressReporter};
pub use models::case::{CaseMetadata, CaseNotice, OutputRecord, Token, COLUMNS};
pub use models::config::MinerConfig;
pub use source::{list_documents, DocumentSource, TemplateSource};
