//! Court case field extraction module.

mod assembler;
mod extractor;
mod miner;
pub mod rules;

pub use assembler::{Assembly, RecordAssembler};
pub use extractor::FieldExtractor;
pub use miner::{CaseMiner, DocumentResult};

use scraper::Html;

use crate::models::case::Token;

/// Trait for turning a parsed document into label/value tokens.
pub trait TokenExtractor {
    /// Extract tokens from a parsed document.
    fn extract(&self, document: &Html) -> Vec<Token>;

    /// Parse raw HTML and extract its tokens.
    fn extract_from_html(&self, html: &str) -> Vec<Token> {
        self.extract(&Html::parse_document(html))
    }
}
