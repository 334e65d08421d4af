//! Label/value token extraction from case document HTML.

use scraper::{ElementRef, Html, Node, Selector};
use tracing::{debug, trace};

use crate::error::{MinerError, Result};
use crate::models::case::Token;
use crate::models::config::ExtractionConfig;

use super::TokenExtractor;

/// Pulls recognized label/value rows out of a case document.
pub struct FieldExtractor {
    heading: Selector,
    row: Selector,
    field: Selector,
    /// Uppercased heading markers.
    markers: Vec<String>,
    /// Feature labels with their trailing colon.
    labels: Vec<String>,
    /// Lowercased noise marker.
    noise: String,
}

impl FieldExtractor {
    /// Build an extractor from configuration, compiling its selectors.
    pub fn new(config: &ExtractionConfig) -> Result<Self> {
        Ok(Self {
            heading: parse_selector(&config.heading_selector)?,
            row: parse_selector(&config.row_selector)?,
            field: parse_selector(&config.field_selector)?,
            markers: config
                .heading_markers
                .iter()
                .map(|m| m.to_uppercase())
                .collect(),
            labels: config.features.iter().map(|f| format!("{}:", f)).collect(),
            noise: config.noise_marker.to_lowercase(),
        })
    }

    /// Whether the document heading carries one of the case markers.
    pub fn is_case_document(&self, document: &Html) -> bool {
        document
            .select(&self.heading)
            .next()
            .map(|heading| {
                let text = heading.text().collect::<String>().to_uppercase();
                self.markers.iter().any(|m| text.contains(m.as_str()))
            })
            .unwrap_or(false)
    }

    /// Flattened label/value texts of every recognized row, in document order.
    pub fn extract_flat(&self, document: &Html) -> Vec<String> {
        if !self.is_case_document(document) {
            debug!("Document heading has no case marker, skipping");
            return Vec::new();
        }

        document
            .select(&self.row)
            .filter_map(|row| self.row_fields(row))
            .flatten()
            .collect()
    }

    /// Texts of one row, or `None` when the row is unlabelled or malformed.
    fn row_fields(&self, row: ElementRef<'_>) -> Option<Vec<String>> {
        let texts: Vec<Option<String>> = row.select(&self.field).map(element_string).collect();

        let labelled = texts
            .iter()
            .flatten()
            .any(|text| self.labels.iter().any(|label| label == text));
        if !labelled {
            return None;
        }

        let mut kept = Vec::with_capacity(texts.len());
        for text in texts {
            let Some(text) = text else {
                trace!("Skipping row with nested markup");
                return None;
            };
            if !self.noise.is_empty() && text.to_lowercase().contains(&self.noise) {
                continue;
            }
            kept.push(text);
        }

        Some(kept)
    }
}

impl TokenExtractor for FieldExtractor {
    fn extract(&self, document: &Html) -> Vec<Token> {
        let tokens = Token::pair(self.extract_flat(document));
        debug!("Extracted {} tokens", tokens.len());
        tokens
    }
}

fn parse_selector(selector: &str) -> Result<Selector> {
    Selector::parse(selector).map_err(|e| MinerError::Selector {
        selector: selector.to_string(),
        reason: e.to_string(),
    })
}

/// Plain text of an element holding a single string.
///
/// Descends through single-child wrappers. Elements with several children
/// have no single string and yield `None`; empty elements yield `""`.
fn element_string(element: ElementRef<'_>) -> Option<String> {
    let mut children = element.children();
    let Some(only) = children.next() else {
        return Some(String::new());
    };
    if children.next().is_some() {
        return None;
    }

    match only.value() {
        Node::Text(text) => Some(text.trim().to_string()),
        Node::Element(_) => ElementRef::wrap(only).and_then(element_string),
        _ => None,
    }
}
