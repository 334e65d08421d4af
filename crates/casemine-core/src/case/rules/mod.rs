//! Rule-based field heuristics for court case records.

pub mod address;
pub mod amounts;
pub mod patterns;
pub mod title;

pub use address::{clean_address, strip_punctuation, AddressCleaner};
pub use amounts::{extract_partial_cost, extract_zip_code, MoneyExtractor, ZipCodeExtractor};
pub use patterns::*;
pub use title::{normalize_case_type, split_title};

/// Trait for pattern rules applied to a raw field value.
pub trait TextRule {
    /// Find the first match in text.
    fn extract(&self, text: &str) -> Option<RuleMatch>;

    /// Find every non-overlapping match, left to right.
    fn extract_all(&self, text: &str) -> Vec<RuleMatch>;

    /// Concatenate every match into one string.
    fn extract_joined(&self, text: &str) -> String {
        self.extract_all(text)
            .into_iter()
            .map(|m| m.value)
            .collect()
    }
}

/// A matched substring and where it was found.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuleMatch {
    /// Matched text.
    pub value: String,
    /// Byte span in the searched text.
    pub position: (usize, usize),
}

impl RuleMatch {
    pub fn new(value: impl Into<String>, start: usize, end: usize) -> Self {
        Self {
            value: value.into(),
            position: (start, end),
        }
    }

    fn from_regex(m: regex::Match<'_>) -> Self {
        Self::new(m.as_str(), m.start(), m.end())
    }
}
