//! Street address cleaning.

use super::patterns::STREET_ADDRESS;
use super::{RuleMatch, TextRule};

/// Normalizes free text into a street address.
///
/// The input is stripped of ASCII punctuation (`#` survives) and searched for
/// a house number followed by a street type. Positions refer to the stripped
/// text.
pub struct AddressCleaner;

impl AddressCleaner {
    pub fn new() -> Self {
        Self
    }

    /// Return the first street address in `raw`, or an empty string.
    pub fn clean(&self, raw: &str) -> String {
        self.extract(raw).map(|m| m.value).unwrap_or_default()
    }
}

impl Default for AddressCleaner {
    fn default() -> Self {
        Self::new()
    }
}

impl TextRule for AddressCleaner {
    fn extract(&self, text: &str) -> Option<RuleMatch> {
        let stripped = strip_punctuation(text);
        STREET_ADDRESS
            .captures(&stripped)
            .and_then(|caps| caps.get(1))
            .map(RuleMatch::from_regex)
    }

    fn extract_all(&self, text: &str) -> Vec<RuleMatch> {
        let stripped = strip_punctuation(text);
        STREET_ADDRESS
            .captures_iter(&stripped)
            .filter_map(|caps| caps.get(1))
            .map(RuleMatch::from_regex)
            .collect()
    }
}

/// Remove ASCII punctuation except `#`.
pub fn strip_punctuation(text: &str) -> String {
    text.chars()
        .filter(|c| *c == '#' || !c.is_ascii_punctuation())
        .collect()
}

/// Clean an address with the default cleaner.
pub fn clean_address(raw: &str) -> String {
    AddressCleaner::new().clean(raw)
}
