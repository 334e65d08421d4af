//! Zip code and dollar amount extraction.

use super::patterns::{MONEY, ZIP_CODE};
use super::{RuleMatch, TextRule};

/// Five-digit zip code extractor.
pub struct ZipCodeExtractor;

impl ZipCodeExtractor {
    pub fn new() -> Self {
        Self
    }
}

impl Default for ZipCodeExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl TextRule for ZipCodeExtractor {
    fn extract(&self, text: &str) -> Option<RuleMatch> {
        ZIP_CODE.find(text).map(RuleMatch::from_regex)
    }

    fn extract_all(&self, text: &str) -> Vec<RuleMatch> {
        ZIP_CODE.find_iter(text).map(RuleMatch::from_regex).collect()
    }
}

/// Dollar amount extractor (`$1,234.56`, `$500.00`, `$1234.56`).
pub struct MoneyExtractor;

impl MoneyExtractor {
    pub fn new() -> Self {
        Self
    }
}

impl Default for MoneyExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl TextRule for MoneyExtractor {
    fn extract(&self, text: &str) -> Option<RuleMatch> {
        MONEY.find(text).map(RuleMatch::from_regex)
    }

    fn extract_all(&self, text: &str) -> Vec<RuleMatch> {
        MONEY.find_iter(text).map(RuleMatch::from_regex).collect()
    }
}

/// All zip-like substrings of `text`, concatenated.
pub fn extract_zip_code(text: &str) -> String {
    ZipCodeExtractor::new().extract_joined(text)
}

/// All dollar amounts in `text`, concatenated.
pub fn extract_partial_cost(text: &str) -> String {
    MoneyExtractor::new().extract_joined(text)
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = "123 Main St Baltimore MD 21201 Amount: $1,234.56";

    #[test]
    fn test_extract_zip_and_cost() {
        assert_eq!(extract_zip_code(SAMPLE), "21201");
        assert_eq!(extract_partial_cost(SAMPLE), "$1,234.56");
    }

    #[test]
    fn test_zip_concatenates_all_matches() {
        assert_eq!(extract_zip_code("MD 21201 or 21206"), "2120121206");
        // Ten digits hold two back-to-back runs of five.
        assert_eq!(extract_zip_code("BaltimoreMD 2120627087"), "2120627087");
        assert_eq!(extract_zip_code("no zip 1234"), "");
    }

    #[test]
    fn test_money_formats() {
        assert_eq!(extract_partial_cost("Filed $500.00 today"), "$500.00");
        assert_eq!(extract_partial_cost("$1234.56"), "$1234.56");
        assert_eq!(extract_partial_cost("$12,345,678.90"), "$12,345,678.90");
        assert_eq!(extract_partial_cost("$5 and 500.00"), "");
    }

    #[test]
    fn test_money_concatenates_all_matches() {
        assert_eq!(
            extract_partial_cost("$100.00 principal, $25.50 fees"),
            "$100.00$25.50"
        );
    }

    #[test]
    fn test_first_match_position() {
        let m = ZipCodeExtractor::new().extract(SAMPLE).unwrap();
        assert_eq!(m.value, "21201");
        assert_eq!(&SAMPLE[m.position.0..m.position.1], "21201");
    }
}
