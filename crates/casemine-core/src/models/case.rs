//! Case document data models.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Column order of the exported table.
pub const COLUMNS: [&str; 9] = [
    "Title",
    "Case Type",
    "Case Number",
    "Filing Date",
    "Plaintiff",
    "Defendant",
    "Address",
    "Zip Code",
    "Partial Cost",
];

/// One label/value pair pulled from a document row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    /// Field name without its trailing colon.
    pub label: String,
    /// Field value, possibly empty.
    pub value: String,
}

impl Token {
    pub fn new(label: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            value: value.into(),
        }
    }

    /// Pair a flat label/value sequence into tokens.
    ///
    /// Entries at even indices are labels and lose one trailing colon. A
    /// dangling final label gets an empty value.
    pub fn pair(flat: Vec<String>) -> Vec<Token> {
        let mut tokens = Vec::with_capacity(flat.len().div_ceil(2));
        let mut entries = flat.into_iter();

        while let Some(label) = entries.next() {
            let label = label
                .strip_suffix(':')
                .map(str::to_string)
                .unwrap_or(label);
            let value = entries.next().unwrap_or_default();
            tokens.push(Token { label, value });
        }

        tokens
    }
}

/// Case-level fields of one document.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CaseMetadata {
    fields: HashMap<String, String>,
}

impl CaseMetadata {
    /// Collect every token whose label is a recognized feature.
    /// Later tokens overwrite earlier ones under the same label.
    pub fn collect<'a>(tokens: impl IntoIterator<Item = &'a Token>, features: &[String]) -> Self {
        let fields = tokens
            .into_iter()
            .filter(|t| features.iter().any(|f| *f == t.label))
            .map(|t| (t.label.clone(), t.value.clone()))
            .collect();

        Self { fields }
    }

    /// Value for a label, or an empty string when the document lacks it.
    pub fn get(&self, label: &str) -> &str {
        self.fields.get(label).map(String::as_str).unwrap_or("")
    }

    pub fn contains(&self, label: &str) -> bool {
        self.fields.contains_key(label)
    }

    pub fn title(&self) -> &str {
        self.get("Title")
    }

    pub fn case_type(&self) -> &str {
        self.get("Case Type")
    }

    pub fn case_number(&self) -> &str {
        self.get("Case Number")
    }

    pub fn filing_date(&self) -> &str {
        self.get("Filing Date")
    }
}

/// One exported row.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutputRecord {
    #[serde(rename = "Title")]
    pub title: String,

    #[serde(rename = "Case Type")]
    pub case_type: String,

    #[serde(rename = "Case Number")]
    pub case_number: String,

    #[serde(rename = "Filing Date")]
    pub filing_date: String,

    #[serde(rename = "Plaintiff")]
    pub plaintiff: String,

    #[serde(rename = "Defendant")]
    pub defendant: String,

    #[serde(rename = "Address")]
    pub address: String,

    #[serde(rename = "Zip Code")]
    pub zip_code: String,

    #[serde(rename = "Partial Cost")]
    pub partial_cost: String,
}

impl OutputRecord {
    /// Field values in [`COLUMNS`] order.
    pub fn values(&self) -> [&str; 9] {
        [
            self.title.as_str(),
            self.case_type.as_str(),
            self.case_number.as_str(),
            self.filing_date.as_str(),
            self.plaintiff.as_str(),
            self.defendant.as_str(),
            self.address.as_str(),
            self.zip_code.as_str(),
            self.partial_cost.as_str(),
        ]
    }
}

/// Non-fatal issue found while assembling a document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CaseNotice {
    /// A "Property Address" party type was the last entry of the party stream.
    UnbalancedPartyStream { case_number: String },
    /// No property address / organization pair was found.
    NoAddressMatch { case_number: String },
}

impl CaseNotice {
    pub fn case_number(&self) -> &str {
        match self {
            Self::UnbalancedPartyStream { case_number } | Self::NoAddressMatch { case_number } => {
                case_number
            }
        }
    }
}

impl std::fmt::Display for CaseNotice {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnbalancedPartyStream { case_number } => {
                write!(f, "party type issue at case {}", case_number)
            }
            Self::NoAddressMatch { case_number } => {
                write!(f, "no property address found for case {}", case_number)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn strings(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_pair_strips_label_colon() {
        let tokens = Token::pair(strings(&["Title:", "Bank vs Smith", "Case Type:", "Foreclosure"]));

        assert_eq!(
            tokens,
            vec![
                Token::new("Title", "Bank vs Smith"),
                Token::new("Case Type", "Foreclosure"),
            ]
        );
    }

    #[test]
    fn test_pair_keeps_colons_in_values() {
        let tokens = Token::pair(strings(&["Filing Date:", "10:30", "Note", "Amount:"]));

        assert_eq!(tokens[0], Token::new("Filing Date", "10:30"));
        assert_eq!(tokens[1], Token::new("Note", "Amount:"));
    }

    #[test]
    fn test_pair_dangling_label() {
        let tokens = Token::pair(strings(&["Title:", "A vs B", "Party Type:"]));

        assert_eq!(tokens.len(), 2);
        assert_eq!(tokens[1], Token::new("Party Type", ""));
    }

    #[test]
    fn test_metadata_last_write_wins() {
        let tokens = vec![
            Token::new("Case Number", "1"),
            Token::new("Unrelated", "x"),
            Token::new("Case Number", "2"),
        ];
        let features = strings(&["Case Number"]);

        let metadata = CaseMetadata::collect(&tokens, &features);

        assert_eq!(metadata.case_number(), "2");
        assert!(!metadata.contains("Unrelated"));
        assert_eq!(metadata.title(), "");
    }

    #[test]
    fn test_record_values_follow_columns() {
        let record = OutputRecord {
            title: "T".into(),
            zip_code: "21201".into(),
            ..Default::default()
        };

        let values = record.values();
        assert_eq!(values[0], "T");
        assert_eq!(values[COLUMNS.iter().position(|c| *c == "Zip Code").unwrap()], "21201");
    }
}
