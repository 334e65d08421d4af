//! Record assembly from a document's token stream.

use tracing::{debug, warn};

use crate::models::case::{CaseMetadata, CaseNotice, OutputRecord, Token};
use crate::models::config::ExtractionConfig;

use super::rules::{
    extract_partial_cost, extract_zip_code, normalize_case_type, split_title, AddressCleaner,
};

const PROPERTY_ADDRESS: &str = "PROPERTY ADDRESS";
const ORGANIZATION_NAME: &str = "BUSINESS OR ORGANIZATION NAME";

/// Records and notices produced for one document.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Assembly {
    pub records: Vec<OutputRecord>,
    pub notices: Vec<CaseNotice>,
}

/// Turns a token stream into output records.
///
/// Assembly is pure: notices are returned to the caller instead of being
/// written anywhere.
pub struct RecordAssembler {
    features: Vec<String>,
    internal_fields: Vec<String>,
    cleaner: AddressCleaner,
}

impl RecordAssembler {
    pub fn new(config: &ExtractionConfig) -> Self {
        Self {
            features: config.features.clone(),
            internal_fields: config.internal_fields.clone(),
            cleaner: AddressCleaner::new(),
        }
    }

    /// Tokens whose label names a party-related field, in document order.
    pub fn business_stream<'a>(&self, tokens: &'a [Token]) -> Vec<&'a Token> {
        tokens
            .iter()
            .filter(|t| {
                self.internal_fields
                    .iter()
                    .any(|field| t.label.contains(field.as_str()))
            })
            .collect()
    }

    /// Organization entries that directly follow a "Property Address" party type.
    fn address_blocks<'a>(
        &self,
        business: &[&'a Token],
        metadata: &CaseMetadata,
        notices: &mut Vec<CaseNotice>,
    ) -> Vec<&'a Token> {
        let mut blocks = Vec::new();

        for (i, token) in business.iter().enumerate() {
            if token.value.to_uppercase() != PROPERTY_ADDRESS {
                continue;
            }
            match business.get(i + 1) {
                Some(next) if next.label.to_uppercase() == ORGANIZATION_NAME => blocks.push(*next),
                Some(_) => {}
                None => {
                    warn!("Party type issue at case {}", metadata.case_number());
                    notices.push(CaseNotice::UnbalancedPartyStream {
                        case_number: metadata.case_number().to_string(),
                    });
                }
            }
        }

        blocks
    }

    fn build_record(&self, metadata: &CaseMetadata, raw: &str) -> OutputRecord {
        let (plaintiff, defendant) = split_title(metadata.title());
        let cleaned = self.cleaner.clean(raw);

        OutputRecord {
            title: metadata.title().to_string(),
            case_type: normalize_case_type(metadata.case_type()),
            case_number: metadata.case_number().to_string(),
            filing_date: metadata.filing_date().to_string(),
            plaintiff,
            defendant,
            address: if cleaned.is_empty() { raw.to_string() } else { cleaned },
            zip_code: extract_zip_code(raw),
            partial_cost: extract_partial_cost(raw),
        }
    }

    /// Assemble every record of one document.
    pub fn assemble(&self, tokens: &[Token]) -> Assembly {
        let metadata = CaseMetadata::collect(tokens, &self.features);
        let business = self.business_stream(tokens);

        let mut notices = Vec::new();
        let blocks = self.address_blocks(&business, &metadata, &mut notices);

        let records: Vec<OutputRecord> = blocks
            .iter()
            .map(|block| self.build_record(&metadata, &block.value))
            .collect();

        if records.is_empty() {
            debug!("No property address for case {}", metadata.case_number());
            notices.push(CaseNotice::NoAddressMatch {
                case_number: metadata.case_number().to_string(),
            });
        }

        Assembly { records, notices }
    }
}

impl Default for RecordAssembler {
    fn default() -> Self {
        Self::new(&ExtractionConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn metadata_tokens() -> Vec<Token> {
        vec![
            Token::new("Title", "Bank vs Smith"),
            Token::new("Case Type", "Foreclosure"),
            Token::new("Case Number", "12-345"),
            Token::new("Filing Date", "2020-01-01"),
        ]
    }

    fn property(address: &str) -> [Token; 2] {
        [
            Token::new("Party Type", "Property Address"),
            Token::new("Business or Organization Name", address),
        ]
    }

    #[test]
    fn test_assemble_single_record() {
        let mut tokens = metadata_tokens();
        tokens.extend(property("123 Main St Baltimore MD 21201 $500.00"));

        let assembly = RecordAssembler::default().assemble(&tokens);

        assert!(assembly.notices.is_empty());
        assert_eq!(
            assembly.records,
            vec![OutputRecord {
                title: "Bank vs Smith".into(),
                case_type: "Mortgage".into(),
                case_number: "12-345".into(),
                filing_date: "2020-01-01".into(),
                plaintiff: "Bank".into(),
                defendant: "Smith".into(),
                address: "123 Main St".into(),
                zip_code: "21201".into(),
                partial_cost: "$500.00".into(),
            }]
        );
    }

    #[test]
    fn test_one_record_per_matched_pair() {
        let mut tokens = metadata_tokens();
        tokens.push(Token::new("Party Type", "Plaintiff"));
        tokens.push(Token::new("Business or Organization Name", "Bank NA"));
        tokens.extend(property("1 Oak Ln"));
        tokens.push(Token::new("Party Type", "Defendant"));
        tokens.push(Token::new("Name", "Smith, John"));
        tokens.extend(property("2 Elm Ct"));

        let assembly = RecordAssembler::default().assemble(&tokens);

        let addresses: Vec<&str> = assembly.records.iter().map(|r| r.address.as_str()).collect();
        assert_eq!(addresses, vec!["1 Oak Ln", "2 Elm Ct"]);
    }

    #[test]
    fn test_no_match_reports_case_number() {
        let mut tokens = metadata_tokens();
        tokens.push(Token::new("Party Type", "Defendant"));
        tokens.push(Token::new("Business or Organization Name", "Acme LLC"));

        let assembly = RecordAssembler::default().assemble(&tokens);

        assert!(assembly.records.is_empty());
        assert_eq!(
            assembly.notices,
            vec![CaseNotice::NoAddressMatch { case_number: "12-345".into() }]
        );
    }

    #[test]
    fn test_trailing_property_address_is_unbalanced() {
        let mut tokens = metadata_tokens();
        tokens.extend(property("5 Pine Rd"));
        tokens.push(Token::new("Party Type", "PROPERTY ADDRESS"));

        let assembly = RecordAssembler::default().assemble(&tokens);

        assert_eq!(assembly.records.len(), 1);
        assert_eq!(
            assembly.notices,
            vec![CaseNotice::UnbalancedPartyStream { case_number: "12-345".into() }]
        );
    }

    #[test]
    fn test_adjacency_uses_business_stream_only() {
        // Non-party tokens between the pair do not break adjacency.
        let mut tokens = metadata_tokens();
        tokens.push(Token::new("Party Type", "Property Address"));
        tokens.push(Token::new("Address", "ignored"));
        tokens.push(Token::new("Business or Organization Name", "7 Bay Dr"));

        let assembly = RecordAssembler::default().assemble(&tokens);

        assert_eq!(assembly.records.len(), 1);
        assert_eq!(assembly.records[0].address, "7 Bay Dr");
    }

    #[test]
    fn test_address_falls_back_to_raw_value() {
        let mut tokens = metadata_tokens();
        tokens.extend(property("Lot 7, Baltimore County 21093"));

        let record = &RecordAssembler::default().assemble(&tokens).records[0];

        assert_eq!(record.address, "Lot 7, Baltimore County 21093");
        assert_eq!(record.zip_code, "21093");
        assert_eq!(record.partial_cost, "");
    }

    #[test]
    fn test_unsplittable_title_and_other_case_type() {
        let mut tokens = vec![
            Token::new("Title", "In the matter of Smith"),
            Token::new("Case Type", "Contract"),
            Token::new("Case Number", "C-1"),
        ];
        tokens.extend(property("9 Hill St"));

        let record = &RecordAssembler::default().assemble(&tokens).records[0];

        assert_eq!(record.plaintiff, "");
        assert_eq!(record.defendant, "");
        assert_eq!(record.case_type, "Contract");
        assert_eq!(record.filing_date, "");
    }

    #[test]
    fn test_metadata_last_occurrence_used() {
        let mut tokens = metadata_tokens();
        tokens.push(Token::new("Case Number", "12-345-B"));
        tokens.extend(property("3 Main St"));

        let record = &RecordAssembler::default().assemble(&tokens).records[0];

        assert_eq!(record.case_number, "12-345-B");
    }
}
