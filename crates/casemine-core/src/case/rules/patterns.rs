//! Common regex patterns for court case extraction.

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    // Street address: house number, up to 20 word/space chars, street type.
    // Group 1 is the address; the trailing whitespace/end anchor is consumed
    // outside of it.
    pub static ref STREET_ADDRESS: Regex = Regex::new(
        r"(?i)(\d{1,4} [\w\s]{1,20}(?:st(?:reet)?|ln|lane|ave(?:nue)?|r(?:oa)?d|highway|hwy|sq(?:uare)?|tr(?:ai)?l|dr(?:ive)?|c(?:our)?t|parkway|pkwy|cir(?:cle)?|boulevard|blvd|pl(?:ace)?|ter(?:race)?)\W?)(?:\s|$)"
    ).unwrap();

    // Five consecutive digits, no boundary check.
    pub static ref ZIP_CODE: Regex = Regex::new(
        r"\d{5}"
    ).unwrap();

    // Dollar amounts between $0.00 and $999,999,999.99, separators optional.
    pub static ref MONEY: Regex = Regex::new(
        r"\$\d{0,3},?\d{0,3},?\d{0,3}\.?\d{2}"
    ).unwrap();

    // Plaintiff/defendant separator in case titles.
    pub static ref TITLE_SEPARATOR: Regex = Regex::new(
        r"(?i) vs "
    ).unwrap();
}
