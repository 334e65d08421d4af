//! Case title and case type normalization.

use super::patterns::TITLE_SEPARATOR;

/// Split a case title into plaintiff and defendant.
///
/// Returns empty strings unless the title holds exactly one `" vs "`
/// separator (case-insensitive).
pub fn split_title(title: &str) -> (String, String) {
    let parts: Vec<&str> = TITLE_SEPARATOR.split(title).collect();

    match parts.as_slice() {
        [plaintiff, defendant] => (plaintiff.to_string(), defendant.to_string()),
        _ => (String::new(), String::new()),
    }
}

/// Map foreclosure cases to the "Mortgage" case type.
pub fn normalize_case_type(case_type: &str) -> String {
    if case_type.to_uppercase() == "FORECLOSURE" {
        "Mortgage".to_string()
    } else {
        case_type.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_title() {
        assert_eq!(
            split_title("Bank vs Smith"),
            ("Bank".to_string(), "Smith".to_string())
        );
        assert_eq!(
            split_title("WELLS FARGO BANK VS JOHN DOE"),
            ("WELLS FARGO BANK".to_string(), "JOHN DOE".to_string())
        );
    }

    #[test]
    fn test_split_title_ambiguous() {
        let empty = (String::new(), String::new());

        assert_eq!(split_title("A versus B"), empty);
        assert_eq!(split_title("A vs B vs C"), empty);
        assert_eq!(split_title("A vs. B"), empty);
        assert_eq!(split_title(""), empty);
    }

    #[test]
    fn test_normalize_case_type() {
        assert_eq!(normalize_case_type("Foreclosure"), "Mortgage");
        assert_eq!(normalize_case_type("FORECLOSURE"), "Mortgage");
        assert_eq!(normalize_case_type("foreclosure"), "Mortgage");
        assert_eq!(
            normalize_case_type("Foreclosure Rights of Redemption"),
            "Foreclosure Rights of Redemption"
        );
        assert_eq!(normalize_case_type("Contract"), "Contract");
    }
}
