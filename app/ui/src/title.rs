//! Title parsing helpers for search normalization and display.

use regex::Regex;
use std::sync::LazyLock;

// Trailing parenthesized 4-digit year, e.g. "Inception (2010)"
static YEAR_SUFFIX_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s*\((\d{4})\)$").unwrap());

/// Year embedded in a trailing `"(YYYY)"` suffix, if present.
pub fn extract_year(title: &str) -> Option<&str> {
    YEAR_SUFFIX_PATTERN
        .captures(title)
        .and_then(|captures| captures.get(1))
        .map(|m| m.as_str())
}

/// Title with any trailing `"(YYYY)"` suffix removed.
///
/// Used to normalize search terms before querying the metadata service.
pub fn clean_title(title: &str) -> String {
    YEAR_SUFFIX_PATTERN.replace(title, "").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_year() {
        assert_eq!(extract_year("Inception (2010)"), Some("2010"));
        assert_eq!(extract_year("Heat (1995)"), Some("1995"));

        // No suffix
        assert_eq!(extract_year("Inception"), None);

        // Year not at the end is not a suffix
        assert_eq!(extract_year("(2010) Inception"), None);
        assert_eq!(extract_year("2010: The Year We Make Contact"), None);

        // Non-4-digit parenthesized trailer
        assert_eq!(extract_year("Blow-Up (66)"), None);
    }

    #[test]
    fn test_clean_title() {
        assert_eq!(clean_title("Inception (2010)"), "Inception");
        assert_eq!(clean_title("Heat (1995)"), "Heat");

        // No suffix - unchanged
        assert_eq!(clean_title("Inception"), "Inception");
        assert_eq!(clean_title("(2010) Inception"), "(2010) Inception");

        // Embedded parenthetical that is not a trailing year survives
        assert_eq!(
            clean_title("Léon: The Professional (a.k.a. The Professional) (1994)"),
            "Léon: The Professional (a.k.a. The Professional)"
        );

        // Whitespace before the suffix is stripped with it
        assert_eq!(clean_title("Heat  (1995)"), "Heat");
    }
}
