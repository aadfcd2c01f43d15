use regex::Regex;
use std::sync::LazyLock;

/// Marker vocabulary: substrings whose presence in an attribute, link text or
/// heading is taken as evidence of a service listing. Municipal sites mix
/// English and transliterated Nepali, so both are represented. Immutable,
/// shared across concurrent extractions.
pub const MARKER_TOKENS: &[&str] = &[
    "service",
    "egov",
    "e-service",
    "online-service",
    "sewa",
    "seva",
];

/// Devanagari spellings seen in the wild for "electronic (विद्युतीय) service
/// (सेवा)" headings and links, including the common misspelling without the
/// conjunct.
static DEVANAGARI_MARKER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new("विधुतीय|विद्युतीय|सेवा").expect("static marker pattern"));

/// Case-insensitive substring match against the marker vocabulary.
pub fn contains_marker(text: &str) -> bool {
    if text.is_empty() {
        return false;
    }
    let lowered = text.to_lowercase();
    MARKER_TOKENS.iter().any(|token| lowered.contains(token))
        || DEVANAGARI_MARKER.is_match(text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn matches_are_case_insensitive() {
        assert!(contains_marker("E-SERVICE-list"));
        assert!(contains_marker("block-menu-menu-egov-services"));
        assert!(contains_marker("Online-Service"));
        assert!(contains_marker("SEWA portal"));
    }

    #[test]
    fn matches_devanagari_spellings() {
        assert!(contains_marker("विद्युतीय शासन"));
        assert!(contains_marker("विधुतीय सेवा"));
        assert!(contains_marker("नगरपालिकाका सेवाहरू"));
    }

    #[test]
    fn ignores_unrelated_text() {
        assert!(!contains_marker(""));
        assert!(!contains_marker("main-navigation"));
        assert!(!contains_marker("समाचार"));
    }
}
