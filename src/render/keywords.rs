//! Keyword emphasis.
//!
//! Game mechanics and status effects mentioned in a description are shown
//! in bold. A word is a keyword when its normalized form is in [`KEYWORDS`],
//! so `Vulnerable.` and `(Exhaust)` qualify and keep their punctuation.

use once_cell::sync::Lazy;
use rustc_hash::FxHashSet;

use crate::text::normalize;

/// Mechanic and status-effect vocabulary.
pub const KEYWORDS: &[&str] = &[
    "artifact",
    "exhaust",
    "ethereal",
    "block",
    "vulnerable",
    "strength",
    "weak",
    "intangible",
    "exhausted",
    "wound",
    "wounds",
    "dazed",
    "poison",
    "shiv",
    "shivs",
    "dexterity",
    "frail",
    "unplayable",
    "channel",
    "evoke",
    "channeled",
    "evoked",
    "lightning",
    "frost",
    "dark",
    "void",
    "innate",
    "lock-on",
    "focus",
    "burn",
    "plasma",
    "scry",
    "wrath",
    "calm",
    "mantra",
    "divinity",
    "stance",
    "stances",
    "retain",
    "retained",
];

/// Markers wrapped around an emphasized word.
pub const EMPHASIS: &str = "**";

// Keys are stored normalized so hyphenated terms like lock-on can match.
static KEYWORD_KEYS: Lazy<FxHashSet<String>> =
    Lazy::new(|| KEYWORDS.iter().map(|k| normalize(k)).collect());

/// Check if a word (with any punctuation) is a keyword.
#[must_use]
pub fn is_keyword(word: &str) -> bool {
    KEYWORD_KEYS.contains(&normalize(word))
}

/// Bold every keyword in `text`.
///
/// Words are split on whitespace and rejoined with single spaces.
///
/// ```
/// use spire_scan::render::emphasize_keywords;
///
/// assert_eq!(
///     emphasize_keywords("Apply 2 Vulnerable."),
///     "Apply 2 **Vulnerable.**"
/// );
/// ```
#[must_use]
pub fn emphasize_keywords(text: &str) -> String {
    text.split_whitespace()
        .map(|word| {
            if is_keyword(word) {
                format!("{EMPHASIS}{word}{EMPHASIS}")
            } else {
                word.to_string()
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_keyword() {
        assert!(is_keyword("Block"));
        assert!(is_keyword("block."));
        assert!(is_keyword("(Exhaust)"));
        assert!(is_keyword("Lock-On"));
        assert!(!is_keyword("damage"));
        assert!(!is_keyword("Apply"));
        assert!(!is_keyword(""));
    }

    #[test]
    fn test_emphasis() {
        assert_eq!(
            emphasize_keywords("Deal 8 damage. Apply 2 Vulnerable."),
            "Deal 8 damage. Apply 2 **Vulnerable.**"
        );
    }

    #[test]
    fn test_whitespace_collapsed() {
        assert_eq!(emphasize_keywords("  Gain  5\tBlock. "), "Gain 5 **Block.**");
        assert_eq!(emphasize_keywords(""), "");
    }

    #[test]
    fn test_case_preserved() {
        assert_eq!(emphasize_keywords("WEAK weak Weak"), "**WEAK** **weak** **Weak**");
    }

    #[test]
    fn test_keyword_count() {
        assert_eq!(KEYWORD_KEYS.len(), KEYWORDS.len());
    }
}
