//! Reference extraction.
//!
//! A reference is the text between `[[` and the nearest following `]]`
//! on the same line. Matching is non-greedy, so `[[a]] [[b]]` yields two
//! references rather than one spanning both.

use std::borrow::Cow;

use once_cell::sync::Lazy;
use regex::Regex;
use smallvec::SmallVec;

static REFERENCE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\[\[(.+?)\]\]").expect("reference pattern is valid"));

/// References found in one piece of text, borrowed from it.
///
/// Most texts name only a handful of entities, so they stay inline.
pub type References<'a> = SmallVec<[&'a str; 4]>;

/// Every `[[...]]` reference in `text`, left to right, duplicates included.
///
/// Unterminated markers produce nothing; they never fail the scan.
///
/// ```
/// use spire_scan::text::extract_references;
///
/// let refs = extract_references("check [[Bash]] and [[Defend]]");
/// assert_eq!(refs.as_slice(), ["Bash", "Defend"]);
/// assert!(extract_references("no markers here").is_empty());
/// ```
#[must_use]
pub fn extract_references(text: &str) -> References<'_> {
    REFERENCE
        .captures_iter(text)
        .filter_map(|caps| caps.get(1))
        .map(|m| m.as_str())
        .collect()
}

/// Undo markdown escaping of square brackets (`\[` and `\]`).
///
/// Rich-text editors escape brackets typed by users, which would otherwise
/// hide every reference from [`extract_references`].
#[must_use]
pub fn unescape_brackets(text: &str) -> Cow<'_, str> {
    if text.contains("\\[") || text.contains("\\]") {
        Cow::Owned(text.replace("\\[", "[").replace("\\]", "]"))
    } else {
        Cow::Borrowed(text)
    }
}
