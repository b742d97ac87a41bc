//! Comparison keys.
//!
//! Entity names and extracted references are both run through [`normalize`]
//! before they are compared, which makes matching insensitive to case,
//! punctuation, whitespace and the wiki's beta marker.

/// Marker the wiki appends to names of cards still in beta.
pub const BETA_TAG: &str = "(BETA)";

/// Canonicalize a string into a comparison key.
///
/// Removes [`BETA_TAG`], lowercases, then keeps only letters, digits and
/// underscores.
///
/// ```
/// use spire_scan::text::normalize;
///
/// assert_eq!(normalize("Lock-On"), "lockon");
/// assert_eq!(normalize("Wreath of Flame (BETA)"), "wreathofflame");
/// ```
#[must_use]
pub fn normalize(s: &str) -> String {
    s.replace(BETA_TAG, "")
        .to_lowercase()
        .chars()
        .filter(|c| c.is_alphanumeric() || *c == '_')
        .collect()
}
