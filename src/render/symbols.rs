//! Symbol placeholders.
//!
//! Scraped descriptions use bracketed tokens for icons. Character-specific
//! energy icons collapse to the generic `[E]`; the remaining two become a
//! filled square.

/// Generic energy icon.
pub const ENERGY: &str = "[E]";

/// Glyph used for the non-energy icon placeholders.
pub const SQUARE: &str = "◼";

const SUBSTITUTIONS: &[(&str, &str)] = &[
    ("[G]", ENERGY),
    ("[W]", ENERGY),
    ("[R]", SQUARE),
    ("[B]", SQUARE),
    (ENERGY, ENERGY),
];

/// Replace icon placeholders. Applying it twice changes nothing.
///
/// ```
/// use spire_scan::render::replace_symbols;
///
/// assert_eq!(replace_symbols("Gain [G] [R]."), "Gain [E] ◼.");
/// ```
#[must_use]
pub fn replace_symbols(text: &str) -> String {
    SUBSTITUTIONS
        .iter()
        .fold(text.to_string(), |acc, (from, to)| acc.replace(*from, to))
}
