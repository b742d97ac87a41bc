//! String similarity scoring.
//!
//! - `JaroWinkler`: the scorer used for matching. Rewards shared prefixes,
//!   which suits abbreviated and half-typed names.
//! - `Levenshtein`: normalized edit distance. Available as an alternative
//!   scorer, never used unless a caller asks for it.

use serde::{Deserialize, Serialize};

/// Similarity between two comparison keys, in `[0, 1]`.
///
/// Higher is more similar; identical non-empty strings score 1. The
/// built-in scorers give 0 whenever either key is empty.
pub trait Scorer {
    fn similarity(&self, a: &str, b: &str) -> f64;
}

impl<F> Scorer for F
where
    F: Fn(&str, &str) -> f64,
{
    fn similarity(&self, a: &str, b: &str) -> f64 {
        self(a, b)
    }
}

/// Jaro similarity with the Winkler common-prefix boost.
///
/// `score = jaro + prefix * scaling * (1 - jaro)` where `prefix` is the
/// length of the shared prefix, capped at `prefix_limit`. With `round` set,
/// scores are rounded to two decimals from their exact binary value, so
/// `0.845` (stored as `0.84499...`) rounds down to `0.84`.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct JaroWinkler {
    /// Weight of each shared prefix character (default: 0.1).
    pub scaling: f64,
    /// Longest prefix that earns a boost (default: 4).
    pub prefix_limit: usize,
    /// Round scores to two decimals (default: true).
    pub round: bool,
}

impl Default for JaroWinkler {
    fn default() -> Self {
        Self {
            scaling: 0.1,
            prefix_limit: 4,
            round: true,
        }
    }
}

impl JaroWinkler {
    /// Set the prefix scaling factor.
    ///
    /// `scaling * prefix_limit` must not exceed 1 or scores leave `[0, 1]`.
    #[must_use]
    pub fn with_scaling(mut self, scaling: f64) -> Self {
        self.scaling = scaling;
        self
    }

    /// Disable or enable two-decimal rounding.
    #[must_use]
    pub fn with_rounding(mut self, round: bool) -> Self {
        self.round = round;
        self
    }
}

impl Scorer for JaroWinkler {
    fn similarity(&self, a: &str, b: &str) -> f64 {
        if a.is_empty() || b.is_empty() {
            return 0.0;
        }
        let jaro = strsim::jaro(a, b);
        let prefix = a
            .chars()
            .zip(b.chars())
            .take_while(|(x, y)| x == y)
            .take(self.prefix_limit)
            .count();

        let score = jaro + prefix as f64 * self.scaling * (1.0 - jaro);
        if self.round {
            round_hundredths(score)
        } else {
            score
        }
    }
}

/// Edit-distance similarity: `1 - distance / longer_length`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Levenshtein;

impl Scorer for Levenshtein {
    fn similarity(&self, a: &str, b: &str) -> f64 {
        if a.is_empty() || b.is_empty() {
            return 0.0;
        }
        strsim::normalized_levenshtein(a, b)
    }
}

// Decimal formatting rounds the exact stored value; scaling by 100 first
// would turn 0.84499... into 84.5 and round it up.
fn round_hundredths(score: f64) -> f64 {
    format!("{:.2}", score).parse().unwrap_or(score)
}

/// Minimum number of single-character insertions, deletions and
/// substitutions turning `a` into `b`.
#[must_use]
pub fn edit_distance(a: &str, b: &str) -> usize {
    strsim::levenshtein(a, b)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn test_identical() {
        let jw = JaroWinkler::default();
        assert!(approx(jw.similarity("bash", "bash"), 1.0));
    }

    #[test]
    fn test_disjoint() {
        let jw = JaroWinkler::default();
        assert!(approx(jw.similarity("abc", "xyz"), 0.0));
        assert!(approx(jw.similarity("", "bash"), 0.0));
    }

    #[test]
    fn test_classic_martha() {
        // jaro = 0.944..., shared prefix "mar" = 3
        let jw = JaroWinkler::default().with_rounding(false);
        assert!((jw.similarity("martha", "marhta") - 0.961_111).abs() < 1e-5);

        let rounded = JaroWinkler::default();
        assert!(approx(rounded.similarity("martha", "marhta"), 0.96));
    }

    #[test]
    fn test_prefix_capped() {
        // Prefix of 6 shared characters only counts for 4.
        let jw = JaroWinkler::default().with_rounding(false);
        let jaro = strsim::jaro("abcdefx", "abcdefy");
        let expected = jaro + 4.0 * 0.1 * (1.0 - jaro);
        assert!(approx(jw.similarity("abcdefx", "abcdefy"), expected));
    }

    #[test]
    fn test_prefix_rewarded() {
        let jw = JaroWinkler::default().with_rounding(false);
        let prefix_typo = jw.similarity("pommelstrike", "pommelstirke");
        let leading_typo = jw.similarity("pommelstrike", "opmmelstrike");
        assert!(prefix_typo > leading_typo);
    }

    #[test]
    fn test_scores_rounded_to_hundredths() {
        let jw = JaroWinkler::default();
        let score = jw.similarity("dualcast", "dualcsat");
        assert!(approx(score, (score * 100.0).round() / 100.0));
        assert!(score < 1.0);
    }

    #[test]
    fn test_empty_keys_score_zero() {
        let jw = JaroWinkler::default();
        assert_eq!(jw.similarity("", ""), 0.0);
        assert_eq!(jw.similarity("", "bash"), 0.0);
        assert_eq!(jw.similarity("bash", ""), 0.0);
        assert_eq!(Levenshtein.similarity("", ""), 0.0);
        assert_eq!(Levenshtein.similarity("", "bash"), 0.0);
    }

    #[test]
    fn test_round_hundredths_uses_stored_value() {
        assert_eq!(round_hundredths(0.845), 0.84);
        assert_eq!(round_hundredths(0.846), 0.85);
        assert_eq!(round_hundredths(0.8449), 0.84);
        assert_eq!(round_hundredths(1.0), 1.0);
        assert_eq!(round_hundredths(0.0), 0.0);
    }

    #[test]
    fn test_edit_distance() {
        assert_eq!(edit_distance("", ""), 0);
        assert_eq!(edit_distance("", "abc"), 3);
        assert_eq!(edit_distance("abc", ""), 3);
        assert_eq!(edit_distance("kitten", "sitting"), 3);
        assert_eq!(edit_distance("bash", "bash"), 0);
    }

    #[test]
    fn test_levenshtein_scorer() {
        assert!(approx(Levenshtein.similarity("bash", "bash"), 1.0));
        assert!(approx(Levenshtein.similarity("bash", "bask"), 0.75));
    }

    #[test]
    fn test_closure_scorer() {
        let exact = |a: &str, b: &str| if a == b { 1.0 } else { 0.0 };
        assert!(approx(exact.similarity("x", "x"), 1.0));
        assert!(approx(exact.similarity("x", "y"), 0.0));
    }
}
