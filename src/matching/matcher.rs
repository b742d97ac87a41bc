//! Fuzzy lookup of references in the corpus.
//!
//! The query is normalized, scored against the normalized name of every
//! entity, and the best-scoring entity is returned if its score reaches
//! the similarity floor.
//!
//! ## Ties
//!
//! Entities with equal scores keep corpus order, so the first one in the
//! corpus wins.

use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use super::similarity::{JaroWinkler, Scorer};
use crate::core::{Corpus, Entity};
use crate::text::normalize;

/// Default similarity floor.
pub const DEFAULT_MIN_SIMILARITY: f64 = 0.85;

/// Matching parameters.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MatchConfig {
    /// Scores strictly below this are not matches (default: 0.85).
    pub min_similarity: f64,
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            min_similarity: DEFAULT_MIN_SIMILARITY,
        }
    }
}

impl MatchConfig {
    /// Create a new config with a custom similarity floor.
    #[must_use]
    pub fn with_min_similarity(mut self, min_similarity: f64) -> Self {
        self.min_similarity = min_similarity;
        self
    }

    /// Check if a score clears the floor.
    #[must_use]
    pub fn accepts(&self, score: f64) -> bool {
        score >= self.min_similarity
    }
}

/// An entity paired with its similarity to a query.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScoredEntity<'c> {
    pub entity: &'c Entity,
    pub score: f64,
}

/// Scores queries against a corpus.
#[derive(Clone, Debug, Default)]
pub struct Matcher<S = JaroWinkler> {
    scorer: S,
    config: MatchConfig,
}

impl Matcher<JaroWinkler> {
    /// Jaro-Winkler matcher with the default floor.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl<S: Scorer> Matcher<S> {
    /// Matcher using a custom scorer.
    #[must_use]
    pub fn with_scorer(scorer: S) -> Self {
        Self {
            scorer,
            config: MatchConfig::default(),
        }
    }

    /// Replace the matching parameters (builder pattern).
    #[must_use]
    pub fn with_config(mut self, config: MatchConfig) -> Self {
        self.config = config;
        self
    }

    /// The active matching parameters.
    #[must_use]
    pub fn config(&self) -> &MatchConfig {
        &self.config
    }

    // Normalized query plus every entity's score, in corpus order.
    fn score_all<'c>(&self, query: &str, corpus: &'c Corpus) -> (String, Vec<ScoredEntity<'c>>) {
        let key = normalize(query);
        let scored = corpus
            .iter_keyed()
            .map(|(entity, name)| {
                let score = self.scorer.similarity(&key, name);
                trace!(query = %key, candidate = name, score, "scored");
                ScoredEntity { entity, score }
            })
            .collect();
        (key, scored)
    }

    /// Score every entity against `query`, best first.
    ///
    /// The sort is stable: equal scores keep corpus order. No floor is applied.
    #[must_use]
    pub fn rank<'c>(&self, query: &str, corpus: &'c Corpus) -> Vec<ScoredEntity<'c>> {
        let (_, mut scored) = self.score_all(query, corpus);
        scored.sort_by(|a, b| b.score.partial_cmp(&a.score).unwrap_or(std::cmp::Ordering::Equal));
        scored
    }

    /// Best-scoring entity for `query` with its score, if it clears the floor.
    ///
    /// Always the head of [`Matcher::rank`]: the first maximum in corpus order.
    #[must_use]
    pub fn best_scored<'c>(&self, query: &str, corpus: &'c Corpus) -> Option<ScoredEntity<'c>> {
        let (key, scored) = self.score_all(query, corpus);
        let best = scored
            .into_iter()
            .fold(None, |best: Option<ScoredEntity<'c>>, candidate| match best {
                Some(b) if candidate.score <= b.score => Some(b),
                _ => Some(candidate),
            });

        match best {
            Some(found) if self.config.accepts(found.score) => {
                debug!(query = %key, matched = found.entity.name(), score = found.score, "reference matched");
                Some(found)
            }
            Some(found) => {
                debug!(
                    query = %key,
                    closest = found.entity.name(),
                    score = found.score,
                    floor = self.config.min_similarity,
                    "no confident match"
                );
                None
            }
            None => {
                debug!(query = %key, "empty corpus");
                None
            }
        }
    }

    /// Best-scoring entity for `query`, if it clears the floor.
    #[must_use]
    pub fn best<'c>(&self, query: &str, corpus: &'c Corpus) -> Option<&'c Entity> {
        self.best_scored(query, corpus).map(|found| found.entity)
    }
}

/// Find the entity best matching `query` using Jaro-Winkler similarity.
///
/// Returns `None` when the corpus is empty or the best score is below
/// `min_similarity`.
///
/// ```
/// use spire_scan::core::{Corpus, Relic};
/// use spire_scan::matching::find_best_match;
///
/// let corpus = Corpus::from_iter([Relic::new("Burning Blood", "Heal 6 HP.", "Starter").into()]);
///
/// assert!(find_best_match("burnin blood", &corpus, 0.85).is_some());
/// assert!(find_best_match("Anchor", &corpus, 0.85).is_none());
/// ```
#[must_use]
pub fn find_best_match<'c>(query: &str, corpus: &'c Corpus, min_similarity: f64) -> Option<&'c Entity> {
    Matcher::new()
        .with_config(MatchConfig::default().with_min_similarity(min_similarity))
        .best(query, corpus)
}
