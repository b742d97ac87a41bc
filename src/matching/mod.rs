//! Fuzzy matching of references against the corpus.
//!
//! ## Key Types
//!
//! - `Scorer`: Similarity metric between two comparison keys
//! - `JaroWinkler`: Default scorer
//! - `Levenshtein`: Optional edit-distance scorer
//! - `Matcher`: Ranks the corpus for a query and applies the similarity floor

pub mod matcher;
pub mod similarity;

pub use matcher::{find_best_match, MatchConfig, Matcher, ScoredEntity, DEFAULT_MIN_SIMILARITY};
pub use similarity::{edit_distance, JaroWinkler, Levenshtein, Scorer};
