//! # spire-scan
//!
//! Finds `[[bracketed]]` references to Slay the Spire cards, relics,
//! potions and events in free text, fuzzy-matches them against a corpus,
//! and builds a reply summarizing each match.
//!
//! ## Pipeline
//!
//! 1. **Extract**: pull `[[...]]` references out of the text
//! 2. **Normalize**: lowercase and strip punctuation and beta tags
//! 3. **Match**: Jaro-Winkler score against every corpus name, with a floor
//! 4. **Render**: one markdown block per match, keywords in bold
//! 5. **Assemble**: up to 10 blocks as a bulleted, CRLF-separated list
//!
//! The pipeline is synchronous and only reads the corpus, so one `Corpus`
//! can serve any number of callers.
//!
//! ## Modules
//!
//! - `core`: Entities, corpus, configuration, errors
//! - `text`: Normalization and reference extraction
//! - `matching`: Similarity scorers and the fuzzy matcher
//! - `render`: Entity formatting
//! - `reply`: Reply assembly and footer
//!
//! ## Example
//!
//! ```
//! use spire_scan::{build_reply, Card, Corpus, Cost};
//!
//! let corpus = Corpus::from_iter([Card::new("Bash", "Deal 8 damage. Apply 2 Vulnerable.", "Attack", "Ironclad")
//!     .with_rarity("Starter")
//!     .with_cost(Cost::Fixed(2))
//!     .into()]);
//!
//! let reply = build_reply("Is [[bash]] good?", &corpus);
//! assert!(reply.contains("2 Energy"));
//! assert!(reply.contains("**Vulnerable.**"));
//! ```

pub mod core;
pub mod text;
pub mod matching;
pub mod render;
pub mod reply;

// Re-export commonly used types
pub use crate::core::{
    Card, Cost, Entity, EntityKind, Event, Potion, Relic,
    Corpus, EntityRecord, ScanConfig,
    Error, Result,
};

pub use crate::text::{extract_references, normalize, unescape_brackets};

pub use crate::matching::{
    find_best_match, MatchConfig, Matcher, ScoredEntity,
    Scorer, JaroWinkler, Levenshtein, edit_distance,
};

pub use crate::render::{format_entity, emphasize_keywords, replace_symbols};

pub use crate::reply::{build_reply, Footer, ReplyBuilder, ReplyConfig};
