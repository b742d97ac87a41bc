//! Reply assembly.
//!
//! Runs the whole pipeline for one piece of text: extract references,
//! match each one, render the matches, keep the first `max_blocks`, and
//! lay them out as a bulleted list:
//!
//! ```text
//! + [Bash](...) Ironclad Starter Attack
//!     
//!     2 Energy
//!     Deal 8 damage. Apply 2 **Vulnerable.**
//! + [Anchor](...) Common Relic
//!     ...
//! ```
//!
//! References that match nothing are dropped silently. Text with no
//! matches yields an empty string, which callers take as "do not reply".

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::core::Corpus;
use crate::matching::{JaroWinkler, MatchConfig, Matcher, Scorer};
use crate::render::format_entity;
use crate::text::extract_references;

/// Layout parameters.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReplyConfig {
    /// Most blocks included in one reply (default: 10).
    pub max_blocks: usize,
    /// Separator between lines (default: CRLF).
    pub line_separator: String,
    /// Prefix of each block's first line (default: `"+ "`).
    pub bullet: String,
    /// Prefix of each block's following lines (default: four spaces).
    pub indent: String,
}

impl Default for ReplyConfig {
    fn default() -> Self {
        Self {
            max_blocks: 10,
            line_separator: "\r\n".to_string(),
            bullet: "+ ".to_string(),
            indent: "    ".to_string(),
        }
    }
}

impl ReplyConfig {
    /// Create a new config with a custom block limit.
    #[must_use]
    pub fn with_max_blocks(mut self, max_blocks: usize) -> Self {
        self.max_blocks = max_blocks;
        self
    }

    /// Create a new config with a custom line separator.
    #[must_use]
    pub fn with_line_separator(mut self, separator: impl Into<String>) -> Self {
        self.line_separator = separator.into();
        self
    }
}

/// Builds replies with a configurable matcher and layout.
#[derive(Clone, Debug, Default)]
pub struct ReplyBuilder<S = JaroWinkler> {
    matcher: Matcher<S>,
    config: ReplyConfig,
}

impl ReplyBuilder<JaroWinkler> {
    /// Builder with the default matcher and layout.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl<S: Scorer> ReplyBuilder<S> {
    /// Builder around an existing matcher.
    #[must_use]
    pub fn with_matcher(matcher: Matcher<S>) -> Self {
        Self {
            matcher,
            config: ReplyConfig::default(),
        }
    }

    /// Replace the matching parameters (builder pattern).
    #[must_use]
    pub fn with_match_config(mut self, config: MatchConfig) -> Self {
        self.matcher = self.matcher.with_config(config);
        self
    }

    /// Replace the layout (builder pattern).
    #[must_use]
    pub fn with_config(mut self, config: ReplyConfig) -> Self {
        self.config = config;
        self
    }

    /// The active layout.
    #[must_use]
    pub fn config(&self) -> &ReplyConfig {
        &self.config
    }

    /// Build the reply for `text`. Empty when nothing matched.
    #[must_use]
    pub fn build(&self, text: &str, corpus: &Corpus) -> String {
        let references = extract_references(text);
        let blocks: Vec<String> = references
            .iter()
            .filter_map(|reference| self.matcher.best(reference, corpus))
            .take(self.config.max_blocks)
            .map(|entity| self.layout_block(&format_entity(entity)))
            .collect();

        debug!(
            references = references.len(),
            blocks = blocks.len(),
            "assembled reply"
        );
        blocks.join(self.config.line_separator.as_str())
    }

    fn layout_block(&self, block: &str) -> String {
        block
            .lines()
            .enumerate()
            .map(|(i, line)| {
                let prefix = if i == 0 {
                    &self.config.bullet
                } else {
                    &self.config.indent
                };
                format!("{}{}", prefix, line)
            })
            .collect::<Vec<_>>()
            .join(self.config.line_separator.as_str())
    }
}

/// Build a reply for `text` with the default matcher and layout.
///
/// ```
/// use spire_scan::core::{Corpus, Relic};
/// use spire_scan::reply::build_reply;
///
/// let corpus = Corpus::from_iter([Relic::new("Anchor", "Start each combat with 10 Block.", "Common").into()]);
///
/// let reply = build_reply("I love [[anchor]]", &corpus);
/// assert!(reply.starts_with("+ [Anchor]"));
/// assert!(build_reply("nothing to see", &corpus).is_empty());
/// ```
#[must_use]
pub fn build_reply(text: &str, corpus: &Corpus) -> String {
    ReplyBuilder::new().build(text, corpus)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Card, Cost, Relic};

    fn corpus() -> Corpus {
        Corpus::from_entities([
            Card::new("Bash", "Deal 8 damage. Apply 2 Vulnerable.", "Attack", "Ironclad")
                .with_rarity("Starter")
                .with_cost(Cost::Fixed(2))
                .into(),
            Relic::new("Anchor", "Start each combat with 10 Block.", "Common").into(),
        ])
    }

    #[test]
    fn test_default_config() {
        let config = ReplyConfig::default();
        assert_eq!(config.max_blocks, 10);
        assert_eq!(config.line_separator, "\r\n");
        assert_eq!(config.bullet, "+ ");
        assert_eq!(config.indent, "    ");
    }

    #[test]
    fn test_single_block_layout() {
        let reply = build_reply("[[Anchor]]", &corpus());
        assert_eq!(
            reply,
            "+ [Anchor](http://slay-the-spire.wikia.com/wiki/Anchor) Common Relic\r\n    \r\n    Start each combat with 10 **Block.**"
        );
    }

    #[test]
    fn test_blocks_in_reference_order() {
        let reply = build_reply("[[anchor]] then [[bash]]", &corpus());
        let headers: Vec<_> = reply.split("\r\n").filter(|l| l.starts_with("+ ")).collect();
        assert_eq!(headers.len(), 2);
        assert!(headers[0].starts_with("+ [Anchor]"));
        assert!(headers[1].starts_with("+ [Bash]"));
    }

    #[test]
    fn test_unmatched_dropped() {
        let reply = build_reply("[[Whirlwind]] [[Bash]]", &corpus());
        assert!(reply.starts_with("+ [Bash]"));
        assert_eq!(reply.matches("+ [").count(), 1);
    }

    #[test]
    fn test_empty_results() {
        assert_eq!(build_reply("no markers here", &corpus()), "");
        assert_eq!(build_reply("[[Whirlwind]]", &corpus()), "");
        assert_eq!(build_reply("[[Bash]]", &Corpus::new()), "");
    }

    #[test]
    fn test_custom_layout() {
        let builder = ReplyBuilder::new().with_config(
            ReplyConfig::default()
                .with_max_blocks(1)
                .with_line_separator("\n"),
        );
        let reply = builder.build("[[Bash]] [[Anchor]]", &corpus());
        assert!(reply.starts_with("+ [Bash]"));
        assert!(!reply.contains('\r'));
        assert!(!reply.contains("[Anchor]"));
        assert!(reply.contains("\n    2 Energy\n"));
    }

    #[test]
    fn test_stricter_floor() {
        let builder = ReplyBuilder::new().with_match_config(MatchConfig::default().with_min_similarity(1.0));
        assert_eq!(builder.build("[[Bsh]]", &corpus()), "");
        assert!(!builder.build("[[BASH]]", &corpus()).is_empty());
    }
}
