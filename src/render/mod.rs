//! Rendering of corpus entities into reply text.
//!
//! ## Key Functions
//!
//! - `format_entity`: Multi-line block for one entity
//! - `emphasize_keywords`: Bold game-mechanic vocabulary
//! - `replace_symbols`: Collapse icon placeholders

pub mod format;
pub mod keywords;
pub mod symbols;

pub use format::{cost_line, format_entity, render_description, title, wiki_url, WIKI_BASE};
pub use keywords::{emphasize_keywords, is_keyword, EMPHASIS, KEYWORDS};
pub use symbols::{replace_symbols, ENERGY, SQUARE};
