//! Text handling: name normalization and reference extraction.
//!
//! ## Key Functions
//!
//! - `normalize`: Canonical comparison key for names and references
//! - `extract_references`: Pull `[[...]]` references out of free text
//! - `unescape_brackets`: Undo markdown bracket escaping before extraction

pub mod extract;
pub mod normalize;

pub use extract::{extract_references, unescape_brackets, References};
pub use normalize::{normalize, BETA_TAG};
