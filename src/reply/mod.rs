//! Reply assembly: the end-to-end pipeline from text to reply body.
//!
//! ## Key Types
//!
//! - `ReplyBuilder`: Extract, match, render and lay out one reply
//! - `ReplyConfig`: Block limit and line layout
//! - `Footer`: Signature appended by the delivery harness

pub mod assembler;
pub mod footer;

pub use assembler::{build_reply, ReplyBuilder, ReplyConfig};
pub use footer::{Footer, DEFAULT_CONTACT_URL};
