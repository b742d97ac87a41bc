//! Core types: entities, the corpus, configuration and errors.
//!
//! The corpus is read-only once built. Everything downstream (matching,
//! rendering, reply assembly) borrows it.

pub mod config;
pub mod corpus;
pub mod entity;
pub mod error;
pub mod record;

pub use config::ScanConfig;
pub use corpus::Corpus;
pub use entity::{Card, Cost, Entity, EntityKind, Event, Potion, Relic};
pub use error::{Error, Result};
pub use record::{EntityRecord, RawCost};
