//! Error types for corpus and configuration loading.
//!
//! Matching, formatting and reply assembly never fail. Only reading data
//! from disk or validating raw records can produce an [`Error`].

use std::path::PathBuf;

use thiserror::Error;

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised while loading a corpus or a configuration file.
#[derive(Debug, Error)]
pub enum Error {
    /// A file could not be read or written.
    #[error("i/o error on {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The YAML corpus could not be parsed.
    #[error("invalid corpus yaml: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// A binary corpus snapshot could not be encoded or decoded.
    #[error("invalid corpus snapshot: {0}")]
    Snapshot(#[from] bincode::Error),

    /// The TOML configuration could not be parsed.
    #[error("invalid configuration: {0}")]
    Config(#[from] toml::de::Error),

    /// A corpus record is missing data required by its kind.
    #[error("corpus record {index}: {reason}")]
    InvalidRecord {
        /// Position of the record in the corpus file.
        index: usize,
        reason: String,
    },
}

impl Error {
    /// Wrap an i/o error with the path it occurred on.
    #[must_use]
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    /// Creates an invalid record error.
    #[must_use]
    pub fn invalid_record(index: usize, reason: impl Into<String>) -> Self {
        Self::InvalidRecord {
            index,
            reason: reason.into(),
        }
    }
}
