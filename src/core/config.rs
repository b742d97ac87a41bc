//! Process configuration.
//!
//! Everything has a default, so an empty file (or no file) is valid:
//!
//! ```toml
//! corpus_path = "data.yml"
//! data_date = "2024-01-05"
//!
//! [matching]
//! min_similarity = 0.85
//!
//! [reply]
//! max_blocks = 10
//! ```

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use super::error::{Error, Result};
use crate::matching::MatchConfig;
use crate::reply::{Footer, ReplyConfig};

/// Configuration for a scanning process.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScanConfig {
    /// Corpus file. `.bin` files are read as snapshots, anything else as YAML.
    pub corpus_path: Option<PathBuf>,
    /// Date the corpus was scraped, shown in the reply footer.
    pub data_date: Option<String>,
    pub matching: MatchConfig,
    pub reply: ReplyConfig,
}

impl ScanConfig {
    /// Parse a TOML document.
    pub fn from_toml_str(toml: &str) -> Result<Self> {
        Ok(toml::from_str(toml)?)
    }

    /// Read and parse a TOML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|e| Error::io(path, e))?;
        Self::from_toml_str(&text)
    }

    /// Set the corpus file.
    #[must_use]
    pub fn with_corpus_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.corpus_path = Some(path.into());
        self
    }

    /// Set the similarity floor.
    #[must_use]
    pub fn with_min_similarity(mut self, min_similarity: f64) -> Self {
        self.matching.min_similarity = min_similarity;
        self
    }

    /// Set the date shown in the footer.
    #[must_use]
    pub fn with_data_date(mut self, date: impl Into<String>) -> Self {
        self.data_date = Some(date.into());
        self
    }

    /// The footer signing replies from this process.
    #[must_use]
    pub fn footer(&self) -> Footer {
        Footer {
            data_date: self.data_date.clone(),
            ..Footer::default()
        }
    }
}
