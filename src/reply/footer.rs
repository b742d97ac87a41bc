//! Signature appended under posted replies.
//!
//! The footer tells readers how to summon the bot and how fresh the
//! corpus is. It is only added to non-empty replies.

use serde::{Deserialize, Serialize};

/// Where the default "Questions?" link points.
pub const DEFAULT_CONTACT_URL: &str =
    "https://www.reddit.com/message/compose/?to=ehmohteeoh&subject=SpireScan%20Inquiry";

const BETA_NOTICE: &str = "Some legacy cards with new beta effects might not be shown correctly.";

/// Footer settings.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Footer {
    /// Date the corpus was scraped, shown verbatim.
    pub data_date: Option<String>,
    /// Warn that beta card text may be stale (default: true).
    pub beta_notice: bool,
    /// Link readers can follow with questions (default: [`DEFAULT_CONTACT_URL`]).
    pub contact_url: Option<String>,
}

impl Default for Footer {
    fn default() -> Self {
        Self {
            data_date: None,
            beta_notice: true,
            contact_url: Some(DEFAULT_CONTACT_URL.to_string()),
        }
    }
}

impl Footer {
    /// Create a footer stating the corpus date.
    #[must_use]
    pub fn new(data_date: impl Into<String>) -> Self {
        Self {
            data_date: Some(data_date.into()),
            ..Self::default()
        }
    }

    /// Replace the contact link (builder pattern).
    #[must_use]
    pub fn with_contact_url(mut self, url: impl Into<String>) -> Self {
        self.contact_url = Some(url.into());
        self
    }

    /// Drop the contact link (builder pattern).
    #[must_use]
    pub fn without_contact_url(mut self) -> Self {
        self.contact_url = None;
        self
    }

    /// Enable or disable the beta warning (builder pattern).
    #[must_use]
    pub fn with_beta_notice(mut self, beta_notice: bool) -> Self {
        self.beta_notice = beta_notice;
        self
    }

    /// The signature line, in superscript markdown.
    #[must_use]
    pub fn render(&self, max_blocks: usize) -> String {
        let mut parts = vec![superscript(&format!("Call me with up to {} ", max_blocks)) + "^([[ name ]].)"];
        if let Some(date) = &self.data_date {
            parts.push(superscript("Data accurate as of ") + &format!("^({}.)", date));
        }
        if self.beta_notice {
            parts.push(superscript(BETA_NOTICE).trim_end().to_string());
        }
        if let Some(url) = &self.contact_url {
            parts.push(format!("^[Questions?]({})", url));
        }
        parts.join(" ")
    }

    /// Append the signature to `reply`, separated by a blank line.
    ///
    /// An empty reply stays empty.
    #[must_use]
    pub fn sign(&self, reply: &str, max_blocks: usize, line_separator: &str) -> String {
        if reply.is_empty() {
            return String::new();
        }
        format!(
            "{reply}{sep}{sep}{footer}",
            sep = line_separator,
            footer = self.render(max_blocks)
        )
    }
}

// Reddit superscript applies to one word per caret.
fn superscript(text: &str) -> String {
    text.split_whitespace()
        .map(|word| format!("^{} ", word))
        .collect()
}
