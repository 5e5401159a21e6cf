//! Text normalization
//!
//! Lowercase → strip punctuation → tokenize → drop stopwords → lemmatize.
//! Each step consults [`Capabilities`] and degrades instead of failing.

use crate::capabilities::Capabilities;
use crate::lemmatize::{Lemmatizer, RuleLemmatizer};
use crate::stopwords::StopwordSet;
use crate::Result;
use std::sync::Arc;
use tracing::warn;

/// Lowercase and replace every character that is not an ASCII letter,
/// digit or whitespace with a space
pub fn clean_text(text: &str) -> String {
    text.to_lowercase()
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || c.is_whitespace() {
                c
            } else {
                ' '
            }
        })
        .collect()
}

/// Word-boundary tokenizer
fn word_tokenize(text: &str) -> Vec<&str> {
    text.split(|c: char| !c.is_alphanumeric())
        .filter(|s| !s.is_empty())
        .collect()
}

pub struct Normalizer {
    capabilities: Capabilities,
    stopwords: StopwordSet,
    lemmatizer: Arc<dyn Lemmatizer>,
}

impl Normalizer {
    pub fn new(capabilities: Capabilities, stopwords: StopwordSet) -> Self {
        Self::with_lemmatizer(capabilities, stopwords, Arc::new(RuleLemmatizer::new()))
    }

    pub fn with_lemmatizer(
        capabilities: Capabilities,
        stopwords: StopwordSet,
        lemmatizer: Arc<dyn Lemmatizer>,
    ) -> Self {
        Self {
            capabilities,
            stopwords,
            lemmatizer,
        }
    }

    #[inline]
    pub fn capabilities(&self) -> Capabilities {
        self.capabilities
    }

    /// Normalize a description into space-joined base-form tokens.
    ///
    /// Never fails: empty input yields an empty string, and any failure
    /// inside the pipeline yields the lowercased raw input.
    pub fn normalize(&self, text: &str) -> String {
        if text.is_empty() {
            return String::new();
        }

        match self.try_normalize(text) {
            Ok(normalized) => normalized,
            Err(e) => {
                warn!("Normalization failed, using lowercased input: {}", e);
                text.to_lowercase()
            }
        }
    }

    fn try_normalize(&self, text: &str) -> Result<String> {
        let cleaned = clean_text(text);

        let tokens: Vec<&str> = if self.capabilities.tokenizer_available {
            word_tokenize(&cleaned)
        } else {
            cleaned.split_whitespace().collect()
        };

        let mut processed = Vec::with_capacity(tokens.len());
        for token in tokens {
            if self.stopwords.contains(token) {
                continue;
            }
            if self.capabilities.lemmatizer_available {
                processed.push(self.lemmatizer.lemmatize(token)?);
            } else {
                processed.push(token.to_string());
            }
        }

        Ok(processed.join(" "))
    }
}
