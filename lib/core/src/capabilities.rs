use crate::config::ResourceConfig;
use crate::stopwords::StopwordSet;
use serde::Serialize;
use tracing::{info, warn};

/// Which linguistic resources are usable in this process.
///
/// Computed once at startup and consulted by the normalizer, which takes the
/// degraded path for every resource marked unavailable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Capabilities {
    pub tokenizer_available: bool,
    pub lemmatizer_available: bool,
    pub stopwords_available: bool,
}

impl Capabilities {
    /// Every resource available
    pub const fn full() -> Self {
        Self {
            tokenizer_available: true,
            lemmatizer_available: true,
            stopwords_available: true,
        }
    }

    /// Every resource unavailable
    pub const fn degraded() -> Self {
        Self {
            tokenizer_available: false,
            lemmatizer_available: false,
            stopwords_available: false,
        }
    }

    /// Probe resources according to the configuration.
    ///
    /// Returns the capabilities together with the stopword set that was
    /// actually loaded, so the file is read exactly once.
    pub fn detect(resources: &ResourceConfig) -> (Self, StopwordSet) {
        let requested = Self {
            tokenizer_available: !resources.disable_tokenizer,
            lemmatizer_available: !resources.disable_lemmatizer,
            stopwords_available: true,
        };
        let (caps, stopwords) = requested.resolve(resources);

        if !caps.tokenizer_available {
            warn!("Word tokenizer unavailable, falling back to whitespace splitting");
        }
        if !caps.lemmatizer_available {
            warn!("Lemmatizer unavailable, tokens will pass through unchanged");
        }
        if caps == Self::full() {
            info!("Linguistic resources initialized");
        }

        (caps, stopwords)
    }

    /// Load the stopword set these capabilities allow.
    ///
    /// A configured stopword file that cannot be loaded downgrades
    /// `stopwords_available`, so the returned capabilities always describe
    /// the returned set.
    pub fn resolve(self, resources: &ResourceConfig) -> (Self, StopwordSet) {
        if !self.stopwords_available {
            return (self, StopwordSet::fallback());
        }

        match resources.stopwords_path.as_deref() {
            None => (self, StopwordSet::english()),
            Some(path) => match StopwordSet::load(path) {
                Some(stopwords) => (self, stopwords),
                None => {
                    warn!(
                        "Stopword list {:?} could not be loaded, using fallback set",
                        path
                    );
                    let caps = Self {
                        stopwords_available: false,
                        ..self
                    };
                    (caps, StopwordSet::fallback())
                }
            },
        }
    }
}

impl Default for Capabilities {
    fn default() -> Self {
        Self::full()
    }
}
