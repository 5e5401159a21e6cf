use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Seed documents mixed into every vector space so short descriptions
/// still land in a non-trivial vocabulary
pub const DEFAULT_SEED_CORPUS: &[&str] = &[
    "sample lost item phone wallet keys laptop bag",
    "sample found item phone wallet keys laptop bag",
];

const DEFAULT_AGREEMENT_THRESHOLD: f64 = 0.4;
const DEFAULT_AGREEMENT_MIN_METHODS: usize = 2;
const DEFAULT_AGREEMENT_BOOST: f64 = 0.05;
const DEFAULT_MAX_SYNONYMS: usize = 2;

/// Linguistic resource options
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ResourceConfig {
    /// Optional stopword file overriding the built-in English list
    #[serde(default)]
    pub stopwords_path: Option<PathBuf>,
    /// Force plain whitespace tokenization
    #[serde(default)]
    pub disable_tokenizer: bool,
    /// Force lemmatization pass-through
    #[serde(default)]
    pub disable_lemmatizer: bool,
}

/// Configuration for the matching engine
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EngineConfig {
    #[serde(default = "default_seed_corpus")]
    pub seed_corpus: Vec<String>,

    /// A method "agrees" when its score is strictly above this value
    #[serde(default = "default_agreement_threshold")]
    pub agreement_threshold: f64,

    /// Number of agreeing methods needed to apply the boost
    #[serde(default = "default_agreement_min_methods")]
    pub agreement_min_methods: usize,

    #[serde(default = "default_agreement_boost")]
    pub agreement_boost: f64,

    /// Related terms injected per token during expansion
    #[serde(default = "default_max_synonyms")]
    pub max_synonyms_per_token: usize,

    #[serde(default)]
    pub resources: ResourceConfig,
}

fn default_seed_corpus() -> Vec<String> {
    DEFAULT_SEED_CORPUS.iter().map(|s| s.to_string()).collect()
}

fn default_agreement_threshold() -> f64 {
    DEFAULT_AGREEMENT_THRESHOLD
}

fn default_agreement_min_methods() -> usize {
    DEFAULT_AGREEMENT_MIN_METHODS
}

fn default_agreement_boost() -> f64 {
    DEFAULT_AGREEMENT_BOOST
}

fn default_max_synonyms() -> usize {
    DEFAULT_MAX_SYNONYMS
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            seed_corpus: default_seed_corpus(),
            agreement_threshold: DEFAULT_AGREEMENT_THRESHOLD,
            agreement_min_methods: DEFAULT_AGREEMENT_MIN_METHODS,
            agreement_boost: DEFAULT_AGREEMENT_BOOST,
            max_synonyms_per_token: DEFAULT_MAX_SYNONYMS,
            resources: ResourceConfig::default(),
        }
    }
}

impl EngineConfig {
    /// Load configuration from a JSON file. Missing fields take defaults.
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: EngineConfig = serde_json::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if !(0.0..=1.0).contains(&self.agreement_threshold) {
            return Err(Error::InvalidConfig(format!(
                "agreement_threshold must be in [0, 1], got {}",
                self.agreement_threshold
            )));
        }
        if !(0.0..=1.0).contains(&self.agreement_boost) {
            return Err(Error::InvalidConfig(format!(
                "agreement_boost must be in [0, 1], got {}",
                self.agreement_boost
            )));
        }
        if self.agreement_min_methods == 0 || self.agreement_min_methods > 4 {
            return Err(Error::InvalidConfig(format!(
                "agreement_min_methods must be between 1 and 4, got {}",
                self.agreement_min_methods
            )));
        }
        Ok(())
    }
}
