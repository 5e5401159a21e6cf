//! Description matching engine
//!
//! Wires the pipeline together:
//!
//! ```text
//! raw pair ─> Normalizer ─> Expander ─┐
//!          └─> FeatureExtractor ──────┴─> SimilarityEngine ─> Aggregator ─> MatchResult
//! ```
//!
//! Both descriptions are preprocessed independently. The engine holds only
//! immutable state and can be shared across threads behind an `Arc`.

use crate::aggregate::Aggregator;
use crate::capabilities::Capabilities;
use crate::config::EngineConfig;
use crate::expand::{Expander, FeatureExtractor};
use crate::lexicon::Lexicon;
use crate::normalize::{clean_text, Normalizer};
use crate::similarity::{Method, MethodScores, SimilarityEngine};
use crate::stopwords::StopwordSet;
use crate::{Error, Result};
use serde::Serialize;
use std::sync::Arc;
use std::time::Instant;
use tracing::{debug, info};

pub const EMPTY_AFTER_PREPROCESSING: &str =
    "One or both descriptions were empty after preprocessing";

/// Scored comparison of a lost and a found description
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MatchResult {
    #[serde(rename = "similarity_score")]
    pub similarity: f64,
    pub preprocessed_lost: String,
    pub preprocessed_found: String,
    pub method_used: Method,
    pub all_methods: MethodScores,
    pub agreement_boost: bool,
    pub processing_time_ms: u64,
}

/// Returned instead of a score when a side has no content left to compare
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EmptyMatch {
    pub similarity_score: f64,
    pub preprocessed_lost: String,
    pub preprocessed_found: String,
    pub warning: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum MatchOutcome {
    Scored(MatchResult),
    Empty(EmptyMatch),
}

impl MatchOutcome {
    pub fn similarity(&self) -> f64 {
        match self {
            MatchOutcome::Scored(result) => result.similarity,
            MatchOutcome::Empty(empty) => empty.similarity_score,
        }
    }
}

/// Single-text preprocessing: normalize, expand, append signal features
pub struct Preprocessor {
    normalizer: Normalizer,
    expander: Expander,
    extractor: FeatureExtractor,
}

impl Preprocessor {
    pub fn new(normalizer: Normalizer, expander: Expander, extractor: FeatureExtractor) -> Self {
        Self {
            normalizer,
            expander,
            extractor,
        }
    }

    pub fn preprocess(&self, text: &str) -> String {
        if text.is_empty() {
            return String::new();
        }

        let normalized = self.normalizer.normalize(text);
        let expanded = self.expander.expand(&normalized);
        let features = self.extractor.extract(&clean_text(text));

        format!("{} {}", expanded, features.join(" "))
    }
}

pub struct MatchEngine {
    preprocessor: Preprocessor,
    similarity: SimilarityEngine,
    aggregator: Aggregator,
    capabilities: Capabilities,
}

impl MatchEngine {
    /// Build an engine, probing linguistic resources from the configuration
    pub fn new(config: EngineConfig) -> Result<Self> {
        let (capabilities, stopwords) = Capabilities::detect(&config.resources);
        Self::build(config, capabilities, stopwords)
    }

    /// Build an engine with explicit capabilities instead of probing them
    pub fn with_capabilities(config: EngineConfig, capabilities: Capabilities) -> Result<Self> {
        let (capabilities, stopwords) = capabilities.resolve(&config.resources);
        Self::build(config, capabilities, stopwords)
    }

    fn build(
        config: EngineConfig,
        capabilities: Capabilities,
        stopwords: StopwordSet,
    ) -> Result<Self> {
        config.validate()?;

        let lexicon = Arc::new(Lexicon::new());

        let preprocessor = Preprocessor::new(
            Normalizer::new(capabilities, stopwords),
            Expander::new(lexicon.clone(), config.max_synonyms_per_token),
            FeatureExtractor::new(lexicon.clone()),
        );

        Ok(Self {
            preprocessor,
            similarity: SimilarityEngine::new(lexicon, config.seed_corpus),
            aggregator: Aggregator::new(
                config.agreement_threshold,
                config.agreement_min_methods,
                config.agreement_boost,
            ),
            capabilities,
        })
    }

    #[inline]
    pub fn capabilities(&self) -> Capabilities {
        self.capabilities
    }

    pub fn preprocess(&self, text: &str) -> String {
        self.preprocessor.preprocess(text)
    }

    /// Score a lost description against a found description
    pub fn match_pair(&self, lost: &str, found: &str) -> Result<MatchOutcome> {
        let start = Instant::now();

        if lost.is_empty() || found.is_empty() {
            return Err(Error::MissingDescription);
        }

        let preprocessed_lost = self.preprocess(lost);
        let preprocessed_found = self.preprocess(found);
        debug!("Preprocessed lost: {:?}", preprocessed_lost);
        debug!("Preprocessed found: {:?}", preprocessed_found);

        if preprocessed_lost.is_empty() || preprocessed_found.is_empty() {
            return Ok(MatchOutcome::Empty(EmptyMatch {
                similarity_score: 0.0,
                preprocessed_lost,
                preprocessed_found,
                warning: EMPTY_AFTER_PREPROCESSING.to_string(),
            }));
        }

        let all_methods = self
            .similarity
            .score_all(&preprocessed_lost, &preprocessed_found);
        let aggregate = self.aggregator.aggregate(&all_methods);
        let processing_time_ms = start.elapsed().as_millis() as u64;

        info!(
            similarity = aggregate.similarity,
            method = %aggregate.method_used,
            boost = aggregate.agreement_boost,
            elapsed_ms = processing_time_ms,
            "Match scored"
        );

        Ok(MatchOutcome::Scored(MatchResult {
            similarity: aggregate.similarity,
            preprocessed_lost,
            preprocessed_found,
            method_used: aggregate.method_used,
            all_methods,
            agreement_boost: aggregate.agreement_boost,
            processing_time_ms,
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn engine() -> MatchEngine {
        MatchEngine::with_capabilities(EngineConfig::default(), Capabilities::full()).unwrap()
    }

    #[test]
    fn test_preprocess_composition() {
        assert_eq!(
            engine().preprocess("Black phone"),
            "black phone dark ebony mobile cell phone black phone"
        );
    }

    #[test]
    fn test_preprocess_without_features_keeps_separator() {
        assert_eq!(engine().preprocess("umbrella"), "umbrella ");
    }

    #[test]
    fn test_missing_description() {
        assert!(matches!(
            engine().match_pair("", "wallet"),
            Err(Error::MissingDescription)
        ));
        assert!(matches!(
            engine().match_pair("wallet", ""),
            Err(Error::MissingDescription)
        ));
    }

    #[test]
    fn test_all_stopwords_still_scored() {
        let engine = engine();
        assert_eq!(engine.preprocess("the of and"), " ");

        for lost in ["the of and", "   "] {
            match engine.match_pair(lost, "wallet").unwrap() {
                MatchOutcome::Scored(result) => {
                    assert_eq!(result.all_methods, MethodScores::default());
                    assert_eq!(result.similarity, 0.0);
                    assert_eq!(result.method_used, Method::Tfidf);
                    assert!(!result.agreement_boost);
                    assert!(result.preprocessed_found.starts_with("wallet"));
                }
                other => panic!("expected scored outcome for {:?}, got {:?}", lost, other),
            }
        }
    }

    #[test]
    fn test_empty_match_wire_format() {
        let outcome = MatchOutcome::Empty(EmptyMatch {
            similarity_score: 0.0,
            preprocessed_lost: String::new(),
            preprocessed_found: "wallet ".to_string(),
            warning: EMPTY_AFTER_PREPROCESSING.to_string(),
        });
        let json = serde_json::to_value(&outcome).unwrap();
        assert_eq!(json["warning"], EMPTY_AFTER_PREPROCESSING);
        assert_eq!(json["similarity_score"], 0.0);
        assert!(json.get("method_used").is_none());
    }

    #[test]
    fn test_identical_descriptions() {
        match engine().match_pair("black phone", "black phone").unwrap() {
            MatchOutcome::Scored(result) => {
                assert_eq!(result.all_methods.jaccard, 1.0);
                assert_eq!(result.all_methods.matching_words, 1.0);
                assert_eq!(result.similarity, 1.0);
                assert!(result.agreement_boost);
            }
            other => panic!("expected scored outcome, got {:?}", other),
        }
    }

    #[test]
    fn test_invalid_config_rejected() {
        let config = EngineConfig {
            agreement_min_methods: 0,
            ..Default::default()
        };
        assert!(MatchEngine::with_capabilities(config, Capabilities::full()).is_err());
    }

    #[test]
    fn test_result_serializes_wire_names() {
        let outcome = engine().match_pair("red wallet", "red purse").unwrap();
        let json = serde_json::to_value(&outcome).unwrap();
        assert!(json.get("similarity_score").is_some());
        assert!(json["all_methods"].get("matching_words").is_some());
        assert!(json["method_used"].is_string());
        assert!(json.get("warning").is_none());
    }
}
