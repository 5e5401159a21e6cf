//! # FindIt Core
//!
//! Text-similarity engine for matching lost-item reports against found-item
//! reports.
//!
//! This crate provides:
//!
//! - [`Lexicon`] - Domain synonym, brand and color tables
//! - [`Normalizer`] - Lowercasing, tokenization, stopword removal, lemmatization
//! - [`Expander`] / [`FeatureExtractor`] - Lexicon-driven expansion and signal tokens
//! - [`SimilarityEngine`] - TF-IDF cosine, count cosine, Jaccard, synonym-aware word matching
//! - [`Aggregator`] - Max fusion with multi-method agreement boost
//! - [`MatchEngine`] - The full pipeline
//!
//! ## Example
//!
//! ```rust
//! use findit_core::{EngineConfig, MatchEngine, MatchOutcome};
//!
//! let engine = MatchEngine::new(EngineConfig::default()).unwrap();
//! match engine.match_pair("black iphone", "dark apple phone").unwrap() {
//!     MatchOutcome::Scored(result) => {
//!         println!("{} via {}", result.similarity, result.method_used);
//!     }
//!     MatchOutcome::Empty(empty) => println!("{}", empty.warning),
//! }
//! ```

pub mod aggregate;
pub mod capabilities;
pub mod config;
pub mod engine;
pub mod error;
pub mod expand;
pub mod lemmatize;
pub mod lexicon;
pub mod normalize;
pub mod similarity;
pub mod stopwords;
pub mod vectorize;

pub use aggregate::{Aggregate, Aggregator};
pub use capabilities::Capabilities;
pub use config::{EngineConfig, ResourceConfig, DEFAULT_SEED_CORPUS};
pub use engine::{EmptyMatch, MatchEngine, MatchOutcome, MatchResult, Preprocessor};
pub use error::{Error, Result};
pub use expand::{Expander, FeatureExtractor};
pub use lemmatize::{Lemmatizer, RuleLemmatizer};
pub use lexicon::{BrandTable, Lexicon, SynonymTable};
pub use normalize::{clean_text, Normalizer};
pub use similarity::{jaccard_similarity, matching_words_similarity, Method, MethodScores, SimilarityEngine};
pub use stopwords::StopwordSet;
pub use vectorize::{FittedVectorizer, TermVector, TermVectorizer, Weighting};
