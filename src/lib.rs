//! # FindIt Match
//!
//! Description matching service for a lost & found application: scores how
//! similar a "lost" report is to a "found" report.
//!
//! ## Quick Start
//!
//! ### As a Server
//!
//! ```bash
//! findit-match --port 5001
//! curl -X POST localhost:5001/match \
//!     -H 'content-type: application/json' \
//!     -d '{"lost_desc": "black iphone", "found_desc": "dark apple phone"}'
//! ```
//!
//! ### As a Library
//!
//! ```rust,no_run
//! use findit_match::prelude::*;
//!
//! let engine = MatchEngine::new(EngineConfig::default()).unwrap();
//! let outcome = engine.match_pair("black iphone", "dark apple phone").unwrap();
//! println!("similarity: {}", outcome.similarity());
//! ```
//!
//! ## Crate Structure
//!
//! - `findit-core` - Lexicon, normalization, expansion, similarity methods, fusion
//! - `findit-api` - REST API (`POST /match`, `GET /health`)
//!
//! ## Pipeline
//!
//! 1. **Normalize**: lowercase, strip punctuation, drop stopwords, lemmatize
//! 2. **Expand**: inject related terms, reinforce unbranded item types
//! 3. **Features**: append colors, brands (double weight) and item types
//! 4. **Score**: TF-IDF cosine, count cosine, Jaccard, synonym-aware word matching
//! 5. **Fuse**: best score, plus a small boost when methods agree

// Re-export core types
pub use findit_core::{
    Aggregator, Capabilities, EmptyMatch, EngineConfig, Error, Lexicon, MatchEngine,
    MatchOutcome, MatchResult, Method, MethodScores, ResourceConfig, Result,
};

// Re-export API
pub use findit_api::RestApi;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::{
        Capabilities, EngineConfig, Error, MatchEngine, MatchOutcome, MatchResult, Method,
        MethodScores, ResourceConfig, RestApi, Result,
    };
}
