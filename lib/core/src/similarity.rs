//! Multi-method similarity between two preprocessed descriptions
//!
//! All scores are in [0.0, 1.0] where 1.0 means identical. A method that
//! fails contributes 0.0 and never aborts the others.

use crate::lexicon::Lexicon;
use crate::vectorize::{pair_cosine, Weighting};
use crate::Result;
use ahash::AHashSet;
use serde::Serialize;
use std::sync::Arc;
use tracing::{debug, warn};

/// Similarity methods, in tie-breaking order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Method {
    Tfidf,
    Count,
    Jaccard,
    MatchingWords,
}

impl Method {
    pub const ALL: [Method; 4] = [
        Method::Tfidf,
        Method::Count,
        Method::Jaccard,
        Method::MatchingWords,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Method::Tfidf => "tfidf",
            Method::Count => "count",
            Method::Jaccard => "jaccard",
            Method::MatchingWords => "matching_words",
        }
    }
}

impl std::fmt::Display for Method {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Per-method scores for one description pair
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct MethodScores {
    pub tfidf: f64,
    pub count: f64,
    pub jaccard: f64,
    pub matching_words: f64,
}

impl MethodScores {
    pub fn get(&self, method: Method) -> f64 {
        match method {
            Method::Tfidf => self.tfidf,
            Method::Count => self.count,
            Method::Jaccard => self.jaccard,
            Method::MatchingWords => self.matching_words,
        }
    }

    fn set(&mut self, method: Method, score: f64) {
        match method {
            Method::Tfidf => self.tfidf = score,
            Method::Count => self.count = score,
            Method::Jaccard => self.jaccard = score,
            Method::MatchingWords => self.matching_words = score,
        }
    }

    /// `(method, score)` pairs in tie-breaking order
    pub fn iter(&self) -> impl Iterator<Item = (Method, f64)> + '_ {
        Method::ALL.iter().map(move |m| (*m, self.get(*m)))
    }
}

/// Jaccard index of the whitespace token sets
pub fn jaccard_similarity(a: &str, b: &str) -> f64 {
    let set_a: AHashSet<&str> = a.split_whitespace().collect();
    let set_b: AHashSet<&str> = b.split_whitespace().collect();

    let intersection = set_a.intersection(&set_b).count();
    let union = set_a.len() + set_b.len() - intersection;

    if union == 0 {
        return 0.0;
    }
    intersection as f64 / union as f64
}

/// Exact token overlap plus half credit for every ordered token pair
/// `(w1 ∈ a, w2 ∈ b)` where `w2` is a related term of `w1`.
///
/// Repeated tokens are not deduplicated for the synonym credit, so a token
/// occurring twice counts twice. The raw value can exceed 1.0.
pub fn matching_words_similarity(a: &str, b: &str, lexicon: &Lexicon) -> f64 {
    let words_a: Vec<&str> = a.split_whitespace().collect();
    let words_b: Vec<&str> = b.split_whitespace().collect();

    let set_a: AHashSet<&str> = words_a.iter().copied().collect();
    let set_b: AHashSet<&str> = words_b.iter().copied().collect();
    let exact = set_a.intersection(&set_b).count() as f64;

    let mut synonym = 0.0;
    for w1 in &words_a {
        if let Some(related) = lexicon.synonyms.related(w1) {
            for w2 in &words_b {
                if related.contains(w2) {
                    synonym += 0.5;
                }
            }
        }
    }

    let total = set_a.union(&set_b).count();
    if total == 0 {
        return 0.0;
    }
    (exact + synonym) / total as f64
}

pub struct SimilarityEngine {
    lexicon: Arc<Lexicon>,
    seed_corpus: Vec<String>,
}

impl SimilarityEngine {
    pub fn new(lexicon: Arc<Lexicon>, seed_corpus: Vec<String>) -> Self {
        Self {
            lexicon,
            seed_corpus,
        }
    }

    /// Run a single method
    pub fn compute(&self, method: Method, a: &str, b: &str) -> Result<f64> {
        match method {
            Method::Tfidf => pair_cosine(Weighting::TfIdf, a, b, &self.seed_corpus),
            Method::Count => pair_cosine(Weighting::Count, a, b, &self.seed_corpus),
            Method::Jaccard => Ok(jaccard_similarity(a, b)),
            Method::MatchingWords => Ok(matching_words_similarity(a, b, &self.lexicon)),
        }
    }

    /// Run every method; failures score 0.0, results are clamped to [0, 1]
    pub fn score_all(&self, a: &str, b: &str) -> MethodScores {
        let mut scores = MethodScores::default();

        for method in Method::ALL {
            let score = match self.compute(method, a, b) {
                Ok(score) => score.clamp(0.0, 1.0),
                Err(e) => {
                    warn!("{} similarity calculation failed: {}", method, e);
                    0.0
                }
            };
            debug!("{} similarity: {}", method, score);
            scores.set(method, score);
        }

        scores
    }
}
