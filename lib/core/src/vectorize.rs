//! Request-scoped term vectorizers
//!
//! A [`TermVectorizer`] is fitted on a document set and returns an immutable
//! [`FittedVectorizer`]; nothing is cached between calls, so concurrent
//! requests never share fitting state.

use crate::stopwords::VECTORIZER_STOPWORDS;
use crate::{Error, Result};
use ahash::{AHashMap, AHashSet};
use std::collections::BTreeMap;

/// Term weighting scheme
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Weighting {
    /// Sublinear tf × smoothed idf, L2-normalized, frequent terms pruned
    TfIdf,
    /// Raw occurrence counts
    Count,
}

/// Terms present in more than this fraction of documents are pruned (TfIdf only)
const TFIDF_MAX_DF: f64 = 0.9;

/// Dense term-weight vector over a fitted vocabulary
#[derive(Debug, Clone, PartialEq)]
pub struct TermVector {
    data: Vec<f64>,
}

impl TermVector {
    #[inline]
    #[must_use]
    pub fn new(data: Vec<f64>) -> Self {
        Self { data }
    }

    #[inline]
    #[must_use]
    pub fn dim(&self) -> usize {
        self.data.len()
    }

    #[inline]
    #[must_use]
    pub fn as_slice(&self) -> &[f64] {
        &self.data
    }

    #[inline]
    pub fn norm(&self) -> f64 {
        self.data.iter().map(|x| x * x).sum::<f64>().sqrt()
    }

    /// Normalize the vector to unit length
    #[inline]
    pub fn normalize(&mut self) {
        let norm = self.norm();
        if norm > f64::EPSILON {
            let inv_norm = 1.0 / norm;
            for x in &mut self.data {
                *x *= inv_norm;
            }
        }
    }

    /// Cosine similarity; undefined when either vector is all zeros
    pub fn cosine_similarity(&self, other: &TermVector) -> Result<f64> {
        if self.dim() != other.dim() {
            return Err(Error::UndefinedScore("vector dimensions differ"));
        }

        let dot: f64 = self
            .data
            .iter()
            .zip(other.data.iter())
            .map(|(a, b)| a * b)
            .sum();
        let norm_a = self.norm();
        let norm_b = other.norm();

        if norm_a == 0.0 || norm_b == 0.0 {
            return Err(Error::UndefinedScore("zero vector"));
        }

        let cosine = dot / (norm_a * norm_b);
        if cosine.is_nan() {
            return Err(Error::UndefinedScore("NaN cosine"));
        }
        Ok(cosine)
    }
}

/// Unfitted vectorizer configuration
#[derive(Debug, Clone)]
pub struct TermVectorizer {
    weighting: Weighting,
    stopwords: AHashSet<&'static str>,
}

impl TermVectorizer {
    pub fn new(weighting: Weighting) -> Self {
        Self {
            weighting,
            stopwords: VECTORIZER_STOPWORDS.iter().copied().collect(),
        }
    }

    /// Lowercase, keep runs of two or more word characters, drop stopwords
    pub fn analyze(&self, text: &str) -> Vec<String> {
        text.to_lowercase()
            .split(|c: char| !(c.is_alphanumeric() || c == '_'))
            .filter(|s| s.chars().count() > 1)
            .filter(|s| !self.stopwords.contains(*s))
            .map(str::to_string)
            .collect()
    }

    /// Learn vocabulary (and idf for TfIdf) from `documents`
    pub fn fit(&self, documents: &[&str]) -> Result<FittedVectorizer> {
        let n_docs = documents.len();
        let mut doc_freq: BTreeMap<String, usize> = BTreeMap::new();

        for doc in documents {
            let unique: AHashSet<String> = self.analyze(doc).into_iter().collect();
            for term in unique {
                *doc_freq.entry(term).or_insert(0) += 1;
            }
        }

        if self.weighting == Weighting::TfIdf {
            let max_doc_count = TFIDF_MAX_DF * n_docs as f64;
            doc_freq.retain(|_, df| (*df as f64) <= max_doc_count);
        }

        if doc_freq.is_empty() {
            return Err(Error::EmptyVocabulary);
        }

        let mut vocabulary = AHashMap::with_capacity(doc_freq.len());
        let mut idf = Vec::with_capacity(doc_freq.len());
        for (idx, (term, df)) in doc_freq.into_iter().enumerate() {
            // Smoothed idf: ln((1 + n) / (1 + df)) + 1
            idf.push(((1.0 + n_docs as f64) / (1.0 + df as f64)).ln() + 1.0);
            vocabulary.insert(term, idx);
        }

        Ok(FittedVectorizer {
            analyzer: self.clone(),
            vocabulary,
            idf,
        })
    }
}

/// Vectorizer with a learned vocabulary. Immutable.
#[derive(Debug, Clone)]
pub struct FittedVectorizer {
    analyzer: TermVectorizer,
    vocabulary: AHashMap<String, usize>,
    idf: Vec<f64>,
}

impl FittedVectorizer {
    #[inline]
    pub fn vocabulary_size(&self) -> usize {
        self.vocabulary.len()
    }

    #[inline]
    pub fn contains_term(&self, term: &str) -> bool {
        self.vocabulary.contains_key(term)
    }

    pub fn transform(&self, text: &str) -> TermVector {
        let mut data = vec![0.0; self.vocabulary.len()];
        for token in self.analyzer.analyze(text) {
            if let Some(&idx) = self.vocabulary.get(&token) {
                data[idx] += 1.0;
            }
        }

        match self.analyzer.weighting {
            Weighting::Count => TermVector::new(data),
            Weighting::TfIdf => {
                for (idx, x) in data.iter_mut().enumerate() {
                    if *x > 0.0 {
                        *x = (1.0 + x.ln()) * self.idf[idx];
                    }
                }
                let mut vector = TermVector::new(data);
                vector.normalize();
                vector
            }
        }
    }
}

/// Fit a fresh vectorizer on `{a, b} ∪ seed` and return the cosine of `a` and `b`
pub fn pair_cosine(weighting: Weighting, a: &str, b: &str, seed: &[String]) -> Result<f64> {
    let mut documents: Vec<&str> = Vec::with_capacity(seed.len() + 2);
    documents.push(a);
    documents.push(b);
    documents.extend(seed.iter().map(String::as_str));

    let fitted = TermVectorizer::new(weighting).fit(&documents)?;
    fitted.transform(a).cosine_similarity(&fitted.transform(b))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DEFAULT_SEED_CORPUS;

    fn seed() -> Vec<String> {
        DEFAULT_SEED_CORPUS.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_analyze() {
        let vectorizer = TermVectorizer::new(Weighting::Count);
        assert_eq!(
            vectorizer.analyze("The BLACK phone, a x found"),
            vec!["black", "phone"]
        );
    }

    #[test]
    fn test_tfidf_prunes_ubiquitous_terms() {
        let fitted = TermVectorizer::new(Weighting::TfIdf)
            .fit(&["phone black", "phone red", "phone wallet", "phone keys"])
            .unwrap();
        assert!(!fitted.contains_term("phone"));
        assert!(fitted.contains_term("black"));
        assert_eq!(fitted.vocabulary_size(), 4);
    }

    #[test]
    fn test_count_keeps_all_terms() {
        let fitted = TermVectorizer::new(Weighting::Count)
            .fit(&["phone black", "phone red"])
            .unwrap();
        assert!(fitted.contains_term("phone"));
        assert_eq!(fitted.transform("phone phone").as_slice().iter().sum::<f64>(), 2.0);
    }

    #[test]
    fn test_empty_vocabulary() {
        let result = TermVectorizer::new(Weighting::Count).fit(&["the a of", "x y"]);
        assert!(matches!(result, Err(Error::EmptyVocabulary)));
    }

    #[test]
    fn test_tfidf_rows_are_unit_length() {
        let fitted = TermVectorizer::new(Weighting::TfIdf)
            .fit(&["black wallet", "blue wallet leather", "phone"])
            .unwrap();
        let v = fitted.transform("blue wallet wallet");
        assert!((v.norm() - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_pair_cosine_identical() {
        for weighting in [Weighting::TfIdf, Weighting::Count] {
            let score = pair_cosine(weighting, "black wallet", "black wallet", &seed()).unwrap();
            assert!((score - 1.0).abs() < 1e-9);
        }
    }

    #[test]
    fn test_pair_cosine_disjoint() {
        let score = pair_cosine(Weighting::Count, "umbrella", "laptop computer", &seed()).unwrap();
        assert!(score.abs() < 1e-9);
    }

    #[test]
    fn test_pair_cosine_out_of_vocabulary_is_undefined() {
        // "found" is a vectorizer stopword, leaving the second vector empty
        let result = pair_cosine(Weighting::Count, "umbrella", "found", &seed());
        assert!(matches!(result, Err(Error::UndefinedScore(_))));
    }

    #[test]
    fn test_cosine_similarity() {
        let v1 = TermVector::new(vec![1.0, 0.0]);
        let v2 = TermVector::new(vec![0.0, 1.0]);
        assert!(v1.cosine_similarity(&v2).unwrap().abs() < 1e-12);
        assert!((v1.cosine_similarity(&v1).unwrap() - 1.0).abs() < 1e-12);
    }
}
