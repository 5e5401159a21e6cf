//! Score fusion

use crate::similarity::{Method, MethodScores};
use serde::Serialize;

/// Fused similarity for one pair
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Aggregate {
    pub similarity: f64,
    pub method_used: Method,
    pub agreement_boost: bool,
}

/// Takes the best method score and adds a small boost when enough methods agree
#[derive(Debug, Clone, Copy)]
pub struct Aggregator {
    threshold: f64,
    min_methods: usize,
    boost: f64,
}

impl Aggregator {
    pub fn new(threshold: f64, min_methods: usize, boost: f64) -> Self {
        Self {
            threshold,
            min_methods,
            boost,
        }
    }

    pub fn aggregate(&self, scores: &MethodScores) -> Aggregate {
        // First method reaching the maximum wins ties
        let (method_used, best) = scores
            .iter()
            .fold((Method::Tfidf, f64::NEG_INFINITY), |(m, best), (method, score)| {
                if score > best {
                    (method, score)
                } else {
                    (m, best)
                }
            });

        let agreeing = scores.iter().filter(|(_, s)| *s > self.threshold).count();
        let agreement_boost = agreeing >= self.min_methods;

        let similarity = if agreement_boost {
            (best + self.boost).min(1.0)
        } else {
            best
        };

        Aggregate {
            similarity,
            method_used,
            agreement_boost,
        }
    }
}

impl Default for Aggregator {
    fn default() -> Self {
        Self::new(0.4, 2, 0.05)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scores(tfidf: f64, count: f64, jaccard: f64, matching_words: f64) -> MethodScores {
        MethodScores {
            tfidf,
            count,
            jaccard,
            matching_words,
        }
    }

    #[test]
    fn test_max_without_boost() {
        let result = Aggregator::default().aggregate(&scores(0.1, 0.3, 0.5, 0.2));
        assert_eq!(result.similarity, 0.5);
        assert_eq!(result.method_used, Method::Jaccard);
        assert!(!result.agreement_boost);
    }

    #[test]
    fn test_boost_when_two_agree() {
        let result = Aggregator::default().aggregate(&scores(0.6, 0.45, 0.1, 0.0));
        assert!(result.agreement_boost);
        assert!((result.similarity - 0.65).abs() < 1e-12);
        assert_eq!(result.method_used, Method::Tfidf);
    }

    #[test]
    fn test_threshold_is_strict() {
        let result = Aggregator::default().aggregate(&scores(0.4, 0.4, 0.4, 0.9));
        assert!(!result.agreement_boost);
        assert_eq!(result.similarity, 0.9);
    }

    #[test]
    fn test_boost_capped_at_one() {
        let result = Aggregator::default().aggregate(&scores(1.0, 0.98, 1.0, 1.0));
        assert!(result.agreement_boost);
        assert_eq!(result.similarity, 1.0);
    }

    #[test]
    fn test_tie_resolves_to_first_method() {
        let result = Aggregator::default().aggregate(&scores(0.3, 0.7, 0.7, 0.7));
        assert_eq!(result.method_used, Method::Count);
    }

    #[test]
    fn test_all_zero() {
        let result = Aggregator::default().aggregate(&MethodScores::default());
        assert_eq!(result.similarity, 0.0);
        assert_eq!(result.method_used, Method::Tfidf);
        assert!(!result.agreement_boost);
    }
}
