//! Lexical expansion and feature extraction
//!
//! The expander grows a normalized token sequence with related terms from the
//! lexicon. The feature extractor pulls color, brand and item-type signal out
//! of the cleaned raw text.

use crate::lexicon::Lexicon;
use std::sync::Arc;

pub struct Expander {
    lexicon: Arc<Lexicon>,
    max_synonyms: usize,
}

impl Expander {
    pub fn new(lexicon: Arc<Lexicon>, max_synonyms: usize) -> Self {
        Self {
            lexicon,
            max_synonyms,
        }
    }

    /// Append related terms and item-type reinforcement to a normalized text.
    ///
    /// Original tokens keep their order; appended terms follow. An item type
    /// mentioned without any of its brands is appended once more.
    pub fn expand(&self, normalized: &str) -> String {
        let words: Vec<&str> = normalized.split_whitespace().collect();
        let mut expanded: Vec<&str> = words.clone();

        for word in &words {
            if let Some(related) = self.lexicon.synonyms.related(word) {
                expanded.extend(related.iter().take(self.max_synonyms).copied());
            }
        }

        for (item_type, brands) in self.lexicon.brands.iter() {
            if !words.contains(&item_type) {
                continue;
            }
            let brand_mentioned = brands.iter().any(|brand| normalized.contains(brand));
            if !brand_mentioned {
                expanded.push(item_type);
            }
        }

        expanded.join(" ")
    }
}

pub struct FeatureExtractor {
    lexicon: Arc<Lexicon>,
}

impl FeatureExtractor {
    pub fn new(lexicon: Arc<Lexicon>) -> Self {
        Self { lexicon }
    }

    /// Signal tokens found as substrings of `text`: colors, then brands
    /// (each twice), then item types
    pub fn extract(&self, text: &str) -> Vec<&'static str> {
        let mut features = Vec::new();

        for color in self.lexicon.colors() {
            if text.contains(color) {
                features.push(*color);
            }
        }

        for brand in self.lexicon.all_brands() {
            if text.contains(brand) {
                features.push(*brand);
                features.push(*brand);
            }
        }

        for item_type in self.lexicon.brands.item_types() {
            if text.contains(item_type) {
                features.push(item_type);
            }
        }

        features
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lexicon() -> Arc<Lexicon> {
        Arc::new(Lexicon::new())
    }

    #[test]
    fn test_expand_caps_synonyms() {
        let expander = Expander::new(lexicon(), 2);
        assert_eq!(expander.expand("black"), "black dark ebony");
        assert_eq!(expander.expand("dark"), "dark black");
    }

    #[test]
    fn test_expand_reinforces_unbranded_item_type() {
        let expander = Expander::new(lexicon(), 2);
        assert_eq!(expander.expand("black phone"), "black phone dark ebony mobile cell phone");
    }

    #[test]
    fn test_expand_brand_suppresses_reinforcement() {
        let expander = Expander::new(lexicon(), 2);
        assert_eq!(expander.expand("samsung phone"), "samsung phone mobile cell");
    }

    #[test]
    fn test_expand_unknown_tokens_untouched() {
        let expander = Expander::new(lexicon(), 2);
        assert_eq!(expander.expand("umbrella"), "umbrella");
        assert_eq!(expander.expand(""), "");
    }

    #[test]
    fn test_extract_order_and_brand_weight() {
        let extractor = FeatureExtractor::new(lexicon());
        let features = extractor.extract("black apple phone");
        assert_eq!(features, vec!["black", "apple", "apple", "phone"]);
    }

    #[test]
    fn test_extract_substring_matching() {
        let extractor = FeatureExtractor::new(lexicon());
        // "iphone" contains both the brand "iphone" and the item type "phone"
        let features = extractor.extract("iphone");
        assert_eq!(features, vec!["iphone", "iphone", "phone"]);
        assert!(extractor.extract("umbrella").is_empty());
    }
}
