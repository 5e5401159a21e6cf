//! Token lemmatization
//!
//! [`RuleLemmatizer`] reduces plural nouns to their base form using suffix
//! rules and a small irregular table. Other parts of speech pass through.

use crate::Result;

/// Reduces a token to its base form
pub trait Lemmatizer: Send + Sync {
    fn lemmatize(&self, token: &str) -> Result<String>;
}

/// Irregular plurals seen in item descriptions
const IRREGULAR: &[(&str, &str)] = &[
    ("children", "child"),
    ("people", "person"),
    ("men", "man"),
    ("women", "woman"),
    ("feet", "foot"),
    ("teeth", "tooth"),
    ("mice", "mouse"),
    ("knives", "knife"),
    ("wives", "wife"),
    ("lives", "life"),
    ("leaves", "leaf"),
    ("scarves", "scarf"),
    ("halves", "half"),
    ("shelves", "shelf"),
    ("wolves", "wolf"),
    ("geese", "goose"),
    ("indices", "index"),
    ("matrices", "matrix"),
    ("buses", "bus"),
    ("campuses", "campus"),
    ("viruses", "virus"),
    ("gases", "gas"),
];

/// Words ending in `s` that are their own base form
const INVARIANT: &[&str] = &[
    "atlas", "canvas", "christmas", "lens", "news", "pajamas", "scissors", "series", "species",
];

/// Words ending in `men` that are not compounds of `man`
const NOT_MAN_COMPOUNDS: &[&str] = &[
    "abdomen", "acumen", "albumen", "amen", "bitumen", "dolmen", "hymen", "lumen", "omen", "ramen",
    "regimen", "semen", "specimen", "stamen",
];

/// Endings that look plural but are already singular
const SINGULAR_ENDINGS: &[&str] = &["ss", "us", "is", "ous"];

/// Noun lemmatizer based on suffix detachment rules
#[derive(Debug, Clone, Copy, Default)]
pub struct RuleLemmatizer;

impl RuleLemmatizer {
    pub fn new() -> Self {
        Self
    }

    fn reduce(token: &str) -> String {
        if let Some((_, lemma)) = IRREGULAR.iter().find(|(plural, _)| *plural == token) {
            return lemma.to_string();
        }

        if INVARIANT.contains(&token) {
            return token.to_string();
        }

        // sportsmen -> sportsman, firemen -> fireman
        if let Some(stem) = token.strip_suffix("men") {
            if !stem.is_empty() && token.is_ascii() && !NOT_MAN_COMPOUNDS.contains(&token) {
                return format!("{stem}man");
            }
        }

        if token.len() <= 3 || !token.is_ascii() || !token.ends_with('s') {
            return token.to_string();
        }

        if SINGULAR_ENDINGS.iter().any(|e| token.ends_with(e)) {
            return token.to_string();
        }

        if let Some(stem) = token.strip_suffix("ies") {
            if stem.len() > 1 {
                return format!("{stem}y");
            }
        }

        // glasses -> glass, boxes -> box, watches -> watch
        if let Some(stem) = token.strip_suffix("es") {
            if stem.ends_with("ss")
                || stem.ends_with('x')
                || stem.ends_with('z')
                || stem.ends_with("ch")
                || stem.ends_with("sh")
            {
                return stem.to_string();
            }
        }

        token[..token.len() - 1].to_string()
    }
}

impl Lemmatizer for RuleLemmatizer {
    fn lemmatize(&self, token: &str) -> Result<String> {
        Ok(Self::reduce(token))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lemma(token: &str) -> String {
        RuleLemmatizer::new().lemmatize(token).unwrap()
    }

    #[test]
    fn test_regular_plurals() {
        assert_eq!(lemma("bags"), "bag");
        assert_eq!(lemma("keys"), "key");
        assert_eq!(lemma("phones"), "phone");
        assert_eq!(lemma("shoes"), "shoe");
        assert_eq!(lemma("cases"), "case");
    }

    #[test]
    fn test_sibilant_plurals() {
        assert_eq!(lemma("glasses"), "glass");
        assert_eq!(lemma("boxes"), "box");
        assert_eq!(lemma("watches"), "watch");
        assert_eq!(lemma("brushes"), "brush");
    }

    #[test]
    fn test_ies_and_irregular() {
        assert_eq!(lemma("batteries"), "battery");
        assert_eq!(lemma("knives"), "knife");
        assert_eq!(lemma("children"), "child");
        assert_eq!(lemma("women"), "woman");
        assert_eq!(lemma("buses"), "bus");
    }

    #[test]
    fn test_man_compounds() {
        assert_eq!(lemma("sportsmen"), "sportsman");
        assert_eq!(lemma("firemen"), "fireman");
        assert_eq!(lemma("ramen"), "ramen");
        assert_eq!(lemma("specimen"), "specimen");
    }

    #[test]
    fn test_invariant_s_words() {
        assert_eq!(lemma("lens"), "lens");
        assert_eq!(lemma("canvas"), "canvas");
        assert_eq!(lemma("series"), "series");
        assert_eq!(lemma("umbrellas"), "umbrella");
        assert_eq!(lemma("buttons"), "button");
        assert_eq!(lemma("flies"), "fly");
    }

    #[test]
    fn test_singular_passthrough() {
        assert_eq!(lemma("glass"), "glass");
        assert_eq!(lemma("campus"), "campus");
        assert_eq!(lemma("iris"), "iris");
        assert_eq!(lemma("bus"), "bus");
        assert_eq!(lemma("phone"), "phone");
        assert_eq!(lemma("black"), "black");
    }
}
