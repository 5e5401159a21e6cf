//! Lost & found lexicon
//!
//! Static domain vocabulary used by the expander, the feature extractor and
//! the synonym-credit similarity method:
//!
//! - [`SynonymTable`]: bidirectional related-term lookup
//! - [`BrandTable`]: item type → brand names
//! - color keys: the subset of synonym keys that name colors
//!
//! Built once at startup and shared read-only (`Arc<Lexicon>`).

use ahash::AHashMap;

/// Seed synonym groups: canonical term → related terms, in priority order.
/// The first entries of each list are the ones the expander injects.
const SYNONYM_SEED: &[(&str, &[&str])] = &[
    // Places
    ("cafeteria", &["dining", "canteen", "cafe", "food court", "restaurant", "lunch room"]),
    ("library", &["book", "study", "reading", "lib"]),
    ("classroom", &["class", "lecture", "room", "hall", "theater"]),
    ("bathroom", &["restroom", "toilet", "washroom", "lavatory"]),
    ("parking", &["car park", "garage", "lot"]),
    ("gym", &["fitness", "sport", "exercise", "workout"]),
    ("dorm", &["dormitory", "residence", "housing", "apartment"]),
    // Common items
    ("phone", &["mobile", "cell", "smartphone", "iphone", "android", "device"]),
    ("laptop", &["computer", "notebook", "macbook", "pc", "chromebook"]),
    ("wallet", &["purse", "billfold", "pocketbook", "card holder"]),
    ("keys", &["keychain", "key ring", "car key", "fob"]),
    ("backpack", &["bag", "knapsack", "rucksack", "pack", "sack"]),
    ("bottle", &["water bottle", "flask", "thermos", "container", "tumbler"]),
    ("watch", &["wristwatch", "timepiece", "clock", "smartwatch"]),
    ("glasses", &["eyeglasses", "spectacles", "sunglasses", "eyewear"]),
    // Colors
    ("black", &["dark", "ebony", "jet"]),
    ("white", &["light", "ivory", "cream", "pale"]),
    ("blue", &["navy", "azure", "teal", "turquoise"]),
    ("red", &["crimson", "scarlet", "maroon", "burgundy"]),
    ("green", &["emerald", "lime", "olive", "forest"]),
    ("brown", &["tan", "beige", "khaki", "chocolate", "leather"]),
    ("gray", &["grey", "silver", "charcoal", "ash"]),
    ("yellow", &["gold", "amber", "blonde"]),
];

/// Synonym keys that name colors
const COLOR_KEYS: &[&str] = &["black", "white", "blue", "red", "green", "brown", "gray", "yellow"];

/// Item type → common brands. Order is significant: the expander appends
/// reinforced item types in this order.
const BRAND_SEED: &[(&str, &[&str])] = &[
    (
        "phone",
        &[
            "apple", "samsung", "iphone", "google", "pixel", "huawei", "oneplus", "xiaomi", "oppo",
            "vivo", "motorola", "lg", "nokia",
        ],
    ),
    (
        "laptop",
        &[
            "apple", "dell", "hp", "lenovo", "asus", "acer", "microsoft", "msi", "toshiba",
            "samsung", "huawei", "razer",
        ],
    ),
    (
        "watch",
        &[
            "apple", "samsung", "fitbit", "garmin", "fossil", "rolex", "casio", "citizen", "seiko",
            "timex",
        ],
    ),
    (
        "shoes",
        &[
            "nike", "adidas", "puma", "reebok", "converse", "vans", "new balance", "asics",
            "sketchers",
        ],
    ),
    (
        "bags",
        &["jansport", "north face", "nike", "adidas", "herschel", "kipling", "samsonite", "tumi"],
    ),
];

/// Symmetric related-term table.
///
/// For every seed entry `term → [related..]`, each related term maps back to
/// `term` as well, so `b ∈ table[a]` implies `a ∈ table[b]`.
#[derive(Debug, Clone, Default)]
pub struct SynonymTable {
    entries: AHashMap<&'static str, Vec<&'static str>>,
}

impl SynonymTable {
    /// Build and symmetrize a table from seed groups
    pub fn from_seed(seed: &[(&'static str, &'static [&'static str])]) -> Self {
        let mut entries: AHashMap<&'static str, Vec<&'static str>> = AHashMap::new();

        for &(term, related) in seed {
            let forward = entries.entry(term).or_default();
            for &r in related {
                if !forward.contains(&r) {
                    forward.push(r);
                }
            }
            for &r in related {
                let back = entries.entry(r).or_default();
                if !back.contains(&term) {
                    back.push(term);
                }
            }
        }

        Self { entries }
    }

    /// Related terms for `term`, in priority order
    #[inline]
    pub fn related(&self, term: &str) -> Option<&[&'static str]> {
        self.entries.get(term).map(Vec::as_slice)
    }

    #[inline]
    pub fn contains(&self, term: &str) -> bool {
        self.entries.contains_key(term)
    }

    /// Whether `other` is listed among the related terms of `term`
    #[inline]
    pub fn are_related(&self, term: &str, other: &str) -> bool {
        self.related(term)
            .map_or(false, |related| related.iter().any(|r| *r == other))
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Item type → brand names. Not symmetrized.
#[derive(Debug, Clone, Default)]
pub struct BrandTable {
    entries: Vec<(&'static str, &'static [&'static str])>,
}

impl BrandTable {
    pub fn from_seed(seed: &[(&'static str, &'static [&'static str])]) -> Self {
        Self {
            entries: seed.to_vec(),
        }
    }

    /// `(item_type, brands)` pairs in table order
    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &'static [&'static str])> + '_ {
        self.entries.iter().copied()
    }

    /// Item type keys in table order
    pub fn item_types(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.entries.iter().map(|(item_type, _)| *item_type)
    }

    /// Union of all brands, deduplicated, in first-seen order
    pub fn all_brands(&self) -> Vec<&'static str> {
        let mut brands: Vec<&'static str> = Vec::new();
        for (_, list) in &self.entries {
            for brand in list.iter() {
                if !brands.contains(brand) {
                    brands.push(brand);
                }
            }
        }
        brands
    }
}

/// The full domain lexicon
#[derive(Debug, Clone)]
pub struct Lexicon {
    pub synonyms: SynonymTable,
    pub brands: BrandTable,
    colors: Vec<&'static str>,
    all_brands: Vec<&'static str>,
}

impl Lexicon {
    /// Build the built-in lost & found lexicon
    pub fn new() -> Self {
        let synonyms = SynonymTable::from_seed(SYNONYM_SEED);
        let brands = BrandTable::from_seed(BRAND_SEED);
        let all_brands = brands.all_brands();

        Self {
            synonyms,
            brands,
            colors: COLOR_KEYS.to_vec(),
            all_brands,
        }
    }

    /// Color terms scanned by the feature extractor
    #[inline]
    pub fn colors(&self) -> &[&'static str] {
        &self.colors
    }

    /// Union of all brand names across item types
    #[inline]
    pub fn all_brands(&self) -> &[&'static str] {
        &self.all_brands
    }
}

impl Default for Lexicon {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_synonyms_are_symmetric() {
        let lexicon = Lexicon::new();
        for &(term, related) in SYNONYM_SEED {
            for r in related {
                assert!(lexicon.synonyms.are_related(term, r), "{term} -> {r}");
                assert!(lexicon.synonyms.are_related(r, term), "{r} -> {term}");
            }
        }
    }

    #[test]
    fn test_forward_order_preserved() {
        let lexicon = Lexicon::new();
        let related = lexicon.synonyms.related("black").unwrap();
        assert_eq!(&related[..2], &["dark", "ebony"]);
        assert_eq!(lexicon.synonyms.related("dark").unwrap(), &["black"]);
    }

    #[test]
    fn test_unknown_term() {
        let lexicon = Lexicon::new();
        assert!(lexicon.synonyms.related("umbrella").is_none());
        assert!(!lexicon.synonyms.are_related("umbrella", "black"));
    }

    #[test]
    fn test_colors_are_synonym_keys() {
        let lexicon = Lexicon::new();
        assert_eq!(lexicon.colors().len(), 8);
        for color in lexicon.colors() {
            assert!(lexicon.synonyms.contains(color));
        }
    }

    #[test]
    fn test_all_brands_deduplicated() {
        let lexicon = Lexicon::new();
        let brands = lexicon.all_brands();
        assert_eq!(brands.iter().filter(|b| **b == "apple").count(), 1);
        assert_eq!(brands.iter().filter(|b| **b == "nike").count(), 1);
        assert!(brands.contains(&"north face"));
    }

    #[test]
    fn test_brand_table_order() {
        let lexicon = Lexicon::new();
        let types: Vec<_> = lexicon.brands.item_types().collect();
        assert_eq!(types, vec!["phone", "laptop", "watch", "shoes", "bags"]);
    }
}
