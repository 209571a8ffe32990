mod builtin;

pub use builtin::SUGGESTION_SEEDS;

use std::collections::{BTreeSet, HashMap};
use std::fs;
use std::path::Path;

use crate::engine::scoring::clamp01;
use crate::error::Result;
use crate::models::{Mood, Restaurant};

/// Read-only repository over the restaurant list.
///
/// Preserves catalog order, which doubles as the tie-break order for equal
/// scores everywhere downstream.
pub struct Catalog {
    restaurants: Vec<Restaurant>,
}

impl Catalog {
    /// Build a catalog from a restaurant list.
    ///
    /// Deduplicates by id (last occurrence wins, original position kept)
    /// and clamps every mood score into [0,1].
    pub fn new(restaurants: Vec<Restaurant>) -> Self {
        let mut index: HashMap<String, usize> = HashMap::new();
        let mut list: Vec<Restaurant> = Vec::with_capacity(restaurants.len());

        for mut r in restaurants {
            for mood in Mood::ALL {
                let score = r.mood_scores.get_mut(mood);
                *score = clamp01(*score);
            }
            match index.get(&r.id) {
                Some(&pos) => list[pos] = r,
                None => {
                    index.insert(r.id.clone(), list.len());
                    list.push(r);
                }
            }
        }

        Self { restaurants: list }
    }

    /// The built-in fifteen-restaurant catalog.
    pub fn builtin() -> Self {
        Self::new(builtin::builtin_restaurants())
    }

    pub fn restaurants(&self) -> &[Restaurant] {
        &self.restaurants
    }

    /// Look up a restaurant by id.
    pub fn get(&self, id: &str) -> Option<&Restaurant> {
        self.restaurants.iter().find(|r| r.id == id)
    }

    /// Look up a restaurant by display name (case-insensitive).
    pub fn find_by_name(&self, name: &str) -> Option<&Restaurant> {
        let name = name.trim().to_lowercase();
        self.restaurants
            .iter()
            .find(|r| r.name.to_lowercase() == name)
    }

    pub fn len(&self) -> usize {
        self.restaurants.len()
    }

    pub fn is_empty(&self) -> bool {
        self.restaurants.is_empty()
    }

    /// Suggestion vocabulary: seed terms, then names, cuisines, and tags in
    /// catalog order, deduplicated case-insensitively (first spelling wins).
    pub fn vocabulary(&self) -> Vec<String> {
        let mut seen: BTreeSet<String> = BTreeSet::new();
        let mut vocab: Vec<String> = Vec::new();

        let candidates = SUGGESTION_SEEDS
            .iter()
            .map(|s| s.to_string())
            .chain(self.restaurants.iter().flat_map(|r| {
                std::iter::once(r.name.clone())
                    .chain(std::iter::once(r.cuisine.clone()))
                    .chain(r.tags.iter().cloned())
            }));

        for term in candidates {
            if seen.insert(term.to_lowercase()) {
                vocab.push(term);
            }
        }

        vocab
    }
}

/// Load a catalog from a JSON file.
pub fn load_catalog<P: AsRef<Path>>(path: P) -> Result<Catalog> {
    let content = fs::read_to_string(path)?;
    let restaurants: Vec<Restaurant> = serde_json::from_str(&content)?;
    Ok(Catalog::new(restaurants))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{MoodMap, PriceTier};
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_builtin_catalog_shape() {
        let catalog = Catalog::builtin();
        assert_eq!(catalog.len(), 15);

        let ids: BTreeSet<&str> = catalog
            .restaurants()
            .iter()
            .map(|r| r.id.as_str())
            .collect();
        assert_eq!(ids.len(), 15);

        for r in catalog.restaurants() {
            for mood in Mood::ALL {
                let score = *r.mood_scores.get(mood);
                assert!((0.0..=1.0).contains(&score), "{} {:?}", r.id, mood);
            }
            assert!(!r.tags.is_empty());
        }
    }

    #[test]
    fn test_lookup() {
        let catalog = Catalog::builtin();
        assert!(catalog.get("r_sushi_kumo").is_some());
        assert!(catalog.get("r_nope").is_none());
        assert_eq!(
            catalog.find_by_name("sushi kumo").unwrap().id,
            "r_sushi_kumo"
        );
        assert!(catalog.find_by_name("sushi").is_none());
    }

    #[test]
    fn test_new_dedup_keeps_last_and_clamps() {
        let mut a = Catalog::builtin().get("r_sushi_kumo").unwrap().clone();
        a.mood_scores.joy = 1.7;
        let mut b = a.clone();
        b.name = "Sushi Kumo II".to_string();

        let catalog = Catalog::new(vec![a, b]);
        assert_eq!(catalog.len(), 1);
        let kept = catalog.get("r_sushi_kumo").unwrap();
        assert_eq!(kept.name, "Sushi Kumo II");
        assert_eq!(kept.mood_scores.joy, 1.0);
    }

    #[test]
    fn test_vocabulary_dedup() {
        let catalog = Catalog::builtin();
        let vocab = catalog.vocabulary();

        let mut lowered: Vec<String> = vocab.iter().map(|t| t.to_lowercase()).collect();
        lowered.sort();
        lowered.dedup();
        assert_eq!(lowered.len(), vocab.len());

        // Seeds come first, catalog text follows.
        assert_eq!(vocab[0], SUGGESTION_SEEDS[0]);
        assert!(vocab.iter().any(|t| t == "Sushi Kumo"));
        assert!(vocab.iter().any(|t| t == "omakase"));
    }

    #[test]
    fn test_load_catalog_from_json() {
        let restaurants = vec![Restaurant {
            id: "r_file".to_string(),
            name: "From File".to_string(),
            cuisine: "Fusion".to_string(),
            tags: ["test"].into_iter().map(String::from).collect(),
            mood_scores: MoodMap {
                joy: 0.5,
                calm: 0.5,
                energized: 0.5,
                warm: 0.5,
                upset: 0.5,
            },
            price: PriceTier::Moderate,
            area: "Nowhere".to_string(),
        }];
        let json = serde_json::to_string_pretty(&restaurants).unwrap();

        let mut file = NamedTempFile::new().unwrap();
        file.write_all(json.as_bytes()).unwrap();

        let catalog = load_catalog(file.path()).unwrap();
        assert_eq!(catalog.len(), 1);
        assert_eq!(catalog.get("r_file").unwrap().name, "From File");
    }

    #[test]
    fn test_load_catalog_malformed_is_an_error() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(b"not json").unwrap();
        assert!(load_catalog(file.path()).is_err());
    }
}
