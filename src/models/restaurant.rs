use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::models::MoodMap;

/// Price tier, ordered cheapest to priciest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PriceTier {
    Budget,
    Moderate,
    Upscale,
    Luxury,
}

impl PriceTier {
    /// "$" through "$$$$".
    pub fn symbol(&self) -> &'static str {
        match self {
            PriceTier::Budget => "$",
            PriceTier::Moderate => "$$",
            PriceTier::Upscale => "$$$",
            PriceTier::Luxury => "$$$$",
        }
    }
}

/// A catalog entry. Static at runtime; all mutable signal lives in
/// [`UserPreferences`](crate::models::UserPreferences).
///
/// `mood_scores` holds the base association between this restaurant and each
/// mood, every value in [0,1].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Restaurant {
    pub id: String,
    pub name: String,
    pub cuisine: String,
    pub tags: BTreeSet<String>,
    pub mood_scores: MoodMap<f64>,
    pub price: PriceTier,
    pub area: String,
}

impl Restaurant {
    /// Case-insensitive substring match over name, cuisine, and tags.
    ///
    /// `needle` must already be lowercase. An empty needle matches.
    pub fn matches_text(&self, needle: &str) -> bool {
        self.name.to_lowercase().contains(needle)
            || self.cuisine.to_lowercase().contains(needle)
            || self.tags.iter().any(|t| t.to_lowercase().contains(needle))
    }

    /// Exact tag membership, case-insensitive.
    pub fn has_tag(&self, tag: &str) -> bool {
        let tag = tag.to_lowercase();
        self.tags.iter().any(|t| t.to_lowercase() == tag)
    }
}
