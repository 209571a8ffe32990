use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};

use crate::engine::constants::NEUTRAL_PRIOR;
use crate::engine::scoring::clamp01;
use crate::error::OrryxError;
use crate::models::{Mood, MoodMap};

/// Per-user learned state.
///
/// Snapshots are immutable: every mutation returns a new value and callers
/// replace their reference wholesale. Sets serialize as ordered sequences
/// and reconstruct as sets on load.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct UserPreferences {
    /// Favorited restaurant ids.
    pub favorites: BTreeSet<String>,

    /// Learned affinity per (mood, restaurant id), in [0,1]. Absent = unrated.
    pub affinity: MoodMap<BTreeMap<String, f64>>,

    /// Rating count per (mood, restaurant id).
    pub counts: MoodMap<BTreeMap<String, u32>>,

    /// Restaurant ids the user has rated for any mood.
    pub seen: BTreeSet<String>,
}

impl UserPreferences {
    /// Learned affinity for a (mood, restaurant) pair, if ever rated.
    pub fn affinity_for(&self, mood: Mood, id: &str) -> Option<f64> {
        self.affinity.get(mood).get(id).copied()
    }

    /// Rating count for a (mood, restaurant) pair.
    pub fn count_for(&self, mood: Mood, id: &str) -> u32 {
        self.counts.get(mood).get(id).copied().unwrap_or(0)
    }

    pub fn is_favorite(&self, id: &str) -> bool {
        self.favorites.contains(id)
    }

    /// Whether the user has ever rated this restaurant, for any mood.
    pub fn has_rated(&self, id: &str) -> bool {
        self.seen.contains(id)
    }

    /// Record a post-meal rating: push affinity toward 1.0 by an exponential
    /// moving average with the given step, bump the rating count, and mark
    /// the restaurant seen.
    ///
    /// A never-rated pair starts from the neutral prior, not from zero.
    /// Repeated ratings approach 1.0 asymptotically.
    pub fn with_rating(&self, id: &str, mood: Mood, step: f64) -> Self {
        let mut next = self.clone();

        let prev = self.affinity_for(mood, id).unwrap_or(NEUTRAL_PRIOR);
        let updated = clamp01(prev * (1.0 - step) + step);
        next.affinity.get_mut(mood).insert(id.to_string(), updated);

        *next.counts.get_mut(mood).entry(id.to_string()).or_insert(0) += 1;
        next.seen.insert(id.to_string());

        next
    }

    /// Toggle favorite membership for a restaurant id.
    pub fn with_favorite_toggled(&self, id: &str) -> Self {
        let mut next = self.clone();
        if !next.favorites.remove(id) {
            next.favorites.insert(id.to_string());
        }
        next
    }

    /// Drop all rating history (affinity, counts, seen), keeping favorites.
    pub fn with_ratings_cleared(&self) -> Self {
        Self {
            favorites: self.favorites.clone(),
            ..Self::default()
        }
    }

    pub fn with_favorites_cleared(&self) -> Self {
        Self {
            favorites: BTreeSet::new(),
            ..self.clone()
        }
    }
}

/// Visual theme, stored separately from preferences.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Midnight,
    Daybreak,
    System,
}

impl Theme {
    pub const ALL: [Theme; 3] = [Theme::Midnight, Theme::Daybreak, Theme::System];

    pub fn as_str(&self) -> &'static str {
        match self {
            Theme::Midnight => "midnight",
            Theme::Daybreak => "daybreak",
            Theme::System => "system",
        }
    }
}

impl std::str::FromStr for Theme {
    type Err = OrryxError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "midnight" => Ok(Theme::Midnight),
            "daybreak" => Ok(Theme::Daybreak),
            "system" => Ok(Theme::System),
            other => Err(OrryxError::UnknownTheme(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_float_eq::assert_float_absolute_eq;

    #[test]
    fn test_first_rating_from_neutral_prior() {
        let prefs = UserPreferences::default();
        let rated = prefs.with_rating("r_sushi_kumo", Mood::Joy, 0.3);

        // 0.5 * 0.7 + 0.3
        assert_float_absolute_eq!(
            rated.affinity_for(Mood::Joy, "r_sushi_kumo").unwrap(),
            0.65,
            1e-9
        );
        assert_eq!(rated.count_for(Mood::Joy, "r_sushi_kumo"), 1);
        assert!(rated.has_rated("r_sushi_kumo"));
    }

    #[test]
    fn test_repeated_ratings_approach_one() {
        let mut prefs = UserPreferences::default();
        let mut last = 0.0;
        for _ in 0..50 {
            prefs = prefs.with_rating("r_x", Mood::Calm, 0.25);
            let a = prefs.affinity_for(Mood::Calm, "r_x").unwrap();
            assert!(a > last);
            assert!(a <= 1.0);
            last = a;
        }
        assert!(last > 0.999);
        assert!(last < 1.0);
        assert_eq!(prefs.count_for(Mood::Calm, "r_x"), 50);
    }

    #[test]
    fn test_rating_does_not_mutate_input() {
        let prefs = UserPreferences::default();
        let _ = prefs.with_rating("r_x", Mood::Joy, 0.25);
        assert!(prefs.affinity_for(Mood::Joy, "r_x").is_none());
        assert_eq!(prefs, UserPreferences::default());
    }

    #[test]
    fn test_rating_is_per_mood() {
        let prefs = UserPreferences::default().with_rating("r_x", Mood::Joy, 0.25);
        assert!(prefs.affinity_for(Mood::Calm, "r_x").is_none());
        assert_eq!(prefs.count_for(Mood::Calm, "r_x"), 0);
        // Global seen marker covers all moods.
        assert!(prefs.has_rated("r_x"));
    }

    #[test]
    fn test_favorite_toggle() {
        let prefs = UserPreferences::default();
        let on = prefs.with_favorite_toggled("r_x");
        assert!(on.is_favorite("r_x"));
        let off = on.with_favorite_toggled("r_x");
        assert!(!off.is_favorite("r_x"));
    }

    #[test]
    fn test_ratings_cleared_keeps_favorites() {
        let prefs = UserPreferences::default()
            .with_favorite_toggled("r_x")
            .with_rating("r_x", Mood::Warm, 0.25);
        let cleared = prefs.with_ratings_cleared();
        assert!(cleared.is_favorite("r_x"));
        assert!(!cleared.has_rated("r_x"));
        assert!(cleared.affinity_for(Mood::Warm, "r_x").is_none());
    }

    #[test]
    fn test_serde_round_trip() {
        let prefs = UserPreferences::default()
            .with_favorite_toggled("r_a")
            .with_rating("r_a", Mood::Joy, 0.25)
            .with_rating("r_b", Mood::Upset, 0.3);

        let json = serde_json::to_string(&prefs).unwrap();
        let back: UserPreferences = serde_json::from_str(&json).unwrap();
        assert_eq!(back, prefs);
    }

    #[test]
    fn test_theme_parse() {
        assert_eq!("Daybreak".parse::<Theme>().unwrap(), Theme::Daybreak);
        assert!("neon".parse::<Theme>().is_err());
        assert_eq!(Theme::default(), Theme::Midnight);
    }
}
