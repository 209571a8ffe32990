use crate::engine::constants::*;
use crate::models::{Mood, Restaurant, UserPreferences};

/// Clamp to the unit interval.
#[inline]
pub fn clamp01(value: f64) -> f64 {
    value.clamp(0.0, 1.0)
}

/// Match score for a restaurant under a target mood.
///
/// Blends the catalog base score with the learned affinity (0.0 when the
/// pair has never been rated) and clamps the result. Pure function of its
/// inputs; ties between equal scores are left to the caller.
pub fn score_for_mood(restaurant: &Restaurant, mood: Mood, prefs: &UserPreferences) -> f64 {
    let base = *restaurant.mood_scores.get(mood);
    let affinity = prefs.affinity_for(mood, &restaurant.id).unwrap_or(0.0);
    clamp01(BASE_WEIGHT * base + AFFINITY_WEIGHT * affinity)
}

/// Whether a restaurant is loved for a mood.
///
/// Requires sustained signal (count gate) and strong sentiment (affinity
/// gate); a single enthusiastic rating satisfies neither alone.
pub fn is_loved(id: &str, mood: Mood, prefs: &UserPreferences) -> bool {
    prefs.count_for(mood, id) >= LOVED_MIN_COUNT
        && prefs
            .affinity_for(mood, id)
            .is_some_and(|a| a >= LOVED_MIN_AFFINITY)
}

/// Mood-agnostic score used by the search flow: the Joy score weighted
/// against the mean score across all moods.
pub fn search_score(restaurant: &Restaurant, prefs: &UserPreferences) -> f64 {
    let joy = score_for_mood(restaurant, Mood::Joy, prefs);
    let mean = Mood::ALL
        .iter()
        .map(|&m| score_for_mood(restaurant, m, prefs))
        .sum::<f64>()
        / Mood::ALL.len() as f64;
    SEARCH_JOY_WEIGHT * joy + SEARCH_MEAN_WEIGHT * mean
}
