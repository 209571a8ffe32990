use std::cmp::Ordering;

use crate::catalog::Catalog;
use crate::engine::constants::{SEARCH_LIMIT, SUGGESTION_LIMIT};
use crate::engine::scoring::{is_loved, score_for_mood, search_score};
use crate::models::{Mood, Restaurant, UserPreferences};

/// Sort (restaurant, score) pairs descending by score.
///
/// The sort is stable, so equal scores keep their existing (catalog) order.
fn sort_by_score_desc(entries: &mut [(&Restaurant, f64)]) {
    entries.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(Ordering::Equal));
}

/// Rank the catalog for a target mood.
///
/// Scores every entry, then interleaves restaurants the user has never
/// rated for this mood with loved ones, so novelty surfaces without
/// starving proven favorites. Seen-but-not-loved entries only fill
/// whatever slots remain.
///
/// "New" is judged per mood: a restaurant rated only for other moods still
/// counts as new here.
pub fn rank_for_mood<'a>(
    catalog: &'a Catalog,
    mood: Mood,
    prefs: &UserPreferences,
    limit: usize,
) -> Vec<(&'a Restaurant, f64)> {
    let mut scored: Vec<(&Restaurant, f64)> = catalog
        .restaurants()
        .iter()
        .map(|r| (r, score_for_mood(r, mood, prefs)))
        .collect();
    sort_by_score_desc(&mut scored);

    let mut fresh = Vec::new();
    let mut loved = Vec::new();
    let mut seen_not_loved = Vec::new();
    for entry in scored {
        let id = entry.0.id.as_str();
        if prefs.count_for(mood, id) == 0 {
            fresh.push(entry);
        } else if is_loved(id, mood, prefs) {
            loved.push(entry);
        } else {
            seen_not_loved.push(entry);
        }
    }

    let mut out = Vec::with_capacity(limit.min(catalog.len()));
    let (mut i, mut j) = (0, 0);

    // One new, one loved, until either cursor runs out or the list fills.
    while out.len() < limit && i < fresh.len() && j < loved.len() {
        out.push(fresh[i]);
        i += 1;
        if out.len() < limit {
            out.push(loved[j]);
            j += 1;
        }
    }

    out.extend_from_slice(&fresh[i..]);
    out.extend_from_slice(&loved[j..]);
    out.extend(seen_not_loved);
    out.truncate(limit);
    out
}

/// Find-It flow: filter by free-text query and optional tag, score with the
/// mood-agnostic search blend, and return a plain score-sorted list.
pub fn rank_for_search<'a>(
    catalog: &'a Catalog,
    query: &str,
    tag_filter: Option<&str>,
    prefs: &UserPreferences,
) -> Vec<(&'a Restaurant, f64)> {
    let needle = query.trim().to_lowercase();

    let mut hits: Vec<(&Restaurant, f64)> = catalog
        .restaurants()
        .iter()
        .filter(|r| r.matches_text(&needle))
        .filter(|r| tag_filter.is_none_or(|tag| r.has_tag(tag)))
        .map(|r| (r, search_score(r, prefs)))
        .collect();

    sort_by_score_desc(&mut hits);
    hits.truncate(SEARCH_LIMIT);
    hits
}

/// Suggestion strings for a partial query: substring matches over the
/// catalog vocabulary. An empty query suggests nothing.
pub fn suggestions(catalog: &Catalog, query: &str) -> Vec<String> {
    let needle = query.trim().to_lowercase();
    if needle.is_empty() {
        return Vec::new();
    }

    catalog
        .vocabulary()
        .into_iter()
        .filter(|term| term.to_lowercase().contains(&needle))
        .take(SUGGESTION_LIMIT)
        .collect()
}
