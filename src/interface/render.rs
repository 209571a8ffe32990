use crate::catalog::Catalog;
use crate::engine::scoring::is_loved;
use crate::models::{Mood, Restaurant, UserPreferences};

fn badges(restaurant: &Restaurant, mood: Mood, prefs: &UserPreferences) -> String {
    let mut tags = Vec::new();

    if prefs.count_for(mood, &restaurant.id) == 0 {
        tags.push("new".to_string());
    } else if is_loved(&restaurant.id, mood, prefs) {
        tags.push("loved".to_string());
    }

    if prefs.is_favorite(&restaurant.id) {
        tags.push("fav".to_string());
    }

    if tags.is_empty() {
        String::new()
    } else {
        format!("  [{}]", tags.join(", "))
    }
}

/// Display a ranked recommendation list for a mood.
pub fn display_ranked(mood: Mood, ranked: &[(&Restaurant, f64)], prefs: &UserPreferences) {
    if ranked.is_empty() {
        println!("Nothing to recommend (empty catalog).");
        return;
    }

    println!();
    println!("=== Best for {} ===", mood.label());
    println!();

    let max_name_len = ranked.iter().map(|(r, _)| r.name.len()).max().unwrap_or(10);

    for (i, (restaurant, score)) in ranked.iter().enumerate() {
        println!(
            "{:>3}. {:<width$} {:>4} | {} ({}) | {:>3.0}% match{}",
            i + 1,
            restaurant.name,
            restaurant.price.symbol(),
            restaurant.cuisine,
            restaurant.area,
            score * 100.0,
            badges(restaurant, mood, prefs),
            width = max_name_len
        );
    }

    println!();
}

/// Display search results, or the explicit no-matches state.
pub fn display_search_results(
    query: &str,
    results: &[(&Restaurant, f64)],
    prefs: &UserPreferences,
) {
    if results.is_empty() {
        println!("No matches for '{}'.", query);
        return;
    }

    println!();
    println!("=== Matches for '{}' ({} found) ===", query, results.len());
    println!();

    let max_name_len = results.iter().map(|(r, _)| r.name.len()).max().unwrap_or(10);

    for (restaurant, score) in results {
        let fav = if prefs.is_favorite(&restaurant.id) {
            "  [fav]"
        } else {
            ""
        };
        println!(
            "  {:<width$} {:>4} | {} ({}) | {:>3.0}% match{}",
            restaurant.name,
            restaurant.price.symbol(),
            restaurant.cuisine,
            restaurant.area,
            score * 100.0,
            fav,
            width = max_name_len
        );
    }

    println!();
}

/// Display suggestion strings.
pub fn display_suggestions(query: &str, suggestions: &[String]) {
    if suggestions.is_empty() {
        println!("No suggestions for '{}'.", query);
        return;
    }

    println!("Try: {}", suggestions.join(", "));
}

/// Display the favorites list.
pub fn display_favorites(catalog: &Catalog, prefs: &UserPreferences) {
    if prefs.favorites.is_empty() {
        println!("No favorites yet. Use 'favorite <name>' to add one.");
        return;
    }

    println!();
    println!("=== Favorites ({}) ===", prefs.favorites.len());
    println!();

    for id in &prefs.favorites {
        match catalog.get(id) {
            Some(r) => println!("  {} - {} ({})", r.name, r.cuisine, r.area),
            // Favorite from a different catalog file; show the raw id.
            None => println!("  {}", id),
        }
    }

    println!();
}
