use crate::models::{Mood, Restaurant};

/// The mood a restaurant is strongest for (ties keep canonical mood order).
pub fn strongest_mood(restaurant: &Restaurant) -> Mood {
    let mut best = Mood::Joy;
    let mut best_score = f64::NEG_INFINITY;
    for mood in Mood::ALL {
        let score = *restaurant.mood_scores.get(mood);
        if score > best_score {
            best = mood;
            best_score = score;
        }
    }
    best
}

/// Share text for a restaurant. Best-effort side-channel only; the caller
/// decides where the text goes.
pub fn share_text(restaurant: &Restaurant) -> String {
    let mood = strongest_mood(restaurant);
    let tags: Vec<&str> = restaurant.tags.iter().map(String::as_str).collect();
    format!(
        "Orryx pick for {}: {} - {} in {} ({}). {}",
        mood.label(),
        restaurant.name,
        restaurant.cuisine,
        restaurant.area,
        restaurant.price.symbol(),
        tags.join(" · ")
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;

    #[test]
    fn test_strongest_mood() {
        let catalog = Catalog::builtin();
        let pho = catalog.get("r_pho_lantern").unwrap();
        assert_eq!(strongest_mood(pho), Mood::Warm);
    }

    #[test]
    fn test_share_text_content() {
        let catalog = Catalog::builtin();
        let kumo = catalog.get("r_sushi_kumo").unwrap();
        let text = share_text(kumo);

        assert!(text.contains("Sushi Kumo"));
        assert!(text.contains("Japanese"));
        assert!(text.contains("$$$"));
        assert!(text.contains("omakase"));
    }
}
