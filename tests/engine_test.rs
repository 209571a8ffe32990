use assert_float_eq::assert_float_absolute_eq;

use orryx::catalog::Catalog;
use orryx::engine::constants::{BASE_WEIGHT, RATING_STEP, RATING_STEP_STRONG};
use orryx::engine::{clamp01, is_loved, score_for_mood};
use orryx::models::{Mood, UserPreferences};

#[test]
fn test_unrated_score_equals_weighted_base_for_whole_catalog() {
    let catalog = Catalog::builtin();
    let prefs = UserPreferences::default();

    for r in catalog.restaurants() {
        for mood in Mood::ALL {
            let expected = clamp01(BASE_WEIGHT * *r.mood_scores.get(mood));
            assert_float_absolute_eq!(score_for_mood(r, mood, &prefs), expected, 1e-9);
        }
    }
}

#[test]
fn test_single_strong_rating_from_fresh_state() {
    let prefs = UserPreferences::default().with_rating("r_taco_vida", Mood::Joy, RATING_STEP_STRONG);

    // 0.5 * 0.7 + 0.3
    assert_float_absolute_eq!(
        prefs.affinity_for(Mood::Joy, "r_taco_vida").unwrap(),
        0.65,
        1e-9
    );
}

#[test]
fn test_sushi_kumo_three_joy_ratings() {
    let catalog = Catalog::builtin();
    assert!(catalog.get("r_sushi_kumo").is_some());

    let mut prefs = UserPreferences::default();
    let expected = [0.625, 0.71875, 0.7890625];

    for (i, want) in expected.iter().enumerate() {
        prefs = prefs.with_rating("r_sushi_kumo", Mood::Joy, RATING_STEP);

        let affinity = prefs.affinity_for(Mood::Joy, "r_sushi_kumo").unwrap();
        assert_float_absolute_eq!(affinity, *want, 1e-9);
        assert_eq!(prefs.count_for(Mood::Joy, "r_sushi_kumo"), (i + 1) as u32);

        // Loved kicks in at the second rating: count 2, affinity 0.71875.
        let loved = is_loved("r_sushi_kumo", Mood::Joy, &prefs);
        assert_eq!(loved, i >= 1, "after rating {}", i + 1);
    }

    assert!(prefs.has_rated("r_sushi_kumo"));
}

#[test]
fn test_ratings_climb_monotonically_and_never_exceed_one() {
    let mut prefs = UserPreferences::default();
    let mut last = 0.0;
    for _ in 0..200 {
        prefs = prefs.with_rating("r_pho_lantern", Mood::Warm, RATING_STEP_STRONG);
        let affinity = prefs.affinity_for(Mood::Warm, "r_pho_lantern").unwrap();
        assert!(affinity >= last);
        assert!(affinity <= 1.0);
        last = affinity;
    }
}

#[test]
fn test_preferences_round_trip_through_json() {
    let mut prefs = UserPreferences::default()
        .with_favorite_toggled("r_casa_luna")
        .with_favorite_toggled("r_fig_olive");
    prefs = prefs
        .with_rating("r_sushi_kumo", Mood::Joy, RATING_STEP)
        .with_rating("r_sushi_kumo", Mood::Joy, RATING_STEP)
        .with_rating("r_pho_lantern", Mood::Upset, RATING_STEP_STRONG);

    let json = serde_json::to_string_pretty(&prefs).unwrap();
    let reloaded: UserPreferences = serde_json::from_str(&json).unwrap();

    assert_eq!(reloaded.favorites, prefs.favorites);
    assert_eq!(reloaded.seen, prefs.seen);
    assert_eq!(reloaded, prefs);
    assert_eq!(
        reloaded.affinity_for(Mood::Joy, "r_sushi_kumo"),
        prefs.affinity_for(Mood::Joy, "r_sushi_kumo")
    );
    assert_eq!(reloaded.count_for(Mood::Upset, "r_pho_lantern"), 1);
}
