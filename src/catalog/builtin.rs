use crate::models::{MoodMap, PriceTier, Restaurant};

/// Seed terms offered by search suggestions before any catalog text.
pub const SUGGESTION_SEEDS: &[&str] = &[
    "date night",
    "comfort food",
    "quick bite",
    "late night",
    "cozy",
    "spicy",
    "healthy",
    "brunch",
    "dessert",
    "patio",
];

fn restaurant(
    id: &str,
    name: &str,
    cuisine: &str,
    tags: &[&str],
    scores: [f64; 5],
    price: PriceTier,
    area: &str,
) -> Restaurant {
    let [joy, calm, energized, warm, upset] = scores;
    Restaurant {
        id: id.to_string(),
        name: name.to_string(),
        cuisine: cuisine.to_string(),
        tags: tags.iter().map(|t| t.to_string()).collect(),
        mood_scores: MoodMap {
            joy,
            calm,
            energized,
            warm,
            upset,
        },
        price,
        area: area.to_string(),
    }
}

/// The built-in fifteen-restaurant catalog.
///
/// Scores are [joy, calm, energized, warm, upset].
pub(crate) fn builtin_restaurants() -> Vec<Restaurant> {
    vec![
        restaurant(
            "r_sushi_kumo",
            "Sushi Kumo",
            "Japanese",
            &["sushi", "omakase", "date night"],
            [0.8, 0.7, 0.4, 0.5, 0.3],
            PriceTier::Upscale,
            "Riverside",
        ),
        restaurant(
            "r_taco_vida",
            "Taco Vida",
            "Mexican",
            &["tacos", "spicy", "late night"],
            [0.9, 0.3, 0.8, 0.5, 0.6],
            PriceTier::Budget,
            "Old Market",
        ),
        restaurant(
            "r_pho_lantern",
            "Pho Lantern",
            "Vietnamese",
            &["pho", "soup", "comfort food"],
            [0.5, 0.8, 0.4, 0.9, 0.8],
            PriceTier::Budget,
            "Chinatown",
        ),
        restaurant(
            "r_brick_ember",
            "Brick & Ember",
            "Pizza",
            &["wood-fired", "family", "casual"],
            [0.8, 0.5, 0.6, 0.7, 0.5],
            PriceTier::Moderate,
            "Midtown",
        ),
        restaurant(
            "r_green_bowl",
            "Green Bowl",
            "Salads",
            &["vegan", "healthy", "quick bite"],
            [0.5, 0.7, 0.9, 0.3, 0.2],
            PriceTier::Moderate,
            "Arts District",
        ),
        restaurant(
            "r_noodle_forge",
            "Noodle Forge",
            "Ramen",
            &["ramen", "broth", "cozy"],
            [0.6, 0.7, 0.5, 0.9, 0.7],
            PriceTier::Moderate,
            "Chinatown",
        ),
        restaurant(
            "r_ember_grill",
            "Ember Grill",
            "Steakhouse",
            &["steak", "celebration", "wine"],
            [0.9, 0.4, 0.7, 0.6, 0.4],
            PriceTier::Luxury,
            "Financial District",
        ),
        restaurant(
            "r_casa_luna",
            "Casa Luna",
            "Italian",
            &["pasta", "romantic", "wine"],
            [0.8, 0.6, 0.4, 0.8, 0.5],
            PriceTier::Upscale,
            "Riverside",
        ),
        restaurant(
            "r_morning_finch",
            "Morning Finch",
            "Cafe",
            &["brunch", "coffee", "pastries"],
            [0.7, 0.9, 0.5, 0.6, 0.4],
            PriceTier::Budget,
            "Arts District",
        ),
        restaurant(
            "r_spice_route",
            "Spice Route",
            "Indian",
            &["curry", "spicy", "vegetarian"],
            [0.7, 0.4, 0.8, 0.8, 0.6],
            PriceTier::Moderate,
            "Midtown",
        ),
        restaurant(
            "r_harbor_catch",
            "Harbor Catch",
            "Seafood",
            &["oysters", "fresh", "waterfront"],
            [0.8, 0.7, 0.5, 0.4, 0.3],
            PriceTier::Upscale,
            "Harborfront",
        ),
        restaurant(
            "r_seoul_social",
            "Seoul Social",
            "Korean",
            &["bbq", "group", "lively"],
            [0.9, 0.2, 0.9, 0.6, 0.5],
            PriceTier::Moderate,
            "Old Market",
        ),
        restaurant(
            "r_petit_four",
            "Petit Four",
            "Dessert",
            &["pastries", "dessert", "tea"],
            [0.8, 0.8, 0.3, 0.7, 0.9],
            PriceTier::Budget,
            "Arts District",
        ),
        restaurant(
            "r_bao_house",
            "Bao House",
            "Chinese",
            &["dumplings", "quick bite", "comfort food"],
            [0.6, 0.5, 0.6, 0.8, 0.7],
            PriceTier::Budget,
            "Chinatown",
        ),
        restaurant(
            "r_fig_olive",
            "Fig & Olive",
            "Mediterranean",
            &["mezze", "healthy", "patio"],
            [0.7, 0.9, 0.6, 0.5, 0.3],
            PriceTier::Upscale,
            "Harborfront",
        ),
    ]
}
