mod mood;
mod prefs;
mod restaurant;

pub use mood::{Mood, MoodMap};
pub use prefs::{Theme, UserPreferences};
pub use restaurant::{PriceTier, Restaurant};
