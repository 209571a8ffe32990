pub mod prompts;
pub mod render;

pub use prompts::{prompt_mood, prompt_restaurant, prompt_yes_no, resolve_restaurant};
pub use render::{display_favorites, display_ranked, display_search_results, display_suggestions};
