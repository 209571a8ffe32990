pub mod constants;
pub mod ranking;
pub mod scoring;

pub use constants::*;
pub use ranking::{rank_for_mood, rank_for_search, suggestions};
pub use scoring::{clamp01, is_loved, score_for_mood, search_score};
