/// Weight on a restaurant's static base score for the target mood.
pub const BASE_WEIGHT: f64 = 0.6;

/// Weight on the user's learned affinity for the (restaurant, mood) pair.
///
/// The two weights sum to 1.2 on purpose: once learned signal is
/// established it can dominate the blend, and the clamp ceiling absorbs
/// the overflow. Do not normalize them into a convex combination.
pub const AFFINITY_WEIGHT: f64 = 0.6;

/// Starting affinity for a never-rated pair when the first rating lands.
pub const NEUTRAL_PRIOR: f64 = 0.5;

/// EMA step for a standard post-meal rating.
pub const RATING_STEP: f64 = 0.25;

/// EMA step for a strong ("really hit the spot") rating.
pub const RATING_STEP_STRONG: f64 = 0.3;

/// A restaurant is loved for a mood only after this many ratings...
pub const LOVED_MIN_COUNT: u32 = 2;

/// ...and only once affinity has reached this floor.
pub const LOVED_MIN_AFFINITY: f64 = 0.6;

/// Search blends the Joy score with the all-mood mean at these weights.
pub const SEARCH_JOY_WEIGHT: f64 = 0.6;
pub const SEARCH_MEAN_WEIGHT: f64 = 0.4;

/// Maximum results returned by a search.
pub const SEARCH_LIMIT: usize = 12;

/// Maximum suggestion strings returned for a query.
pub const SUGGESTION_LIMIT: usize = 6;

/// Default length of a mood recommendation list.
pub const DEFAULT_RECOMMEND_LIMIT: usize = 8;
