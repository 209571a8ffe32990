use clap::{Parser, Subcommand};

use crate::engine::constants::DEFAULT_RECOMMEND_LIMIT;

/// Orryx — mood-based restaurant recommendations that learn what you love.
#[derive(Parser, Debug)]
#[command(name = "orryx")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Directory holding the user profile (preferences and theme).
    #[arg(short, long, default_value = "orryx_profile")]
    pub profile: String,

    /// Optional JSON catalog file (defaults to the built-in catalog).
    #[arg(short, long)]
    pub catalog: Option<String>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Recommend restaurants for a mood.
    Recommend {
        /// Target mood (joy, calm, energized, warm, upset). Prompts if omitted.
        #[arg(short, long)]
        mood: Option<String>,

        /// Number of recommendations.
        #[arg(short, long, default_value_t = DEFAULT_RECOMMEND_LIMIT)]
        limit: usize,
    },

    /// Search the catalog by free text and optional tag.
    Search {
        /// Query matched against names, cuisines, and tags.
        query: String,

        /// Only include restaurants carrying this exact tag.
        #[arg(short, long)]
        tag: Option<String>,
    },

    /// Show search suggestions for a partial query.
    Suggest { query: String },

    /// Record how a meal landed.
    Rate {
        /// Restaurant name. Prompts (with fuzzy matching) if omitted.
        #[arg(short, long)]
        restaurant: Option<String>,

        /// Mood the meal delivered. Prompts if omitted.
        #[arg(short, long)]
        mood: Option<String>,

        /// The meal really hit the spot (larger learning step).
        #[arg(long)]
        strong: bool,
    },

    /// Toggle a restaurant in the favorites set.
    Favorite {
        /// Restaurant name.
        name: String,
    },

    /// List favorites.
    Favorites,

    /// Show or set the visual theme (midnight, daybreak, system).
    Theme {
        /// New theme. Prints the current theme if omitted.
        name: Option<String>,
    },

    /// Print share text for a restaurant.
    Share {
        /// Restaurant name.
        name: String,
    },

    /// Export the per-mood match-score matrix as CSV.
    Export {
        /// Output CSV path.
        #[arg(long, default_value = "orryx_scores.csv")]
        csv: String,
    },

    /// Reset parts of the stored profile.
    Reset {
        /// Drop all rating history (affinity, counts, seen).
        #[arg(long)]
        ratings: bool,

        /// Clear the favorites set.
        #[arg(long)]
        favorites: bool,

        /// Restore the default theme.
        #[arg(long)]
        theme: bool,
    },
}

impl Default for Command {
    fn default() -> Self {
        Command::Recommend {
            mood: None,
            limit: DEFAULT_RECOMMEND_LIMIT,
        }
    }
}
