use clap::Parser;

use orryx::catalog::{Catalog, load_catalog};
use orryx::cli::{Cli, Command};
use orryx::engine::constants::{RATING_STEP, RATING_STEP_STRONG};
use orryx::engine::{is_loved, rank_for_mood, rank_for_search, suggestions};
use orryx::error::Result;
use orryx::export::write_score_matrix;
use orryx::interface::{
    display_favorites, display_ranked, display_search_results, display_suggestions, prompt_mood,
    prompt_restaurant, prompt_yes_no, resolve_restaurant,
};
use orryx::models::{Mood, Theme};
use orryx::share::share_text;
use orryx::state::ProfileStore;

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    let command = cli.command.unwrap_or_default();

    let store = ProfileStore::new(&cli.profile);
    let catalog = match &cli.catalog {
        Some(path) => load_catalog(path)?,
        None => Catalog::builtin(),
    };

    match command {
        Command::Recommend { mood, limit } => cmd_recommend(&catalog, &store, mood, limit),
        Command::Search { query, tag } => cmd_search(&catalog, &store, &query, tag.as_deref()),
        Command::Suggest { query } => cmd_suggest(&catalog, &query),
        Command::Rate {
            restaurant,
            mood,
            strong,
        } => cmd_rate(&catalog, &store, restaurant, mood, strong),
        Command::Favorite { name } => cmd_favorite(&catalog, &store, &name),
        Command::Favorites => cmd_favorites(&catalog, &store),
        Command::Theme { name } => cmd_theme(&store, name),
        Command::Share { name } => cmd_share(&catalog, &name),
        Command::Export { csv } => cmd_export(&catalog, &store, &csv),
        Command::Reset {
            ratings,
            favorites,
            theme,
        } => cmd_reset(&store, ratings, favorites, theme),
    }
}

/// Rank the catalog for a mood and display it.
fn cmd_recommend(
    catalog: &Catalog,
    store: &ProfileStore,
    mood: Option<String>,
    limit: usize,
) -> Result<()> {
    let prefs = store.load_prefs();

    let mood: Mood = match mood {
        Some(m) => m.parse()?,
        None => prompt_mood("How do you want to feel?")?,
    };

    let ranked = rank_for_mood(catalog, mood, &prefs, limit);
    display_ranked(mood, &ranked, &prefs);

    Ok(())
}

/// Find-It flow: free-text search with optional tag filter.
fn cmd_search(
    catalog: &Catalog,
    store: &ProfileStore,
    query: &str,
    tag: Option<&str>,
) -> Result<()> {
    let prefs = store.load_prefs();

    let results = rank_for_search(catalog, query, tag, &prefs);
    display_search_results(query, &results, &prefs);

    if results.is_empty() {
        let hints = suggestions(catalog, query);
        if !hints.is_empty() {
            display_suggestions(query, &hints);
        }
    }

    Ok(())
}

fn cmd_suggest(catalog: &Catalog, query: &str) -> Result<()> {
    display_suggestions(query, &suggestions(catalog, query));
    Ok(())
}

/// Record one or more post-meal ratings.
fn cmd_rate(
    catalog: &Catalog,
    store: &ProfileStore,
    restaurant: Option<String>,
    mood: Option<String>,
    strong: bool,
) -> Result<()> {
    let mut prefs = store.load_prefs();
    let step = if strong { RATING_STEP_STRONG } else { RATING_STEP };
    let interactive = restaurant.is_none();

    loop {
        let chosen = match &restaurant {
            Some(name) => resolve_restaurant(catalog, name)?,
            None => prompt_restaurant(catalog)?,
        };

        let rated_mood: Mood = match &mood {
            Some(m) => m.parse()?,
            None => prompt_mood("Which mood did the meal deliver?")?,
        };

        prefs = prefs.with_rating(&chosen.id, rated_mood, step);
        store.save_prefs(&prefs)?;

        let affinity = prefs.affinity_for(rated_mood, &chosen.id).unwrap_or(0.0);
        let count = prefs.count_for(rated_mood, &chosen.id);
        let plural = if count == 1 { "" } else { "s" };

        println!(
            "Recorded {} for {} ({} rating{}, affinity {:.0}%)",
            rated_mood.label(),
            chosen.name,
            count,
            plural,
            affinity * 100.0
        );

        if is_loved(&chosen.id, rated_mood, &prefs) {
            println!("{} is now loved for {}.", chosen.name, rated_mood.label());
        }

        if !interactive || !prompt_yes_no("Rate another meal?", false)? {
            break;
        }
    }

    Ok(())
}

/// Toggle a favorite.
fn cmd_favorite(catalog: &Catalog, store: &ProfileStore, name: &str) -> Result<()> {
    let restaurant = resolve_restaurant(catalog, name)?;

    let prefs = store.load_prefs().with_favorite_toggled(&restaurant.id);
    store.save_prefs(&prefs)?;

    if prefs.is_favorite(&restaurant.id) {
        println!("Added {} to favorites.", restaurant.name);
    } else {
        println!("Removed {} from favorites.", restaurant.name);
    }

    Ok(())
}

fn cmd_favorites(catalog: &Catalog, store: &ProfileStore) -> Result<()> {
    let prefs = store.load_prefs();
    display_favorites(catalog, &prefs);
    Ok(())
}

/// Show or set the stored theme.
fn cmd_theme(store: &ProfileStore, name: Option<String>) -> Result<()> {
    match name {
        None => println!("Theme: {}", store.load_theme().as_str()),
        Some(name) => {
            let theme: Theme = name.parse()?;
            store.save_theme(theme)?;
            println!("Theme set to {}.", theme.as_str());
        }
    }
    Ok(())
}

fn cmd_share(catalog: &Catalog, name: &str) -> Result<()> {
    let restaurant = resolve_restaurant(catalog, name)?;
    println!("{}", share_text(restaurant));
    Ok(())
}

fn cmd_export(catalog: &Catalog, store: &ProfileStore, csv: &str) -> Result<()> {
    let prefs = store.load_prefs();
    write_score_matrix(catalog, &prefs, csv)?;
    println!("Wrote score matrix to {}", csv);
    Ok(())
}

/// Selectively reset stored profile state.
fn cmd_reset(store: &ProfileStore, ratings: bool, favorites: bool, theme: bool) -> Result<()> {
    if !ratings && !favorites && !theme {
        println!("Please specify at least one reset option:");
        println!("  --ratings   Drop all rating history");
        println!("  --favorites Clear the favorites set");
        println!("  --theme     Restore the default theme");
        return Ok(());
    }

    let mut prefs = store.load_prefs();

    if ratings {
        prefs = prefs.with_ratings_cleared();
        println!("Dropped all rating history.");
    }

    if favorites {
        prefs = prefs.with_favorites_cleared();
        println!("Cleared favorites.");
    }

    if ratings || favorites {
        store.save_prefs(&prefs)?;
    }

    if theme {
        store.save_theme(Theme::default())?;
        println!("Restored the default theme.");
    }

    Ok(())
}
