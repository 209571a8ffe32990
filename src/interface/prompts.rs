use dialoguer::{Confirm, Input, Select};
use strsim::jaro_winkler;

use crate::catalog::Catalog;
use crate::error::{OrryxError, Result};
use crate::models::{Mood, Restaurant};

/// Prompt for the target mood.
pub fn prompt_mood(prompt: &str) -> Result<Mood> {
    let labels: Vec<&str> = Mood::ALL.iter().map(|m| m.label()).collect();

    let selection = Select::new()
        .with_prompt(prompt)
        .items(&labels)
        .default(0)
        .interact()?;

    Ok(Mood::ALL[selection])
}

/// Prompt for a restaurant by name, with fuzzy matching.
///
/// Tries an exact case-insensitive match first, then jaro-winkler
/// candidates above 0.7 with a confirm (single hit) or a pick list
/// (several hits). Loops until a restaurant is chosen; an empty entry
/// aborts with `InvalidInput`.
pub fn prompt_restaurant<'a>(catalog: &'a Catalog) -> Result<&'a Restaurant> {
    loop {
        let input: String = Input::new()
            .with_prompt("Which restaurant? (Enter to cancel)")
            .allow_empty(true)
            .interact_text()?;

        let input = input.trim();
        if input.is_empty() {
            return Err(OrryxError::InvalidInput(
                "no restaurant selected".to_string(),
            ));
        }

        if let Some(r) = catalog.find_by_name(input) {
            return Ok(r);
        }

        let mut candidates: Vec<(&Restaurant, f64)> = catalog
            .restaurants()
            .iter()
            .map(|r| (r, jaro_winkler(&r.name.to_lowercase(), &input.to_lowercase())))
            .filter(|(_, score)| *score > 0.7)
            .collect();

        candidates.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(std::cmp::Ordering::Equal));

        if candidates.is_empty() {
            println!("No restaurant found matching '{}'", input);
            continue;
        }

        if candidates.len() == 1 {
            let restaurant = candidates[0].0;
            let confirm = Confirm::new()
                .with_prompt(format!("Did you mean '{}'?", restaurant.name))
                .default(true)
                .interact()?;

            if confirm {
                return Ok(restaurant);
            }
            continue;
        }

        // Multiple matches - let the user pick
        let options: Vec<String> = candidates
            .iter()
            .take(5)
            .map(|(r, _)| format!("{} ({})", r.name, r.cuisine))
            .collect();

        let mut selection_options = options.clone();
        selection_options.push("None of these".to_string());

        let selection = Select::new()
            .with_prompt("Which did you mean?")
            .items(&selection_options)
            .default(0)
            .interact()?;

        if selection < options.len() {
            return Ok(candidates[selection].0);
        }
    }
}

/// Resolve a restaurant name given on the command line (no prompting).
pub fn resolve_restaurant<'a>(catalog: &'a Catalog, name: &str) -> Result<&'a Restaurant> {
    catalog
        .find_by_name(name)
        .ok_or_else(|| OrryxError::RestaurantNotFound(name.to_string()))
}

/// Prompt for yes/no confirmation.
pub fn prompt_yes_no(prompt: &str, default: bool) -> Result<bool> {
    Ok(Confirm::new()
        .with_prompt(prompt)
        .default(default)
        .interact()?)
}
