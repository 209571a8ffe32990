use std::path::Path;

use crate::catalog::Catalog;
use crate::engine::scoring::{is_loved, score_for_mood};
use crate::error::Result;
use crate::models::{Mood, UserPreferences};

/// Write the per-restaurant, per-mood match-score matrix to a CSV file.
///
/// Scores reflect the given preferences, so an exported matrix is a
/// snapshot of what the recommendation screens would rank from.
pub fn write_score_matrix<P: AsRef<Path>>(
    catalog: &Catalog,
    prefs: &UserPreferences,
    path: P,
) -> Result<()> {
    let mut wtr = csv::Writer::from_path(path)?;

    let mut header = vec!["id".to_string(), "name".to_string()];
    header.extend(Mood::ALL.iter().map(|m| m.as_str().to_string()));
    header.push("loved_for".to_string());
    wtr.write_record(&header)?;

    for r in catalog.restaurants() {
        let mut record = vec![r.id.clone(), r.name.clone()];
        record.extend(
            Mood::ALL
                .iter()
                .map(|&m| format!("{:.3}", score_for_mood(r, m, prefs))),
        );

        let loved: Vec<&str> = Mood::ALL
            .iter()
            .filter(|&&m| is_loved(&r.id, m, prefs))
            .map(|m| m.as_str())
            .collect();
        record.push(loved.join(" "));

        wtr.write_record(&record)?;
    }

    wtr.flush()?;
    Ok(())
}
