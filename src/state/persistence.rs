use std::collections::HashMap;
use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use crate::error::{DishError, Result};
use crate::models::Dish;
use crate::scoring::constants::CSV_EXPORT_INTERVAL;

/// Load dishes from a JSON file.
///
/// Deduplicates by lowercase name (last occurrence wins).
pub fn load_dishes<P: AsRef<Path>>(path: P) -> Result<Vec<Dish>> {
    let path = path.as_ref();
    let content = fs::read_to_string(path)?;
    let dishes: Vec<Dish> = serde_json::from_str(&content)?;
    let total = dishes.len();

    let mut seen: HashMap<String, Dish> = HashMap::new();
    for dish in dishes {
        if let Some(previous) = seen.insert(dish.key(), dish) {
            log::warn!(
                "Duplicate dish '{}' in {}, keeping last",
                previous.name,
                path.display()
            );
        }
    }

    log::info!(
        "Loaded {} dishes ({} records) from {}",
        seen.len(),
        total,
        path.display()
    );
    Ok(seen.into_values().collect())
}

/// Like [`load_dishes`], but a missing file is an empty dataset.
pub fn load_dishes_or_empty<P: AsRef<Path>>(path: P) -> Result<Vec<Dish>> {
    match load_dishes(path.as_ref()) {
        Err(DishError::Io(e)) if e.kind() == ErrorKind::NotFound => {
            log::debug!("No dataset at {}, starting empty", path.as_ref().display());
            Ok(Vec::new())
        }
        other => other,
    }
}

/// Save dishes to a JSON file, sorted by name.
///
/// Deduplicates by lowercase name before saving.
pub fn save_dishes<P: AsRef<Path>>(path: P, dishes: &[Dish]) -> Result<()> {
    let deduped = dedupe_sorted(dishes);
    let json = serde_json::to_string_pretty(&deduped)?;
    fs::write(path.as_ref(), json)?;
    log::info!("Saved {} dishes to {}", deduped.len(), path.as_ref().display());
    Ok(())
}

/// Write dishes to CSV with a `Name,Taste,Spiciness,Sweetness,Texture` header.
pub fn export_csv<P: AsRef<Path>>(path: P, dishes: &[Dish]) -> Result<()> {
    let deduped = dedupe_sorted(dishes);
    let mut wtr = csv::Writer::from_path(path.as_ref())?;
    for dish in &deduped {
        wtr.serialize(dish)?;
    }
    wtr.flush()?;
    log::info!("Exported {} dishes to {}", deduped.len(), path.as_ref().display());
    Ok(())
}

/// Whether a dataset of `count` dishes is due for a CSV refresh.
pub fn should_export_csv(count: usize) -> bool {
    count > 0 && count % CSV_EXPORT_INTERVAL == 0
}

fn dedupe_sorted(dishes: &[Dish]) -> Vec<&Dish> {
    let mut seen: HashMap<String, &Dish> = HashMap::new();
    for dish in dishes {
        seen.insert(dish.key(), dish);
    }
    let mut deduped: Vec<&Dish> = seen.into_values().collect();
    deduped.sort_by_key(|d| d.key());
    deduped
}
