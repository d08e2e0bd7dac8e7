use std::collections::HashMap;

use strsim::jaro_winkler;

use crate::error::{DishError, Result};
use crate::models::{AttributeValues, Dish, Strategy};
use crate::scoring::Evaluation;

/// Minimum Jaro-Winkler similarity for a name suggestion.
const SUGGESTION_THRESHOLD: f64 = 0.7;

/// The dish dataset, keyed case-insensitively by name.
pub struct DishBook {
    /// All dishes keyed by lowercase name.
    dishes: HashMap<String, Dish>,
}

impl DishBook {
    /// Create a new book from a list of dishes.
    pub fn new(dishes: Vec<Dish>) -> Self {
        let mut map = HashMap::new();
        for dish in dishes {
            map.insert(dish.key(), dish);
        }
        Self { dishes: map }
    }

    /// Get a dish by name (case-insensitive).
    pub fn get(&self, name: &str) -> Option<&Dish> {
        self.dishes.get(&name.trim().to_lowercase())
    }

    /// Resolve a dish name to its four attribute values.
    pub fn lookup(&self, name: &str) -> Result<AttributeValues> {
        self.get(name)
            .map(Dish::values)
            .ok_or_else(|| DishError::DishNotFound(name.to_string()))
    }

    /// Score a stored dish under a strategy.
    pub fn evaluate(&self, name: &str, strategy: Strategy) -> Result<Evaluation> {
        let values = self.lookup(name)?;
        Evaluation::compute(values, strategy)
    }

    /// Insert a dish, returning the record it replaced (same name, any case).
    pub fn add(&mut self, dish: Dish) -> Option<Dish> {
        let replaced = self.dishes.insert(dish.key(), dish);
        if let Some(old) = &replaced {
            log::info!("Replaced existing dish '{}'", old.name);
        }
        replaced
    }

    /// Names similar to `query`, best match first.
    pub fn suggestions(&self, query: &str, limit: usize) -> Vec<&str> {
        let query = query.trim().to_lowercase();
        let mut candidates: Vec<(&Dish, f64)> = self
            .dishes
            .iter()
            .map(|(key, dish)| (dish, jaro_winkler(key, &query)))
            .filter(|(_, score)| *score > SUGGESTION_THRESHOLD)
            .collect();

        candidates.sort_by(|a, b| {
            b.1.partial_cmp(&a.1)
                .unwrap_or(std::cmp::Ordering::Equal)
                .then_with(|| a.0.name.cmp(&b.0.name))
        });

        candidates
            .into_iter()
            .take(limit)
            .map(|(dish, _)| dish.name.as_str())
            .collect()
    }

    /// All dishes sorted by name.
    pub fn all_dishes(&self) -> Vec<&Dish> {
        let mut dishes: Vec<&Dish> = self.dishes.values().collect();
        dishes.sort_by_key(|d| d.key());
        dishes
    }

    /// All dish names sorted alphabetically.
    pub fn names(&self) -> Vec<&str> {
        self.all_dishes()
            .into_iter()
            .map(|d| d.name.as_str())
            .collect()
    }

    /// Convert to a list of dishes for serialization.
    pub fn to_dishes(&self) -> Vec<Dish> {
        self.all_dishes().into_iter().cloned().collect()
    }

    pub fn len(&self) -> usize {
        self.dishes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.dishes.is_empty()
    }
}
