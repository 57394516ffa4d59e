use std::collections::{BTreeMap, BTreeSet};

use strsim::jaro_winkler;

use crate::models::MenuItem;

/// Minimum Jaro-Winkler similarity for a restaurant suggestion.
const SUGGESTION_THRESHOLD: f64 = 0.7;

/// In-memory keyed store of menu items.
///
/// Items are keyed by (lowercase restaurant, lowercase name); restaurant names
/// are normalised to lowercase on insert.
#[derive(Debug, Default)]
pub struct MenuStore {
    items: BTreeMap<(String, String), MenuItem>,
}

impl MenuStore {
    /// Create a store from a list of items. Later duplicates replace earlier ones.
    pub fn new(items: Vec<MenuItem>) -> Self {
        let mut store = Self::default();
        for item in items {
            store.insert(item);
        }
        store
    }

    /// Insert or replace an item. Returns the replaced item, if any.
    pub fn insert(&mut self, mut item: MenuItem) -> Option<MenuItem> {
        item.restaurant = item.restaurant.trim().to_lowercase();
        self.items.insert(item.key(), item)
    }

    /// Get an item by restaurant and name (case-insensitive).
    pub fn get(&self, restaurant: &str, name: &str) -> Option<&MenuItem> {
        self.items
            .get(&(restaurant.trim().to_lowercase(), name.to_lowercase()))
    }

    /// Distinct restaurant names, sorted.
    pub fn restaurants(&self) -> Vec<String> {
        self.items
            .keys()
            .map(|(restaurant, _)| restaurant.clone())
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }

    pub fn has_restaurant(&self, restaurant: &str) -> bool {
        let restaurant = restaurant.trim().to_lowercase();
        self.items.keys().any(|(r, _)| *r == restaurant)
    }

    /// Distinct categories served by a restaurant, sorted.
    pub fn categories(&self, restaurant: &str) -> Vec<String> {
        self.items_for(restaurant)
            .into_iter()
            .map(|item| item.category_or_unknown().to_string())
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }

    /// All items of one restaurant, ordered by name.
    pub fn items_for(&self, restaurant: &str) -> Vec<&MenuItem> {
        let restaurant = restaurant.trim().to_lowercase();
        self.items
            .iter()
            .filter(|((r, _), _)| *r == restaurant)
            .map(|(_, item)| item)
            .collect()
    }

    /// Single items of a restaurant within an optional calorie range,
    /// highest calories first.
    pub fn menu(
        &self,
        restaurant: &str,
        calorie_min: Option<f64>,
        calorie_max: Option<f64>,
    ) -> Vec<&MenuItem> {
        let mut items: Vec<&MenuItem> = self
            .items_for(restaurant)
            .into_iter()
            .filter(|item| {
                let cal = f64::from(item.calories);
                calorie_min.is_none_or(|min| cal >= min) && calorie_max.is_none_or(|max| cal <= max)
            })
            .collect();

        items.sort_by(|a, b| b.calories.cmp(&a.calories).then_with(|| a.name.cmp(&b.name)));
        items
    }

    /// Closest known restaurant name to `query`, if any is similar enough.
    pub fn suggest_restaurant(&self, query: &str) -> Option<String> {
        let query = query.trim().to_lowercase();
        self.restaurants()
            .into_iter()
            .map(|r| {
                let score = jaro_winkler(&r, &query);
                (r, score)
            })
            .filter(|(_, score)| *score > SUGGESTION_THRESHOLD)
            .max_by(|a, b| a.1.partial_cmp(&b.1).unwrap_or(std::cmp::Ordering::Equal))
            .map(|(r, _)| r)
    }

    /// Convert the store to a list of items for JSON serialization.
    pub fn to_items(&self) -> Vec<MenuItem> {
        self.items.values().cloned().collect()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
