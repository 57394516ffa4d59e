use std::collections::HashMap;
use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::error::Result;
use crate::models::MenuItem;

/// Load menu items from a JSON file.
///
/// Items with negative or non-finite macros are skipped with a warning.
/// Deduplicates by (restaurant, name), case-insensitive; last occurrence wins.
pub fn load_menu<P: AsRef<Path>>(path: P) -> Result<Vec<MenuItem>> {
    let content = fs::read_to_string(path)?;
    let items: Vec<MenuItem> = serde_json::from_str(&content)?;
    Ok(dedup(retain_valid(items)))
}

fn retain_valid(items: Vec<MenuItem>) -> Vec<MenuItem> {
    items
        .into_iter()
        .filter(|item| {
            let valid = item.is_valid();
            if !valid {
                tracing::warn!(item = %item.debug_string(), "skipping invalid menu item");
            }
            valid
        })
        .collect()
}

/// Save menu items to a JSON file.
///
/// Deduplicates before saving.
pub fn save_menu<P: AsRef<Path>>(path: P, items: &[MenuItem]) -> Result<()> {
    let deduped = dedup(items.to_vec());
    let json = serde_json::to_string_pretty(&deduped)?;
    fs::write(path, json)?;
    Ok(())
}

/// One CSV row; nutrient columns stay raw so bad rows can be skipped.
#[derive(Debug, Deserialize)]
struct CsvRow {
    restaurant: String,
    name: String,
    calories: String,
    protein: String,
    fat: String,
    carbs: String,
    #[serde(default)]
    category: Option<String>,
    #[serde(default)]
    brand: Option<String>,
}

impl CsvRow {
    fn into_item(self) -> Option<MenuItem> {
        let calories = self.calories.trim().parse::<u32>().ok()?;
        let protein = parse_grams(&self.protein)?;
        let fat = parse_grams(&self.fat)?;
        let carbs = parse_grams(&self.carbs)?;

        let name = self.name.trim();
        let restaurant = self.restaurant.trim();
        if name.is_empty() || restaurant.is_empty() {
            return None;
        }

        let mut item = MenuItem::new(name, restaurant, calories, protein, fat, carbs);
        item.category = non_empty(self.category);
        item.brand = non_empty(self.brand);
        Some(item)
    }
}

fn parse_grams(raw: &str) -> Option<f64> {
    raw.trim()
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite() && *v >= 0.0)
}

fn non_empty(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

/// Import menu items from a CSV file.
///
/// Expects the header `restaurant,name,calories,protein,fat,carbs` with
/// optional `category` and `brand` columns. Rows with missing or malformed
/// nutrition values are skipped.
pub fn import_csv<P: AsRef<Path>>(path: P) -> Result<Vec<MenuItem>> {
    let mut reader = csv::ReaderBuilder::new()
        .flexible(true)
        .trim(csv::Trim::All)
        .from_path(path)?;

    let mut items = Vec::new();
    let mut skipped = 0usize;

    for (line, row) in reader.deserialize::<CsvRow>().enumerate() {
        match row.map(CsvRow::into_item) {
            Ok(Some(item)) => items.push(item),
            Ok(None) => {
                skipped += 1;
                tracing::warn!(row = line + 1, "skipping row with bad nutrition data");
            }
            Err(e) => {
                skipped += 1;
                tracing::warn!(row = line + 1, error = %e, "skipping unreadable row");
            }
        }
    }

    tracing::info!(imported = items.len(), skipped, "csv import finished");
    Ok(items)
}

fn dedup(items: Vec<MenuItem>) -> Vec<MenuItem> {
    let mut order: Vec<(String, String)> = Vec::new();
    let mut seen: HashMap<(String, String), MenuItem> = HashMap::new();
    for item in items {
        let key = item.key();
        if !seen.contains_key(&key) {
            order.push(key.clone());
        }
        seen.insert(key, item);
    }

    order
        .into_iter()
        .filter_map(|key| seen.remove(&key))
        .collect()
}
