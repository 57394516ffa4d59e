use serde::{Deserialize, Serialize};

/// Category reported for items whose source data carried none.
pub const UNKNOWN_CATEGORY: &str = "unknown";

/// A single menu item with its nutrition facts.
///
/// Calories are whole numbers as printed on nutrition sheets; the other
/// macros are grams and may be fractional.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MenuItem {
    pub name: String,

    pub restaurant: String,

    pub calories: u32,

    pub protein: f64,

    pub fat: f64,

    pub carbs: f64,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub brand: Option<String>,
}

impl MenuItem {
    pub fn new(
        name: impl Into<String>,
        restaurant: impl Into<String>,
        calories: u32,
        protein: f64,
        fat: f64,
        carbs: f64,
    ) -> Self {
        Self {
            name: name.into(),
            restaurant: restaurant.into(),
            calories,
            protein,
            fat,
            carbs,
            category: None,
            brand: None,
        }
    }

    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    /// Category name, or "unknown" when the item has none.
    pub fn category_or_unknown(&self) -> &str {
        self.category.as_deref().unwrap_or(UNKNOWN_CATEGORY)
    }

    /// Basic validation: macros must be finite and non-negative.
    pub fn is_valid(&self) -> bool {
        [self.protein, self.fat, self.carbs]
            .into_iter()
            .all(|v| v.is_finite() && v >= 0.0)
    }

    /// Canonical store key: (lowercase restaurant, lowercase name).
    pub fn key(&self) -> (String, String) {
        (self.restaurant.to_lowercase(), self.name.to_lowercase())
    }

    /// Debug string for logging.
    pub fn debug_string(&self) -> String {
        format!(
            "{} [{}]: {} cal, P:{} F:{} C:{}",
            self.name,
            self.category_or_unknown(),
            self.calories,
            self.protein,
            self.fat,
            self.carbs
        )
    }
}
