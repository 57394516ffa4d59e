use serde::Deserialize;
use serde_json::Value;

use crate::models::constraints::{parse_bound, parse_count, Bound, ConstraintSet, MacroBounds};

/// A combo search request as it arrives from a client.
///
/// Only `restaurant` is structurally required; deserialization fails without
/// it. Every numeric field is accepted as a number or a string.
#[derive(Debug, Clone, Deserialize)]
pub struct ComboRequest {
    pub restaurant: String,

    #[serde(default)]
    pub categories: Vec<String>,

    #[serde(default)]
    pub macros: RawMacros,

    #[serde(default)]
    pub num: Option<Value>,
}

/// Raw macro bounds, keyed the way the web client sends them.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawMacros {
    #[serde(default)]
    pub calorie_min: Option<Value>,
    #[serde(default)]
    pub calorie_max: Option<Value>,
    #[serde(default)]
    pub protein_min: Option<Value>,
    #[serde(default)]
    pub protein_max: Option<Value>,
    #[serde(default)]
    pub fat_min: Option<Value>,
    #[serde(default)]
    pub fat_max: Option<Value>,
    #[serde(default)]
    pub carb_min: Option<Value>,
    #[serde(default)]
    pub carb_max: Option<Value>,
}

impl RawMacros {
    pub fn to_bounds(&self) -> MacroBounds {
        let range = |min: &Option<Value>, max: &Option<Value>| {
            Bound::new(
                min.as_ref().and_then(bound_from_value),
                max.as_ref().and_then(bound_from_value),
            )
        };

        MacroBounds {
            calories: range(&self.calorie_min, &self.calorie_max),
            protein: range(&self.protein_min, &self.protein_max),
            fat: range(&self.fat_min, &self.fat_max),
            carbs: range(&self.carb_min, &self.carb_max),
        }
    }
}

impl ComboRequest {
    pub fn from_json(json: &str) -> crate::Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Convert to engine constraints. Malformed values become absent bounds.
    pub fn to_constraints(&self) -> ConstraintSet {
        ConstraintSet {
            bounds: self.macros.to_bounds(),
            categories: self.categories.clone(),
            restaurant: Some(self.restaurant.clone()),
            num: self.num.as_ref().and_then(count_from_value),
        }
    }
}

fn bound_from_value(value: &Value) -> Option<f64> {
    match value {
        Value::Number(n) => n.as_f64().filter(|v| v.is_finite()),
        Value::String(s) => parse_bound(s),
        _ => None,
    }
}

/// Positive combo count, or `None` so the caller's default applies.
fn count_from_value(value: &Value) -> Option<usize> {
    match value {
        Value::Number(n) => {
            let n = n.as_i64().or_else(|| n.as_f64().map(|f| f as i64))?;
            usize::try_from(n).ok().filter(|&n| n > 0)
        }
        Value::String(s) => parse_count(s),
        _ => None,
    }
}
