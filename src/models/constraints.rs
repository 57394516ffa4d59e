use std::fmt;

use crate::models::combo::ComboTotals;
use crate::models::menu_item::MenuItem;

/// A tracked macro nutrient.
///
/// `Macro::ALL` together with [`Macro::of`] and [`Macro::of_totals`] is the
/// dispatch table used by pruning and feasibility, so every axis is checked
/// by the same code path.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Macro {
    Calories,
    Protein,
    Fat,
    Carbs,
}

impl Macro {
    pub const ALL: [Macro; 4] = [Macro::Calories, Macro::Protein, Macro::Fat, Macro::Carbs];

    /// Value of this macro for a single item.
    #[inline]
    pub fn of(self, item: &MenuItem) -> f64 {
        match self {
            Macro::Calories => f64::from(item.calories),
            Macro::Protein => item.protein,
            Macro::Fat => item.fat,
            Macro::Carbs => item.carbs,
        }
    }

    /// Value of this macro in aggregated combo totals.
    #[inline]
    pub fn of_totals(self, totals: &ComboTotals) -> f64 {
        match self {
            Macro::Calories => totals.calories as f64,
            Macro::Protein => totals.protein,
            Macro::Fat => totals.fat,
            Macro::Carbs => totals.carbs,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Macro::Calories => "calories",
            Macro::Protein => "protein",
            Macro::Fat => "fat",
            Macro::Carbs => "carbs",
        }
    }
}

impl fmt::Display for Macro {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Optional inclusive range on one macro. `None` means unbounded.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Bound {
    pub min: Option<f64>,
    pub max: Option<f64>,
}

impl Bound {
    pub fn new(min: Option<f64>, max: Option<f64>) -> Self {
        Self { min, max }
    }

    /// True if `value` is above the max bound.
    #[inline]
    pub fn exceeds_max(&self, value: f64) -> bool {
        self.max.is_some_and(|max| value > max)
    }

    /// True if `value` is below the min bound.
    #[inline]
    pub fn below_min(&self, value: f64) -> bool {
        self.min.is_some_and(|min| value < min)
    }

    /// True if `value` lies within both bounds.
    #[inline]
    pub fn admits(&self, value: f64) -> bool {
        !self.below_min(value) && !self.exceeds_max(value)
    }

    pub fn is_unbounded(&self) -> bool {
        self.min.is_none() && self.max.is_none()
    }
}

/// Min/max bounds for each of the four macros.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct MacroBounds {
    pub calories: Bound,
    pub protein: Bound,
    pub fat: Bound,
    pub carbs: Bound,
}

impl MacroBounds {
    pub fn get(&self, nutrient: Macro) -> &Bound {
        match nutrient {
            Macro::Calories => &self.calories,
            Macro::Protein => &self.protein,
            Macro::Fat => &self.fat,
            Macro::Carbs => &self.carbs,
        }
    }

    pub fn get_mut(&mut self, nutrient: Macro) -> &mut Bound {
        match nutrient {
            Macro::Calories => &mut self.calories,
            Macro::Protein => &mut self.protein,
            Macro::Fat => &mut self.fat,
            Macro::Carbs => &mut self.carbs,
        }
    }
}

/// Everything a combo search is constrained by.
///
/// `min > max` on an axis is accepted as-is and simply matches nothing.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ConstraintSet {
    pub bounds: MacroBounds,

    /// Allowed categories. Empty means every category is allowed.
    pub categories: Vec<String>,

    pub restaurant: Option<String>,

    /// Requested number of combos. `None` or zero falls back to the default.
    pub num: Option<usize>,
}

impl ConstraintSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_min(mut self, nutrient: Macro, min: f64) -> Self {
        self.bounds.get_mut(nutrient).min = Some(min);
        self
    }

    pub fn with_max(mut self, nutrient: Macro, max: f64) -> Self {
        self.bounds.get_mut(nutrient).max = Some(max);
        self
    }

    /// Set both ends of a range from raw strings, leniently.
    pub fn with_raw_range(mut self, nutrient: Macro, min: &str, max: &str) -> Self {
        *self.bounds.get_mut(nutrient) = Bound::new(parse_bound(min), parse_bound(max));
        self
    }

    pub fn with_categories<I, S>(mut self, categories: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.categories = categories.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_restaurant(mut self, restaurant: impl Into<String>) -> Self {
        self.restaurant = Some(restaurant.into());
        self
    }

    pub fn with_num(mut self, num: usize) -> Self {
        self.num = Some(num);
        self
    }
}

/// Parse a user-supplied bound.
///
/// Empty, non-numeric and non-finite input is treated as "no bound" rather
/// than zero, so a blank form field never excludes every combo.
pub fn parse_bound(raw: &str) -> Option<f64> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }
    match trimmed.parse::<f64>() {
        Ok(v) if v.is_finite() => Some(v),
        _ => {
            tracing::debug!(value = raw, "ignoring malformed bound");
            None
        }
    }
}

/// Parse a user-supplied combo count.
///
/// Zero, negative and non-numeric input give `None` so the caller's default
/// count applies.
pub fn parse_count(raw: &str) -> Option<usize> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }
    let count = trimmed
        .parse::<i64>()
        .ok()
        .and_then(|n| usize::try_from(n).ok())
        .filter(|&n| n > 0);
    if count.is_none() {
        tracing::debug!(value = raw, "ignoring invalid combo count");
    }
    count
}
