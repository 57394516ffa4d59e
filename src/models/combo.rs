use serde::{Deserialize, Serialize};

use crate::models::menu_item::MenuItem;

/// Aggregate nutrition of a set of menu items.
///
/// Calories are summed as integers, the other macros as reals.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct ComboTotals {
    pub calories: u64,
    pub protein: f64,
    pub fat: f64,
    pub carbs: f64,
}

impl ComboTotals {
    /// Sum the macros of every item.
    pub fn of<'a>(items: impl IntoIterator<Item = &'a MenuItem>) -> Self {
        items.into_iter().fold(Self::default(), |mut acc, item| {
            acc.add(item);
            acc
        })
    }

    #[inline]
    pub fn add(&mut self, item: &MenuItem) {
        self.calories += u64::from(item.calories);
        self.protein += item.protein;
        self.fat += item.fat;
        self.carbs += item.carbs;
    }
}

/// A candidate bundle of distinct menu items drawn from one pool.
///
/// Members keep the order of the pool they were enumerated from.
#[derive(Debug, Clone, PartialEq)]
pub struct Combo<'a> {
    pub items: Vec<&'a MenuItem>,
}

impl<'a> Combo<'a> {
    pub fn new(items: Vec<&'a MenuItem>) -> Self {
        Self { items }
    }

    pub fn totals(&self) -> ComboTotals {
        ComboTotals::of(self.items.iter().copied())
    }

    pub fn names(&self) -> Vec<String> {
        self.items.iter().map(|item| item.name.clone()).collect()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// Output record for one combo.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComboResult {
    pub items: Vec<String>,
    pub count: usize,
    pub total: ComboTotals,
}
