use dialoguer::{Confirm, Input, MultiSelect, Select};

use crate::error::{MenuError, Result};
use crate::models::{parse_bound, parse_count, Bound, ConstraintSet, Macro};
use crate::store::MenuStore;

/// Prompt for a restaurant from the store.
pub fn prompt_restaurant(store: &MenuStore) -> Result<String> {
    let restaurants = store.restaurants();
    if restaurants.is_empty() {
        return Err(MenuError::EmptyStore);
    }

    let selection = Select::new()
        .with_prompt("Choose a restaurant")
        .items(&restaurants)
        .default(0)
        .interact()?;

    Ok(restaurants[selection].clone())
}

/// Prompt for categories to include. All are selected by default.
///
/// Returns an empty list when every category is kept, meaning no restriction.
pub fn prompt_categories(store: &MenuStore, restaurant: &str) -> Result<Vec<String>> {
    let categories = store.categories(restaurant);
    if categories.len() <= 1 {
        return Ok(Vec::new());
    }

    let defaults = vec![true; categories.len()];
    let chosen = MultiSelect::new()
        .with_prompt("Include categories (space to toggle)")
        .items(&categories)
        .defaults(&defaults)
        .interact()?;

    if chosen.is_empty() {
        return Err(MenuError::InvalidInput(
            "at least one category must be selected".to_string(),
        ));
    }
    if chosen.len() == categories.len() {
        return Ok(Vec::new());
    }

    Ok(chosen.into_iter().map(|i| categories[i].clone()).collect())
}

/// Prompt for an optional bound. Blank or unparseable input means no bound.
pub fn prompt_bound(label: &str) -> Result<Option<f64>> {
    let input: String = Input::new()
        .with_prompt(format!("{} (blank for none)", label))
        .allow_empty(true)
        .interact_text()?;

    let bound = parse_bound(&input);
    if bound.is_none() && !input.trim().is_empty() {
        println!("Ignoring '{}': not a number", input.trim());
    }
    Ok(bound)
}

/// Prompt for the min/max range of one macro.
pub fn prompt_range(nutrient: Macro) -> Result<Bound> {
    let min = prompt_bound(&format!("Minimum {}", nutrient))?;
    let max = prompt_bound(&format!("Maximum {}", nutrient))?;
    Ok(Bound::new(min, max))
}

/// Prompt for how many combos to show.
///
/// Anything but a positive whole number falls back to `default`.
pub fn prompt_count(default: usize) -> Result<Option<usize>> {
    let input: String = Input::new()
        .with_prompt("How many combos?")
        .default(default.to_string())
        .interact_text()?;

    let count = parse_count(&input);
    if count.is_none() {
        println!("Using {} combos", default);
    }
    Ok(count)
}

/// Prompt for yes/no confirmation.
pub fn prompt_yes_no(prompt: &str, default: bool) -> Result<bool> {
    Ok(Confirm::new()
        .with_prompt(prompt)
        .default(default)
        .interact()?)
}

/// Collect everything needed for a combo search.
pub fn collect_constraints(store: &MenuStore, default_count: usize) -> Result<ConstraintSet> {
    let restaurant = prompt_restaurant(store)?;
    let categories = prompt_categories(store, &restaurant)?;

    let mut constraints = ConstraintSet::new()
        .with_restaurant(restaurant)
        .with_categories(categories);

    for nutrient in Macro::ALL {
        let limit = prompt_yes_no(&format!("Limit {}?", nutrient), nutrient == Macro::Calories)?;
        if limit {
            *constraints.bounds.get_mut(nutrient) = prompt_range(nutrient)?;
        }
    }

    constraints.num = prompt_count(default_count)?;
    Ok(constraints)
}
