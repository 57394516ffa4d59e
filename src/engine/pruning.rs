use crate::models::{ConstraintSet, Macro, MenuItem};

/// Restrict a raw pool to the requested restaurant and categories.
///
/// Restaurant and category matches are case-insensitive. Items without a
/// category match the "unknown" category. An empty category list allows all.
pub fn select_pool<'a>(
    items: impl IntoIterator<Item = &'a MenuItem>,
    constraints: &ConstraintSet,
) -> Vec<&'a MenuItem> {
    let restaurant = constraints
        .restaurant
        .as_deref()
        .map(|r| r.trim().to_lowercase());
    let categories: Vec<String> = constraints
        .categories
        .iter()
        .map(|c| c.trim().to_lowercase())
        .collect();

    items
        .into_iter()
        .filter(|item| match &restaurant {
            Some(r) => item.restaurant.trim().to_lowercase() == *r,
            None => true,
        })
        .filter(|item| {
            categories.is_empty()
                || categories.contains(&item.category_or_unknown().to_lowercase())
        })
        .collect()
}

/// True if the item alone breaks any max bound.
///
/// Such an item can never be part of a feasible combo since every macro is
/// non-negative and totals only grow as items are added.
#[inline]
pub fn violates_max(item: &MenuItem, constraints: &ConstraintSet) -> bool {
    Macro::ALL
        .iter()
        .any(|&m| constraints.bounds.get(m).exceeds_max(m.of(item)))
}

/// Drop items that individually exceed a max bound. Min bounds are ignored.
pub fn prune<'a>(pool: &[&'a MenuItem], constraints: &ConstraintSet) -> Vec<&'a MenuItem> {
    let kept: Vec<&MenuItem> = pool
        .iter()
        .copied()
        .filter(|item| !violates_max(item, constraints))
        .collect();

    tracing::debug!(
        before = pool.len(),
        after = kept.len(),
        "pruned items exceeding max bounds"
    );

    kept
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_items() -> Vec<MenuItem> {
        vec![
            MenuItem::new("Burger", "Shake Shack", 550, 29.0, 31.0, 40.0).with_category("Burgers"),
            MenuItem::new("Fries", "Shake Shack", 470, 6.0, 22.0, 63.0).with_category("Sides"),
            MenuItem::new("Lemonade", "Shake Shack", 110, 0.0, 0.0, 29.0),
            MenuItem::new("Nuggets", "Chick-fil-A", 250, 27.0, 11.0, 11.0)
                .with_category("Entrees"),
        ]
    }

    #[test]
    fn test_select_pool_by_restaurant() {
        let items = sample_items();
        let constraints = ConstraintSet::new().with_restaurant("shake shack");
        let pool = select_pool(&items, &constraints);
        assert_eq!(pool.len(), 3);
    }

    #[test]
    fn test_select_pool_by_category() {
        let items = sample_items();
        let constraints = ConstraintSet::new().with_categories(["sides", "Unknown"]);
        let names: Vec<&str> = select_pool(&items, &constraints)
            .iter()
            .map(|i| i.name.as_str())
            .collect();
        assert_eq!(names, vec!["Fries", "Lemonade"]);
    }

    #[test]
    fn test_prune_checks_every_max() {
        let items = sample_items();
        let pool: Vec<&MenuItem> = items.iter().collect();

        let constraints = ConstraintSet::new().with_max(Macro::Calories, 500.0);
        assert_eq!(prune(&pool, &constraints).len(), 3);

        let constraints = ConstraintSet::new().with_max(Macro::Carbs, 30.0);
        let names: Vec<&str> = prune(&pool, &constraints)
            .iter()
            .map(|i| i.name.as_str())
            .collect();
        assert_eq!(names, vec!["Lemonade", "Nuggets"]);
    }

    #[test]
    fn test_prune_ignores_min() {
        let items = sample_items();
        let pool: Vec<&MenuItem> = items.iter().collect();
        let constraints = ConstraintSet::new().with_min(Macro::Calories, 10_000.0);
        assert_eq!(prune(&pool, &constraints).len(), pool.len());
    }

    #[test]
    fn test_prune_keeps_item_exactly_at_max() {
        let items = sample_items();
        let pool: Vec<&MenuItem> = items.iter().collect();
        let constraints = ConstraintSet::new().with_max(Macro::Calories, 110.0);
        let kept = prune(&pool, &constraints);
        assert_eq!(kept.len(), 1);
        assert_eq!(kept[0].name, "Lemonade");
    }
}
