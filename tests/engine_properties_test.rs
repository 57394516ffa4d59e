use std::collections::HashSet;

use assert_float_eq::assert_float_absolute_eq;
use rand::rngs::StdRng;
use rand::SeedableRng;

use name_your_calories::engine::{
    combinations_for_size, enumerate, find_combos, format_combo, is_feasible, prune,
    violates_max, SearchConfig, DEFAULT_COMBO_COUNT, MAX_COMBO_SIZE, MIN_COMBO_SIZE,
};
use name_your_calories::models::{ComboTotals, ConstraintSet, Macro, MenuItem};

fn make_item(name: &str, cal: u32, p: f64, f: f64, c: f64) -> MenuItem {
    MenuItem::new(name, "test kitchen", cal, p, f, c)
}

fn menu() -> Vec<MenuItem> {
    vec![
        make_item("Grilled Chicken", 380, 36.0, 13.0, 32.0),
        make_item("Side Salad", 80, 5.0, 4.5, 6.0),
        make_item("Fries", 420, 5.0, 24.0, 45.0),
        make_item("Fruit Cup", 60, 1.0, 0.0, 15.0),
        make_item("Milkshake", 610, 13.0, 26.0, 82.0),
        make_item("Nuggets", 250, 27.0, 11.0, 11.0),
        make_item("Mac and Cheese", 450, 20.0, 28.0, 30.0),
        make_item("Iced Tea", 0, 0.0, 0.0, 0.0),
    ]
}

fn constraint_grid() -> Vec<ConstraintSet> {
    vec![
        ConstraintSet::new(),
        ConstraintSet::new().with_max(Macro::Calories, 400.0),
        ConstraintSet::new()
            .with_max(Macro::Fat, 20.0)
            .with_max(Macro::Carbs, 40.0),
        ConstraintSet::new()
            .with_min(Macro::Protein, 30.0)
            .with_max(Macro::Calories, 900.0),
        ConstraintSet::new()
            .with_min(Macro::Calories, 500.0)
            .with_max(Macro::Calories, 800.0)
            .with_max(Macro::Protein, 35.0),
    ]
}

#[test]
fn test_pruning_soundness() {
    let items = menu();
    let pool: Vec<&MenuItem> = items.iter().collect();

    for constraints in constraint_grid() {
        let kept = prune(&pool, &constraints);
        for item in &kept {
            for m in Macro::ALL {
                if let Some(max) = constraints.bounds.get(m).max {
                    assert!(m.of(item) <= max, "{} kept over {} max", item.name, m);
                }
            }
        }
        // Nothing that passes every max is dropped
        let dropped = pool.len() - kept.len();
        let violating = pool.iter().filter(|i| violates_max(i, &constraints)).count();
        assert_eq!(dropped, violating);
    }
}

#[test]
fn test_enumeration_completeness() {
    let items: Vec<MenuItem> = (0..8)
        .map(|i| make_item(&format!("item{i}"), 100, 1.0, 1.0, 1.0))
        .collect();

    for n in 0..=items.len() {
        let pool: Vec<&MenuItem> = items[..n].iter().collect();
        let expected: u128 = (MIN_COMBO_SIZE..=MAX_COMBO_SIZE.min(n))
            .map(|k| combinations_for_size(n, k))
            .sum();

        let member_sets: Vec<Vec<String>> = enumerate(&pool, MAX_COMBO_SIZE, MIN_COMBO_SIZE)
            .map(|combo| {
                let mut names = combo.names();
                names.sort();
                names
            })
            .collect();
        let unique: HashSet<Vec<String>> = member_sets.iter().cloned().collect();

        assert_eq!(member_sets.len() as u128, expected, "n = {n}");
        assert_eq!(unique.len(), member_sets.len(), "duplicates for n = {n}");
    }
}

#[test]
fn test_enumeration_sizes_never_decrease() {
    let items = menu();
    let pool: Vec<&MenuItem> = items.iter().collect();
    let sizes: Vec<usize> = enumerate(&pool, MAX_COMBO_SIZE, MIN_COMBO_SIZE)
        .map(|c| c.len())
        .collect();
    assert!(sizes.windows(2).all(|w| w[0] <= w[1]));
    assert_eq!(sizes.first(), Some(&MIN_COMBO_SIZE));
    assert_eq!(sizes.last(), Some(&MAX_COMBO_SIZE));
}

#[test]
fn test_feasibility_monotonicity() {
    let items = menu();
    let pool: Vec<&MenuItem> = items.iter().collect();

    for constraints in constraint_grid() {
        for combo in enumerate(&pool, MAX_COMBO_SIZE - 1, MIN_COMBO_SIZE) {
            if !is_feasible(&combo, &constraints) {
                continue;
            }
            for extra in pool.iter().copied() {
                if combo.items.iter().any(|i| std::ptr::eq(*i, extra))
                    || violates_max(extra, &constraints)
                {
                    continue;
                }

                let mut grown = combo.clone();
                grown.items.push(extra);
                let totals = grown.totals();

                // Adding non-negative items can never break a min already met
                for m in Macro::ALL {
                    assert!(!constraints.bounds.get(m).below_min(m.of_totals(&totals)));
                }
                if !is_feasible(&grown, &constraints) {
                    assert!(Macro::ALL
                        .iter()
                        .any(|&m| constraints.bounds.get(m).exceeds_max(m.of_totals(&totals))));
                }
            }
        }
    }
}

#[test]
fn test_sampling_bound() {
    let items = menu();
    let config = SearchConfig::default();
    let mut rng = StdRng::seed_from_u64(5);

    for constraints in constraint_grid() {
        let pool: Vec<&MenuItem> = items.iter().collect();
        let pruned = prune(&pool, &constraints);
        let feasible = enumerate(&pruned, MAX_COMBO_SIZE, MIN_COMBO_SIZE)
            .filter(|c| is_feasible(c, &constraints))
            .count();

        for num in [None, Some(0), Some(1), Some(3), Some(10_000)] {
            let mut constraints = constraints.clone();
            constraints.num = num;
            let requested = num.filter(|&n| n > 0).unwrap_or(DEFAULT_COMBO_COUNT);

            let results = find_combos(&items, &constraints, &config, &mut rng);
            assert_eq!(results.len(), requested.min(feasible));
        }
    }
}

#[test]
fn test_results_are_distinct_and_feasible() {
    let items = menu();
    let constraints = ConstraintSet::new()
        .with_max(Macro::Calories, 1000.0)
        .with_num(50);
    let mut rng = StdRng::seed_from_u64(8);

    let results = find_combos(&items, &constraints, &SearchConfig::default(), &mut rng);
    let unique: HashSet<Vec<String>> = results.iter().map(|r| r.items.clone()).collect();
    assert_eq!(unique.len(), results.len());
    assert!(results.iter().all(|r| r.total.calories <= 1000));
}

#[test]
fn test_formatting_totals_match_members() {
    let items = menu();
    let pool: Vec<&MenuItem> = items.iter().collect();

    for combo in enumerate(&pool, MAX_COMBO_SIZE, MIN_COMBO_SIZE) {
        let result = format_combo(&combo);
        assert_eq!(result.count, combo.len());
        assert_eq!(result.items, combo.names());

        let mut expected = ComboTotals::default();
        for name in &result.items {
            let item = items.iter().find(|i| &i.name == name).unwrap();
            expected.calories += u64::from(item.calories);
            expected.protein += item.protein;
            expected.fat += item.fat;
            expected.carbs += item.carbs;
        }

        assert_eq!(result.total.calories, expected.calories);
        assert_float_absolute_eq!(result.total.protein, expected.protein, 1e-9);
        assert_float_absolute_eq!(result.total.fat, expected.fat, 1e-9);
        assert_float_absolute_eq!(result.total.carbs, expected.carbs, 1e-9);
    }
}
