use rand::Rng;

use crate::engine::constants::{DEFAULT_COMBO_COUNT, MAX_COMBO_SIZE, MIN_COMBO_SIZE};
use crate::engine::enumeration::{enumerate, total_combos};
use crate::engine::feasibility::is_feasible;
use crate::engine::formatting::format_combo;
use crate::engine::pruning::{prune, select_pool};
use crate::engine::sampling::{requested_count, sample};
use crate::models::{Combo, ComboResult, ConstraintSet, MenuItem};

/// Tunables for a combo search.
#[derive(Debug, Clone)]
pub struct SearchConfig {
    pub min_size: usize,
    /// Clamped to `MAX_COMBO_SIZE`; it can be lowered but never raised.
    pub max_size: usize,
    pub default_count: usize,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            min_size: MIN_COMBO_SIZE,
            max_size: MAX_COMBO_SIZE,
            default_count: DEFAULT_COMBO_COUNT,
        }
    }
}

/// Lazily yield every feasible combo of an already pruned pool.
pub fn feasible_combos<'p, 'a>(
    pool: &'p [&'a MenuItem],
    constraints: &'p ConstraintSet,
    config: &SearchConfig,
) -> impl Iterator<Item = Combo<'a>> + 'p {
    enumerate(pool, config.max_size, config.min_size)
        .filter(move |combo| is_feasible(combo, constraints))
}

/// Run the full pipeline: select, prune, enumerate, test, sample, format.
///
/// Never fails. An empty pool, an unsatisfiable constraint set, or a pool
/// too small to form a combo all produce an empty list.
pub fn find_combos<'a, R>(
    items: impl IntoIterator<Item = &'a MenuItem>,
    constraints: &ConstraintSet,
    config: &SearchConfig,
    rng: &mut R,
) -> Vec<ComboResult>
where
    R: Rng + ?Sized,
{
    let pool = select_pool(items, constraints);
    if pool.is_empty() {
        tracing::debug!("empty pool, skipping enumeration");
        return Vec::new();
    }

    let pruned = prune(&pool, constraints);
    let candidates = total_combos(pruned.len(), config.min_size, config.max_size);
    tracing::debug!(
        pool = pool.len(),
        pruned = pruned.len(),
        candidates = %candidates,
        "enumerating combos"
    );

    // No more than every candidate can be returned
    let requested = requested_count(constraints.num, config.default_count);
    let count = requested.min(usize::try_from(candidates).unwrap_or(usize::MAX));
    if count == 0 {
        return Vec::new();
    }
    let mut feasible = 0usize;
    let picked = sample(
        feasible_combos(&pruned, constraints, config).inspect(|_| feasible += 1),
        Some(count),
        rng,
    );

    tracing::info!(
        feasible,
        returned = picked.len(),
        requested,
        "combo search finished"
    );

    picked.iter().map(format_combo).collect()
}

/// [`find_combos`] with the default config and the thread-local RNG.
pub fn search_combos<'a>(
    items: impl IntoIterator<Item = &'a MenuItem>,
    constraints: &ConstraintSet,
) -> Vec<ComboResult> {
    find_combos(
        items,
        constraints,
        &SearchConfig::default(),
        &mut rand::thread_rng(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Macro;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn sample_menu() -> Vec<MenuItem> {
        vec![
            MenuItem::new("Crunchy Taco", "taco bell", 170, 8.0, 9.0, 13.0).with_category("Tacos"),
            MenuItem::new("Soft Taco", "taco bell", 180, 9.0, 9.0, 18.0).with_category("Tacos"),
            MenuItem::new("Bean Burrito", "taco bell", 350, 13.0, 9.0, 54.0)
                .with_category("Burritos"),
            MenuItem::new("Crunchwrap", "taco bell", 530, 16.0, 21.0, 71.0)
                .with_category("Specialties"),
            MenuItem::new("Nachos", "taco bell", 220, 3.0, 12.0, 24.0).with_category("Sides"),
            MenuItem::new("Big Mac", "mcdonalds", 590, 25.0, 34.0, 46.0).with_category("Burgers"),
        ]
    }

    fn rng() -> StdRng {
        StdRng::seed_from_u64(99)
    }

    #[test]
    fn test_find_combos_respects_constraints() {
        let menu = sample_menu();
        let constraints = ConstraintSet::new()
            .with_restaurant("taco bell")
            .with_min(Macro::Calories, 500.0)
            .with_max(Macro::Calories, 700.0)
            .with_num(100);

        let results = find_combos(&menu, &constraints, &SearchConfig::default(), &mut rng());
        assert!(!results.is_empty());
        for result in &results {
            assert!((500..=700).contains(&result.total.calories));
            assert!(!result.items.contains(&"Big Mac".to_string()));
            assert!(result.count >= MIN_COMBO_SIZE);
        }
    }

    #[test]
    fn test_find_combos_returns_all_when_fewer_than_requested() {
        let menu = sample_menu();
        let constraints = ConstraintSet::new()
            .with_restaurant("taco bell")
            .with_categories(["Tacos"]);

        let results = find_combos(&menu, &constraints, &SearchConfig::default(), &mut rng());
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].total.calories, 350);
    }

    #[test]
    fn test_find_combos_default_count() {
        let menu = sample_menu();
        let constraints = ConstraintSet::new().with_restaurant("taco bell");

        // 5 items give C(5,2)+C(5,3)+C(5,4)+C(5,5) = 26 combos
        let results = find_combos(&menu, &constraints, &SearchConfig::default(), &mut rng());
        assert_eq!(results.len(), DEFAULT_COMBO_COUNT);
    }

    #[test]
    fn test_config_lowers_max_size() {
        let menu = sample_menu();
        let constraints = ConstraintSet::new()
            .with_restaurant("taco bell")
            .with_num(1000);
        let config = SearchConfig {
            max_size: 2,
            ..Default::default()
        };

        let results = find_combos(&menu, &constraints, &config, &mut rng());
        assert_eq!(results.len(), 10);
        assert!(results.iter().all(|r| r.count == 2));
    }

    #[test]
    fn test_huge_num_is_capped_by_candidates() {
        let menu = sample_menu();
        let constraints = ConstraintSet::new()
            .with_restaurant("taco bell")
            .with_num(usize::MAX);

        let results = find_combos(&menu, &constraints, &SearchConfig::default(), &mut rng());
        assert_eq!(results.len(), 26);
    }

    #[test]
    fn test_feasible_combos_is_restartable() {
        let menu = sample_menu();
        let pool: Vec<&MenuItem> = menu.iter().take(5).collect();
        let constraints = ConstraintSet::new().with_max(Macro::Fat, 30.0);
        let config = SearchConfig::default();

        let first = feasible_combos(&pool, &constraints, &config).count();
        let second = feasible_combos(&pool, &constraints, &config).count();
        assert_eq!(first, second);
        assert!(first > 0);
    }

    #[test]
    fn test_search_combos_empty_menu() {
        let results = search_combos(&Vec::<MenuItem>::new(), &ConstraintSet::new());
        assert!(results.is_empty());
    }
}
