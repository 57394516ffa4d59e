use rand::Rng;

use crate::engine::{find_combos, SearchConfig};
use crate::error::{MenuError, Result};
use crate::models::{ComboRequest, ComboResult, ConstraintSet};
use crate::store::MenuStore;

/// Answer a combo request against the store.
///
/// An unknown restaurant yields an empty pool and therefore no combos.
pub fn serve_request<R>(
    store: &MenuStore,
    request: &ComboRequest,
    config: &SearchConfig,
    rng: &mut R,
) -> Vec<ComboResult>
where
    R: Rng + ?Sized,
{
    let constraints = request.to_constraints();
    let pool = store.items_for(&request.restaurant);
    tracing::debug!(
        restaurant = %request.restaurant,
        items = pool.len(),
        "serving combo request"
    );
    find_combos(pool, &constraints, config, rng)
}

/// Parse a JSON request and answer it.
pub fn serve_json<R>(
    store: &MenuStore,
    json: &str,
    config: &SearchConfig,
    rng: &mut R,
) -> Result<Vec<ComboResult>>
where
    R: Rng + ?Sized,
{
    let request = ComboRequest::from_json(json)?;
    Ok(serve_request(store, &request, config, rng))
}

/// Look up a restaurant, failing with a suggestion when it is unknown.
pub fn require_restaurant(store: &MenuStore, restaurant: &str) -> Result<String> {
    if store.is_empty() {
        return Err(MenuError::EmptyStore);
    }
    if store.has_restaurant(restaurant) {
        return Ok(restaurant.trim().to_lowercase());
    }
    Err(MenuError::RestaurantNotFound {
        name: restaurant.to_string(),
        suggestion: store.suggest_restaurant(restaurant),
    })
}

/// Run a search for a restaurant that must exist in the store.
pub fn search_restaurant<R>(
    store: &MenuStore,
    constraints: &ConstraintSet,
    config: &SearchConfig,
    rng: &mut R,
) -> Result<Vec<ComboResult>>
where
    R: Rng + ?Sized,
{
    let restaurant = constraints
        .restaurant
        .as_deref()
        .ok_or_else(|| MenuError::InvalidInput("no restaurant selected".to_string()))?;
    let restaurant = require_restaurant(store, restaurant)?;
    Ok(find_combos(
        store.items_for(&restaurant),
        constraints,
        config,
        rng,
    ))
}
