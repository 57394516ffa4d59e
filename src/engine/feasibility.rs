use crate::models::{Combo, ComboTotals, ConstraintSet, Macro, MacroBounds};

/// True if every macro total lies within its bounds.
#[inline]
pub fn totals_within(totals: &ComboTotals, bounds: &MacroBounds) -> bool {
    Macro::ALL
        .iter()
        .all(|&m| bounds.get(m).admits(m.of_totals(totals)))
}

/// Check a combo against the full min/max range on all four macros.
pub fn is_feasible(combo: &Combo, constraints: &ConstraintSet) -> bool {
    totals_within(&combo.totals(), &constraints.bounds)
}

/// First macro whose total falls outside its bounds, if any.
pub fn first_violation(totals: &ComboTotals, bounds: &MacroBounds) -> Option<Macro> {
    Macro::ALL
        .into_iter()
        .find(|&m| !bounds.get(m).admits(m.of_totals(totals)))
}
