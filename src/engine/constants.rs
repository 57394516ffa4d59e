/// Smallest bundle the search will return. Single items are never combos.
pub const MIN_COMBO_SIZE: usize = 2;

/// Hard ceiling on bundle size.
///
/// This bounds enumeration work per request: a 30-item pool already yields
/// over 170,000 subsets of size five.
pub const MAX_COMBO_SIZE: usize = 5;

/// Number of combos returned when the caller asks for none or zero.
pub const DEFAULT_COMBO_COUNT: usize = 10;
