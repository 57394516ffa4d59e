use rand::seq::{IteratorRandom, SliceRandom};
use rand::Rng;

use crate::engine::constants::DEFAULT_COMBO_COUNT;

/// Resolve a requested count, falling back to `default` for `None` or zero.
pub fn requested_count(requested: Option<usize>, default: usize) -> usize {
    match requested {
        Some(n) if n > 0 => n,
        _ => default,
    }
}

/// Draw a uniform random sample without replacement.
///
/// Returns `min(requested, population)` elements; every subset of that size
/// is equally likely. The population is consumed lazily with reservoir
/// sampling, so only the sample itself is held in memory. The sample is
/// shuffled before returning so its order carries no enumeration bias.
///
/// The reservoir is sized up front, so the count is first capped by the
/// population's upper size hint when it has one.
pub fn sample<T, I, R>(population: I, requested: Option<usize>, rng: &mut R) -> Vec<T>
where
    I: IntoIterator<Item = T>,
    R: Rng + ?Sized,
{
    let population = population.into_iter();
    let mut count = requested_count(requested, DEFAULT_COMBO_COUNT);
    if let (_, Some(upper)) = population.size_hint() {
        count = count.min(upper);
    }
    let mut picked = population.choose_multiple(rng, count);
    picked.shuffle(rng);
    picked
}
