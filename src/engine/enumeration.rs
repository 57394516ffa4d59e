use crate::engine::constants::{MAX_COMBO_SIZE, MIN_COMBO_SIZE};
use crate::models::{Combo, MenuItem};

/// Compute C(n, k), the number of k-subsets of n items.
/// Returns 0 when k > n and 1 when k == 0.
pub fn combinations_for_size(n: usize, k: usize) -> u128 {
    if k > n {
        return 0;
    }
    // C(n, k) = C(n, n-k); iterate over the smaller side
    let k = k.min(n - k);
    let mut result = 1u128;
    for i in 0..k {
        // Exact at every step: result * (n - i) is divisible by (i + 1)
        result = result * (n - i) as u128 / (i + 1) as u128;
    }
    result
}

/// Total number of combos the enumerator yields for a pool of `n` items.
pub fn total_combos(n: usize, min_size: usize, max_size: usize) -> u128 {
    let (min_size, max_size) = clamp_sizes(min_size, max_size);
    (min_size..=max_size)
        .map(|k| combinations_for_size(n, k))
        .sum()
}

/// Force sizes into `[MIN_COMBO_SIZE, MAX_COMBO_SIZE]`.
fn clamp_sizes(min_size: usize, max_size: usize) -> (usize, usize) {
    (min_size.max(MIN_COMBO_SIZE), max_size.min(MAX_COMBO_SIZE))
}

/// Lazy iterator over every subset of a pool with size in `[min, max]`.
///
/// Subsets come out in increasing size; within one size they follow
/// lexicographic order of pool indices. The state is just the current index
/// vector, so cloning the iterator (or calling [`enumerate`] again) restarts
/// the sequence from any point.
#[derive(Debug, Clone)]
pub struct ComboIter<'p, 'a> {
    pool: &'p [&'a MenuItem],
    max_size: usize,
    indices: Vec<usize>,
    exhausted: bool,
}

impl<'p, 'a> ComboIter<'p, 'a> {
    pub fn new(pool: &'p [&'a MenuItem], min_size: usize, max_size: usize) -> Self {
        let (min_size, max_size) = clamp_sizes(min_size, max_size);
        let max_size = max_size.min(pool.len());
        let exhausted = min_size > max_size;

        Self {
            pool,
            max_size,
            indices: if exhausted {
                Vec::new()
            } else {
                (0..min_size).collect()
            },
            exhausted,
        }
    }

    /// Step to the next subset.
    fn advance(&mut self) {
        if self.exhausted {
            return;
        }

        let n = self.pool.len();
        let k = self.indices.len();

        // Bump the rightmost index that still has room, then pack the tail
        for i in (0..k).rev() {
            let max_val = n - (k - i);
            if self.indices[i] < max_val {
                self.indices[i] += 1;
                for j in (i + 1)..k {
                    self.indices[j] = self.indices[j - 1] + 1;
                }
                return;
            }
        }

        // Size k is done; start size k + 1 at [0, 1, ..., k]
        if k + 1 > self.max_size {
            self.exhausted = true;
            return;
        }
        self.indices = (0..=k).collect();
    }
}

impl<'a> Iterator for ComboIter<'_, 'a> {
    type Item = Combo<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.exhausted {
            return None;
        }

        let combo = Combo::new(self.indices.iter().map(|&i| self.pool[i]).collect());
        self.advance();
        Some(combo)
    }
}

/// Enumerate every combo of `pool` with size in `[min_size, max_size]`.
///
/// Sizes are clamped to `[MIN_COMBO_SIZE, MAX_COMBO_SIZE]`. A pool smaller
/// than the minimum size yields nothing.
pub fn enumerate<'p, 'a>(
    pool: &'p [&'a MenuItem],
    max_size: usize,
    min_size: usize,
) -> ComboIter<'p, 'a> {
    ComboIter::new(pool, min_size, max_size)
}
