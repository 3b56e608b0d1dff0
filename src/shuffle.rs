//! Deck shuffling behind an injectable random source.

use alloc::vec::Vec;

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Source of uniformly distributed indices.
///
/// This is the only entropy the engine consumes. Tests substitute their own
/// implementation to obtain a fixed permutation.
pub trait RandomSource {
    /// Returns an index uniformly chosen from `0..=upper`.
    fn pick_index(&mut self, upper: usize) -> usize;
}

/// Adapts any [`rand::Rng`] into a [`RandomSource`].
#[derive(Debug, Clone)]
pub struct RngSource<R>(R);

impl<R: Rng> RngSource<R> {
    /// Wraps an existing generator.
    #[must_use]
    pub const fn new(rng: R) -> Self {
        Self(rng)
    }
}

impl RngSource<ChaCha8Rng> {
    /// Creates a ChaCha8-backed source; the same seed yields the same shuffles.
    #[must_use]
    pub fn seeded(seed: u64) -> Self {
        Self(ChaCha8Rng::seed_from_u64(seed))
    }
}

impl<R: Rng> RandomSource for RngSource<R> {
    fn pick_index(&mut self, upper: usize) -> usize {
        self.0.random_range(0..=upper)
    }
}

/// Returns the items in a uniformly random order (Fisher–Yates).
///
/// Walks from the last index down, swapping each element with one picked from
/// `0..=i`. The input is consumed and handed back permuted.
///
/// ```
/// use crazy_eights::shuffle::{shuffle, RngSource};
///
/// let mut source = RngSource::seeded(7);
/// let mut cards = shuffle(vec![1, 2, 3, 4, 5], &mut source);
/// cards.sort_unstable();
/// assert_eq!(cards, vec![1, 2, 3, 4, 5]);
/// ```
pub fn shuffle<T, S>(mut items: Vec<T>, source: &mut S) -> Vec<T>
where
    S: RandomSource + ?Sized,
{
    for i in (1..items.len()).rev() {
        let j = source.pick_index(i);
        items.swap(i, j);
    }
    items
}
