//! Picking the next entry to quiz.
//!
//! A cycle never asks the same entry twice. [`UsedSet`] records which pool
//! indices were already handed out and keeps the remaining ones in a dense
//! list, so a draw is a single random index plus a swap-remove and always
//! terminates.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Per-cycle record of pool indices that were already selected.
#[derive(Debug, Clone)]
pub struct UsedSet {
    used: Vec<bool>,
    remaining: Vec<usize>,
    // position of each unused index inside `remaining`
    slots: Vec<usize>,
}

impl UsedSet {
    /// Create an empty used set for a pool of `pool_size` entries.
    pub fn new(pool_size: usize) -> Self {
        Self {
            used: vec![false; pool_size],
            remaining: (0..pool_size).collect(),
            slots: (0..pool_size).collect(),
        }
    }

    pub fn pool_size(&self) -> usize {
        self.used.len()
    }

    /// Number of indices already used.
    pub fn len(&self) -> usize {
        self.pool_size() - self.remaining.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns `true` once every index of the pool has been used.
    pub fn is_exhausted(&self) -> bool {
        self.remaining.is_empty()
    }

    pub fn contains(&self, index: usize) -> bool {
        self.used.get(index).copied().unwrap_or(false)
    }

    /// Indices that can still be selected, in no particular order.
    pub fn remaining(&self) -> &[usize] {
        &self.remaining
    }

    /// Mark `index` as used. Returns `false` if it was already used or is
    /// outside the pool.
    pub fn mark(&mut self, index: usize) -> bool {
        if index >= self.pool_size() || self.used[index] {
            return false;
        }
        self.take_slot(self.slots[index]);
        true
    }

    /// Remove the index stored at `slot` of the remaining list and mark it used.
    fn take_slot(&mut self, slot: usize) -> usize {
        let index = self.remaining.swap_remove(slot);
        if let Some(&moved) = self.remaining.get(slot) {
            self.slots[moved] = slot;
        }
        self.used[index] = true;
        index
    }
}

/// Strategy for choosing the next entry of a cycle.
pub trait SelectionPolicy {
    /// Pick an unused index from the pool and mark it used.
    ///
    /// Returns `None` when every index of the pool is already used, which
    /// includes an empty pool.
    fn pick_next(&mut self, used: &mut UsedSet) -> Option<usize>;
}

/// Uniform random choice among the unused indices.
#[derive(Debug, Clone)]
pub struct RandomSelection<R = StdRng> {
    rng: R,
}

impl RandomSelection<StdRng> {
    /// Seed from the operating system.
    pub fn from_entropy() -> Self {
        Self::new(StdRng::from_os_rng())
    }

    /// Reproducible selection order for a given seed.
    pub fn seeded(seed: u64) -> Self {
        Self::new(StdRng::seed_from_u64(seed))
    }
}

impl<R: Rng> RandomSelection<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl<R: Rng> SelectionPolicy for RandomSelection<R> {
    fn pick_next(&mut self, used: &mut UsedSet) -> Option<usize> {
        if used.is_exhausted() {
            return None;
        }
        let slot = self.rng.random_range(0..used.remaining.len());
        Some(used.take_slot(slot))
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn never_repeats_and_stays_in_range() {
        for seed in 0..20 {
            let mut policy = RandomSelection::seeded(seed);
            let mut used = UsedSet::new(7);
            let mut seen = HashSet::new();
            for _ in 0..7 {
                let index = policy.pick_next(&mut used).expect("pool not exhausted yet");
                assert!(index < 7);
                assert!(seen.insert(index), "index {index} returned twice");
                assert!(used.contains(index));
            }
            assert!(used.is_exhausted());
            assert_eq!(policy.pick_next(&mut used), None);
        }
    }

    #[test]
    fn empty_pool_yields_none() {
        let mut policy = RandomSelection::seeded(1);
        let mut used = UsedSet::new(0);
        assert!(used.is_exhausted());
        assert_eq!(policy.pick_next(&mut used), None);
    }

    #[test]
    fn skips_indices_marked_up_front() {
        let mut used = UsedSet::new(5);
        assert!(used.mark(0));
        assert!(used.mark(3));
        assert!(!used.mark(3));
        assert!(!used.mark(9));
        assert_eq!(used.len(), 2);

        let mut policy = RandomSelection::seeded(42);
        let mut picked: Vec<usize> = std::iter::from_fn(|| policy.pick_next(&mut used)).collect();
        picked.sort_unstable();
        assert_eq!(picked, vec![1, 2, 4]);
    }

    #[test]
    fn same_seed_same_order() {
        let draw = |seed| {
            let mut policy = RandomSelection::seeded(seed);
            let mut used = UsedSet::new(10);
            std::iter::from_fn(|| policy.pick_next(&mut used)).collect::<Vec<_>>()
        };
        assert_eq!(draw(7), draw(7));
    }

    #[test]
    fn draws_are_roughly_uniform() {
        let mut first_pick = [0u32; 4];
        let mut policy = RandomSelection::seeded(2024);
        for _ in 0..4000 {
            let mut used = UsedSet::new(4);
            let index = policy.pick_next(&mut used).unwrap();
            first_pick[index] += 1;
        }
        for count in first_pick {
            assert!((800..1200).contains(&count), "skewed distribution: {first_pick:?}");
        }
    }

    #[test]
    fn mark_keeps_remaining_consistent() {
        let mut used = UsedSet::new(6);
        for index in [5, 0, 2] {
            assert!(used.mark(index));
        }
        let mut remaining = used.remaining().to_vec();
        remaining.sort_unstable();
        assert_eq!(remaining, vec![1, 3, 4]);
        for index in [1, 3, 4] {
            assert!(!used.contains(index));
        }
    }
}
