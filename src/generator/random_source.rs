/*
random_source.rs

Copyright 2025 Hervé Quatremain

This file is part of Mazerunner.

Mazerunner is free software: you can redistribute it and/or modify it under the
terms of the GNU General Public License as published by the Free Software
Foundation, either version 3 of the License, or (at your option) any later
version.

Mazerunner is distributed in the hope that it will be useful, but WITHOUT ANY
WARRANTY; without even the implied warranty of MERCHANTABILITY or FITNESS FOR
A PARTICULAR PURPOSE. See the GNU General Public License for more details.

You should have received a copy of the GNU General Public License along with
Mazerunner. If not, see <https://www.gnu.org/licenses/>.

SPDX-License-Identifier: GPL-3.0-or-later
*/

//! Seeded random source owned by one maze generation.
//!
//! The generator is a [`ChaCha8Rng`], which produces the same sequence on every platform for a
//! given seed. Every random draw of a generation goes through one [`RandomSource`] object, so two
//! generations never share random state.

use rand::seq::{IndexedRandom, SliceRandom};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// [`RandomSource`] object.
#[derive(Debug, Clone)]
pub struct RandomSource {
    rng: ChaCha8Rng,
    seed: u64,
}

impl RandomSource {
    /// Create a [`RandomSource`] object from the given seed.
    pub fn new(seed: u64) -> Self {
        Self {
            rng: ChaCha8Rng::seed_from_u64(seed),
            seed,
        }
    }

    /// Seed used to create the object.
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Uniform integer in `[low, high]`.
    ///
    /// Return `low` when the range is empty (`high < low`).
    pub fn range_inclusive(&mut self, low: usize, high: usize) -> usize {
        if high <= low {
            return low;
        }
        self.rng.random_range(low..=high)
    }

    /// Uniformly pick one element of the slice, or [`None`] if the slice is empty.
    pub fn choose<'a, T>(&mut self, candidates: &'a [T]) -> Option<&'a T> {
        candidates.choose(&mut self.rng)
    }

    /// Shuffle the slice in place.
    pub fn shuffle<T>(&mut self, items: &mut [T]) {
        items.shuffle(&mut self.rng);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn same_seed_same_sequence() {
        let mut a = RandomSource::new(7);
        let mut b = RandomSource::new(7);
        let xs: Vec<usize> = (0..64).map(|_| a.range_inclusive(0, 1000)).collect();
        let ys: Vec<usize> = (0..64).map(|_| b.range_inclusive(0, 1000)).collect();
        assert_eq!(xs, ys);
        assert_eq!(a.seed(), 7);
    }

    #[test]
    fn different_seeds_diverge() {
        let mut a = RandomSource::new(1);
        let mut b = RandomSource::new(2);
        let xs: Vec<usize> = (0..64).map(|_| a.range_inclusive(0, 1_000_000)).collect();
        let ys: Vec<usize> = (0..64).map(|_| b.range_inclusive(0, 1_000_000)).collect();
        assert_ne!(xs, ys);
    }

    #[test]
    fn range_stays_in_bounds() {
        let mut rng = RandomSource::new(99);
        for _ in 0..1000 {
            let v = rng.range_inclusive(3, 9);
            assert!((3..=9).contains(&v));
        }
        assert_eq!(rng.range_inclusive(4, 4), 4);
        assert_eq!(rng.range_inclusive(5, 2), 5);
    }

    #[test]
    fn choose_from_empty_is_none() {
        let mut rng = RandomSource::new(0);
        let empty: [u8; 0] = [];
        assert_eq!(rng.choose(&empty), None);
        assert_eq!(rng.choose(&[42]), Some(&42));
    }

    #[test]
    fn shuffle_is_a_permutation() {
        let mut rng = RandomSource::new(3);
        let mut items: Vec<u32> = (0..50).collect();
        rng.shuffle(&mut items);
        let mut sorted = items.clone();
        sorted.sort_unstable();
        assert_eq!(sorted, (0..50).collect::<Vec<u32>>());
    }
}
