//! Deterministic, injectable randomness.
//!
//! Everything in the crate that needs randomness takes a [`RandomSource`]
//! rather than reaching for a global RNG, so tests can pin down every deal.
//!
//! ```
//! use memory_match::core::{GameRng, RandomSource};
//!
//! let mut rng = GameRng::new(42);
//! let mut cards = vec![1, 2, 3, 4, 5, 6];
//! rng.shuffle(&mut cards);
//!
//! // Same seed, same permutation
//! let mut again = vec![1, 2, 3, 4, 5, 6];
//! GameRng::new(42).shuffle(&mut again);
//! assert_eq!(cards, again);
//! ```

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use std::hash::{Hash, Hasher};

/// Source of uniformly distributed indices.
///
/// Implementors only provide [`next_index`](RandomSource::next_index);
/// shuffling is built on top of it so every source shuffles the same way.
pub trait RandomSource {
    /// Return an index uniformly distributed in `0..upper`.
    ///
    /// `upper` is always at least 1.
    fn next_index(&mut self, upper: usize) -> usize;

    /// Fisher–Yates shuffle, walking from the last index down to 1 and
    /// swapping each slot with a uniformly chosen slot at or before it.
    fn shuffle<T>(&mut self, slice: &mut [T])
    where
        Self: Sized,
    {
        for i in (1..slice.len()).rev() {
            let j = self.next_index(i + 1);
            slice.swap(i, j);
        }
    }
}

/// Seeded ChaCha8 random source.
#[derive(Clone, Debug)]
pub struct GameRng {
    inner: ChaCha8Rng,
    seed: u64,
}

impl GameRng {
    /// Create a new RNG with the given seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
            seed,
        }
    }

    /// Create an independent stream for a specific context.
    ///
    /// Sessions use this to keep deck shuffling separate from anything
    /// else drawing from the same seed.
    #[must_use]
    pub fn for_context(&self, context: &str) -> Self {
        use std::collections::hash_map::DefaultHasher;

        let mut hasher = DefaultHasher::new();
        self.seed.hash(&mut hasher);
        context.hash(&mut hasher);
        Self::new(hasher.finish())
    }
}

impl RandomSource for GameRng {
    fn next_index(&mut self, upper: usize) -> usize {
        self.inner.gen_range(0..upper)
    }
}

/// Replays a fixed list of picks, wrapping around when exhausted.
///
/// Each pick is reduced modulo the requested bound. Handy for tests that
/// need one exact permutation.
#[derive(Clone, Debug, Default)]
pub struct ScriptedSource {
    picks: Vec<usize>,
    cursor: usize,
}

impl ScriptedSource {
    /// Create a source that returns `picks` in order.
    #[must_use]
    pub fn new(picks: impl Into<Vec<usize>>) -> Self {
        Self {
            picks: picks.into(),
            cursor: 0,
        }
    }

    /// A source whose every pick is the largest allowed index.
    ///
    /// Under Fisher–Yates this swaps each slot with itself, so shuffling
    /// leaves the input order untouched.
    #[must_use]
    pub fn identity() -> Self {
        Self::new(vec![usize::MAX])
    }
}

impl RandomSource for ScriptedSource {
    fn next_index(&mut self, upper: usize) -> usize {
        if self.picks.is_empty() {
            return 0;
        }
        let pick = self.picks[self.cursor % self.picks.len()];
        self.cursor += 1;
        if pick == usize::MAX {
            upper - 1
        } else {
            pick % upper
        }
    }
}
