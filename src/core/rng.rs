//! Deterministic random number generation.
//!
//! Every shuffle and every kingdom selection flows through [`GameRng`], so a
//! game seeded identically and driven by the same command sequence replays
//! identically. The state is capturable in O(1) for checkpointing, using the
//! ChaCha word position rather than replaying the stream.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};

/// Seeded deterministic RNG.
///
/// Uses ChaCha8 for speed while keeping a high-quality stream.
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

    /// Generate a random usize in the given range.
    pub fn gen_range(&mut self, range: std::ops::Range<usize>) -> usize {
        self.inner.gen_range(range)
    }

    /// Shuffle a slice in place.
    pub fn shuffle<T>(&mut self, slice: &mut [T]) {
        use rand::seq::SliceRandom;
        slice.shuffle(&mut self.inner);
    }

    /// Choose a random element from a slice.
    #[must_use]
    pub fn choose<'a, T>(&mut self, slice: &'a [T]) -> Option<&'a T> {
        use rand::seq::SliceRandom;
        slice.choose(&mut self.inner)
    }

    /// Sample `amount` distinct elements from a slice, in random order.
    ///
    /// Returns fewer when the slice is shorter than `amount`.
    #[must_use]
    pub fn sample<T: Copy>(&mut self, slice: &[T], amount: usize) -> Vec<T> {
        use rand::seq::SliceRandom;
        slice
            .choose_multiple(&mut self.inner, amount)
            .copied()
            .collect()
    }

    /// Capture the current state for checkpointing.
    #[must_use]
    pub fn state(&self) -> GameRngState {
        GameRngState {
            seed: self.seed,
            word_pos: self.inner.get_word_pos(),
        }
    }

    /// Restore from a captured state.
    #[must_use]
    pub fn from_state(state: &GameRngState) -> Self {
        let mut inner = ChaCha8Rng::seed_from_u64(state.seed);
        inner.set_word_pos(state.word_pos);
        Self {
            inner,
            seed: state.seed,
        }
    }
}

/// Serializable RNG state.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameRngState {
    /// Original seed.
    pub seed: u64,
    /// ChaCha word position (128-bit counter).
    pub word_pos: u128,
}
