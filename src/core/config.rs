//! Game configuration.
//!
//! Everything a game needs to decide at setup time, fixed before `start()`:
//! the RNG seed, how many kingdom piles to select, and whether the expansion
//! piles (Platinum, Colony) are in play.

use serde::{Deserialize, Serialize};

/// Number of kingdom piles selected at start unless configured otherwise.
pub const DEFAULT_KINGDOM_PILES: usize = 10;

/// Setup-time configuration, passed to `Game::new`.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct GameConfig {
    /// Seed for the game RNG (deck shuffles, kingdom selection).
    pub seed: u64,

    /// Number of kingdom piles selected without replacement at `start()`.
    pub kingdom_piles: usize,

    /// Stock the Platinum and Colony piles.
    pub expansion: bool,
}

impl GameConfig {
    /// Create a configuration with the given seed and defaults otherwise.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            seed,
            kingdom_piles: DEFAULT_KINGDOM_PILES,
            expansion: false,
        }
    }

    /// Set the number of kingdom piles selected at start.
    #[must_use]
    pub fn with_kingdom_piles(mut self, count: usize) -> Self {
        self.kingdom_piles = count;
        self
    }

    /// Stock the expansion piles (Platinum, Colony).
    #[must_use]
    pub fn with_expansion(mut self) -> Self {
        self.expansion = true;
        self
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = GameConfig::new(7);
        assert_eq!(config.seed, 7);
        assert_eq!(config.kingdom_piles, DEFAULT_KINGDOM_PILES);
        assert!(!config.expansion);
    }

    #[test]
    fn test_builder() {
        let config = GameConfig::new(7).with_kingdom_piles(5).with_expansion();
        assert_eq!(config.kingdom_piles, 5);
        assert!(config.expansion);
    }
}
