//! Turn phase state.
//!
//! A turn cycles `Action -> Buy -> Adjust`. `Adjust` is also the resting
//! state before a player's first turn: a freshly constructed player has
//! already performed its first cleanup (drawing the opening hand).

use serde::{Deserialize, Serialize};

/// Sub-state of a player's turn, gating which commands are legal.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Phase {
    /// Action cards may be played.
    Action,
    /// Purchases may be made.
    Buy,
    /// Cleanup done; waiting for the next `start_turn`.
    Adjust,
}

impl std::fmt::Display for Phase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Phase::Action => "ACTION",
            Phase::Buy => "BUY",
            Phase::Adjust => "ADJUST",
        };
        f.write_str(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        assert_eq!(Phase::Action.to_string(), "ACTION");
        assert_eq!(Phase::Buy.to_string(), "BUY");
        assert_eq!(Phase::Adjust.to_string(), "ADJUST");
    }
}
