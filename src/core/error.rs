//! Error taxonomy for game commands.
//!
//! Three families, mirroring how failures are handled:
//!
//! - **Command misuse** (wrong phase, card not owned, exhausted pile,
//!   insufficient funds, invalid discard): returned to the command issuer;
//!   the attempt leaves state unchanged.
//! - **Setup misuse** (player ceiling, mutating a started game): rejected
//!   eagerly at the offending call.
//! - **Hook faults**: an external decision policy failed or answered outside
//!   the offered choices. Inside a per-opponent effect boundary this
//!   eliminates the opponent; on the acting player's own path it surfaces
//!   from the command as [`GameError::Hook`].

use thiserror::Error;

use super::phase::Phase;
use crate::cards::CardName;

/// A failure reported by an externally supplied decision policy.
///
/// Covers both the policy itself failing (e.g. a dead transport behind it)
/// and an answer that is not a member of the offered candidate list.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
#[error("decision policy fault: {0}")]
pub struct HookError(pub String);

impl HookError {
    /// Fault for a choice outside the offered candidate list.
    #[must_use]
    pub fn out_of_list(choice: CardName) -> Self {
        Self(format!("answer {choice} is not among the offered choices"))
    }
}

/// Typed failure of a game or turn command.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum GameError {
    #[error("command requires the {expected} phase (currently {actual})")]
    WrongPhase { expected: Phase, actual: Phase },

    #[error("{card} is not in the player's hand")]
    NotInHand { card: CardName },

    #[error("{card} is not an action card")]
    NotAnAction { card: CardName },

    #[error("no purchases remaining this turn")]
    NoBuysRemaining,

    #[error("the {card} pile is exhausted")]
    PileExhausted { card: CardName },

    #[error("not enough money: {cost} needed, {available} available")]
    InsufficientFunds { cost: u32, available: u32 },

    #[error("invalid discard: {card} is not in the player's hand")]
    InvalidDiscard { card: CardName },

    #[error("at most {max} players")]
    TooManyPlayers { max: usize },

    #[error("the game has already started")]
    AlreadyStarted,

    #[error(transparent)]
    Hook(#[from] HookError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages() {
        let err = GameError::WrongPhase {
            expected: Phase::Action,
            actual: Phase::Buy,
        };
        assert_eq!(
            err.to_string(),
            "command requires the ACTION phase (currently BUY)"
        );

        let err = GameError::InsufficientFunds {
            cost: 5,
            available: 3,
        };
        assert_eq!(err.to_string(), "not enough money: 5 needed, 3 available");
    }

    #[test]
    fn test_hook_error_converts() {
        let err: GameError = HookError::out_of_list(CardName::Curse).into();
        assert!(matches!(err, GameError::Hook(_)));
    }
}
