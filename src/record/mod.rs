//! Event journal and serializable snapshots.
//!
//! The persistence collaborator that writes replay logs lives outside this
//! crate; toward it the core exposes two things:
//!
//! - [`Journal`]: an append-only, per-turn event stream. Every command
//!   attempt, every typed failure, and every elimination lands here;
//!   nothing is silently discarded.
//! - [`GameSnapshot`]: a point-in-time view with each player's hand masked
//!   unless that player is currently taking their turn.
//!
//! Both are plain serde shapes; the wire encoding is the collaborator's
//! choice.

use std::collections::BTreeMap;

use im::Vector;
use serde::{Deserialize, Serialize};

use crate::cards::CardName;
use crate::piles::CardContainer;

/// Per-name quantities of a pile, suitable for serialization.
///
/// Only names with a nonzero count appear.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardCounts {
    /// Quantity per card name.
    pub quantities: BTreeMap<CardName, usize>,
}

impl From<&CardContainer> for CardCounts {
    fn from(container: &CardContainer) -> Self {
        Self {
            quantities: container.counts().collect(),
        }
    }
}

/// One entry in a turn's event stream.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum JournalEvent {
    /// A command attempt, with the issuer's score at that moment.
    Action {
        /// Acting player's name.
        player: String,
        /// Human-readable command, e.g. `"BUY Silver"`.
        description: String,
        /// The player's score when the command was issued.
        score: i64,
    },
    /// A recorded failure: command misuse, policy fault, or elimination.
    Error {
        /// The player the failure concerns.
        player: String,
        /// What went wrong.
        message: String,
    },
}

/// Events of a single turn, in order.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TurnRecord {
    /// Ordered events of the turn.
    pub events: Vec<JournalEvent>,
}

/// Append-only event stream for a whole game.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct Journal {
    turns: Vector<TurnRecord>,
}

impl Journal {
    /// Create an empty journal.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Open a new turn record.
    pub fn begin_turn(&mut self) {
        self.turns.push_back(TurnRecord::default());
    }

    /// Record a command attempt.
    pub fn record_action(
        &mut self,
        player: impl Into<String>,
        description: impl Into<String>,
        score: i64,
    ) {
        self.push(JournalEvent::Action {
            player: player.into(),
            description: description.into(),
            score,
        });
    }

    /// Record a failure.
    pub fn record_error(&mut self, player: impl Into<String>, message: impl Into<String>) {
        self.push(JournalEvent::Error {
            player: player.into(),
            message: message.into(),
        });
    }

    /// Number of turns recorded so far.
    #[must_use]
    pub fn turn_count(&self) -> usize {
        self.turns.len()
    }

    /// Iterate the recorded turns, oldest first.
    pub fn turns(&self) -> impl Iterator<Item = &TurnRecord> {
        self.turns.iter()
    }

    /// The turn currently being recorded.
    #[must_use]
    pub fn current_turn(&self) -> Option<&TurnRecord> {
        self.turns.back()
    }

    fn push(&mut self, event: JournalEvent) {
        // Errors can precede the first start_turn; open a turn for them.
        if self.turns.is_empty() {
            self.begin_turn();
        }
        let last = self.turns.len() - 1;
        if let Some(turn) = self.turns.get_mut(last) {
            turn.events.push(event);
        }
    }
}

/// A player's visible state at snapshot time.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerSnapshot {
    /// Display name.
    pub name: String,
    /// Hand contents; `None` unless this player is taking their turn.
    pub hand: Option<CardCounts>,
    /// Current score (the elimination sentinel when eliminated).
    pub score: i64,
}

/// Point-in-time view of a whole game.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameSnapshot {
    /// Whether a termination condition holds.
    pub finished: bool,
    /// Per-player masked state, in table order.
    pub players: Vec<PlayerSnapshot>,
    /// Remaining stock quantities.
    pub stock: CardCounts,
}

/// Victory-card breakdown behind a score.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreDetail {
    pub estate_qty: usize,
    pub duchy_qty: usize,
    pub province_qty: usize,
    pub colony_qty: usize,
    pub curse_qty: usize,
    pub gardens_qty: usize,
    pub fairgrounds_qty: usize,
    /// Total score including scaling bonuses.
    pub score: i64,
}
