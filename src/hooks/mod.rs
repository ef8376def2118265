//! Externally supplied decision policies.
//!
//! Card effects with more than one legal outcome never decide by heuristic;
//! they ask the owning player's [`PlayerHooks`]. A hooks implementation is
//! typically a proxy for a remote policy, so every method returns a
//! [`HookResult`]: the policy may fail outright, and an answer outside the
//! offered choices is treated the same way. What happens to the fault
//! depends on whose effect is resolving; see the error taxonomy in
//! [`crate::core::error`].
//!
//! The query payloads are plain serde shapes; the transport carrying them to
//! a remote policy is an external collaborator.
//!
//! Every trait method has a passive default (decline, or first candidate),
//! so [`DefaultHooks`] lets a game proceed without external input, and test
//! policies override only the queries they care about.

use serde::{Deserialize, Serialize};

use crate::cards::CardName;
use crate::core::HookError;

/// Outcome of a decision query.
pub type HookResult<T> = Result<T, HookError>;

/// A single card plus the visible hand it relates to.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardAndHand {
    /// The card the question is about.
    pub card: CardName,
    /// The owner's current hand, in pile order.
    pub hand: Vec<CardName>,
}

/// The visible hand, for pick-one queries.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct HandCards {
    /// The owner's current hand, in pile order.
    pub hand: Vec<CardName>,
}

/// Candidate card names offered for a gain.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GainCandidates {
    /// Stocked names the player may gain, in canonical order.
    pub candidates: Vec<CardName>,
}

/// Treasures in hand offered for an upgrade.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TreasureChoices {
    /// The treasures currently in hand, in pile order.
    pub treasures: Vec<CardName>,
}

/// Decision policy consulted by card effects.
///
/// One boxed instance is injected into each player at construction and may
/// be replaced at any time. Calls are synchronous blocking round-trips; no
/// timeout or retry exists at this layer.
pub trait PlayerHooks {
    /// May this card be discarded from hand?
    fn confirm_discard(&mut self, query: &CardAndHand) -> HookResult<bool> {
        let _ = query;
        Ok(false)
    }

    /// May this card be trashed from hand?
    fn confirm_trash(&mut self, query: &CardAndHand) -> HookResult<bool> {
        let _ = query;
        Ok(false)
    }

    /// Pick one hand card to discard.
    fn pick_discard(&mut self, query: &HandCards) -> HookResult<CardName> {
        first_of(&query.hand)
    }

    /// Pick one hand card to trash.
    fn pick_trash(&mut self, query: &HandCards) -> HookResult<CardName> {
        first_of(&query.hand)
    }

    /// Discard the entire deck?
    fn confirm_discard_deck(&mut self) -> HookResult<bool> {
        Ok(false)
    }

    /// Pick one candidate to gain into the discard pile.
    fn pick_gain_to_discard(&mut self, query: &GainCandidates) -> HookResult<CardName> {
        first_of(&query.candidates)
    }

    /// Pick one candidate to gain onto the top of the deck.
    fn pick_gain_to_deck(&mut self, query: &GainCandidates) -> HookResult<CardName> {
        first_of(&query.candidates)
    }

    /// Skip taking this just-drawn card into hand?
    fn skip_drawn_card(&mut self, query: &CardAndHand) -> HookResult<bool> {
        let _ = query;
        Ok(false)
    }

    /// Pick one treasure to upgrade to the next tier, or decline.
    fn pick_treasure_to_upgrade(
        &mut self,
        query: &TreasureChoices,
    ) -> HookResult<Option<CardName>> {
        let _ = query;
        Ok(None)
    }
}

/// The most passive legal policy: declines every option, takes the first
/// candidate when a choice is mandatory.
#[derive(Clone, Copy, Debug, Default)]
pub struct DefaultHooks;

impl PlayerHooks for DefaultHooks {}

fn first_of(choices: &[CardName]) -> HookResult<CardName> {
    choices
        .first()
        .copied()
        .ok_or_else(|| HookError("a choice was requested from an empty list".to_string()))
}

/// Reject an answer that is not a member of the offered list.
pub(crate) fn validate_choice(
    choice: CardName,
    offered: &[CardName],
) -> Result<CardName, HookError> {
    if offered.contains(&choice) {
        Ok(choice)
    } else {
        Err(HookError::out_of_list(choice))
    }
}
