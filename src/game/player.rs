//! Per-player state.
//!
//! A [`Player`] owns four piles (deck, hand, discard, played), the scalar
//! turn resources, the turn-phase state, and the decision policy answering
//! its card-effect queries. Players are owned by value inside
//! [`crate::game::Game`] and addressed by [`PlayerId`]; all turn commands
//! are `Game` methods.

use tracing::debug;

use crate::cards::CardName;
use crate::core::{GameRng, Phase};
use crate::hooks::{DefaultHooks, PlayerHooks};
use crate::piles::CardContainer;

/// Cards drawn at cleanup unless raised by a card effect.
pub const STARTING_HAND: usize = 5;

/// Copper count in every starting deck, debited from the stock ledger.
pub const STARTING_COPPER: usize = 7;

/// Estate count in every starting deck.
pub const STARTING_ESTATES: usize = 3;

/// Index of a player within its game's roster, fixed at add time.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub struct PlayerId(pub u8);

impl PlayerId {
    /// Create a new player ID.
    #[must_use]
    pub const fn new(id: u8) -> Self {
        Self(id)
    }

    /// Roster index (0-based).
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

impl std::fmt::Display for PlayerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Player {}", self.0)
    }
}

/// One player's complete state.
pub struct Player {
    /// Display name, unique within a game.
    pub name: String,

    /// Face-down draw pile; the front is drawn next.
    pub deck: CardContainer,

    /// Cards currently held.
    pub hand: CardContainer,

    /// Face-up discard pile.
    pub discard: CardContainer,

    /// Cards played this turn, drained to discard at cleanup.
    pub played: CardContainer,

    /// Action tokens remaining this turn.
    pub actions_left: u32,

    /// Purchase tokens remaining this turn.
    pub purchases_left: u32,

    /// Coins already converted this turn.
    pub coins: u32,

    /// Current turn phase.
    pub phase: Phase,

    /// True between `start_turn` and `end_turn`.
    pub playing: bool,

    /// Set by a policy fault; removes the player from effect targeting and
    /// pins its score.
    pub eliminated: bool,

    /// Hand size drawn at cleanup; permanently raisable by card effects.
    pub hand_target: usize,

    /// Decision policy answering this player's effect queries.
    pub hooks: Box<dyn PlayerHooks>,
}

impl Player {
    /// Create a player with the standard starting deck (7 Copper, 3 Estate),
    /// shuffled, with the opening hand already drawn.
    pub fn new(name: impl Into<String>, hooks: Box<dyn PlayerHooks>, rng: &mut GameRng) -> Self {
        let mut deck = CardContainer::new();
        deck.append_many(STARTING_COPPER, CardName::Copper);
        deck.append_many(STARTING_ESTATES, CardName::Estate);
        deck.shuffle(rng);

        let mut player = Self {
            name: name.into(),
            deck,
            hand: CardContainer::new(),
            discard: CardContainer::new(),
            played: CardContainer::new(),
            actions_left: 0,
            purchases_left: 0,
            coins: 0,
            phase: Phase::Adjust,
            playing: false,
            eliminated: false,
            hand_target: STARTING_HAND,
            hooks,
        };
        player.cleanup(rng);
        player
    }

    /// Create a player with the passive default policy.
    pub fn with_default_hooks(name: impl Into<String>, rng: &mut GameRng) -> Self {
        Self::new(name, Box::new(DefaultHooks), rng)
    }

    /// Take the top deck card, reshuffling the discard pile into the deck
    /// first when the deck is empty. `None` when both are empty.
    pub fn take_from_deck(&mut self, rng: &mut GameRng) -> Option<CardName> {
        if self.deck.is_empty() {
            self.discard.empty_to(&mut self.deck);
            self.deck.shuffle(rng);
        }
        self.deck.pop_top()
    }

    /// Draw up to `n` cards into hand; fewer when deck and discard run out.
    pub fn draw(&mut self, rng: &mut GameRng, n: usize) {
        for _ in 0..n {
            match self.take_from_deck(rng) {
                Some(card) => self.hand.append(card),
                None => break,
            }
        }
    }

    /// Cleanup: drain played cards and hand to discard, draw a fresh hand,
    /// rest in the ADJUST phase.
    pub fn cleanup(&mut self, rng: &mut GameRng) {
        self.played.empty_to(&mut self.discard);
        self.hand.empty_to(&mut self.discard);
        let target = self.hand_target;
        self.draw(rng, target);
        self.phase = Phase::Adjust;
        debug!(player = %self.name, hand = self.hand.len(), "cleanup");
    }

    /// Coins spendable this turn: converted coins plus the treasures still
    /// in hand.
    #[must_use]
    pub fn spendable(&self) -> u32 {
        self.coins + self.hand.treasure_value()
    }

    /// Total cards across all four piles.
    #[must_use]
    pub fn total_cards(&self) -> usize {
        self.deck.len() + self.hand.len() + self.discard.len() + self.played.len()
    }

    /// Advance ACTION -> BUY when no action card remains playable.
    pub(crate) fn check_action_to_buy(&mut self) {
        if self.phase == Phase::Action && (!self.hand.contains_action() || self.actions_left == 0)
        {
            self.actions_left = 0;
            self.phase = Phase::Buy;
            debug!(player = %self.name, "phase ACTION -> BUY");
        }
    }

    /// Advance BUY -> ADJUST when the purchases are spent.
    pub(crate) fn check_buy_to_adjust(&mut self) {
        if self.purchases_left == 0 {
            self.phase = Phase::Adjust;
            debug!(player = %self.name, "phase BUY -> ADJUST");
        }
    }
}

impl std::fmt::Debug for Player {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Player")
            .field("name", &self.name)
            .field("phase", &self.phase)
            .field("actions_left", &self.actions_left)
            .field("purchases_left", &self.purchases_left)
            .field("coins", &self.coins)
            .field("deck", &self.deck.len())
            .field("hand", &self.hand.len())
            .field("discard", &self.discard.len())
            .field("played", &self.played.len())
            .field("eliminated", &self.eliminated)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn new_player() -> (Player, GameRng) {
        let mut rng = GameRng::new(42);
        let player = Player::with_default_hooks("toto", &mut rng);
        (player, rng)
    }

    #[test]
    fn test_starting_deck() {
        let (player, _) = new_player();

        // 7 Copper + 3 Estate split across deck and opening hand.
        assert_eq!(player.hand.len(), STARTING_HAND);
        assert_eq!(player.deck.len(), 5);
        assert_eq!(
            player.deck.quantity(CardName::Copper) + player.hand.quantity(CardName::Copper),
            STARTING_COPPER
        );
        assert_eq!(
            player.deck.quantity(CardName::Estate) + player.hand.quantity(CardName::Estate),
            STARTING_ESTATES
        );
        assert_eq!(player.phase, Phase::Adjust);
    }

    #[test]
    fn test_draw_reshuffles_discard() {
        let (mut player, mut rng) = new_player();
        player.deck.clear();
        player.discard.append_many(3, CardName::Gold);

        player.draw(&mut rng, 2);

        assert_eq!(player.hand.quantity(CardName::Gold), 2);
        assert_eq!(player.deck.len(), 1);
        assert_eq!(player.discard.len(), 0);
    }

    #[test]
    fn test_draw_from_nothing_yields_nothing() {
        let (mut player, mut rng) = new_player();
        player.deck.clear();
        player.hand.clear();
        player.discard.clear();

        player.draw(&mut rng, 5);

        assert_eq!(player.hand.len(), 0);
    }

    #[test]
    fn test_cleanup_drains_and_redraws() {
        let (mut player, mut rng) = new_player();
        player.played.append(CardName::Smithy);
        let held = player.total_cards();

        player.cleanup(&mut rng);

        assert_eq!(player.played.len(), 0);
        assert_eq!(player.hand.len(), STARTING_HAND);
        assert_eq!(player.total_cards(), held);
        assert_eq!(player.phase, Phase::Adjust);
    }

    #[test]
    fn test_raised_hand_target() {
        let (mut player, mut rng) = new_player();
        player.hand_target = 6;
        player.deck.append_many(5, CardName::Copper);

        player.cleanup(&mut rng);

        assert_eq!(player.hand.len(), 6);
    }

    #[test]
    fn test_spendable() {
        let (mut player, _) = new_player();
        player.hand.clear();
        player.hand.append(CardName::Silver);
        player.hand.append(CardName::Copper);
        player.coins = 2;

        assert_eq!(player.spendable(), 5);
    }
}
