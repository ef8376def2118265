//! Static card definitions.
//!
//! A [`CardDefinition`] holds the immutable attributes of a card type: cost,
//! money value, victory points, kind, and the fixed bonuses granted when the
//! card is played, before its effect logic runs. Definitions never change at
//! runtime; the one-time kingdom subset chosen at game start only decides
//! which of them get a supply pile.

use super::name::CardName;

/// Broad category of a card.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CardKind {
    /// Playable during the action phase.
    Action,
    /// Converted to coins during `buy` payment.
    Treasure,
    /// Counts toward the final score.
    Victory,
    /// Worth negative points; dealt by attacks.
    Curse,
}

/// Immutable attributes of one card type.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CardDefinition {
    /// The card's name.
    pub name: CardName,

    /// Purchase cost.
    pub cost: u32,

    /// Coin value when liquidated during payment (treasures only).
    pub money: u32,

    /// Fixed victory points (scaling bonuses live in scoring).
    pub victory_points: i32,

    /// Broad category.
    pub kind: CardKind,

    /// Selectable into a game's kingdom at setup.
    pub is_kingdom: bool,

    /// Cards drawn when played, before the effect runs.
    pub more_cards: u32,

    /// Action tokens granted when played.
    pub more_actions: u32,

    /// Purchase tokens granted when played.
    pub more_buys: u32,

    /// Coins granted when played.
    pub more_coins: u32,
}

impl CardDefinition {
    const fn base(name: CardName, cost: u32, kind: CardKind) -> Self {
        Self {
            name,
            cost,
            money: 0,
            victory_points: 0,
            kind,
            is_kingdom: false,
            more_cards: 0,
            more_actions: 0,
            more_buys: 0,
            more_coins: 0,
        }
    }

    /// A treasure worth `money` coins.
    #[must_use]
    pub const fn treasure(name: CardName, cost: u32, money: u32) -> Self {
        let mut def = Self::base(name, cost, CardKind::Treasure);
        def.money = money;
        def
    }

    /// A victory card worth `points`.
    #[must_use]
    pub const fn victory(name: CardName, cost: u32, points: i32) -> Self {
        let mut def = Self::base(name, cost, CardKind::Victory);
        def.victory_points = points;
        def
    }

    /// The curse card.
    #[must_use]
    pub const fn curse(name: CardName, points: i32) -> Self {
        let mut def = Self::base(name, 0, CardKind::Curse);
        def.victory_points = points;
        def
    }

    /// An action card.
    #[must_use]
    pub const fn action(name: CardName, cost: u32) -> Self {
        let mut def = Self::base(name, cost, CardKind::Action);
        def.is_kingdom = true;
        def
    }

    /// Mark as kingdom-selectable (builder).
    #[must_use]
    pub const fn kingdom(mut self) -> Self {
        self.is_kingdom = true;
        self
    }

    /// Set fixed bonuses (builder): draws, actions, buys, coins.
    #[must_use]
    pub const fn bonuses(mut self, cards: u32, actions: u32, buys: u32, coins: u32) -> Self {
        self.more_cards = cards;
        self.more_actions = actions;
        self.more_buys = buys;
        self.more_coins = coins;
        self
    }

    /// Playable during the action phase.
    #[must_use]
    pub const fn is_action(&self) -> bool {
        matches!(self.kind, CardKind::Action)
    }

    /// Liquidated for coins during payment.
    #[must_use]
    pub const fn is_treasure(&self) -> bool {
        matches!(self.kind, CardKind::Treasure)
    }

    /// Counts as a victory card (Curse does not).
    #[must_use]
    pub const fn is_victory(&self) -> bool {
        matches!(self.kind, CardKind::Victory)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builders() {
        let def = CardDefinition::action(CardName::Smithy, 4).bonuses(3, 0, 0, 0);
        assert!(def.is_action());
        assert!(def.is_kingdom);
        assert_eq!(def.cost, 4);
        assert_eq!(def.more_cards, 3);

        let def = CardDefinition::treasure(CardName::Silver, 3, 2);
        assert!(def.is_treasure());
        assert_eq!(def.money, 2);

        let def = CardDefinition::victory(CardName::Gardens, 4, 0).kingdom();
        assert!(def.is_victory());
        assert!(def.is_kingdom);

        let def = CardDefinition::curse(CardName::Curse, -1);
        assert!(!def.is_victory());
        assert_eq!(def.victory_points, -1);
    }
}
