//! The static card catalog.
//!
//! One entry per [`CardName`], in canonical order. The table length is tied
//! to `CardName::COUNT`, so adding a variant without a catalog entry is a
//! compile error; the order itself is pinned by a test below.

use super::definition::CardDefinition;
use super::name::CardName;
use super::name::CardName::*;

static CATALOG: [CardDefinition; CardName::COUNT] = [
    CardDefinition::treasure(Copper, 0, 1),
    CardDefinition::treasure(Silver, 3, 2),
    CardDefinition::treasure(Gold, 6, 3),
    CardDefinition::treasure(Platinum, 9, 5),
    CardDefinition::treasure(CursedGold, 4, 3).kingdom(),
    CardDefinition::victory(Estate, 2, 1),
    CardDefinition::victory(Duchy, 5, 3),
    CardDefinition::victory(Province, 8, 6),
    CardDefinition::victory(Colony, 11, 10),
    CardDefinition::curse(Curse, -1),
    CardDefinition::victory(Gardens, 4, 0).kingdom(),
    CardDefinition::victory(Fairgrounds, 6, 0).kingdom(),
    CardDefinition::action(Adventurer, 6),
    CardDefinition::action(Artificer, 5).bonuses(1, 1, 0, 1),
    CardDefinition::action(Bandit, 5),
    CardDefinition::action(Bureaucrat, 4),
    CardDefinition::action(Cellar, 2).bonuses(0, 1, 0, 0),
    CardDefinition::action(Chancellor, 3).bonuses(0, 0, 0, 2),
    CardDefinition::action(Chapel, 2),
    CardDefinition::action(CouncilRoom, 5).bonuses(4, 0, 1, 0),
    CardDefinition::action(DistantShore, 6).bonuses(2, 1, 0, 0),
    CardDefinition::action(FarmingVillage, 4).bonuses(0, 2, 0, 0),
    CardDefinition::action(Feast, 4),
    CardDefinition::action(Festival, 5).bonuses(0, 2, 1, 2),
    CardDefinition::action(FortuneTeller, 3).bonuses(0, 0, 0, 2),
    CardDefinition::action(Harvest, 5),
    CardDefinition::action(Hireling, 6).bonuses(1, 0, 0, 0),
    CardDefinition::action(Laboratory, 5).bonuses(2, 1, 0, 0),
    CardDefinition::action(Library, 5),
    CardDefinition::action(Magnate, 5),
    CardDefinition::action(Magpie, 4).bonuses(1, 1, 0, 0),
    CardDefinition::action(Market, 5).bonuses(1, 1, 1, 1),
    CardDefinition::action(Marquis, 6).bonuses(0, 0, 1, 0),
    CardDefinition::action(Militia, 4).bonuses(0, 0, 0, 2),
    CardDefinition::action(Mine, 5),
    CardDefinition::action(Moneylender, 4),
    CardDefinition::action(Poacher, 4).bonuses(1, 1, 0, 1),
    CardDefinition::action(Port, 4).bonuses(1, 2, 0, 0),
    CardDefinition::action(Remake, 4),
    CardDefinition::action(Remodel, 4),
    CardDefinition::action(Smithy, 4).bonuses(3, 0, 0, 0),
    CardDefinition::action(Swap, 5).bonuses(1, 1, 0, 0),
    CardDefinition::action(Village, 3).bonuses(1, 2, 0, 0),
    CardDefinition::action(Witch, 5).bonuses(2, 0, 0, 0),
    CardDefinition::action(Woodcutter, 3).bonuses(0, 0, 1, 2),
    CardDefinition::action(Workshop, 3),
];

/// Look up the static definition for a card name.
#[must_use]
pub fn definition(name: CardName) -> &'static CardDefinition {
    &CATALOG[name.index()]
}

/// All kingdom-selectable names, in canonical order.
pub fn kingdom_names() -> impl Iterator<Item = CardName> {
    CardName::ALL
        .into_iter()
        .filter(|&name| definition(name).is_kingdom)
}

/// The treasure one tier above `name`, for upgrade effects.
///
/// The top tier upgrades to itself, a legal no-op.
#[must_use]
pub fn next_treasure_tier(name: CardName) -> Option<CardName> {
    match name {
        Copper => Some(Silver),
        Silver | CursedGold => Some(Gold),
        Gold | Platinum => Some(Platinum),
        _ => None,
    }
}

impl CardName {
    /// Shorthand for [`definition`].
    #[must_use]
    pub fn def(self) -> &'static CardDefinition {
        definition(self)
    }

    /// Playable during the action phase.
    #[must_use]
    pub fn is_action(self) -> bool {
        self.def().is_action()
    }

    /// Liquidated for coins during payment.
    #[must_use]
    pub fn is_treasure(self) -> bool {
        self.def().is_treasure()
    }

    /// Counts as a victory card.
    #[must_use]
    pub fn is_victory(self) -> bool {
        self.def().is_victory()
    }

    /// Purchase cost.
    #[must_use]
    pub fn cost(self) -> u32 {
        self.def().cost
    }
}
