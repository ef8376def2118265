//! The closed card-name enumeration.
//!
//! Every card in the game is one of these names; cards sharing a name are
//! fungible and carry no per-instance identity. [`CardName::ALL`] fixes the
//! canonical order used wherever a deterministic card list is needed
//! (candidate lists offered to hooks, supply iteration).

use serde::{Deserialize, Serialize};

/// Name of a card type.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub enum CardName {
    // Treasures
    Copper,
    Silver,
    Gold,
    Platinum,
    CursedGold,
    // Victory and curse
    Estate,
    Duchy,
    Province,
    Colony,
    Curse,
    Gardens,
    Fairgrounds,
    // Kingdom actions
    Adventurer,
    Artificer,
    Bandit,
    Bureaucrat,
    Cellar,
    Chancellor,
    Chapel,
    CouncilRoom,
    DistantShore,
    FarmingVillage,
    Feast,
    Festival,
    FortuneTeller,
    Harvest,
    Hireling,
    Laboratory,
    Library,
    Magnate,
    Magpie,
    Market,
    Marquis,
    Militia,
    Mine,
    Moneylender,
    Poacher,
    Port,
    Remake,
    Remodel,
    Smithy,
    Swap,
    Village,
    Witch,
    Woodcutter,
    Workshop,
}

impl CardName {
    /// Number of card names in the catalog.
    pub const COUNT: usize = 46;

    /// Every card name, in canonical order.
    pub const ALL: [CardName; Self::COUNT] = [
        CardName::Copper,
        CardName::Silver,
        CardName::Gold,
        CardName::Platinum,
        CardName::CursedGold,
        CardName::Estate,
        CardName::Duchy,
        CardName::Province,
        CardName::Colony,
        CardName::Curse,
        CardName::Gardens,
        CardName::Fairgrounds,
        CardName::Adventurer,
        CardName::Artificer,
        CardName::Bandit,
        CardName::Bureaucrat,
        CardName::Cellar,
        CardName::Chancellor,
        CardName::Chapel,
        CardName::CouncilRoom,
        CardName::DistantShore,
        CardName::FarmingVillage,
        CardName::Feast,
        CardName::Festival,
        CardName::FortuneTeller,
        CardName::Harvest,
        CardName::Hireling,
        CardName::Laboratory,
        CardName::Library,
        CardName::Magnate,
        CardName::Magpie,
        CardName::Market,
        CardName::Marquis,
        CardName::Militia,
        CardName::Mine,
        CardName::Moneylender,
        CardName::Poacher,
        CardName::Port,
        CardName::Remake,
        CardName::Remodel,
        CardName::Smithy,
        CardName::Swap,
        CardName::Village,
        CardName::Witch,
        CardName::Woodcutter,
        CardName::Workshop,
    ];

    /// Position in the canonical order.
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// The card's string name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            CardName::Copper => "Copper",
            CardName::Silver => "Silver",
            CardName::Gold => "Gold",
            CardName::Platinum => "Platinum",
            CardName::CursedGold => "CursedGold",
            CardName::Estate => "Estate",
            CardName::Duchy => "Duchy",
            CardName::Province => "Province",
            CardName::Colony => "Colony",
            CardName::Curse => "Curse",
            CardName::Gardens => "Gardens",
            CardName::Fairgrounds => "Fairgrounds",
            CardName::Adventurer => "Adventurer",
            CardName::Artificer => "Artificer",
            CardName::Bandit => "Bandit",
            CardName::Bureaucrat => "Bureaucrat",
            CardName::Cellar => "Cellar",
            CardName::Chancellor => "Chancellor",
            CardName::Chapel => "Chapel",
            CardName::CouncilRoom => "CouncilRoom",
            CardName::DistantShore => "DistantShore",
            CardName::FarmingVillage => "FarmingVillage",
            CardName::Feast => "Feast",
            CardName::Festival => "Festival",
            CardName::FortuneTeller => "FortuneTeller",
            CardName::Harvest => "Harvest",
            CardName::Hireling => "Hireling",
            CardName::Laboratory => "Laboratory",
            CardName::Library => "Library",
            CardName::Magnate => "Magnate",
            CardName::Magpie => "Magpie",
            CardName::Market => "Market",
            CardName::Marquis => "Marquis",
            CardName::Militia => "Militia",
            CardName::Mine => "Mine",
            CardName::Moneylender => "Moneylender",
            CardName::Poacher => "Poacher",
            CardName::Port => "Port",
            CardName::Remake => "Remake",
            CardName::Remodel => "Remodel",
            CardName::Smithy => "Smithy",
            CardName::Swap => "Swap",
            CardName::Village => "Village",
            CardName::Witch => "Witch",
            CardName::Woodcutter => "Woodcutter",
            CardName::Workshop => "Workshop",
        }
    }
}

impl std::fmt::Display for CardName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for CardName {
    type Err = UnknownCardName;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        CardName::ALL
            .iter()
            .copied()
            .find(|name| name.as_str() == s)
            .ok_or_else(|| UnknownCardName(s.to_string()))
    }
}

/// Parse failure for a card name string.
#[derive(Clone, Debug, thiserror::Error, PartialEq, Eq)]
#[error("unknown card name: {0}")]
pub struct UnknownCardName(pub String);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_is_complete_and_ordered() {
        assert_eq!(CardName::ALL.len(), CardName::COUNT);
        for (i, name) in CardName::ALL.iter().enumerate() {
            assert_eq!(name.index(), i);
        }
    }

    #[test]
    fn test_display_from_str_round_trip() {
        for name in CardName::ALL {
            let parsed: CardName = name.to_string().parse().unwrap();
            assert_eq!(parsed, name);
        }
    }

    #[test]
    fn test_from_str_rejects_unknown() {
        assert!("Moat".parse::<CardName>().is_err());
    }

    #[test]
    fn test_serde_as_string() {
        let json = serde_json::to_string(&CardName::CouncilRoom).unwrap();
        assert_eq!(json, "\"CouncilRoom\"");
        let back: CardName = serde_json::from_str(&json).unwrap();
        assert_eq!(back, CardName::CouncilRoom);
    }
}
