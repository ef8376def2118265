//! Card effect dispatch.
//!
//! Effects run after a card's fixed bonuses have been granted. Dispatch is a
//! single exhaustive match over the closed name set: adding a variant
//! without an arm is a compile error. Every decision with more than one
//! legal outcome goes through the acting player's hooks; nothing here
//! decides by heuristic.
//!
//! Effects that reveal cards one at a time keep them in a local buffer and
//! flush it to the discard pile when done, so a reshuffle mid-effect can
//! never see (or re-draw) the cards in flight.

mod attacks;

use smallvec::SmallVec;

use crate::cards::{next_treasure_tier, CardDefinition, CardName};
use crate::core::GameError;
use crate::game::{GainTo, Game, PlayerId};
use crate::hooks::{validate_choice, CardAndHand, GainCandidates, HandCards, TreasureChoices};
use crate::piles::PilePosition;

/// Hand size Library draws up to.
const LIBRARY_HAND: usize = 7;

/// Cards Chapel can trash per play.
const CHAPEL_TRASH_LIMIT: usize = 4;

/// Hand size Marquis discards down to.
const MARQUIS_HAND: usize = 10;

/// Run the effect of `name`, just played by `id`.
pub(crate) fn apply(game: &mut Game, id: PlayerId, name: CardName) -> Result<(), GameError> {
    use crate::cards::CardName::*;
    match name {
        Adventurer => adventurer(game, id),
        Artificer => artificer(game, id),
        Bandit => attacks::bandit(game, id),
        Bureaucrat => attacks::bureaucrat(game, id),
        Cellar => cellar(game, id),
        Chancellor => chancellor(game, id),
        Chapel => chapel(game, id),
        CouncilRoom => attacks::council_room(game, id),
        DistantShore => distant_shore(game, id),
        FarmingVillage => farming_village(game, id),
        Feast => feast(game, id),
        FortuneTeller => attacks::fortune_teller(game, id),
        Harvest => harvest(game, id),
        Hireling => hireling(game, id),
        Library => library(game, id),
        Magnate => magnate(game, id),
        Magpie => magpie(game, id),
        Marquis => marquis(game, id),
        Militia => attacks::militia(game, id),
        Mine => mine(game, id),
        Moneylender => moneylender(game, id),
        Poacher => poacher(game, id),
        Remake => remake(game, id),
        Remodel => remodel(game, id),
        Swap => swap(game, id),
        Witch => attacks::witch(game, id),
        Workshop => workshop(game, id),
        // Fixed bonuses only; nothing left to do here.
        Festival | Laboratory | Market | Port | Smithy | Village | Woodcutter => Ok(()),
        // Treasures and victory cards never reach action dispatch.
        Copper | Silver | Gold | Platinum | CursedGold | Estate | Duchy | Province | Colony
        | Curse | Gardens | Fairgrounds => Ok(()),
    }
}

/// Offer the stocked names matching `keep` and gain the picked one.
///
/// No candidates means no gain; the pick is validated against the offer.
fn gain_from_candidates(
    game: &mut Game,
    id: PlayerId,
    keep: impl Fn(&CardDefinition) -> bool,
    dest: GainTo,
) -> Result<(), GameError> {
    let candidates = game.stock_candidates(keep);
    if candidates.is_empty() {
        return Ok(());
    }

    let query = GainCandidates {
        candidates: candidates.clone(),
    };
    let choice = {
        let (player, _, _) = game.split_parts(id);
        match dest {
            GainTo::DeckTop => player.hooks.pick_gain_to_deck(&query)?,
            GainTo::Discard | GainTo::Hand => player.hooks.pick_gain_to_discard(&query)?,
        }
    };
    let choice = validate_choice(choice, &candidates)?;
    game.gain(id, choice, dest)?;
    Ok(())
}

/// Dig through the deck until two treasures turn up; they go to hand, the
/// rest of the revealed cards to discard.
fn adventurer(game: &mut Game, id: PlayerId) -> Result<(), GameError> {
    let (player, _, rng) = game.split_parts(id);
    let mut set_aside: SmallVec<[CardName; 8]> = SmallVec::new();
    let mut found = 0;

    while found < 2 {
        let Some(card) = player.take_from_deck(rng) else {
            break;
        };
        if card.is_treasure() {
            player.hand.append(card);
            found += 1;
        } else {
            set_aside.push(card);
        }
    }
    for card in set_aside {
        player.discard.append(card);
    }
    Ok(())
}

/// Discard any number of hand cards, then gain a card costing exactly that
/// many onto the deck.
fn artificer(game: &mut Game, id: PlayerId) -> Result<(), GameError> {
    let discarded = {
        let (player, _, _) = game.split_parts(id);
        let mut count: u32 = 0;
        for card in player.hand.iter().collect::<Vec<_>>() {
            let query = CardAndHand {
                card,
                hand: player.hand.iter().collect(),
            };
            if player.hooks.confirm_discard(&query)? {
                player
                    .hand
                    .transfer(card, &mut player.discard, PilePosition::Bottom)?;
                count += 1;
            }
        }
        count
    };
    gain_from_candidates(game, id, move |def| def.cost == discarded, GainTo::DeckTop)
}

/// Discard any number of hand cards, then draw as many.
fn cellar(game: &mut Game, id: PlayerId) -> Result<(), GameError> {
    let (player, _, rng) = game.split_parts(id);
    let mut discarded = 0;

    for card in player.hand.iter().collect::<Vec<_>>() {
        let query = CardAndHand {
            card,
            hand: player.hand.iter().collect(),
        };
        if player.hooks.confirm_discard(&query)? {
            player
                .hand
                .transfer(card, &mut player.discard, PilePosition::Bottom)?;
            discarded += 1;
        }
    }
    player.draw(rng, discarded);
    Ok(())
}

/// Optionally drain the whole deck to discard.
fn chancellor(game: &mut Game, id: PlayerId) -> Result<(), GameError> {
    let (player, _, _) = game.split_parts(id);
    if player.hooks.confirm_discard_deck()? {
        player.deck.empty_to(&mut player.discard);
    }
    Ok(())
}

/// Trash up to four hand cards.
fn chapel(game: &mut Game, id: PlayerId) -> Result<(), GameError> {
    let (player, _, _) = game.split_parts(id);
    let mut trashed = 0;

    for card in player.hand.iter().collect::<Vec<_>>() {
        if trashed == CHAPEL_TRASH_LIMIT {
            break;
        }
        let query = CardAndHand {
            card,
            hand: player.hand.iter().collect(),
        };
        if player.hooks.confirm_trash(&query)? {
            player.hand.remove(card)?;
            trashed += 1;
        }
    }
    Ok(())
}

/// Gain an Estate to discard.
fn distant_shore(game: &mut Game, id: PlayerId) -> Result<(), GameError> {
    game.gain(id, CardName::Estate, GainTo::Discard)?;
    Ok(())
}

/// Reveal until an action or treasure appears; it goes to hand.
fn farming_village(game: &mut Game, id: PlayerId) -> Result<(), GameError> {
    let (player, _, rng) = game.split_parts(id);
    let mut set_aside: SmallVec<[CardName; 8]> = SmallVec::new();

    while let Some(card) = player.take_from_deck(rng) {
        if card.is_action() || card.is_treasure() {
            player.hand.append(card);
            break;
        }
        set_aside.push(card);
    }
    for card in set_aside {
        player.discard.append(card);
    }
    Ok(())
}

/// Trash the played Feast itself, then gain a card costing up to 5.
fn feast(game: &mut Game, id: PlayerId) -> Result<(), GameError> {
    {
        let (player, _, _) = game.split_parts(id);
        player.played.remove(CardName::Feast)?;
    }
    gain_from_candidates(game, id, |def| def.cost <= 5, GainTo::Discard)
}

/// Reveal the top four deck cards, +1 coin per distinct name, discard them.
fn harvest(game: &mut Game, id: PlayerId) -> Result<(), GameError> {
    let (player, _, rng) = game.split_parts(id);
    let mut revealed: SmallVec<[CardName; 4]> = SmallVec::new();

    for _ in 0..4 {
        match player.take_from_deck(rng) {
            Some(card) => revealed.push(card),
            None => break,
        }
    }

    let mut names = revealed.clone();
    names.sort_unstable();
    names.dedup();
    player.coins += names.len() as u32;

    for card in revealed {
        player.discard.append(card);
    }
    Ok(())
}

/// Permanently raise the hand target; the Hireling leaves play for good.
fn hireling(game: &mut Game, id: PlayerId) -> Result<(), GameError> {
    let (player, _, _) = game.split_parts(id);
    player.hand_target += 1;
    player.played.remove(CardName::Hireling)?;
    Ok(())
}

/// Draw until seven cards are in hand; drawn action cards may be skipped
/// (set aside, discarded afterwards).
fn library(game: &mut Game, id: PlayerId) -> Result<(), GameError> {
    let (player, _, rng) = game.split_parts(id);
    let mut set_aside: SmallVec<[CardName; 8]> = SmallVec::new();

    while player.hand.len() < LIBRARY_HAND {
        let Some(card) = player.take_from_deck(rng) else {
            break;
        };
        if card.is_action() {
            let query = CardAndHand {
                card,
                hand: player.hand.iter().collect(),
            };
            match player.hooks.skip_drawn_card(&query) {
                Ok(true) => {
                    set_aside.push(card);
                    continue;
                }
                Ok(false) => {}
                Err(err) => {
                    // Flush the in-flight cards before surfacing the fault.
                    player.discard.append(card);
                    for aside in set_aside {
                        player.discard.append(aside);
                    }
                    return Err(err.into());
                }
            }
        }
        player.hand.append(card);
    }
    for card in set_aside {
        player.discard.append(card);
    }
    Ok(())
}

/// Draw one card per treasure in hand.
fn magnate(game: &mut Game, id: PlayerId) -> Result<(), GameError> {
    let (player, _, rng) = game.split_parts(id);
    let treasures = player.hand.treasure_cards().len();
    player.draw(rng, treasures);
    Ok(())
}

/// Reveal the top deck card: a treasure is taken into hand; an action or
/// victory card stays on the deck and attracts another Magpie.
fn magpie(game: &mut Game, id: PlayerId) -> Result<(), GameError> {
    let revealed = {
        let (player, _, rng) = game.split_parts(id);
        player.take_from_deck(rng)
    };
    let Some(card) = revealed else {
        return Ok(());
    };

    let (player, _, _) = game.split_parts(id);
    if card.is_treasure() {
        player.hand.append(card);
        return Ok(());
    }
    player.deck.prepend(card);
    if card.is_action() || card.is_victory() {
        game.gain(id, CardName::Magpie, GainTo::Discard)?;
    }
    Ok(())
}

/// Draw one card per card in hand, then discard down to ten.
fn marquis(game: &mut Game, id: PlayerId) -> Result<(), GameError> {
    let (player, _, rng) = game.split_parts(id);
    let held = player.hand.len();
    player.draw(rng, held);

    while player.hand.len() > MARQUIS_HAND {
        let hand: Vec<CardName> = player.hand.iter().collect();
        let choice = player.hooks.pick_discard(&HandCards { hand: hand.clone() })?;
        let choice = validate_choice(choice, &hand)?;
        player
            .hand
            .transfer(choice, &mut player.discard, PilePosition::Bottom)?;
    }
    Ok(())
}

/// Upgrade a treasure in hand to the next tier, gained into the hand.
fn mine(game: &mut Game, id: PlayerId) -> Result<(), GameError> {
    let (player, stock, _) = game.split_parts(id);
    let treasures = player.hand.treasure_cards();
    if treasures.is_empty() {
        return Ok(());
    }

    let query = TreasureChoices {
        treasures: treasures.to_vec(),
    };
    let Some(choice) = player.hooks.pick_treasure_to_upgrade(&query)? else {
        return Ok(());
    };
    let choice = validate_choice(choice, &treasures)?;
    let Some(upgrade) = next_treasure_tier(choice) else {
        return Ok(());
    };
    if !stock.contains(upgrade) {
        return Ok(());
    }

    player.hand.remove(choice)?;
    stock.transfer(upgrade, &mut player.hand, PilePosition::Bottom)?;
    Ok(())
}

/// Trash a Copper from hand for +3 coins.
fn moneylender(game: &mut Game, id: PlayerId) -> Result<(), GameError> {
    let (player, _, _) = game.split_parts(id);
    if !player.hand.contains(CardName::Copper) {
        return Ok(());
    }

    let query = CardAndHand {
        card: CardName::Copper,
        hand: player.hand.iter().collect(),
    };
    if player.hooks.confirm_trash(&query)? {
        player.hand.remove(CardName::Copper)?;
        player.coins += 3;
    }
    Ok(())
}

/// Discard one hand card per empty supply pile.
fn poacher(game: &mut Game, id: PlayerId) -> Result<(), GameError> {
    let empty_piles = game.empty_supply_piles();
    let (player, _, _) = game.split_parts(id);

    for _ in 0..empty_piles {
        if player.hand.is_empty() {
            break;
        }
        let hand: Vec<CardName> = player.hand.iter().collect();
        let choice = player.hooks.pick_discard(&HandCards { hand: hand.clone() })?;
        let choice = validate_choice(choice, &hand)?;
        player
            .hand
            .transfer(choice, &mut player.discard, PilePosition::Bottom)?;
    }
    Ok(())
}

/// Twice: trash a hand card, gain one costing exactly one more.
fn remake(game: &mut Game, id: PlayerId) -> Result<(), GameError> {
    for _ in 0..2 {
        let trashed = {
            let (player, _, _) = game.split_parts(id);
            if player.hand.is_empty() {
                None
            } else {
                let hand: Vec<CardName> = player.hand.iter().collect();
                let choice = player.hooks.pick_trash(&HandCards { hand: hand.clone() })?;
                let choice = validate_choice(choice, &hand)?;
                player.hand.remove(choice)?;
                Some(choice)
            }
        };
        let Some(trashed) = trashed else {
            break;
        };
        let target_cost = trashed.cost() + 1;
        gain_from_candidates(game, id, move |def| def.cost == target_cost, GainTo::Discard)?;
    }
    Ok(())
}

/// Trash a hand card, gain one costing up to two more.
fn remodel(game: &mut Game, id: PlayerId) -> Result<(), GameError> {
    let trashed = {
        let (player, _, _) = game.split_parts(id);
        if player.hand.is_empty() {
            return Ok(());
        }
        let hand: Vec<CardName> = player.hand.iter().collect();
        let choice = player.hooks.pick_trash(&HandCards { hand: hand.clone() })?;
        let choice = validate_choice(choice, &hand)?;
        player.hand.remove(choice)?;
        choice
    };
    let window = trashed.cost() + 2;
    gain_from_candidates(game, id, move |def| def.cost <= window, GainTo::Discard)
}

/// Swap an action card in hand back into the stock for another action card
/// of no greater cost.
fn swap(game: &mut Game, id: PlayerId) -> Result<(), GameError> {
    let swapped = {
        let (player, stock, _) = game.split_parts(id);
        let actions = player.hand.action_cards();
        let Some(&first) = actions.first() else {
            return Ok(());
        };

        let query = CardAndHand {
            card: first,
            hand: player.hand.iter().collect(),
        };
        if !player.hooks.confirm_trash(&query)? {
            return Ok(());
        }
        player.hand.remove(first)?;
        stock.append(first);
        first
    };
    let max_cost = swapped.cost();
    gain_from_candidates(
        game,
        id,
        move |def| def.is_action() && def.cost <= max_cost,
        GainTo::Discard,
    )
}

/// Gain a card costing up to 4.
fn workshop(game: &mut Game, id: PlayerId) -> Result<(), GameError> {
    gain_from_candidates(game, id, |def| def.cost <= 4, GainTo::Discard)
}
