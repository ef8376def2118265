//! Opponent-targeting effects and the per-opponent fault boundary.
//!
//! Every attack iterates the non-eliminated opponents in table order and
//! resolves each inside [`each_opponent`]: a failure while resolving one
//! opponent (typically that opponent's own decision policy faulting) is
//! recorded and converted into their elimination, and the loop moves on.
//! The acting player's turn is never aborted by an opponent's fault.

use smallvec::SmallVec;

use crate::cards::CardName;
use crate::core::GameError;
use crate::game::{GainTo, Game, PlayerId};
use crate::hooks::{validate_choice, HandCards};
use crate::piles::PilePosition;

/// Hand size Militia forces opponents down to.
const MILITIA_HAND: usize = 3;

/// Resolve `resolve` against every other non-eliminated player in table
/// order, converting a per-opponent failure into that opponent's
/// elimination.
fn each_opponent<F>(game: &mut Game, acting: PlayerId, mut resolve: F)
where
    F: FnMut(&mut Game, PlayerId) -> Result<(), GameError>,
{
    for target in game.other_players(acting) {
        if let Err(err) = resolve(game, target) {
            game.record_failure(target, format!("opponent effect failed: {err}"));
            game.eliminate(target);
        }
    }
}

/// Gain a Gold; each opponent reveals their top two deck cards, loses the
/// best revealed non-Copper treasure, and discards the rest.
pub(crate) fn bandit(game: &mut Game, id: PlayerId) -> Result<(), GameError> {
    game.gain(id, CardName::Gold, GainTo::Discard)?;

    each_opponent(game, id, |game, target| {
        let (players, _, rng) = game.split_all();
        let player = &mut players[target.index()];

        let mut revealed: SmallVec<[CardName; 2]> = SmallVec::new();
        for _ in 0..2 {
            match player.take_from_deck(rng) {
                Some(card) => revealed.push(card),
                None => break,
            }
        }

        let trash = revealed
            .iter()
            .copied()
            .filter(|&card| card.is_treasure() && card != CardName::Copper)
            .max_by_key(|card| card.def().money);

        let mut trashed = false;
        for card in revealed {
            if !trashed && Some(card) == trash {
                trashed = true;
                continue;
            }
            player.discard.append(card);
        }
        Ok(())
    });
    Ok(())
}

/// Gain a Silver onto the deck; each opponent puts the first victory card
/// in their hand back on top of their deck.
pub(crate) fn bureaucrat(game: &mut Game, id: PlayerId) -> Result<(), GameError> {
    game.gain(id, CardName::Silver, GainTo::DeckTop)?;

    each_opponent(game, id, |game, target| {
        let (players, _, _) = game.split_all();
        let player = &mut players[target.index()];

        let victories = player.hand.victory_cards();
        if let Some(&card) = victories.first() {
            player
                .hand
                .transfer(card, &mut player.deck, PilePosition::Top)?;
        }
        Ok(())
    });
    Ok(())
}

/// Each opponent draws a card.
pub(crate) fn council_room(game: &mut Game, id: PlayerId) -> Result<(), GameError> {
    each_opponent(game, id, |game, target| {
        let (players, _, rng) = game.split_all();
        players[target.index()].draw(rng, 1);
        Ok(())
    });
    Ok(())
}

/// Each opponent reveals from their deck until a victory or Curse card
/// appears; it returns to the top, the rest go to their discard.
pub(crate) fn fortune_teller(game: &mut Game, id: PlayerId) -> Result<(), GameError> {
    each_opponent(game, id, |game, target| {
        let (players, _, rng) = game.split_all();
        let player = &mut players[target.index()];

        let mut set_aside: SmallVec<[CardName; 8]> = SmallVec::new();
        while let Some(card) = player.take_from_deck(rng) {
            if card.is_victory() || card == CardName::Curse {
                player.deck.prepend(card);
                break;
            }
            set_aside.push(card);
        }
        for card in set_aside {
            player.discard.append(card);
        }
        Ok(())
    });
    Ok(())
}

/// Each opponent discards down to three cards, choosing each discard via
/// their own hooks.
pub(crate) fn militia(game: &mut Game, id: PlayerId) -> Result<(), GameError> {
    each_opponent(game, id, |game, target| {
        let (players, _, _) = game.split_all();
        let player = &mut players[target.index()];

        while player.hand.len() > MILITIA_HAND {
            let hand: Vec<CardName> = player.hand.iter().collect();
            let choice = player.hooks.pick_discard(&HandCards { hand: hand.clone() })?;
            let choice = validate_choice(choice, &hand)?;
            player
                .hand
                .transfer(choice, &mut player.discard, PilePosition::Bottom)?;
        }
        Ok(())
    });
    Ok(())
}

/// Each opponent gains a Curse while the pile lasts, first in table order
/// served first.
pub(crate) fn witch(game: &mut Game, id: PlayerId) -> Result<(), GameError> {
    each_opponent(game, id, |game, target| {
        game.gain(target, CardName::Curse, GainTo::Discard)?;
        Ok(())
    });
    Ok(())
}
