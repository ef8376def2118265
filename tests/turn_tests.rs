//! Turn state machine and purchase tests.

use deckbuilder::{CardName, Game, GameConfig, GameError, Phase, PlayerId};
use deckbuilder::CardName::*;

fn lone_player() -> (Game, PlayerId) {
    let mut game = Game::new(GameConfig::new(42));
    let id = game.add_player("toto").unwrap();
    game.start().unwrap();
    let player = game.player_mut(id);
    player.hand.clear();
    player.deck.clear();
    player.discard.clear();
    player.played.clear();
    (game, id)
}

#[test]
fn test_start_turn_resets_tokens() {
    let (mut game, id) = lone_player();
    game.player_mut(id).hand.append(Smithy);

    game.start_turn(id);

    let player = game.player(id);
    assert_eq!(player.actions_left, 1);
    assert_eq!(player.purchases_left, 1);
    assert_eq!(player.coins, 0);
    assert_eq!(player.phase, Phase::Action);
    assert!(player.playing);
}

#[test]
fn test_start_turn_skips_action_phase_without_action_cards() {
    let (mut game, id) = lone_player();
    game.player_mut(id).hand.append_many(5, Copper);

    game.start_turn(id);

    let player = game.player(id);
    assert_eq!(player.phase, Phase::Buy);
    assert_eq!(player.actions_left, 0);
}

#[test]
fn test_draw_card_action_advances_to_buy() {
    let (mut game, id) = lone_player();
    game.player_mut(id).hand.append(Smithy);
    game.player_mut(id).deck.append_many(5, Copper);

    game.start_turn(id);
    game.action(id, Smithy).unwrap();

    let player = game.player(id);
    assert_eq!(player.hand.len(), 3);
    assert_eq!(player.actions_left, 0);
    assert_eq!(player.phase, Phase::Buy);
}

#[test]
fn test_action_outside_action_phase() {
    let (mut game, id) = lone_player();
    game.player_mut(id).hand.append_many(5, Copper);
    game.start_turn(id);
    game.player_mut(id).hand.append(Smithy);

    let err = game.action(id, Smithy).unwrap_err();

    assert_eq!(
        err,
        GameError::WrongPhase {
            expected: Phase::Action,
            actual: Phase::Buy,
        }
    );
    // The attempt changed nothing.
    assert_eq!(game.player(id).hand.len(), 6);
    assert_eq!(game.player(id).played.len(), 0);
}

#[test]
fn test_action_with_card_not_in_hand() {
    let (mut game, id) = lone_player();
    game.player_mut(id).hand.append(Smithy);
    game.start_turn(id);

    let err = game.action(id, Village).unwrap_err();

    assert_eq!(err, GameError::NotInHand { card: Village });
    assert_eq!(game.player(id).actions_left, 1);
}

#[test]
fn test_action_with_non_action_card() {
    let (mut game, id) = lone_player();
    game.player_mut(id).hand.append(Smithy);
    game.player_mut(id).hand.append(Copper);
    game.start_turn(id);

    let err = game.action(id, Copper).unwrap_err();

    assert_eq!(err, GameError::NotAnAction { card: Copper });
    assert_eq!(game.player(id).hand.len(), 2);
}

#[test]
fn test_buy_liquidates_exact_money_cards() {
    let (mut game, id) = lone_player();
    game.stock_mut().append_many(10, Smithy);
    {
        let player = game.player_mut(id);
        player.hand.append_many(2, Copper);
        player.hand.append(Silver);
    }

    game.start_turn(id);
    game.buy(id, Smithy).unwrap();

    let player = game.player(id);
    assert_eq!(player.purchases_left, 0);
    assert!(player.discard.contains(Smithy));
    assert_eq!(player.played.len(), 3);
    assert_eq!(player.played.quantity(Copper), 2);
    assert_eq!(player.played.quantity(Silver), 1);
    assert_eq!(player.hand.len(), 0);
    assert_eq!(player.coins, 0);
    assert_eq!(player.phase, Phase::Adjust);
}

#[test]
fn test_buy_liquidates_cheapest_first_and_stops() {
    let (mut game, id) = lone_player();
    {
        let player = game.player_mut(id);
        player.hand.append(Gold);
        player.hand.append(Copper);
        player.hand.append(Copper);
    }

    game.start_turn(id);
    game.buy(id, Estate).unwrap();

    // Two Coppers cover the cost of 2; the Gold stays in hand.
    let player = game.player(id);
    assert_eq!(player.played.quantity(Copper), 2);
    assert!(player.hand.contains(Gold));
    assert_eq!(player.coins, 0);
}

#[test]
fn test_buy_from_exhausted_pile() {
    let (mut game, id) = lone_player();
    game.player_mut(id).hand.append_many(5, Gold);
    game.start_turn(id);

    // No expansion: the Colony pile was never stocked.
    let err = game.buy(id, Colony).unwrap_err();

    assert_eq!(err, GameError::PileExhausted { card: Colony });
    let player = game.player(id);
    assert_eq!(player.purchases_left, 1);
    assert_eq!(player.hand.len(), 5);
    assert_eq!(player.played.len(), 0);
    assert_eq!(player.discard.len(), 0);
}

#[test]
fn test_buy_without_enough_money() {
    let (mut game, id) = lone_player();
    game.player_mut(id).hand.append(Copper);
    game.start_turn(id);

    let err = game.buy(id, Gold).unwrap_err();

    assert_eq!(
        err,
        GameError::InsufficientFunds {
            cost: 6,
            available: 1,
        }
    );
    assert!(game.player(id).hand.contains(Copper));
}

#[test]
fn test_buy_without_purchases_left() {
    let (mut game, id) = lone_player();
    game.player_mut(id).hand.append_many(4, Copper);
    game.start_turn(id);
    game.buy(id, Estate).unwrap();

    let err = game.buy(id, Estate).unwrap_err();

    assert_eq!(err, GameError::NoBuysRemaining);
}

#[test]
fn test_buy_during_action_phase_is_legal() {
    let (mut game, id) = lone_player();
    game.player_mut(id).hand.append(Smithy);
    game.player_mut(id).hand.append_many(2, Copper);
    game.start_turn(id);
    assert_eq!(game.player(id).phase, Phase::Action);

    game.buy(id, Estate).unwrap();

    assert!(game.player(id).discard.contains(Estate));
}

#[test]
fn test_extra_buys_allow_extra_purchases() {
    let (mut game, id) = lone_player();
    {
        let player = game.player_mut(id);
        player.hand.append(Woodcutter);
        player.hand.append_many(2, Copper);
    }
    game.start_turn(id);
    game.action(id, Woodcutter).unwrap();

    // +1 buy and +2 coins: two Estates are affordable.
    game.buy(id, Estate).unwrap();
    game.buy(id, Estate).unwrap();

    let player = game.player(id);
    assert_eq!(player.discard.quantity(Estate), 2);
    assert_eq!(player.purchases_left, 0);
    assert_eq!(player.phase, Phase::Adjust);
}

#[test]
fn test_end_turn_cleans_up_and_redraws() {
    let (mut game, id) = lone_player();
    {
        let player = game.player_mut(id);
        player.hand.append_many(3, Copper);
        player.played.append(Smithy);
        player.deck.append_many(7, Estate);
    }

    game.start_turn(id);
    game.end_turn(id);

    let player = game.player(id);
    assert_eq!(player.played.len(), 0);
    assert_eq!(player.hand.len(), 5);
    assert_eq!(player.hand.quantity(Estate), 5);
    assert_eq!(player.discard.len(), 4);
    assert_eq!(player.phase, Phase::Adjust);
    assert!(!player.playing);
}

#[test]
fn test_cleanup_reshuffles_discard_when_deck_runs_out() {
    let (mut game, id) = lone_player();
    {
        let player = game.player_mut(id);
        player.deck.append_many(2, Copper);
        player.discard.append_many(6, Silver);
    }

    game.start_turn(id);
    game.end_turn(id);

    let player = game.player(id);
    assert_eq!(player.hand.len(), 5);
    assert_eq!(player.hand.quantity(Copper), 2);
    assert_eq!(player.hand.quantity(Silver), 3);
}

#[test]
fn test_short_draw_when_everything_is_exhausted() {
    let (mut game, id) = lone_player();
    game.player_mut(id).deck.append_many(2, Copper);

    game.start_turn(id);
    game.end_turn(id);

    assert_eq!(game.player(id).hand.len(), 2);
}

#[test]
fn test_card_total_is_conserved_across_a_turn() {
    let mut game = Game::new(GameConfig::new(7));
    let id = game.add_player("toto").unwrap();
    game.start().unwrap();
    {
        let player = game.player_mut(id);
        player.hand.clear();
        player.deck.clear();
        player.discard.clear();
        player.hand.append(Smithy);
        player.hand.append_many(3, Copper);
        player.deck.append_many(6, Estate);
    }
    let before = game.player(id).total_cards();
    let stock_before = game.stock().len();

    game.start_turn(id);
    game.action(id, Smithy).unwrap();
    game.buy(id, Estate).unwrap();
    game.end_turn(id);

    // One card was gained from stock; nothing else appeared or vanished.
    assert_eq!(game.player(id).total_cards(), before + 1);
    assert_eq!(game.stock().len(), stock_before - 1);
}

#[test]
fn test_failed_commands_leave_totals_unchanged() {
    let (mut game, id) = lone_player();
    game.player_mut(id).hand.append_many(5, Copper);
    let before = game.player(id).total_cards();

    game.start_turn(id);
    assert!(game.action(id, Smithy).is_err());
    assert!(game.buy(id, Colony).is_err());
    assert!(game.buy(id, Gold).is_err());

    assert_eq!(game.player(id).total_cards(), before);
    assert_eq!(game.player(id).purchases_left, 1);
}
