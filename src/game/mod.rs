//! Game arena: player roster, shared stock, and the turn commands.
//!
//! `Game` owns its players by value in an indexed roster; everything a turn
//! does (`start_turn`, `action`, `buy`, `end_turn`) is a `Game` method
//! taking a [`PlayerId`]. Card effects receive the whole arena, so
//! player-to-player effects never need back-pointers.

pub mod player;

use rustc_hash::FxHashMap;
use tracing::debug;

use crate::cards::{definition, kingdom_names, CardDefinition, CardName};
use crate::core::{GameConfig, GameError, GameRng, Phase};
use crate::effects;
use crate::hooks::{DefaultHooks, PlayerHooks};
use crate::piles::{CardContainer, PilePosition};
use crate::record::{CardCounts, GameSnapshot, Journal, PlayerSnapshot, ScoreDetail};

pub use player::{Player, PlayerId, STARTING_COPPER, STARTING_ESTATES, STARTING_HAND};

/// Player roster ceiling.
pub const MAX_PLAYERS: usize = 4;

/// Score assigned to an eliminated player, below any reachable score.
pub const ELIMINATED_SCORE: i64 = -10_000;

/// Copies per non-victory kingdom pile.
const KINGDOM_PILE_SIZE: usize = 10;

/// Copper available before starting decks are debited.
const COPPER_LEDGER: usize = 60;
const SILVER_PILE: usize = 40;
const GOLD_PILE: usize = 30;
const PLATINUM_PILE: usize = 12;

/// Where a gained card lands.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum GainTo {
    Discard,
    DeckTop,
    Hand,
}

/// A whole game: roster, stock, kingdom selection, RNG, journal.
pub struct Game {
    pub(crate) players: Vec<Player>,
    pub(crate) stock: CardContainer,
    pub(crate) rng: GameRng,
    supply: Vec<CardName>,
    kingdom: Vec<CardName>,
    started: bool,
    config: GameConfig,
    journal: Journal,
}

impl Game {
    /// Create an empty game. The Copper ledger is stocked immediately so
    /// starting decks can be debited from it as players join.
    #[must_use]
    pub fn new(config: GameConfig) -> Self {
        let rng = GameRng::new(config.seed);
        let mut stock = CardContainer::new();
        stock.append_many(COPPER_LEDGER, CardName::Copper);

        Self {
            players: Vec::new(),
            stock,
            rng,
            supply: Vec::new(),
            kingdom: Vec::new(),
            started: false,
            config,
            journal: Journal::new(),
        }
    }

    // === Setup ===

    /// Add a player with the passive default policy.
    pub fn add_player(&mut self, name: impl Into<String>) -> Result<PlayerId, GameError> {
        self.add_player_with_hooks(name, Box::new(DefaultHooks))
    }

    /// Add a player with the given decision policy.
    ///
    /// Rejected once the game has started or the roster is full.
    pub fn add_player_with_hooks(
        &mut self,
        name: impl Into<String>,
        hooks: Box<dyn PlayerHooks>,
    ) -> Result<PlayerId, GameError> {
        let name = name.into();
        if self.started {
            self.journal
                .record_error(name, "cannot add a player to a started game");
            return Err(GameError::AlreadyStarted);
        }
        if self.players.len() >= MAX_PLAYERS {
            self.journal
                .record_error(name, format!("at most {MAX_PLAYERS} players"));
            return Err(GameError::TooManyPlayers { max: MAX_PLAYERS });
        }

        for _ in 0..STARTING_COPPER {
            if self.stock.remove(CardName::Copper).is_err() {
                break;
            }
        }

        let id = PlayerId::new(self.players.len() as u8);
        let player = Player::new(name, hooks, &mut self.rng);
        debug!(player = %player.name, %id, "player added");
        self.players.push(player);
        Ok(id)
    }

    /// One-time setup: size the victory and curse piles by player count,
    /// select the kingdom, stock everything.
    pub fn start(&mut self) -> Result<(), GameError> {
        if self.started {
            return Err(GameError::AlreadyStarted);
        }

        let victory_size = if self.players.len() <= 2 { 8 } else { 12 };
        let curse_size = match self.players.len() {
            0..=2 => 10,
            3 => 20,
            _ => 30,
        };

        self.stock.append_many(SILVER_PILE, CardName::Silver);
        self.stock.append_many(GOLD_PILE, CardName::Gold);
        self.stock.append_many(victory_size, CardName::Estate);
        self.stock.append_many(victory_size, CardName::Duchy);
        self.stock.append_many(victory_size, CardName::Province);
        self.stock.append_many(curse_size, CardName::Curse);
        if self.config.expansion {
            self.stock.append_many(PLATINUM_PILE, CardName::Platinum);
            self.stock.append_many(victory_size, CardName::Colony);
        }

        let candidates: Vec<CardName> = kingdom_names().collect();
        let mut selected = self.rng.sample(&candidates, self.config.kingdom_piles);
        selected.sort_by_key(|name| name.index());
        for &name in &selected {
            // Victory kingdom piles are sized like the Duchy pile.
            let size = if name.is_victory() {
                victory_size
            } else {
                KINGDOM_PILE_SIZE
            };
            self.stock.append_many(size, name);
        }
        self.kingdom = selected;

        self.supply = CardName::ALL
            .into_iter()
            .filter(|&name| self.stock.contains(name))
            .collect();

        self.started = true;
        debug!(kingdom = ?self.kingdom, "game started");
        Ok(())
    }

    // === Accessors ===

    /// All players, in table order.
    #[must_use]
    pub fn players(&self) -> &[Player] {
        &self.players
    }

    /// One player by ID.
    #[must_use]
    pub fn player(&self, id: PlayerId) -> &Player {
        &self.players[id.index()]
    }

    /// Mutable access to one player (tests and drivers swap hooks or
    /// arrange hands through this).
    pub fn player_mut(&mut self, id: PlayerId) -> &mut Player {
        &mut self.players[id.index()]
    }

    /// The shared stock.
    #[must_use]
    pub fn stock(&self) -> &CardContainer {
        &self.stock
    }

    /// Mutable access to the stock.
    pub fn stock_mut(&mut self) -> &mut CardContainer {
        &mut self.stock
    }

    /// Piles stocked at start, in canonical order.
    #[must_use]
    pub fn supply(&self) -> &[CardName] {
        &self.supply
    }

    /// The kingdom selected at start, in canonical order.
    #[must_use]
    pub fn kingdom(&self) -> &[CardName] {
        &self.kingdom
    }

    /// Whether `start()` has run.
    #[must_use]
    pub fn started(&self) -> bool {
        self.started
    }

    /// The append-only event journal.
    #[must_use]
    pub fn journal(&self) -> &Journal {
        &self.journal
    }

    /// IDs of every non-eliminated player other than `id`, in table order.
    #[must_use]
    pub fn other_players(&self, id: PlayerId) -> Vec<PlayerId> {
        (0..self.players.len() as u8)
            .map(PlayerId::new)
            .filter(|&other| other != id && !self.players[other.index()].eliminated)
            .collect()
    }

    // === Turn commands ===

    /// Begin a player's turn: fresh tokens, ACTION phase, auto-advancing to
    /// BUY when no action card is playable.
    pub fn start_turn(&mut self, id: PlayerId) {
        self.journal.begin_turn();
        let player = &mut self.players[id.index()];
        player.playing = true;
        player.phase = Phase::Action;
        player.actions_left = 1;
        player.purchases_left = 1;
        player.coins = 0;
        debug!(player = %player.name, "start turn");
        player.check_action_to_buy();
    }

    /// Play an action card from hand.
    ///
    /// Legal only in the ACTION phase, for an action card physically in the
    /// hand. Consumes one action token, moves the card to the played pile,
    /// grants its fixed bonuses, runs its effect, then re-evaluates the
    /// ACTION -> BUY transition.
    pub fn action(&mut self, id: PlayerId, name: CardName) -> Result<(), GameError> {
        self.record_command(id, format!("ACTION {name}"));

        let (phase, in_hand) = {
            let player = &self.players[id.index()];
            (player.phase, player.hand.contains(name))
        };
        if phase != Phase::Action {
            self.record_failure(id, format!("tried an action during the {phase} phase"));
            return Err(GameError::WrongPhase {
                expected: Phase::Action,
                actual: phase,
            });
        }
        if !in_hand {
            self.record_failure(id, format!("invalid action, {name} not in hand"));
            return Err(GameError::NotInHand { card: name });
        }
        if !name.is_action() {
            self.record_failure(id, format!("invalid action, {name} is not an action card"));
            return Err(GameError::NotAnAction { card: name });
        }

        {
            let (player, _, rng) = self.split_parts(id);
            player.actions_left -= 1;
            player
                .hand
                .transfer(name, &mut player.played, PilePosition::Bottom)?;

            let def = name.def();
            player.actions_left += def.more_actions;
            player.purchases_left += def.more_buys;
            player.coins += def.more_coins;
            player.draw(rng, def.more_cards as usize);
        }

        if let Err(err) = effects::apply(self, id, name) {
            self.record_failure(id, format!("effect of {name} failed: {err}"));
            return Err(err);
        }

        self.players[id.index()].check_action_to_buy();
        Ok(())
    }

    /// Buy a card from the stock into the discard pile.
    ///
    /// Legal while purchase tokens remain; requires a stocked pile and
    /// enough spendable money. Treasures still in hand are liquidated
    /// cheapest-value-first until the cost is covered.
    pub fn buy(&mut self, id: PlayerId, name: CardName) -> Result<(), GameError> {
        self.record_command(id, format!("BUY {name}"));

        let (purchases_left, spendable) = {
            let player = &self.players[id.index()];
            (player.purchases_left, player.spendable())
        };
        if purchases_left == 0 {
            self.record_failure(id, "no more buy available");
            return Err(GameError::NoBuysRemaining);
        }
        if !self.stock.contains(name) {
            self.record_failure(id, format!("invalid buy, no {name} in stock"));
            return Err(GameError::PileExhausted { card: name });
        }
        let cost = name.cost();
        if spendable < cost {
            self.record_failure(id, "invalid buy, not enough money");
            return Err(GameError::InsufficientFunds {
                cost,
                available: spendable,
            });
        }

        self.prepare_money(id, cost)?;

        let (player, stock, _) = self.split_parts(id);
        player.coins -= cost;
        stock.transfer(name, &mut player.discard, PilePosition::Bottom)?;
        player.purchases_left -= 1;
        debug!(player = %player.name, card = %name, "bought");
        player.check_buy_to_adjust();
        Ok(())
    }

    /// End the turn: cleanup and draw the next hand.
    pub fn end_turn(&mut self, id: PlayerId) {
        self.record_command(id, "END OF TURN".to_string());
        let (player, _, rng) = self.split_parts(id);
        player.cleanup(rng);
        player.playing = false;
    }

    /// Liquidate treasures cheapest-value-first until `cost` is covered.
    fn prepare_money(&mut self, id: PlayerId, cost: u32) -> Result<(), GameError> {
        let (player, stock, _) = self.split_parts(id);
        while player.coins < cost {
            let mut treasures = player.hand.treasure_cards();
            if treasures.is_empty() {
                break;
            }
            treasures.sort_by_key(|name| name.def().money);
            let cheapest = treasures[0];

            player
                .hand
                .transfer(cheapest, &mut player.played, PilePosition::Bottom)?;
            player.coins += cheapest.def().money;

            // Cursed Gold taxes its owner on conversion.
            if cheapest == CardName::CursedGold && stock.contains(CardName::Curse) {
                stock.transfer(CardName::Curse, &mut player.discard, PilePosition::Bottom)?;
            }
        }
        Ok(())
    }

    // === Termination and scoring ===

    /// True when a termination condition holds: the Province pile is empty,
    /// a stocked Colony pile is empty, or three or more supply piles are
    /// simultaneously empty. Pure read; stable between mutations.
    #[must_use]
    pub fn finished(&self) -> bool {
        if !self.started {
            return false;
        }
        if self.pile_is_empty(CardName::Province) || self.pile_is_empty(CardName::Colony) {
            return true;
        }
        self.empty_supply_piles() >= 3
    }

    /// Number of supply piles currently at zero.
    #[must_use]
    pub fn empty_supply_piles(&self) -> usize {
        self.supply
            .iter()
            .filter(|&&name| self.stock.quantity(name) == 0)
            .count()
    }

    fn pile_is_empty(&self, name: CardName) -> bool {
        self.supply.contains(&name) && self.stock.quantity(name) == 0
    }

    /// A player's score. Eliminated players are pinned to
    /// [`ELIMINATED_SCORE`].
    #[must_use]
    pub fn score(&self, id: PlayerId) -> i64 {
        self.score_detail(id).score
    }

    /// Score with its victory-card breakdown.
    ///
    /// Victory points are summed over hand, discard and deck; Gardens add
    /// `floor(total / 10)` each and Fairgrounds `2 * floor(distinct / 5)`
    /// each over the same cards.
    #[must_use]
    pub fn score_detail(&self, id: PlayerId) -> ScoreDetail {
        let player = &self.players[id.index()];

        let mut totals: FxHashMap<CardName, usize> = FxHashMap::default();
        for pile in [&player.hand, &player.discard, &player.deck] {
            for (name, count) in pile.counts() {
                *totals.entry(name).or_insert(0) += count;
            }
        }
        let qty = |name: CardName| totals.get(&name).copied().unwrap_or(0);

        let total_cards: usize = totals.values().sum();
        let distinct = totals.len();
        let fixed: i64 = totals
            .iter()
            .map(|(&name, &count)| i64::from(definition(name).victory_points) * count as i64)
            .sum();

        let score = if player.eliminated {
            ELIMINATED_SCORE
        } else {
            fixed
                + qty(CardName::Gardens) as i64 * (total_cards / 10) as i64
                + qty(CardName::Fairgrounds) as i64 * 2 * (distinct / 5) as i64
        };

        ScoreDetail {
            estate_qty: qty(CardName::Estate),
            duchy_qty: qty(CardName::Duchy),
            province_qty: qty(CardName::Province),
            colony_qty: qty(CardName::Colony),
            curse_qty: qty(CardName::Curse),
            gardens_qty: qty(CardName::Gardens),
            fairgrounds_qty: qty(CardName::Fairgrounds),
            score,
        }
    }

    /// Point-in-time view for the persistence collaborator. A hand is
    /// visible only while its owner is taking their turn.
    #[must_use]
    pub fn snapshot(&self) -> GameSnapshot {
        GameSnapshot {
            finished: self.finished(),
            players: self
                .players
                .iter()
                .enumerate()
                .map(|(index, player)| PlayerSnapshot {
                    name: player.name.clone(),
                    hand: (player.playing && !player.eliminated)
                        .then(|| CardCounts::from(&player.hand)),
                    score: self.score(PlayerId::new(index as u8)),
                })
                .collect(),
            stock: CardCounts::from(&self.stock),
        }
    }

    // === Elimination ===

    /// Eliminate a player: removed from future effect targeting, score
    /// pinned to the lowest rank, recorded in the journal.
    pub fn eliminate(&mut self, id: PlayerId) {
        let player = &mut self.players[id.index()];
        player.eliminated = true;
        let name = player.name.clone();
        debug!(player = %name, "eliminated");
        self.journal.record_error(name, "Elimination");
    }

    // === Crate-internal helpers for effects ===

    /// Disjoint borrows of the acting player, the stock and the RNG.
    pub(crate) fn split_parts(
        &mut self,
        id: PlayerId,
    ) -> (&mut Player, &mut CardContainer, &mut GameRng) {
        (
            &mut self.players[id.index()],
            &mut self.stock,
            &mut self.rng,
        )
    }

    /// Disjoint borrows of the whole roster, the stock and the RNG.
    pub(crate) fn split_all(
        &mut self,
    ) -> (&mut Vec<Player>, &mut CardContainer, &mut GameRng) {
        (&mut self.players, &mut self.stock, &mut self.rng)
    }

    /// Move one card from the stock to a player's pile. Returns `false`
    /// without touching anything when the pile is empty.
    pub(crate) fn gain(
        &mut self,
        id: PlayerId,
        name: CardName,
        dest: GainTo,
    ) -> Result<bool, GameError> {
        let (player, stock, _) = self.split_parts(id);
        if !stock.contains(name) {
            return Ok(false);
        }
        let (pile, position) = match dest {
            GainTo::Discard => (&mut player.discard, PilePosition::Bottom),
            GainTo::DeckTop => (&mut player.deck, PilePosition::Top),
            GainTo::Hand => (&mut player.hand, PilePosition::Bottom),
        };
        stock.transfer(name, pile, position)?;
        Ok(true)
    }

    /// Stocked names matching a predicate, in canonical order.
    pub(crate) fn stock_candidates(
        &self,
        keep: impl Fn(&CardDefinition) -> bool,
    ) -> Vec<CardName> {
        CardName::ALL
            .into_iter()
            .filter(|&name| self.stock.contains(name) && keep(name.def()))
            .collect()
    }

    /// Journal a command attempt with the issuer's current score.
    pub(crate) fn record_command(&mut self, id: PlayerId, description: String) {
        let score = self.score(id);
        let name = self.players[id.index()].name.clone();
        self.journal.record_action(name, description, score);
    }

    /// Journal a failure.
    pub(crate) fn record_failure(&mut self, id: PlayerId, message: impl Into<String>) {
        let name = self.players[id.index()].name.clone();
        self.journal.record_error(name, message);
    }
}

impl std::fmt::Debug for Game {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Game")
            .field("players", &self.players)
            .field("started", &self.started)
            .field("kingdom", &self.kingdom)
            .field("stock", &self.stock.len())
            .finish()
    }
}
