//! # deckbuilder
//!
//! A deterministic, single-threaded turn engine for a deck-building card
//! game: per-player deck/hand/discard/played piles, a shared card supply,
//! an ACTION -> BUY -> ADJUST turn state machine, and a closed catalog of
//! card effects dispatched by exhaustive match.
//!
//! ## Design principles
//!
//! 1. **Deterministic**: one seeded RNG drives every shuffle and the kingdom
//!    selection; the same seed and command sequence replays identically.
//!
//! 2. **Closed catalog**: card names are a closed enum and effect dispatch
//!    is an exhaustive match; adding a card without attributes or an effect
//!    arm is a compile error.
//!
//! 3. **Policy-driven decisions**: any effect choice with more than one
//!    legal outcome is delegated to an injected [`hooks::PlayerHooks`]
//!    policy, never decided by heuristic. A faulting opponent policy is
//!    converted into that opponent's elimination; it never aborts the acting
//!    player's turn.
//!
//! 4. **Conservation**: cards move between piles by atomic transfer, so a
//!    card is never counted in two piles and the per-player card total is
//!    conserved by every command (gains only move cards in from the stock).
//!
//! ## Modules
//!
//! - `core`: configuration, errors, turn phases, deterministic RNG
//! - `cards`: the closed name enumeration and static catalog
//! - `piles`: the ordered, counted card container behind every pile
//! - `hooks`: decision-policy trait, passive default, query payloads
//! - `effects`: per-card effect procedures and the opponent fault boundary
//! - `game`: the arena: roster, stock, turn commands, scoring
//! - `record`: append-only event journal and masked snapshots

pub mod cards;
pub mod core;
mod effects;
pub mod game;
pub mod hooks;
pub mod piles;
pub mod record;

pub use crate::cards::{definition, CardDefinition, CardKind, CardName};
pub use crate::core::{GameConfig, GameError, GameRng, GameRngState, HookError, Phase};
pub use crate::game::{
    Game, Player, PlayerId, ELIMINATED_SCORE, MAX_PLAYERS, STARTING_HAND,
};
pub use crate::hooks::{
    CardAndHand, DefaultHooks, GainCandidates, HandCards, HookResult, PlayerHooks,
    TreasureChoices,
};
pub use crate::piles::{CardContainer, CardList, MissingCard, PilePosition};
pub use crate::record::{
    CardCounts, GameSnapshot, Journal, JournalEvent, PlayerSnapshot, ScoreDetail, TurnRecord,
};
