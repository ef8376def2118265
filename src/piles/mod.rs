//! Card pile abstraction shared by decks, hands, discards and the stock.

pub mod container;

pub use container::{CardContainer, CardList, MissingCard, PilePosition};
