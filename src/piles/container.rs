//! Ordered, counted card piles.
//!
//! [`CardContainer`] backs every pile in the game: deck, hand, discard,
//! played cards, and the shared stock. It keeps an ordered sequence of card
//! names plus a per-name count map, so `quantity` is O(1) while order-based
//! operations (draw from the top, append to the bottom) stay available.
//!
//! Invariant: after every mutating call, `quantity(name)` equals the number
//! of occurrences of `name` in the sequence, for every name.
//!
//! The front of the sequence is the "top" of a pile: the card drawn next.

use rustc_hash::FxHashMap;
use smallvec::SmallVec;
use thiserror::Error;

use crate::cards::CardName;
use crate::core::GameRng;

/// Where a card lands when inserted into a pile.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PilePosition {
    /// Front of the sequence; will be drawn next.
    Top,
    /// Back of the sequence.
    Bottom,
}

/// Lookup failure: the named card is not in the container.
///
/// Callers confirm presence (`quantity` / `contains`) before removing.
#[derive(Clone, Copy, Debug, Error, PartialEq, Eq)]
#[error("{0} is not in the container")]
pub struct MissingCard(pub CardName);

/// Short card list snapshot returned by the filtered views.
pub type CardList = SmallVec<[CardName; 8]>;

/// An ordered, counted multiset of cards.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CardContainer {
    order: Vec<CardName>,
    counts: FxHashMap<CardName, usize>,
}

impl CardContainer {
    /// Create an empty container.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of cards held.
    #[must_use]
    pub fn len(&self) -> usize {
        self.order.len()
    }

    /// True when no cards are held.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Card at `index`, front first.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<CardName> {
        self.order.get(index).copied()
    }

    /// Iterate the cards in order, front first.
    pub fn iter(&self) -> impl Iterator<Item = CardName> + '_ {
        self.order.iter().copied()
    }

    /// Copies of `name` currently held. O(1).
    #[must_use]
    pub fn quantity(&self, name: CardName) -> usize {
        self.counts.get(&name).copied().unwrap_or(0)
    }

    /// True when at least one copy of `name` is held.
    #[must_use]
    pub fn contains(&self, name: CardName) -> bool {
        self.quantity(name) > 0
    }

    /// Number of distinct names held.
    #[must_use]
    pub fn distinct_names(&self) -> usize {
        self.counts.len()
    }

    /// Insert one card at the bottom.
    pub fn append(&mut self, name: CardName) {
        self.order.push(name);
        *self.counts.entry(name).or_insert(0) += 1;
    }

    /// Insert `n` copies at the bottom.
    pub fn append_many(&mut self, n: usize, name: CardName) {
        for _ in 0..n {
            self.append(name);
        }
    }

    /// Insert one card at the top; it will be drawn next.
    pub fn prepend(&mut self, name: CardName) {
        self.order.insert(0, name);
        *self.counts.entry(name).or_insert(0) += 1;
    }

    /// Remove one occurrence of `name`.
    ///
    /// Fails when absent; callers confirm presence first.
    pub fn remove(&mut self, name: CardName) -> Result<(), MissingCard> {
        let pos = self
            .order
            .iter()
            .position(|&c| c == name)
            .ok_or(MissingCard(name))?;
        self.order.remove(pos);
        self.decrement(name);
        Ok(())
    }

    /// Remove and return the bottom card.
    pub fn pop(&mut self) -> Option<CardName> {
        let name = self.order.pop()?;
        self.decrement(name);
        Some(name)
    }

    /// Remove and return the top card.
    pub fn pop_top(&mut self) -> Option<CardName> {
        self.pop_at(0)
    }

    /// Remove and return the card at `index`.
    pub fn pop_at(&mut self, index: usize) -> Option<CardName> {
        if index >= self.order.len() {
            return None;
        }
        let name = self.order.remove(index);
        self.decrement(name);
        Some(name)
    }

    /// Uniform random in-place permutation; the multiset is unchanged.
    pub fn shuffle(&mut self, rng: &mut GameRng) {
        rng.shuffle(&mut self.order);
    }

    /// Remove every card.
    pub fn clear(&mut self) {
        self.order.clear();
        self.counts.clear();
    }

    /// Move one occurrence of `name` into `dest` as a single indivisible
    /// step: the card is never counted in both containers and cannot be
    /// lost between them.
    pub fn transfer(
        &mut self,
        name: CardName,
        dest: &mut CardContainer,
        position: PilePosition,
    ) -> Result<(), MissingCard> {
        self.remove(name)?;
        match position {
            PilePosition::Top => dest.prepend(name),
            PilePosition::Bottom => dest.append(name),
        }
        Ok(())
    }

    /// Drain every card into `dest`, preserving order.
    pub fn empty_to(&mut self, dest: &mut CardContainer) {
        for name in self.order.drain(..) {
            dest.order.push(name);
            *dest.counts.entry(name).or_insert(0) += 1;
        }
        self.counts.clear();
    }

    /// Sum of the coin values of the treasures held.
    #[must_use]
    pub fn treasure_value(&self) -> u32 {
        self.counts
            .iter()
            .map(|(name, &count)| name.def().money * count as u32)
            .sum()
    }

    /// True when at least one action card is held.
    #[must_use]
    pub fn contains_action(&self) -> bool {
        self.counts.keys().any(|name| name.is_action())
    }

    /// True when at least one treasure is held.
    #[must_use]
    pub fn contains_treasure(&self) -> bool {
        self.counts.keys().any(|name| name.is_treasure())
    }

    /// Detached snapshot of the action cards held, in pile order.
    #[must_use]
    pub fn action_cards(&self) -> CardList {
        self.filtered(CardName::is_action)
    }

    /// Detached snapshot of the treasures held, in pile order.
    #[must_use]
    pub fn treasure_cards(&self) -> CardList {
        self.filtered(CardName::is_treasure)
    }

    /// Detached snapshot of the victory cards held, in pile order.
    #[must_use]
    pub fn victory_cards(&self) -> CardList {
        self.filtered(CardName::is_victory)
    }

    /// Per-name counts, for merging and serialization.
    pub fn counts(&self) -> impl Iterator<Item = (CardName, usize)> + '_ {
        self.counts.iter().map(|(&name, &count)| (name, count))
    }

    fn filtered(&self, keep: impl Fn(CardName) -> bool) -> CardList {
        self.order.iter().copied().filter(|&c| keep(c)).collect()
    }

    fn decrement(&mut self, name: CardName) {
        match self.counts.get_mut(&name) {
            Some(count) if *count > 1 => *count -= 1,
            _ => {
                self.counts.remove(&name);
            }
        }
    }

    #[cfg(test)]
    fn check_invariant(&self) {
        for name in CardName::ALL {
            let occurrences = self.order.iter().filter(|&&c| c == name).count();
            assert_eq!(self.quantity(name), occurrences, "{name}");
        }
    }
}

impl From<MissingCard> for crate::core::GameError {
    fn from(err: MissingCard) -> Self {
        crate::core::GameError::NotInHand { card: err.0 }
    }
}

impl FromIterator<CardName> for CardContainer {
    fn from_iter<T: IntoIterator<Item = CardName>>(iter: T) -> Self {
        let mut container = Self::new();
        for name in iter {
            container.append(name);
        }
        container
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::CardName::*;
    use proptest::prelude::*;

    #[test]
    fn test_append_prepend_order() {
        let mut pile = CardContainer::new();
        pile.append(Copper);
        pile.append(Estate);
        pile.prepend(Silver);

        assert_eq!(pile.get(0), Some(Silver));
        assert_eq!(pile.get(1), Some(Copper));
        assert_eq!(pile.get(2), Some(Estate));
        assert_eq!(pile.len(), 3);
        pile.check_invariant();
    }

    #[test]
    fn test_quantity_tracks_mutations() {
        let mut pile = CardContainer::new();
        pile.append_many(3, Copper);
        pile.append(Estate);

        assert_eq!(pile.quantity(Copper), 3);
        assert_eq!(pile.quantity(Estate), 1);
        assert_eq!(pile.quantity(Gold), 0);

        pile.remove(Copper).unwrap();
        assert_eq!(pile.quantity(Copper), 2);

        pile.pop();
        assert_eq!(pile.quantity(Estate), 0);
        pile.check_invariant();
    }

    #[test]
    fn test_remove_absent_fails() {
        let mut pile = CardContainer::new();
        pile.append(Copper);

        assert_eq!(pile.remove(Gold), Err(MissingCard(Gold)));
        assert_eq!(pile.len(), 1);
    }

    #[test]
    fn test_pop_ends() {
        let mut pile: CardContainer = [Copper, Silver, Gold].into_iter().collect();

        assert_eq!(pile.pop_top(), Some(Copper));
        assert_eq!(pile.pop(), Some(Gold));
        assert_eq!(pile.pop_at(0), Some(Silver));
        assert_eq!(pile.pop(), None);
        assert_eq!(pile.pop_top(), None);
    }

    #[test]
    fn test_empty_to_moves_everything_in_order() {
        let mut src: CardContainer = [Copper, Estate, Copper].into_iter().collect();
        let mut dest: CardContainer = [Gold].into_iter().collect();

        src.empty_to(&mut dest);

        assert_eq!(src.len(), 0);
        assert_eq!(src.quantity(Copper), 0);
        assert_eq!(dest.len(), 4);
        let order: Vec<_> = dest.iter().collect();
        assert_eq!(order, vec![Gold, Copper, Estate, Copper]);
        src.check_invariant();
        dest.check_invariant();
    }

    #[test]
    fn test_transfer_is_atomic_per_name() {
        let mut src: CardContainer = [Copper, Silver].into_iter().collect();
        let mut dest = CardContainer::new();

        src.transfer(Silver, &mut dest, PilePosition::Bottom).unwrap();
        assert_eq!(src.quantity(Silver), 0);
        assert_eq!(dest.quantity(Silver), 1);

        // A failed transfer changes neither side.
        assert!(src.transfer(Gold, &mut dest, PilePosition::Top).is_err());
        assert_eq!(src.len(), 1);
        assert_eq!(dest.len(), 1);
    }

    #[test]
    fn test_transfer_to_top() {
        let mut src: CardContainer = [Silver].into_iter().collect();
        let mut dest: CardContainer = [Copper].into_iter().collect();

        src.transfer(Silver, &mut dest, PilePosition::Top).unwrap();
        assert_eq!(dest.get(0), Some(Silver));
    }

    #[test]
    fn test_shuffle_preserves_multiset() {
        let mut rng = GameRng::new(42);
        let mut pile = CardContainer::new();
        pile.append_many(10, Copper);
        pile.append_many(5, Estate);

        pile.shuffle(&mut rng);

        assert_eq!(pile.len(), 15);
        assert_eq!(pile.quantity(Copper), 10);
        assert_eq!(pile.quantity(Estate), 5);
        pile.check_invariant();
    }

    #[test]
    fn test_filtered_views_are_snapshots() {
        let mut pile: CardContainer = [Copper, Smithy, Estate, Gold].into_iter().collect();

        let treasures = pile.treasure_cards();
        let actions = pile.action_cards();
        let victories = pile.victory_cards();

        assert_eq!(treasures.as_slice(), &[Copper, Gold]);
        assert_eq!(actions.as_slice(), &[Smithy]);
        assert_eq!(victories.as_slice(), &[Estate]);

        // Mutating the pile does not touch the snapshots.
        pile.clear();
        assert_eq!(treasures.len(), 2);
    }

    #[test]
    fn test_category_checks() {
        let pile: CardContainer = [Copper, Estate].into_iter().collect();
        assert!(pile.contains_treasure());
        assert!(!pile.contains_action());
        assert_eq!(pile.treasure_value(), 1);

        let pile: CardContainer = [Silver, Gold, Village].into_iter().collect();
        assert_eq!(pile.treasure_value(), 5);
        assert!(pile.contains_action());
    }

    #[test]
    fn test_distinct_names() {
        let pile: CardContainer = [Copper, Copper, Estate, Gold].into_iter().collect();
        assert_eq!(pile.distinct_names(), 3);
    }

    fn arb_name() -> impl Strategy<Value = CardName> {
        (0..CardName::COUNT).prop_map(|i| CardName::ALL[i])
    }

    proptest! {
        /// Counts equal occurrences after any operation sequence.
        #[test]
        fn prop_counts_match_order(ops in proptest::collection::vec((0u8..5, arb_name()), 0..200)) {
            let mut pile = CardContainer::new();
            let mut other = CardContainer::new();

            for (op, name) in ops {
                match op {
                    0 => pile.append(name),
                    1 => pile.prepend(name),
                    2 => { let _ = pile.remove(name); }
                    3 => { let _ = pile.pop(); }
                    4 => { let _ = pile.transfer(name, &mut other, PilePosition::Bottom); }
                    _ => unreachable!(),
                }
                pile.check_invariant();
                other.check_invariant();
            }

            prop_assert_eq!(pile.len() , pile.iter().count());
        }

        /// empty_to conserves every card.
        #[test]
        fn prop_empty_to_conserves(cards in proptest::collection::vec(arb_name(), 0..50)) {
            let mut src: CardContainer = cards.iter().copied().collect();
            let mut dest = CardContainer::new();
            let total = src.len();

            src.empty_to(&mut dest);

            prop_assert_eq!(src.len(), 0);
            prop_assert_eq!(dest.len(), total);
            for name in CardName::ALL {
                let expected = cards.iter().filter(|&&c| c == name).count();
                prop_assert_eq!(dest.quantity(name), expected);
            }
        }
    }
}
