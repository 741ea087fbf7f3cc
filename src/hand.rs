//! Player hand representation.

extern crate alloc;

use alloc::vec::Vec;

use crate::card::{Card, Suit, sort_hand};

/// A player's hand.
///
/// Card order is only significant for display; legality never depends on it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Hand {
    cards: Vec<Card>,
}

impl Hand {
    /// Creates a new empty hand.
    #[must_use]
    pub const fn new() -> Self {
        Self { cards: Vec::new() }
    }

    /// Creates a hand holding the given cards, in the given order.
    #[must_use]
    pub const fn from_cards(cards: Vec<Card>) -> Self {
        Self { cards }
    }

    /// Returns the cards in the hand.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Returns the number of cards in the hand.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the hand is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Returns whether the hand holds `card`.
    #[must_use]
    pub fn contains(&self, card: Card) -> bool {
        self.cards.contains(&card)
    }

    /// Returns whether the hand holds any card of `suit`.
    #[must_use]
    pub fn has_suit(&self, suit: Suit) -> bool {
        self.cards.iter().any(|card| card.suit() == suit)
    }

    /// Returns the cards of `suit`, in hand order.
    pub fn cards_of(&self, suit: Suit) -> impl Iterator<Item = Card> + '_ {
        self.cards
            .iter()
            .copied()
            .filter(move |card| card.suit() == suit)
    }

    /// Removes `card` from the hand.
    ///
    /// Returns `false` if the hand does not hold it.
    pub fn remove(&mut self, card: Card) -> bool {
        match self.cards.iter().position(|&held| held == card) {
            Some(index) => {
                self.cards.remove(index);
                true
            }
            None => false,
        }
    }

    /// Appends cards to the end of the hand.
    pub fn extend<I: IntoIterator<Item = Card>>(&mut self, cards: I) {
        self.cards.extend(cards);
    }

    /// Empties the hand, returning its cards.
    pub fn take(&mut self) -> Vec<Card> {
        core::mem::take(&mut self.cards)
    }

    /// Sorts the hand for display.
    pub fn sort(&mut self) {
        sort_hand(&mut self.cards);
    }
}
