use alloc::vec::Vec;

use crate::card::{Card, Suit};
use crate::hand::Hand;
use crate::protocol::Decision;

use super::state::{PileEntry, PlayerId};

/// One pass through the player order.
#[derive(Debug, Clone, Default)]
pub(super) struct Trick {
    /// Turn order, fixed when the trick starts.
    pub order: Vec<PlayerId>,
    /// Index into `order` of the player deciding.
    pub turn: usize,
    /// Suit of the first card played.
    pub led: Option<Suit>,
    /// Highest play of the led suit so far.
    pub best: Option<PileEntry>,
    /// Cards played so far, in order.
    pub pile: Vec<PileEntry>,
    /// Players offering their hand to the player deciding, in offer order.
    pub offers: Vec<PlayerId>,
    /// Plays and cuts open to the player deciding, fixed when their turn
    /// begins. Accepting an offer does not change them.
    pub plays: Vec<Decision>,
}

impl Trick {
    pub(super) const fn new(order: Vec<PlayerId>) -> Self {
        Self {
            order,
            turn: 0,
            led: None,
            best: None,
            pile: Vec::new(),
            offers: Vec::new(),
            plays: Vec::new(),
        }
    }

    /// The player whose turn it is.
    pub(super) fn current(&self) -> Option<PlayerId> {
        self.order.get(self.turn).copied()
    }

    /// Starts the current player's turn with `hand`.
    pub(super) fn begin_turn(&mut self, hand: &Hand) {
        self.plays = self.legal_plays(hand);
    }

    /// The turn's plays and cuts, followed by the pending offers.
    pub(super) fn legal_decisions(&self) -> Vec<Decision> {
        let mut legal = self.plays.clone();
        legal.extend(self.offers.iter().copied().map(Decision::Accept));
        legal
    }

    /// Plays and cuts open to `hand`.
    ///
    /// Leading is always a play. Following, the player must play the led suit
    /// if they hold it, and may cut with any card otherwise.
    pub(super) fn legal_plays(&self, hand: &Hand) -> Vec<Decision> {
        match self.led {
            None => hand.cards().iter().copied().map(Decision::Play).collect(),
            Some(suit) if hand.has_suit(suit) => hand.cards_of(suit).map(Decision::Play).collect(),
            Some(_) => hand.cards().iter().copied().map(Decision::Cut).collect(),
        }
    }

    /// Records a card played by the current player.
    pub(super) fn record(&mut self, player: PlayerId, card: Card) -> PileEntry {
        let entry = PileEntry {
            turn: self.turn,
            player,
            card,
        };
        self.pile.push(entry);
        self.led.get_or_insert(card.suit());
        entry
    }

    /// Makes `entry` the best play if it beats the current one.
    pub(super) fn contest(&mut self, entry: PileEntry) {
        let beats = self
            .best
            .is_none_or(|best| entry.card.rank() > best.card.rank());
        if beats {
            self.best = Some(entry);
        }
    }

    /// Passes the turn to the next player of the order still in `active`.
    ///
    /// Returns `None` once everybody has had their turn.
    pub(super) fn advance(&mut self, active: &[PlayerId]) -> Option<PlayerId> {
        self.offers.clear();
        self.plays.clear();
        self.turn += 1;
        while let Some(&player) = self.order.get(self.turn) {
            if active.contains(&player) {
                return Some(player);
            }
            self.turn += 1;
        }
        None
    }

    /// Takes the played cards off the table.
    pub(super) fn take_pile(&mut self) -> Vec<Card> {
        self.pile.drain(..).map(|entry| entry.card).collect()
    }
}
