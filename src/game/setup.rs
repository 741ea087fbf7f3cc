use alloc::vec::Vec;

use crate::card::{Card, DECK_SIZE, build_deck};
use crate::deal::{rotate, shuffle, split_evenly};
use crate::error::DealError;
use crate::hand::Hand;

use super::state::PlayerId;
use super::{Game, GameState, HashMap, Trick};

impl Game {
    fn ensure_can_deal(&self) -> Result<Vec<PlayerId>, DealError> {
        if *self.state.lock() != GameState::WaitingForPlayers {
            return Err(DealError::InvalidState);
        }

        let seats: Vec<PlayerId> = self.players.lock().iter().map(|player| player.id).collect();
        if seats.len() < 2 {
            return Err(DealError::NotEnoughPlayers);
        }
        if seats.len() > usize::from(self.options.max_players) || seats.len() > DECK_SIZE {
            return Err(DealError::TooManyPlayers);
        }

        Ok(seats)
    }

    /// Deals the whole pack to the seated players.
    ///
    /// The pack is shuffled (unless disabled in the options) and split as
    /// evenly as possible in join order. The holder of the starting card
    /// leads the first trick.
    ///
    /// # Errors
    ///
    /// Returns an error if the game is not waiting for players, fewer than
    /// two or more than the maximum number of players are seated, or nobody
    /// holds the starting card.
    pub fn deal(&self) -> Result<(), DealError> {
        let seats = self.ensure_can_deal()?;

        let mut deck = build_deck();
        if self.options.shuffle {
            deck = shuffle(deck, &mut *self.rng.lock());
        }

        let dealt = split_evenly(&deck, seats.len());
        self.start(&seats, dealt)
    }

    /// Deals fixed hands, one per seated player in join order.
    ///
    /// The hands need not cover the whole pack, which makes short scripted
    /// games possible.
    ///
    /// # Errors
    ///
    /// Returns an error if the game is not waiting for players, the seat count
    /// is out of range, the number of hands does not match the seats, a hand is
    /// empty, a card appears twice, or nobody holds the starting card.
    pub fn deal_hands(&self, hands: Vec<Vec<Card>>) -> Result<(), DealError> {
        let seats = self.ensure_can_deal()?;
        if hands.len() != seats.len() {
            return Err(DealError::HandCountMismatch);
        }
        if hands.iter().any(Vec::is_empty) {
            return Err(DealError::EmptyHand);
        }

        let mut seen = [false; DECK_SIZE];
        for card in hands.iter().flatten() {
            let slot = &mut seen[usize::from(card.id())];
            if *slot {
                return Err(DealError::DuplicateCard);
            }
            *slot = true;
        }

        self.start(&seats, hands)
    }

    fn start(&self, seats: &[PlayerId], dealt: Vec<Vec<Card>>) -> Result<(), DealError> {
        let starting_card = self.options.starting_card;
        let starting = dealt
            .iter()
            .position(|cards| cards.contains(&starting_card))
            .ok_or(DealError::NoStartingPlayer)?;

        let hands: HashMap<PlayerId, Hand> = seats
            .iter()
            .copied()
            .zip(dealt)
            .map(|(id, cards)| {
                let mut hand = Hand::from_cards(cards);
                if self.options.sort_hands {
                    hand.sort();
                }
                (id, hand)
            })
            .collect();

        let order = rotate(seats, starting);
        let leader = seats[starting];
        tracing::debug!(leader, players = order.len(), "cards dealt");

        let mut trick = Trick::new(order.clone());
        if let Some(hand) = hands.get(&leader) {
            trick.begin_turn(hand);
        }

        *self.hands.lock() = hands;
        *self.trick.lock() = trick;
        *self.active.lock() = order;
        self.discard.lock().clear();
        self.winners.lock().clear();
        *self.loser.lock() = None;
        *self.state.lock() = GameState::PlayerTurn;

        Ok(())
    }
}
