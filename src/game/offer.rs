use alloc::vec;
use alloc::vec::Vec;

use crate::error::StepError;
use crate::protocol::{Event, InvalidDecision};

use super::Game;
use super::state::PlayerId;

impl Game {
    /// Records an offer from `from` to the player deciding.
    ///
    /// The offer only widens the current turn's choices; nothing moves until
    /// it is accepted.
    pub(super) fn offer(&self, from: PlayerId) -> Result<Vec<Event>, StepError> {
        let active = self.active.lock();
        let mut trick = self.trick.lock();
        let player = trick.current().ok_or(StepError::InvalidState)?;

        let invalid = if from == player {
            Some(InvalidDecision::SelfOffer)
        } else if !active.contains(&from) {
            Some(InvalidDecision::UnknownPlayer)
        } else if trick.offers.contains(&from) {
            Some(InvalidDecision::DuplicateOffer)
        } else {
            None
        };

        if let Some(reason) = invalid {
            tracing::warn!(player, from, %reason, "rejected offer");
            return Ok(vec![Event::Invalid(reason)]);
        }

        trick.offers.push(from);
        tracing::debug!(player, from, "hand offered");
        Ok(Vec::new())
    }

    /// Hands the offering player's cards to the player deciding and takes
    /// the offering player out of play as a winner.
    ///
    /// The turn stays with the same player, who must still play or cut.
    pub(super) fn accept(&self, from: PlayerId) -> Result<Vec<Event>, StepError> {
        let mut active = self.active.lock();
        let mut hands = self.hands.lock();
        let mut trick = self.trick.lock();
        let player = trick.current().ok_or(StepError::InvalidState)?;

        if !trick.offers.contains(&from) {
            tracing::warn!(player, from, "rejected accept without an offer");
            return Ok(vec![Event::Invalid(InvalidDecision::NoSuchOffer)]);
        }
        if !hands.contains_key(&player) {
            return Err(StepError::PlayerNotFound);
        }

        let cards = hands
            .get_mut(&from)
            .ok_or(StepError::PlayerNotFound)?
            .take();
        let received = cards.len();
        let hand = hands.get_mut(&player).ok_or(StepError::PlayerNotFound)?;
        hand.extend(cards);
        if self.options.sort_hands {
            hand.sort();
        }

        trick.offers.retain(|&id| id != from);
        active.retain(|&id| id != from);

        // The taker inherits the offerer's standing in the trick.
        if let Some(best) = trick.best.as_mut() {
            if best.player == from {
                best.player = player;
            }
        }

        self.winners.lock().push(from);
        tracing::info!(player, from, received, "offer accepted");

        Ok(vec![Event::Winners(vec![from])])
    }
}
