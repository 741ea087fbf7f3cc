use alloc::vec;
use alloc::vec::Vec;

use crate::deal::rotate;
use crate::error::StepError;
use crate::hand::Hand;
use crate::protocol::{Decision, Event, InvalidDecision};

use super::{Game, Trick};
use super::state::PlayerId;

impl Game {
    /// Applies a `Play` or `Cut` for the pending turn.
    pub(super) fn play(&self, decision: Decision) -> Result<Vec<Event>, StepError> {
        let card = decision.card().ok_or(StepError::InvalidState)?;

        let mut active = self.active.lock();
        let mut hands = self.hands.lock();
        let mut trick = self.trick.lock();

        let player = trick.current().ok_or(StepError::InvalidState)?;
        let hand = hands.get_mut(&player).ok_or(StepError::PlayerNotFound)?;

        if !trick.plays.contains(&decision) {
            tracing::warn!(player, %card, "rejected play outside the legal set");
            return Ok(vec![Event::Invalid(InvalidDecision::NotLegal)]);
        }

        let is_cut = matches!(decision, Decision::Cut(_));
        if is_cut && trick.best.is_none() {
            return Err(StepError::CutBeforePlay);
        }

        if !hand.remove(card) {
            return Err(StepError::CardNotInHand);
        }
        let entry = trick.record(player, card);

        if is_cut {
            let holder = trick
                .best
                .map(|best| best.player)
                .ok_or(StepError::CutBeforePlay)?;
            let pile = trick.take_pile();
            tracing::debug!(player, %card, holder, picked_up = pile.len(), "trick cut");

            let holder_hand = hands.get_mut(&holder).ok_or(StepError::PlayerNotFound)?;
            holder_hand.extend(pile);
            if self.options.sort_hands {
                holder_hand.sort();
            }
        } else {
            tracing::debug!(player, %card, "card played");
            trick.contest(entry);
            if let Some(next) = trick.advance(&active) {
                let next_hand = hands.get(&next).ok_or(StepError::PlayerNotFound)?;
                trick.begin_turn(next_hand);
                return Ok(Vec::new());
            }

            let pile = trick.take_pile();
            self.discard.lock().extend(pile);
        }

        let holder = trick.best.map(|best| best.player).ok_or(StepError::InvalidState)?;
        let start = active.iter().position(|&id| id == holder).unwrap_or(0);
        let order = rotate(active.as_slice(), start);

        let (mut finished, remaining): (Vec<PlayerId>, Vec<PlayerId>) = order
            .iter()
            .copied()
            .partition(|id| hands.get(id).is_none_or(Hand::is_empty));

        let loser = match remaining.as_slice() {
            [only] => Some(*only),
            [] => Some(holder),
            _ => None,
        };
        finished.retain(|&id| Some(id) != loser);

        tracing::debug!(holder, remaining = remaining.len(), "trick over");

        let mut events = Vec::new();
        if !finished.is_empty() {
            tracing::info!(?finished, "players went out");
            self.winners.lock().extend(finished.iter().copied());
            events.push(Event::Winners(finished));
        }

        if let Some(loser) = loser {
            tracing::info!(loser, "game over");
            *self.loser.lock() = Some(loser);
            *active = vec![loser];
            trick.order.clear();
            events.push(Event::Loser(loser));
        } else {
            let leader = remaining.first().copied().ok_or(StepError::InvalidState)?;
            let leader_hand = hands.get(&leader).ok_or(StepError::PlayerNotFound)?;
            *trick = Trick::new(remaining.clone());
            trick.begin_turn(leader_hand);
            *active = remaining;
        }

        Ok(events)
    }
}
