//! Decisions the engine accepts and events it emits.
//!
//! A [`Controller`] supplies one [`Decision`] at a time for the pending turn,
//! and an [`EventSink`] receives every [`Event`] in emission order. The order
//! matters: a `Winners` event from an accepted offer can precede the
//! `Winners`/`Loser` events that close the trick.

use alloc::vec::Vec;

use thiserror::Error;

use crate::card::Card;
use crate::game::{Game, PlayerId};

/// A decision submitted for the player whose turn is pending.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Decision {
    /// Play a card, following the led suit or leading the trick.
    Play(Card),
    /// Play a card of another suit while void in the led suit. Ends the trick.
    Cut(Card),
    /// The given player offers their whole hand to the player deciding.
    Offer(PlayerId),
    /// Take the hand offered by the given player.
    Accept(PlayerId),
}

impl Decision {
    /// The card played, for `Play` and `Cut`.
    #[must_use]
    pub const fn card(&self) -> Option<Card> {
        match *self {
            Self::Play(card) | Self::Cut(card) => Some(card),
            Self::Offer(_) | Self::Accept(_) => None,
        }
    }
}

/// Why a decision was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum InvalidDecision {
    /// A player offered their hand to themselves.
    #[error("cannot offer yourself your own hand")]
    SelfOffer,
    /// The same player already has an offer pending this turn.
    #[error("already offered")]
    DuplicateOffer,
    /// The offering player is not in play.
    #[error("player is not in play")]
    UnknownPlayer,
    /// No offer from that player is pending.
    #[error("no pending offer from that player")]
    NoSuchOffer,
    /// The play or cut is not one of the legal decisions.
    #[error("invalid input from player")]
    NotLegal,
}

/// An event produced by the engine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// The last decision was rejected; the same turn is still pending.
    Invalid(InvalidDecision),
    /// These players have left play as winners.
    Winners(Vec<PlayerId>),
    /// The game is over and this player lost.
    Loser(PlayerId),
}

/// The turn the engine is waiting on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingTurn {
    /// The player who must decide.
    pub player: PlayerId,
    /// Legal plays or cuts, followed by any pending offers to accept.
    pub legal: Vec<Decision>,
}

/// Supplies decisions to the engine.
pub trait Controller {
    /// Chooses a decision for the pending turn.
    ///
    /// `Offer` and `Accept` decisions are allowed even though they are not all
    /// listed in `turn.legal`; a `Play` or `Cut` must match a listed one.
    fn decide(&mut self, game: &Game, turn: &PendingTurn) -> Decision;
}

impl<F> Controller for F
where
    F: FnMut(&Game, &PendingTurn) -> Decision,
{
    fn decide(&mut self, game: &Game, turn: &PendingTurn) -> Decision {
        self(game, turn)
    }
}

/// Consumes engine events in emission order.
pub trait EventSink {
    /// Handles one event.
    fn emit(&mut self, event: &Event);
}

impl EventSink for Vec<Event> {
    fn emit(&mut self, event: &Event) {
        self.push(event.clone());
    }
}
