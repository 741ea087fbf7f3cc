//! Error types for game operations.
//!
//! These are contract violations by the caller or the engine. A player's
//! illegal move is not an error; it is reported as
//! [`Event::Invalid`](crate::Event::Invalid) and the turn is asked again.

use thiserror::Error;

/// Errors that can occur when seating players.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum JoinError {
    /// Invalid game state for joining.
    #[error("invalid game state for joining")]
    InvalidState,
    /// No seats are left.
    #[error("table is full")]
    TableFull,
}

/// Errors that can occur during dealing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DealError {
    /// Invalid game state for dealing.
    #[error("invalid game state for dealing")]
    InvalidState,
    /// Fewer than two players are seated.
    #[error("at least two players are required")]
    NotEnoughPlayers,
    /// More players are seated than there are cards to go round.
    #[error("too many players for one pack")]
    TooManyPlayers,
    /// The number of fixed hands does not match the number of players.
    #[error("hand count does not match player count")]
    HandCountMismatch,
    /// A player was dealt no cards.
    #[error("a player was dealt no cards")]
    EmptyHand,
    /// The same card was dealt twice.
    #[error("card dealt more than once")]
    DuplicateCard,
    /// Nobody holds the starting card.
    #[error("no player has the starting card")]
    NoStartingPlayer,
}

/// Errors that can occur while applying a decision.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum StepError {
    /// Invalid game state for this decision.
    #[error("invalid game state for this decision")]
    InvalidState,
    /// A cut was applied before any card was played to the trick.
    #[error("no cards in pile, cannot cut")]
    CutBeforePlay,
    /// The played card is not in the player's hand.
    #[error("played card is not in hand")]
    CardNotInHand,
    /// Player not found.
    #[error("player not found")]
    PlayerNotFound,
}
