//! Game state types.

use alloc::string::String;

use crate::card::Card;

/// Player identifier, assigned in join order.
pub type PlayerId = u8;

/// Game state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameState {
    /// Waiting for players to take their seats.
    WaitingForPlayers,
    /// Waiting for the pending player's decision.
    PlayerTurn,
    /// A loser has been found.
    GameOver,
}

/// A seated player.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Player {
    /// Stable player ID.
    pub id: PlayerId,
    /// Display name.
    pub name: String,
}

/// A card played to the current trick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PileEntry {
    /// Position of the play in the trick's turn order.
    pub turn: usize,
    /// The player credited with the play.
    pub player: PlayerId,
    /// The card played.
    pub card: Card,
}
