//! An engine for the trick-taking card game Ace, with optional `no_std`
//! support.
//!
//! Every player is dealt an even share of the pack. Players must follow the
//! led suit; a player who cannot may cut, which ends the trick and makes the
//! holder of the highest card of the led suit pick up everything played.
//! Players who run out of cards win. The last player holding cards loses.
//!
//! The crate provides a [`Game`] state machine that consumes [`Decision`]s
//! and emits [`Event`]s. A [`Controller`] supplies decisions and an
//! [`EventSink`] consumes events; rendering and input parsing live outside
//! the engine.
//!
//! # Example
//!
//! ```
//! use acers::{Event, Game, GameOptions, PendingTurn};
//!
//! let game = Game::new(GameOptions::default(), 7);
//! game.join("Ann").unwrap();
//! game.join("Bob").unwrap();
//! game.deal().unwrap();
//!
//! let turn = game.pending_turn().unwrap();
//! let events = game.step(turn.legal[0]).unwrap();
//! assert!(events.iter().all(|event| !matches!(event, Event::Invalid(_))));
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(all(not(feature = "std"), not(feature = "alloc")))]
compile_error!(
    "`std` is disabled but `alloc` feature is not enabled. Enable `alloc` or keep `std` enabled."
);

extern crate alloc;

pub mod card;
pub mod deal;
pub mod error;
pub mod game;
pub mod hand;
pub mod options;
pub mod protocol;
mod sync;

// Re-export main types
pub use card::{Card, DECK_SIZE, Rank, Suit, build_deck, sort_hand};
pub use error::{DealError, JoinError, StepError};
pub use game::{Game, GameState, PileEntry, Player, PlayerId};
pub use hand::Hand;
pub use options::GameOptions;
pub use protocol::{Controller, Decision, Event, EventSink, InvalidDecision, PendingTurn};
