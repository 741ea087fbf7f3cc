//! Game engine and state management.

use core::sync::atomic::{AtomicU8, Ordering};

use alloc::string::String;
use alloc::vec::Vec;
#[cfg(all(not(feature = "std"), feature = "alloc"))]
use hashbrown::HashMap;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
#[cfg(feature = "std")]
use std::collections::HashMap;

use crate::sync::Mutex;

use crate::card::{Card, Suit};
use crate::error::{JoinError, StepError};
use crate::hand::Hand;
use crate::options::GameOptions;
use crate::protocol::{Controller, Decision, Event, EventSink, PendingTurn};

mod offer;
mod play;
mod setup;
pub mod state;
mod trick;

pub use state::{GameState, PileEntry, Player, PlayerId};

use trick::Trick;

/// An Ace game engine that manages seating, the deal, and trick flow.
///
/// The engine is a state machine: [`pending_turn`](Self::pending_turn) says
/// who must decide and what they may do, and [`step`](Self::step) applies one
/// decision and returns the events it caused. [`run`](Self::run) drives the
/// loop with a [`Controller`] until a loser is found.
///
/// # Example
///
/// ```
/// use acers::{Event, Game, GameOptions, PendingTurn};
///
/// let game = Game::new(GameOptions::default(), 42);
/// game.join("A").unwrap();
/// game.join("B").unwrap();
/// game.deal().unwrap();
///
/// let mut events: Vec<Event> = Vec::new();
/// let mut first_legal = |_: &Game, turn: &PendingTurn| turn.legal[0];
/// let loser = game.run(&mut first_legal, &mut events).unwrap();
/// assert_eq!(game.loser(), Some(loser));
/// ```
pub struct Game {
    /// Game options.
    pub options: GameOptions,
    /// Current game state.
    pub state: Mutex<GameState>,
    /// Next player ID to assign.
    next_id: AtomicU8,
    /// Seated players in join order.
    players: Mutex<Vec<Player>>,
    /// Players still in play, in turn order.
    pub active: Mutex<Vec<PlayerId>>,
    /// Player hands (`player_id` -> hand).
    pub hands: Mutex<HashMap<PlayerId, Hand>>,
    /// The trick in progress.
    trick: Mutex<Trick>,
    /// Cards from completed tricks that nobody picked up.
    discard: Mutex<Vec<Card>>,
    /// Players who have left play as winners, in finishing order.
    winners: Mutex<Vec<PlayerId>>,
    /// The loser, once known.
    loser: Mutex<Option<PlayerId>>,
    /// Random number generator.
    rng: Mutex<ChaCha8Rng>,
}

impl Game {
    /// Creates a new game with the given seed.
    ///
    /// The seed drives the shuffle, so two games with the same seed and the
    /// same players are dealt identically.
    #[must_use]
    pub fn new(options: GameOptions, seed: u64) -> Self {
        Self {
            options,
            state: Mutex::new(GameState::WaitingForPlayers),
            next_id: AtomicU8::new(0),
            players: Mutex::new(Vec::new()),
            active: Mutex::new(Vec::new()),
            hands: Mutex::new(HashMap::new()),
            trick: Mutex::new(Trick::default()),
            discard: Mutex::new(Vec::new()),
            winners: Mutex::new(Vec::new()),
            loser: Mutex::new(None),
            rng: Mutex::new(ChaCha8Rng::seed_from_u64(seed)),
        }
    }

    /// Takes a seat at the table.
    ///
    /// Returns the assigned player ID.
    ///
    /// # Errors
    ///
    /// Returns an error if cards have already been dealt or every seat is
    /// taken.
    pub fn join(&self, name: impl Into<String>) -> Result<PlayerId, JoinError> {
        if *self.state.lock() != GameState::WaitingForPlayers {
            return Err(JoinError::InvalidState);
        }

        let mut players = self.players.lock();
        if players.len() >= usize::from(self.options.max_players) {
            return Err(JoinError::TableFull);
        }

        // Ids wrap around, skipping any still seated.
        let start = self.next_id.load(Ordering::SeqCst);
        let id = (0..=u8::MAX)
            .map(|offset| start.wrapping_add(offset))
            .find(|&id| players.iter().all(|player| player.id != id))
            .ok_or(JoinError::TableFull)?;
        self.next_id.store(id.wrapping_add(1), Ordering::SeqCst);
        players.push(Player {
            id,
            name: name.into(),
        });
        drop(players);

        tracing::debug!(player = id, "player joined");
        Ok(id)
    }

    /// Leaves the table.
    ///
    /// # Errors
    ///
    /// Returns an error if cards have already been dealt.
    pub fn leave(&self, player_id: PlayerId) -> Result<(), JoinError> {
        if *self.state.lock() != GameState::WaitingForPlayers {
            return Err(JoinError::InvalidState);
        }

        self.players.lock().retain(|player| player.id != player_id);
        Ok(())
    }

    /// Returns the seated players in join order.
    pub fn players(&self) -> Vec<Player> {
        self.players.lock().clone()
    }

    /// Returns the display name of a seated player.
    pub fn player_name(&self, player_id: PlayerId) -> Option<String> {
        self.players
            .lock()
            .iter()
            .find(|player| player.id == player_id)
            .map(|player| player.name.clone())
    }

    /// Returns the number of seated players.
    pub fn player_count(&self) -> usize {
        self.players.lock().len()
    }

    /// Returns the current game state.
    pub fn state(&self) -> GameState {
        *self.state.lock()
    }

    /// Returns the players still in play, in turn order.
    pub fn active_players(&self) -> Vec<PlayerId> {
        self.active.lock().clone()
    }

    /// Returns a copy of a player's hand.
    ///
    /// Returns `None` if the player was never dealt in.
    pub fn hand(&self, player_id: PlayerId) -> Option<Hand> {
        self.hands.lock().get(&player_id).cloned()
    }

    /// Returns the cards played to the current trick.
    pub fn pile(&self) -> Vec<PileEntry> {
        self.trick.lock().pile.clone()
    }

    /// Returns the suit led in the current trick.
    pub fn led_suit(&self) -> Option<Suit> {
        self.trick.lock().led
    }

    /// Returns the highest play of the led suit in the current trick.
    pub fn best_play(&self) -> Option<PileEntry> {
        self.trick.lock().best
    }

    /// Returns the number of cards discarded by completed tricks.
    pub fn discard_len(&self) -> usize {
        self.discard.lock().len()
    }

    /// Returns the winners so far, in finishing order.
    pub fn winners(&self) -> Vec<PlayerId> {
        self.winners.lock().clone()
    }

    /// Returns the loser once the game is over.
    pub fn loser(&self) -> Option<PlayerId> {
        *self.loser.lock()
    }

    /// Returns every card still in circulation: hands, the pile, and the
    /// discard pile.
    pub fn cards_in_play(&self) -> Vec<Card> {
        let mut cards: Vec<Card> = self
            .hands
            .lock()
            .values()
            .flat_map(|hand| hand.cards().iter().copied())
            .collect();
        cards.extend(self.trick.lock().pile.iter().map(|entry| entry.card));
        cards.extend(self.discard.lock().iter().copied());
        cards
    }

    /// Returns the turn the engine is waiting on.
    ///
    /// Returns `None` before the deal and after the game is over.
    pub fn pending_turn(&self) -> Option<PendingTurn> {
        if *self.state.lock() != GameState::PlayerTurn {
            return None;
        }

        let trick = self.trick.lock();
        let player = trick.current()?;

        Some(PendingTurn {
            player,
            legal: trick.legal_decisions(),
        })
    }

    /// Returns the legal decisions for the pending turn.
    ///
    /// Empty when no turn is pending.
    pub fn legal_decisions(&self) -> Vec<Decision> {
        self.pending_turn()
            .map(|turn| turn.legal)
            .unwrap_or_default()
    }

    /// Applies one decision for the pending turn.
    ///
    /// Returns the events it caused, in order. A rejected decision yields a
    /// single [`Event::Invalid`] and leaves the game unchanged.
    ///
    /// # Errors
    ///
    /// Returns an error if no turn is pending, or if the engine's own
    /// bookkeeping is inconsistent (a cut with nothing played, a card missing
    /// from the hand that was offered it).
    pub fn step(&self, decision: Decision) -> Result<Vec<Event>, StepError> {
        if *self.state.lock() != GameState::PlayerTurn {
            return Err(StepError::InvalidState);
        }

        let events = match decision {
            Decision::Offer(from) => self.offer(from)?,
            Decision::Accept(from) => self.accept(from)?,
            Decision::Play(_) | Decision::Cut(_) => self.play(decision)?,
        };

        if matches!(events.last(), Some(Event::Loser(_))) {
            *self.state.lock() = GameState::GameOver;
        }

        Ok(events)
    }

    /// Drives the game to the end.
    ///
    /// Asks `controller` for a decision on every pending turn and passes each
    /// resulting event to `sink` in order. Returns the loser.
    ///
    /// # Errors
    ///
    /// Returns an error if the game has not been dealt, or if a step fails.
    pub fn run<C, S>(&self, controller: &mut C, sink: &mut S) -> Result<PlayerId, StepError>
    where
        C: Controller + ?Sized,
        S: EventSink + ?Sized,
    {
        loop {
            if let Some(loser) = self.loser() {
                return Ok(loser);
            }

            let turn = self.pending_turn().ok_or(StepError::InvalidState)?;
            let decision = controller.decide(self, &turn);
            for event in self.step(decision)? {
                sink.emit(&event);
            }
        }
    }

    /// Clears hands and round state and returns to `WaitingForPlayers`.
    ///
    /// Seated players keep their seats.
    pub fn reset(&self) {
        self.hands.lock().clear();
        self.active.lock().clear();
        *self.trick.lock() = Trick::default();
        self.discard.lock().clear();
        self.winners.lock().clear();
        *self.loser.lock() = None;
        *self.state.lock() = GameState::WaitingForPlayers;
    }
}
