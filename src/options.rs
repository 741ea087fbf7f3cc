//! Game configuration options.

use crate::card::{Card, DECK_SIZE};

/// Configuration options for a game of Ace.
///
/// Use the builder pattern to customize options:
///
/// ```
/// use acers::GameOptions;
///
/// let options = GameOptions::default()
///     .with_shuffle(false)
///     .with_sort_hands(true)
///     .with_max_players(6);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameOptions {
    /// Whether the pack is shuffled before dealing.
    pub shuffle: bool,
    /// Whether hands are kept sorted for display after they change.
    pub sort_hands: bool,
    /// The card whose holder leads the first trick.
    pub starting_card: Card,
    /// Maximum number of seated players. Never more than one per card.
    pub max_players: u8,
}

impl Default for GameOptions {
    fn default() -> Self {
        Self {
            shuffle: true,
            sort_hands: true,
            starting_card: Card::ACE_OF_SPADES,
            max_players: DECK_SIZE as u8,
        }
    }
}

impl GameOptions {
    /// Sets whether the pack is shuffled before dealing.
    ///
    /// # Example
    ///
    /// ```
    /// use acers::GameOptions;
    ///
    /// let options = GameOptions::default().with_shuffle(false);
    /// assert_eq!(options.shuffle, false);
    /// ```
    #[must_use]
    pub const fn with_shuffle(mut self, shuffle: bool) -> Self {
        self.shuffle = shuffle;
        self
    }

    /// Sets whether hands are sorted for display.
    ///
    /// # Example
    ///
    /// ```
    /// use acers::GameOptions;
    ///
    /// let options = GameOptions::default().with_sort_hands(false);
    /// assert_eq!(options.sort_hands, false);
    /// ```
    #[must_use]
    pub const fn with_sort_hands(mut self, sort: bool) -> Self {
        self.sort_hands = sort;
        self
    }

    /// Sets the card whose holder leads the first trick.
    ///
    /// # Example
    ///
    /// ```
    /// use acers::{Card, GameOptions, Rank, Suit};
    ///
    /// let two_of_clubs = Card::new(Suit::Clubs, Rank::Two).unwrap();
    /// let options = GameOptions::default().with_starting_card(two_of_clubs);
    /// assert_eq!(options.starting_card, two_of_clubs);
    /// ```
    #[must_use]
    pub const fn with_starting_card(mut self, card: Card) -> Self {
        self.starting_card = card;
        self
    }

    /// Sets the maximum number of seated players.
    ///
    /// Values above the pack size are clamped so that every player is dealt
    /// at least one card.
    ///
    /// # Example
    ///
    /// ```
    /// use acers::GameOptions;
    ///
    /// let options = GameOptions::default().with_max_players(4);
    /// assert_eq!(options.max_players, 4);
    ///
    /// let options = GameOptions::default().with_max_players(200);
    /// assert_eq!(options.max_players, 52);
    /// ```
    #[must_use]
    pub const fn with_max_players(mut self, max: u8) -> Self {
        self.max_players = if max as usize > DECK_SIZE {
            DECK_SIZE as u8
        } else {
            max
        };
        self
    }
}
