//! Card types and deck utilities.

use core::cmp::Reverse;
use core::fmt;

use alloc::vec::Vec;

/// Card suit.
///
/// Suits are ordered Spades, Hearts, Clubs, Diamonds. The order only matters
/// when sorting a hand for display; it never decides a trick.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Suit {
    /// Spades.
    Spades,
    /// Hearts.
    Hearts,
    /// Clubs.
    Clubs,
    /// Diamonds.
    Diamonds,
}

impl Suit {
    /// All suits in their canonical order.
    pub const ALL: [Self; 4] = [Self::Spades, Self::Hearts, Self::Clubs, Self::Diamonds];

    /// Ordinal index of the suit (Spades = 0).
    #[must_use]
    pub const fn index(self) -> u8 {
        self as u8
    }

    /// The suit symbol.
    #[must_use]
    pub const fn symbol(self) -> &'static str {
        match self {
            Self::Spades => "♠",
            Self::Hearts => "♥",
            Self::Clubs => "♣",
            Self::Diamonds => "♦",
        }
    }

    /// The suit name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Spades => "Spades",
            Self::Hearts => "Hearts",
            Self::Clubs => "Clubs",
            Self::Diamonds => "Diamonds",
        }
    }

    /// Whether the suit is printed in red.
    #[must_use]
    pub const fn is_red(self) -> bool {
        matches!(self, Self::Hearts | Self::Diamonds)
    }
}

impl fmt::Display for Suit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

/// Card rank.
///
/// Ranks compare by [`Rank::index`]. The Joker sorts below every pip rank and
/// never appears in the pack.
///
/// The pack includes the Ten, so indices run from 0 (Two) to 12 (Ace) rather
/// than stopping at 11. Only the relative order matters to play.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Rank {
    /// Joker (index -1).
    Joker,
    /// Two.
    Two,
    /// Three.
    Three,
    /// Four.
    Four,
    /// Five.
    Five,
    /// Six.
    Six,
    /// Seven.
    Seven,
    /// Eight.
    Eight,
    /// Nine.
    Nine,
    /// Ten.
    Ten,
    /// Jack.
    Jack,
    /// Queen.
    Queen,
    /// King.
    King,
    /// Ace (the highest rank).
    Ace,
}

impl Rank {
    /// Ranks present in the pack, lowest first.
    pub const ALL: [Self; 13] = [
        Self::Two,
        Self::Three,
        Self::Four,
        Self::Five,
        Self::Six,
        Self::Seven,
        Self::Eight,
        Self::Nine,
        Self::Ten,
        Self::Jack,
        Self::Queen,
        Self::King,
        Self::Ace,
    ];

    /// Ordinal index of the rank (Two = 0, Ace = 12, Joker = -1).
    #[must_use]
    pub const fn index(self) -> i8 {
        self as i8 - 1
    }

    /// The rank symbol.
    #[must_use]
    pub const fn symbol(self) -> &'static str {
        match self {
            Self::Joker => "🃏",
            Self::Two => "2",
            Self::Three => "3",
            Self::Four => "4",
            Self::Five => "5",
            Self::Six => "6",
            Self::Seven => "7",
            Self::Eight => "8",
            Self::Nine => "9",
            Self::Ten => "10",
            Self::Jack => "J",
            Self::Queen => "Q",
            Self::King => "K",
            Self::Ace => "A",
        }
    }

    /// The rank name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Joker => "Joker",
            Self::Two => "Two",
            Self::Three => "Three",
            Self::Four => "Four",
            Self::Five => "Five",
            Self::Six => "Six",
            Self::Seven => "Seven",
            Self::Eight => "Eight",
            Self::Nine => "Nine",
            Self::Ten => "Ten",
            Self::Jack => "Jack",
            Self::Queen => "Queen",
            Self::King => "King",
            Self::Ace => "Ace",
        }
    }
}

impl PartialOrd for Rank {
    fn partial_cmp(&self, other: &Self) -> Option<core::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Rank {
    fn cmp(&self, other: &Self) -> core::cmp::Ordering {
        self.index().cmp(&other.index())
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

/// Number of cards in the pack.
pub const DECK_SIZE: usize = 52;

const RANKS_PER_SUIT: u8 = Rank::ALL.len() as u8;

/// A playing card.
///
/// A card is identified by its position in the canonical pack (suit-major,
/// rank-minor), so two cards are equal exactly when they are the same card of
/// the single deck in play.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Card(u8);

impl Card {
    /// The Ace of Spades. Its holder leads the first trick by default.
    pub const ACE_OF_SPADES: Self = Self(Suit::Spades.index() * RANKS_PER_SUIT + 12);

    /// Creates a card from its suit and rank.
    ///
    /// Returns `None` for the Joker, which has no place in the pack.
    #[must_use]
    pub const fn new(suit: Suit, rank: Rank) -> Option<Self> {
        match rank {
            Rank::Joker => None,
            _ => Some(Self(suit.index() * RANKS_PER_SUIT + rank.index() as u8)),
        }
    }

    /// Looks up a card by its position in the canonical pack.
    #[must_use]
    pub const fn from_id(id: u8) -> Option<Self> {
        if (id as usize) < DECK_SIZE {
            Some(Self(id))
        } else {
            None
        }
    }

    /// Position of the card in the canonical pack.
    #[must_use]
    pub const fn id(self) -> u8 {
        self.0
    }

    /// The suit of the card.
    #[must_use]
    pub const fn suit(self) -> Suit {
        Suit::ALL[(self.0 / RANKS_PER_SUIT) as usize]
    }

    /// The rank of the card.
    #[must_use]
    pub const fn rank(self) -> Rank {
        Rank::ALL[(self.0 % RANKS_PER_SUIT) as usize]
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.rank(), self.suit())
    }
}

/// Builds the pack in canonical order: every rank of Spades, then Hearts,
/// Clubs and Diamonds.
#[must_use]
pub fn build_deck() -> Vec<Card> {
    (0..DECK_SIZE as u8).map(Card).collect()
}

/// Sorts a hand for display: grouped by suit in suit order, highest rank
/// first within each suit.
pub fn sort_hand(cards: &mut [Card]) {
    cards.sort_by_key(|card| Reverse(card.rank()));
    cards.sort_by_key(|card| card.suit());
}
