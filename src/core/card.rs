//! Card identity: a single integer code in `0..52`.
//!
//! Rank, suit and color are never stored. They are recomputed from the code
//! on every access:
//!
//! - `rank  = code % 13` (Ace = 0 .. King = 12)
//! - `suit  = code % 4`  (Clubs, Diamonds, Spades, Hearts)
//! - `color = suit.color()`
//!
//! ```
//! use rust_klondike::core::{Card, Color, Rank, Suit};
//!
//! let card = Card::new(25).unwrap();
//! assert_eq!(card.rank(), Rank::King);
//! assert_eq!(card.suit(), Suit::Diamonds);
//! assert_eq!(card.color(), Color::Red);
//! assert_eq!(card.to_string(), "K♦");
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;

/// Number of cards in the deck.
pub const DECK_SIZE: usize = 52;

/// Number of ranks per suit.
pub const RANKS_PER_SUIT: usize = 13;

/// A playing card, identified by its code in `0..52`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Card(u8);

impl Card {
    /// Code reserved for drawing a face-down card. Never a gameplay value.
    pub const FACE_DOWN_CODE: u8 = DECK_SIZE as u8;

    /// Create a card from its code. Returns `None` outside `0..52`.
    #[must_use]
    pub const fn new(code: u8) -> Option<Self> {
        if (code as usize) < DECK_SIZE {
            Some(Self(code))
        } else {
            None
        }
    }

    /// Build the card with the given rank and suit.
    ///
    /// The code is the unique value in `0..52` whose residues mod 13 and
    /// mod 4 match the rank and suit.
    #[must_use]
    pub fn from_parts(rank: Rank, suit: Suit) -> Self {
        let rank = rank as u8;
        let suit = suit as u8;
        let code = (0..DECK_SIZE as u8)
            .find(|c| c % 13 == rank && c % 4 == suit)
            .unwrap_or_default();
        Self(code)
    }

    /// All 52 cards in code order.
    pub fn full_deck() -> impl Iterator<Item = Card> {
        (0..DECK_SIZE as u8).map(Card)
    }

    /// The raw code.
    #[must_use]
    pub const fn code(self) -> u8 {
        self.0
    }

    #[must_use]
    pub fn rank(self) -> Rank {
        Rank::ALL[(self.0 as usize) % RANKS_PER_SUIT]
    }

    #[must_use]
    pub fn suit(self) -> Suit {
        Suit::ALL[(self.0 as usize) % Suit::ALL.len()]
    }

    #[must_use]
    pub fn color(self) -> Color {
        self.suit().color()
    }
}

impl TryFrom<u8> for Card {
    type Error = String;

    fn try_from(code: u8) -> Result<Self, Self::Error> {
        Card::new(code).ok_or_else(|| format!("card code {code} out of range 0..{DECK_SIZE}"))
    }
}

impl From<Card> for u8 {
    fn from(card: Card) -> u8 {
        card.0
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.rank(), self.suit())
    }
}

/// Card rank, Ace low.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Rank {
    Ace = 0,
    Two,
    Three,
    Four,
    Five,
    Six,
    Seven,
    Eight,
    Nine,
    Ten,
    Jack,
    Queen,
    King,
}

impl Rank {
    pub const ALL: [Rank; RANKS_PER_SUIT] = [
        Rank::Ace,
        Rank::Two,
        Rank::Three,
        Rank::Four,
        Rank::Five,
        Rank::Six,
        Rank::Seven,
        Rank::Eight,
        Rank::Nine,
        Rank::Ten,
        Rank::Jack,
        Rank::Queen,
        Rank::King,
    ];

    /// Zero-based position in the rank order.
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// The rank directly above, or `None` for a King.
    #[must_use]
    pub fn successor(self) -> Option<Rank> {
        Rank::ALL.get(self.index() + 1).copied()
    }

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Rank::Ace => "A",
            Rank::Two => "2",
            Rank::Three => "3",
            Rank::Four => "4",
            Rank::Five => "5",
            Rank::Six => "6",
            Rank::Seven => "7",
            Rank::Eight => "8",
            Rank::Nine => "9",
            Rank::Ten => "10",
            Rank::Jack => "J",
            Rank::Queen => "Q",
            Rank::King => "K",
        }
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.label())
    }
}

/// Card suit. The declaration order is fixed: it is the `code % 4` order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Suit {
    Clubs = 0,
    Diamonds,
    Spades,
    Hearts,
}

impl Suit {
    pub const ALL: [Suit; 4] = [Suit::Clubs, Suit::Diamonds, Suit::Spades, Suit::Hearts];

    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Color by suit identity, independent of declaration order.
    #[must_use]
    pub const fn color(self) -> Color {
        match self {
            Suit::Clubs | Suit::Spades => Color::Black,
            Suit::Diamonds | Suit::Hearts => Color::Red,
        }
    }

    #[must_use]
    pub const fn symbol(self) -> &'static str {
        match self {
            Suit::Clubs => "♣",
            Suit::Diamonds => "♦",
            Suit::Spades => "♠",
            Suit::Hearts => "♥",
        }
    }
}

impl fmt::Display for Suit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

/// Card color, used for the alternating-color tableau rule.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Color {
    Black,
    Red,
}

/// What a renderer draws for one tableau slot.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum CardFace {
    Up(Card),
    Down,
}

impl CardFace {
    /// The render code: the card's code, or [`Card::FACE_DOWN_CODE`].
    #[must_use]
    pub fn code(self) -> u8 {
        match self {
            CardFace::Up(card) => card.code(),
            CardFace::Down => Card::FACE_DOWN_CODE,
        }
    }

    #[must_use]
    pub fn card(self) -> Option<Card> {
        match self {
            CardFace::Up(card) => Some(card),
            CardFace::Down => None,
        }
    }
}

impl fmt::Display for CardFace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CardFace::Up(card) => fmt::Display::fmt(card, f),
            CardFace::Down => f.write_str("?"),
        }
    }
}
