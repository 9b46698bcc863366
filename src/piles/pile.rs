//! Ordered card pile.

use serde::{Deserialize, Serialize};

use crate::core::Card;

/// An ordered sequence of cards. Index 0 is the bottom; the last card is
/// the top, the only one that can be played.
///
/// ```
/// use rust_klondike::core::Card;
/// use rust_klondike::piles::Pile;
///
/// let mut pile = Pile::new();
/// pile.push(Card::new(3).unwrap());
/// pile.push(Card::new(9).unwrap());
///
/// assert_eq!(pile.top(), Card::new(9));
/// assert_eq!(pile.pop(), Card::new(9));
/// assert_eq!(pile.len(), 1);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Pile {
    cards: Vec<Card>,
}

impl Pile {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Cards bottom to top.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// The top card, if any.
    #[must_use]
    pub fn top(&self) -> Option<Card> {
        self.cards.last().copied()
    }

    pub fn push(&mut self, card: Card) {
        self.cards.push(card);
    }

    pub fn pop(&mut self) -> Option<Card> {
        self.cards.pop()
    }

    /// Remove and return the cards from `index` to the top, in order.
    ///
    /// Panics if `index > len`.
    pub fn split_off(&mut self, index: usize) -> Vec<Card> {
        self.cards.split_off(index)
    }

    /// Append cards on top, preserving their order.
    pub fn extend(&mut self, cards: impl IntoIterator<Item = Card>) {
        self.cards.extend(cards);
    }
}

impl From<Vec<Card>> for Pile {
    fn from(cards: Vec<Card>) -> Self {
        Self { cards }
    }
}
