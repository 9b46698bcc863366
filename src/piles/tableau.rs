//! Tableau pile with a face-down prefix.

use serde::{Deserialize, Serialize};

use super::pile::Pile;
use crate::core::{Card, CardFace};

/// A tableau pile: a [`Pile`] whose bottom `hidden` cards are face-down.
///
/// The top card of a non-empty pile is always face-up, and the hidden count
/// never grows. Taking cards from the pile flips the next face-down card
/// once the pile shrinks to exactly its hidden count.
///
/// ```
/// use rust_klondike::core::{Card, CardFace};
/// use rust_klondike::piles::TableauPile;
///
/// let cards = [4, 20, 33].map(|c| Card::new(c).unwrap());
/// let mut pile = TableauPile::new(cards.to_vec(), 2);
/// assert_eq!(pile.face_up(), &cards[2..]);
///
/// pile.pop();
/// // The pile shrank to its hidden count, so the next card turned over.
/// assert_eq!(pile.hidden(), 1);
/// assert_eq!(pile.faces().last(), Some(CardFace::Up(cards[1])));
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "RawTableauPile")]
pub struct TableauPile {
    pile: Pile,
    hidden: usize,
}

/// Serialized shape of a [`TableauPile`]. Deserializing goes through
/// [`TableauPile::new`] so the hidden count is clamped.
#[derive(Deserialize)]
struct RawTableauPile {
    pile: Pile,
    hidden: usize,
}

impl From<RawTableauPile> for TableauPile {
    fn from(raw: RawTableauPile) -> Self {
        TableauPile::new(raw.pile.cards().to_vec(), raw.hidden)
    }
}

impl TableauPile {
    /// Build a pile with the given cards and face-down count.
    ///
    /// `hidden` is clamped so the top card of a non-empty pile is always
    /// face-up.
    #[must_use]
    pub fn new(cards: Vec<Card>, hidden: usize) -> Self {
        let hidden = hidden.min(cards.len().saturating_sub(1));
        Self {
            pile: Pile::from(cards),
            hidden,
        }
    }

    /// Number of face-down cards at the bottom.
    #[must_use]
    pub fn hidden(&self) -> usize {
        self.hidden
    }

    /// All cards, bottom to top, including face-down ones.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        self.pile.cards()
    }

    /// The face-up run, bottom to top.
    #[must_use]
    pub fn face_up(&self) -> &[Card] {
        &self.pile.cards()[self.hidden..]
    }

    /// What a renderer shows for each slot, bottom to top.
    pub fn faces(&self) -> impl Iterator<Item = CardFace> + '_ {
        self.pile.cards().iter().enumerate().map(move |(i, &card)| {
            if i < self.hidden {
                CardFace::Down
            } else {
                CardFace::Up(card)
            }
        })
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.pile.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pile.is_empty()
    }

    #[must_use]
    pub fn top(&self) -> Option<Card> {
        self.pile.top()
    }

    /// Place a card on top. It lands face-up.
    pub fn push(&mut self, card: Card) {
        self.pile.push(card);
    }

    /// Append a run of cards on top, preserving order.
    pub fn extend_run(&mut self, run: Vec<Card>) {
        self.pile.extend(run);
    }

    /// Take the top card, flipping the next face-down card if exposed.
    pub fn pop(&mut self) -> Option<Card> {
        let card = self.pile.pop()?;
        self.flip_if_exposed();
        Some(card)
    }

    /// Take the face-up cards from `index` to the top.
    ///
    /// Returns `None` (and leaves the pile alone) if `index` points into
    /// the face-down prefix or past the top.
    pub fn take_run(&mut self, index: usize) -> Option<Vec<Card>> {
        if index < self.hidden || index >= self.pile.len() {
            return None;
        }
        let run = self.pile.split_off(index);
        self.flip_if_exposed();
        Some(run)
    }

    /// Turn the top face-down card over once no face-up card covers it.
    fn flip_if_exposed(&mut self) {
        if self.hidden > 0 && self.pile.len() <= self.hidden {
            self.hidden = self.pile.len().saturating_sub(1);
        }
    }
}
