//! Builder for arbitrary table positions.

use super::engine::Tabletop;
use super::selection::Selection;
use crate::core::{Card, FOUNDATION_COUNT, TABLEAU_COUNT};
use crate::piles::{Pile, TableauPile};

/// Lays out a specific position instead of dealing one.
///
/// Used for tests, puzzles and replaying a known position. The builder
/// does not check that all 52 cards are present; a position that is
/// missing cards simply cannot be won.
///
/// ```
/// use rust_klondike::core::{Card, PileSelector, Rank, Suit};
/// use rust_klondike::tabletop::TabletopBuilder;
///
/// let king = Card::from_parts(Rank::King, Suit::Spades);
/// let mut table = TabletopBuilder::new().talon(vec![king]).build();
///
/// table.select(Some(PileSelector::Talon));
/// table.select(Some(PileSelector::Tableau(3)));
/// assert_eq!(table.tableau(3).top(), Some(king));
/// ```
#[derive(Clone, Debug, Default)]
pub struct TabletopBuilder {
    stock: Vec<Card>,
    talon: Vec<Card>,
    foundations: [Vec<Card>; FOUNDATION_COUNT],
    tableau: [(Vec<Card>, usize); TABLEAU_COUNT],
    strict_foundation_suits: bool,
}

impl TabletopBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stock cards, bottom to top.
    pub fn stock(mut self, cards: Vec<Card>) -> Self {
        self.stock = cards;
        self
    }

    /// Talon cards, bottom to top.
    pub fn talon(mut self, cards: Vec<Card>) -> Self {
        self.talon = cards;
        self
    }

    /// Foundation `index` contents, bottom to top.
    pub fn foundation(mut self, index: usize, cards: Vec<Card>) -> Self {
        assert!(index < FOUNDATION_COUNT, "Foundation index must be 0-3");
        self.foundations[index] = cards;
        self
    }

    /// Tableau pile `index`: cards bottom to top and the face-down count.
    pub fn tableau(mut self, index: usize, cards: Vec<Card>, hidden: usize) -> Self {
        assert!(index < TABLEAU_COUNT, "Tableau index must be 0-6");
        self.tableau[index] = (cards, hidden);
        self
    }

    pub fn strict_foundation_suits(mut self, strict: bool) -> Self {
        self.strict_foundation_suits = strict;
        self
    }

    pub fn build(self) -> Tabletop {
        Tabletop {
            stock: Pile::from(self.stock),
            talon: Pile::from(self.talon),
            foundations: self.foundations.map(Pile::from),
            tableau: self.tableau.map(|(cards, hidden)| TableauPile::new(cards, hidden)),
            selection: Selection::Idle,
            strict_foundation_suits: self.strict_foundation_suits,
        }
    }
}
