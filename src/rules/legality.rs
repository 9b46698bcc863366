//! Placement legality.
//!
//! Pure predicates. Nothing here mutates a pile; the tabletop consults them
//! before every move and treats a `false` as a silent no-op.

use crate::core::{Card, Rank};
use crate::piles::{Pile, TableauPile};

/// Can `card` be placed on top of the tableau pile?
///
/// An empty pile accepts only a King. Otherwise the card must be one rank
/// below the top card and of the other color.
#[must_use]
pub fn can_play_on_tableau(card: Card, pile: &TableauPile) -> bool {
    match pile.top() {
        None => card.rank() == Rank::King,
        Some(top) => {
            card.rank().successor() == Some(top.rank()) && card.color() != top.color()
        }
    }
}

/// Can `card` be placed on the foundation at `index`?
///
/// An empty foundation accepts an Ace. Otherwise the card must be one rank
/// above the top card and of the same suit. With `strict_suits`, an empty
/// foundation only accepts the Ace whose suit index equals `index`.
#[must_use]
pub fn can_play_on_foundation(card: Card, pile: &Pile, index: usize, strict_suits: bool) -> bool {
    match pile.top() {
        None => card.rank() == Rank::Ace && (!strict_suits || card.suit().index() == index),
        Some(top) => top.rank().successor() == Some(card.rank()) && card.suit() == top.suit(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Suit;

    fn card(rank: Rank, suit: Suit) -> Card {
        Card::from_parts(rank, suit)
    }

    #[test]
    fn test_empty_tableau_accepts_only_king() {
        let empty = TableauPile::default();
        assert!(can_play_on_tableau(card(Rank::King, Suit::Hearts), &empty));
        assert!(can_play_on_tableau(card(Rank::King, Suit::Clubs), &empty));
        assert!(!can_play_on_tableau(card(Rank::Queen, Suit::Hearts), &empty));
        assert!(!can_play_on_tableau(card(Rank::Ace, Suit::Spades), &empty));
    }

    #[test]
    fn test_tableau_needs_lower_rank_other_color() {
        let pile = TableauPile::new(vec![card(Rank::Nine, Suit::Spades)], 0);
        assert!(can_play_on_tableau(card(Rank::Eight, Suit::Hearts), &pile));
        assert!(can_play_on_tableau(card(Rank::Eight, Suit::Diamonds), &pile));
        assert!(!can_play_on_tableau(card(Rank::Eight, Suit::Clubs), &pile));
        assert!(!can_play_on_tableau(card(Rank::Seven, Suit::Hearts), &pile));
        assert!(!can_play_on_tableau(card(Rank::Ten, Suit::Hearts), &pile));
    }

    #[test]
    fn test_nothing_goes_on_an_ace() {
        let pile = TableauPile::new(vec![card(Rank::Ace, Suit::Hearts)], 0);
        for c in Card::full_deck() {
            assert!(!can_play_on_tableau(c, &pile), "{c}");
        }
    }

    #[test]
    fn test_empty_foundation_accepts_any_ace() {
        let empty = Pile::new();
        for suit in Suit::ALL {
            assert!(can_play_on_foundation(card(Rank::Ace, suit), &empty, 0, false));
        }
        assert!(!can_play_on_foundation(card(Rank::Two, Suit::Clubs), &empty, 0, false));
    }

    #[test]
    fn test_strict_foundation_checks_index() {
        let empty = Pile::new();
        assert!(can_play_on_foundation(card(Rank::Ace, Suit::Clubs), &empty, 0, true));
        assert!(!can_play_on_foundation(card(Rank::Ace, Suit::Hearts), &empty, 0, true));
        assert!(can_play_on_foundation(card(Rank::Ace, Suit::Hearts), &empty, 3, true));
    }

    #[test]
    fn test_foundation_needs_next_rank_same_suit() {
        let pile = Pile::from(vec![
            card(Rank::Ace, Suit::Clubs),
            card(Rank::Two, Suit::Clubs),
            card(Rank::Three, Suit::Clubs),
            card(Rank::Four, Suit::Clubs),
        ]);
        assert!(can_play_on_foundation(card(Rank::Five, Suit::Clubs), &pile, 0, false));
        assert!(!can_play_on_foundation(card(Rank::Five, Suit::Spades), &pile, 0, false));
        assert!(!can_play_on_foundation(card(Rank::Six, Suit::Clubs), &pile, 0, false));
        assert!(!can_play_on_foundation(card(Rank::Four, Suit::Clubs), &pile, 0, false));
    }

    #[test]
    fn test_full_foundation_accepts_nothing() {
        let pile = Pile::from(Rank::ALL.iter().map(|&r| card(r, Suit::Hearts)).collect::<Vec<_>>());
        for c in Card::full_deck() {
            assert!(!can_play_on_foundation(c, &pile, 3, false), "{c}");
        }
    }
}
