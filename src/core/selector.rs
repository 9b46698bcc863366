//! Pile selectors: the 13 symbolic sources/destinations an input can name.
//!
//! The engine only ever sees `PileSelector` values. Translating raw keys
//! into selectors is the job of a [`KeyMap`](crate::core::KeyMap).

use serde::{Deserialize, Serialize};
use std::fmt;

/// Number of foundation piles.
pub const FOUNDATION_COUNT: usize = 4;

/// Number of tableau piles.
pub const TABLEAU_COUNT: usize = 7;

/// One of the 13 piles a keystroke can name.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PileSelector {
    Stock,
    Talon,
    /// Foundation by index, `0..4`.
    Foundation(u8),
    /// Tableau pile by index, `0..7`.
    Tableau(u8),
}

impl PileSelector {
    /// Every selector, in layout order: stock, talon, foundations, tableau.
    pub const ALL: [PileSelector; 13] = [
        PileSelector::Stock,
        PileSelector::Talon,
        PileSelector::Foundation(0),
        PileSelector::Foundation(1),
        PileSelector::Foundation(2),
        PileSelector::Foundation(3),
        PileSelector::Tableau(0),
        PileSelector::Tableau(1),
        PileSelector::Tableau(2),
        PileSelector::Tableau(3),
        PileSelector::Tableau(4),
        PileSelector::Tableau(5),
        PileSelector::Tableau(6),
    ];

    /// Position in [`PileSelector::ALL`].
    #[must_use]
    pub fn index(self) -> usize {
        match self {
            PileSelector::Stock => 0,
            PileSelector::Talon => 1,
            PileSelector::Foundation(i) => 2 + i as usize,
            PileSelector::Tableau(i) => 2 + FOUNDATION_COUNT + i as usize,
        }
    }

    /// Inverse of [`PileSelector::index`].
    #[must_use]
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// True if the selector names a pile that exists.
    #[must_use]
    pub fn is_valid(self) -> bool {
        match self {
            PileSelector::Stock | PileSelector::Talon => true,
            PileSelector::Foundation(i) => (i as usize) < FOUNDATION_COUNT,
            PileSelector::Tableau(i) => (i as usize) < TABLEAU_COUNT,
        }
    }
}

impl fmt::Display for PileSelector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PileSelector::Stock => f.write_str("stock"),
            PileSelector::Talon => f.write_str("talon"),
            PileSelector::Foundation(i) => write!(f, "foundation {i}"),
            PileSelector::Tableau(i) => write!(f, "tableau {i}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_index_round_trip() {
        for (i, sel) in PileSelector::ALL.iter().enumerate() {
            assert_eq!(sel.index(), i);
            assert_eq!(PileSelector::from_index(i), Some(*sel));
            assert!(sel.is_valid());
        }
        assert_eq!(PileSelector::from_index(13), None);
    }

    #[test]
    fn test_out_of_range_is_invalid() {
        assert!(!PileSelector::Foundation(4).is_valid());
        assert!(!PileSelector::Tableau(7).is_valid());
    }
}
