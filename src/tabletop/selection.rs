//! Two-keystroke selection protocol.
//!
//! Keystroke one names a source pile, keystroke two names a destination.
//! After the second keystroke the selection always returns to `Idle`,
//! whether or not a move happened.

use serde::{Deserialize, Serialize};

use crate::core::PileSelector;

/// Pending-selection state.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Selection {
    /// No source chosen.
    #[default]
    Idle,
    /// A source pile has been named; the next key is the destination.
    SourceChosen(PileSelector),
}

impl Selection {
    /// The chosen source, if any.
    #[must_use]
    pub fn source(self) -> Option<PileSelector> {
        match self {
            Selection::Idle => None,
            Selection::SourceChosen(source) => Some(source),
        }
    }

    #[must_use]
    pub fn is_idle(self) -> bool {
        self == Selection::Idle
    }
}

/// A completed move.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    pub from: PileSelector,
    pub to: PileSelector,
    /// Number of cards moved (more than one only for tableau runs).
    pub count: usize,
}

/// What a single keystroke did.
///
/// Informational only: the engine has no error channel, and a rejected
/// move has no effect beyond clearing the selection.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SelectOutcome {
    /// Unrecognized key while idle; nothing changed.
    Ignored,
    /// First keystroke: the source is now chosen.
    Selected(PileSelector),
    /// Second keystroke resolved into a move.
    Moved(Move),
    /// Second keystroke did not produce a move; the selection was cleared.
    Rejected {
        from: PileSelector,
        to: Option<PileSelector>,
    },
}

impl SelectOutcome {
    /// The move made, if any.
    #[must_use]
    pub fn moved(self) -> Option<Move> {
        match self {
            SelectOutcome::Moved(mv) => Some(mv),
            _ => None,
        }
    }
}
