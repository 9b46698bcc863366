//! # rust-klondike
//!
//! A Klondike solitaire engine driven by a two-keystroke input protocol.
//!
//! ## Design Principles
//!
//! 1. **Input-Agnostic**: The engine sees `PileSelector` values, never raw
//!    keys. A `KeyMap` translates keys at the edge.
//!
//! 2. **Deterministic**: Dealing takes an injected `GameRng`. The same seed
//!    produces the same game.
//!
//! 3. **Silent Rejection**: There is no error channel in play. An illegal
//!    move leaves every pile untouched and clears the selection.
//!
//! ## Modules
//!
//! - `core`: Cards, pile selectors, RNG, configuration
//! - `piles`: Ordered piles and tableau piles with face-down prefixes
//! - `rules`: Tableau and foundation placement predicates
//! - `tabletop`: Game state, selection state machine, move resolution

pub mod core;
pub mod piles;
pub mod rules;
pub mod tabletop;

// Re-export commonly used types
pub use crate::core::{
    Card, CardFace, Color, ConfigError, GameRng, KeyMap, PileSelector, Rank, Suit, TableConfig,
};

pub use crate::piles::{Pile, TableauPile};

pub use crate::rules::{can_play_on_foundation, can_play_on_tableau};

pub use crate::tabletop::{Move, SelectOutcome, Selection, Tabletop, TabletopBuilder};
