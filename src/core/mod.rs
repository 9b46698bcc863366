//! Core types: cards, pile selectors, RNG, configuration.
//!
//! Pure data with no game rules. The rules live in `rules`, the game state
//! in `tabletop`.

pub mod card;
pub mod config;
pub mod rng;
pub mod selector;

pub use card::{Card, CardFace, Color, Rank, Suit, DECK_SIZE, RANKS_PER_SUIT};
pub use config::{ConfigError, KeyMap, TableConfig};
pub use rng::GameRng;
pub use selector::{PileSelector, FOUNDATION_COUNT, TABLEAU_COUNT};
