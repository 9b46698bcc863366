//! Game engine: piles, selection state machine, move resolution.
//!
//! ## Control Flow
//!
//! A front end deals once, then forwards every keystroke to
//! [`Tabletop::select`] and redraws from the accessors. Illegal moves are
//! silent no-ops that only clear the pending selection.

mod builder;
mod engine;
mod selection;

pub use builder::TabletopBuilder;
pub use engine::Tabletop;
pub use selection::{Move, SelectOutcome, Selection};
