//! Klondike placement rules.
//!
//! The tabletop calls into these predicates but never encodes rank or
//! color arithmetic itself.

pub mod legality;

pub use legality::{can_play_on_foundation, can_play_on_tableau};
