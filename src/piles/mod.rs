//! Card piles.
//!
//! ## Key Types
//!
//! - `Pile`: ordered cards, top at the end (stock, talon, foundations)
//! - `TableauPile`: a pile with a face-down prefix

pub mod pile;
pub mod tableau;

pub use pile::Pile;
pub use tableau::TableauPile;
