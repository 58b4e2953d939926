//! Card system: definitions, catalog, and deck.
//!
//! ## Key Types
//!
//! - `Card`: Immutable fragment (id, text, category)
//! - `Category`: Opening, Middle or Ending
//! - `CardCatalog`: The static content source
//! - `Deck`: Undealt cards, shuffling and dealing

pub mod catalog;
pub mod deck;
pub mod definition;

pub use catalog::CardCatalog;
pub use deck::{DealtHand, Deck, Shortfall};
pub use definition::{Card, CardId, Category};
