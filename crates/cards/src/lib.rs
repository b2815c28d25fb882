//! Fruit and animal cards, shuffled decks, and the card catalog.
//!
//! ## Core Types
//!
//! - [`Card`]: A card face: either an animal, or one or more groups of fruit
//! - [`Deck`]: A shuffled, self-replenishing sequence of cards for one table
//! - [`Catalog`]: Read-only display names and the template card set, loaded from JSON
mod card;
mod catalog;
mod deck;

pub use card::*;
pub use catalog::*;
pub use deck::*;
