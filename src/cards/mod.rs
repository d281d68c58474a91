//! Card system: faces, physical cards, and decks.
//!
//! ## Key Types
//!
//! - `FaceValue`: The symbol two cards must share to match
//! - `CardFace`: Catalog entry (symbol, image, reward)
//! - `CardId` / `Card`: One physical tile on the board
//! - `Deck`: Validated, shuffleable sequence of paired cards

pub mod deck;
pub mod definition;
pub mod instance;

pub use deck::Deck;
pub use definition::{CardFace, FaceValue};
pub use instance::{Card, CardId};
