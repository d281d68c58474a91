//! Physical cards on the board.
//!
//! A `Card` is one tile. Its `id` is unique per tile, while its `face` is
//! shared with exactly one other tile.

use serde::{Deserialize, Serialize};

use super::definition::{CardFace, FaceValue};

/// Unique identifier for a physical card.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct CardId(pub u32);

impl CardId {
    /// Create a new card ID.
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

impl std::fmt::Display for CardId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Card({})", self.0)
    }
}

/// A single tile in the deck.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Card {
    /// Unique per physical card.
    pub id: CardId,

    /// Symbol compared when checking for a match.
    pub face: FaceValue,

    /// Coins awarded when this card's pair is matched.
    pub reward: u32,
}

impl Card {
    /// Create a new card.
    #[must_use]
    pub const fn new(id: CardId, face: FaceValue, reward: u32) -> Self {
        Self { id, face, reward }
    }

    /// Instantiate a card from a catalog face.
    #[must_use]
    pub fn from_face(id: CardId, face: &CardFace) -> Self {
        Self::new(id, face.value, face.reward)
    }

    /// Whether two cards form a pair. Only faces are compared.
    #[must_use]
    pub fn matches(&self, other: &Card) -> bool {
        self.face == other.face
    }
}
