//! Card faces - the catalog a deck is dealt from.
//!
//! A `CardFace` is the immutable description of one symbol on the board:
//! its value, the image the UI draws for it, and the coins a matched pair
//! is worth. Each face ends up on exactly two physical cards.

use serde::{Deserialize, Serialize};

/// The symbol printed on a card. Two cards match when their faces are equal.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FaceValue(pub char);

impl FaceValue {
    /// Create a new face value.
    #[must_use]
    pub const fn new(symbol: char) -> Self {
        Self(symbol)
    }

    /// Get the raw symbol.
    #[must_use]
    pub const fn symbol(self) -> char {
        self.0
    }
}

impl std::fmt::Display for FaceValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Catalog entry for one face.
///
/// ## Example
///
/// ```
/// use memory_match::cards::{CardFace, FaceValue};
///
/// let star = CardFace::new(FaceValue::new('S'), "star.svg", 40);
/// assert_eq!(star.reward, 40);
/// assert_eq!(star.value.to_string(), "S");
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardFace {
    /// Symbol shared by the two cards of a pair.
    pub value: FaceValue,

    /// Image shown when the card is face-up.
    pub image: String,

    /// Coins awarded when the pair is matched.
    pub reward: u32,
}

impl CardFace {
    /// Create a new face.
    #[must_use]
    pub fn new(value: FaceValue, image: impl Into<String>, reward: u32) -> Self {
        Self {
            value,
            image: image.into(),
            reward,
        }
    }
}
