//! Decks of paired cards.
//!
//! A deck is built from a catalog of faces: every face is dealt twice,
//! first one copy of each face in catalog order and then a second run,
//! with ids numbered in that dealing order. Shuffling returns a new deck
//! and leaves the source untouched; the order is fixed from then on.
//!
//! ```
//! use memory_match::cards::{CardFace, Deck, FaceValue};
//! use memory_match::core::GameRng;
//!
//! let faces = vec![
//!     CardFace::new(FaceValue::new('A'), "a.svg", 5),
//!     CardFace::new(FaceValue::new('B'), "b.svg", 5),
//! ];
//! let deck = Deck::build(&faces).unwrap();
//! assert_eq!(deck.len(), 4);
//!
//! let shuffled = deck.shuffled(&mut GameRng::new(1));
//! assert_eq!(shuffled.len(), 4);
//! assert_eq!(shuffled.pair_count(), 2);
//! ```

use im::Vector;
use rustc_hash::{FxHashMap, FxHashSet};
use serde::{Deserialize, Serialize};

use super::definition::{CardFace, FaceValue};
use super::instance::{Card, CardId};
use crate::core::error::{MatchError, Result};
use crate::core::rng::RandomSource;

/// An ordered, validated sequence of paired cards.
///
/// Backed by `im::Vector`, so cloning a deck (and any state holding one)
/// is O(1).
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Deck {
    cards: Vector<Card>,
}

impl Deck {
    /// Deal every catalog face twice, unshuffled.
    ///
    /// Fails if the catalog is empty, repeats a face, or has a zero reward.
    pub fn build(faces: &[CardFace]) -> Result<Self> {
        if faces.is_empty() {
            return Err(MatchError::EmptyCatalog);
        }

        let mut seen = FxHashSet::default();
        for face in faces {
            if !seen.insert(face.value) {
                return Err(MatchError::DuplicateFace(face.value));
            }
            if face.reward == 0 {
                return Err(MatchError::ZeroReward(face.value));
            }
        }

        let cards = faces
            .iter()
            .chain(faces.iter())
            .enumerate()
            .map(|(i, face)| Card::from_face(CardId::new(i as u32), face))
            .collect();

        Ok(Self { cards })
    }

    /// Wrap an explicit card sequence, checking the pairing invariants.
    pub fn from_cards(cards: impl IntoIterator<Item = Card>) -> Result<Self> {
        let deck = Self {
            cards: cards.into_iter().collect(),
        };
        deck.validate()?;
        Ok(deck)
    }

    /// Check that the deck is non-empty, ids are unique, rewards are
    /// positive, and every face appears exactly twice.
    pub fn validate(&self) -> Result<()> {
        if self.cards.is_empty() {
            return Err(MatchError::EmptyCatalog);
        }

        let mut ids = FxHashSet::default();
        for card in &self.cards {
            if !ids.insert(card.id) {
                return Err(MatchError::DuplicateCardId(card.id.raw()));
            }
            if card.reward == 0 {
                return Err(MatchError::ZeroReward(card.face));
            }
        }

        let mut counts: Vec<_> = self.face_counts().into_iter().collect();
        counts.sort_unstable();
        if let Some(&(face, count)) = counts.iter().find(|(_, count)| *count != 2) {
            return Err(MatchError::UnpairedFace { face, count });
        }

        Ok(())
    }

    /// Return a uniformly shuffled copy of this deck.
    #[must_use]
    pub fn shuffled<R: RandomSource>(&self, rng: &mut R) -> Self {
        let mut cards: Vec<Card> = self.cards.iter().copied().collect();
        rng.shuffle(&mut cards);
        tracing::trace!(cards = cards.len(), "deck shuffled");
        Self {
            cards: cards.into_iter().collect(),
        }
    }

    /// How many times each face appears.
    #[must_use]
    pub fn face_counts(&self) -> FxHashMap<FaceValue, usize> {
        let mut counts = FxHashMap::default();
        for card in &self.cards {
            *counts.entry(card.face).or_insert(0) += 1;
        }
        counts
    }

    /// Card at a board position.
    #[must_use]
    pub fn get(&self, position: usize) -> Option<&Card> {
        self.cards.get(position)
    }

    /// Number of cards.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Whether the deck has no cards.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Number of pairs (half the card count).
    #[must_use]
    pub fn pair_count(&self) -> usize {
        self.cards.len() / 2
    }

    /// Iterate cards in board order.
    pub fn iter(&self) -> impl Iterator<Item = &Card> {
        self.cards.iter()
    }

    /// Faces in board order, mostly useful for assertions and debugging.
    #[must_use]
    pub fn faces(&self) -> Vec<FaceValue> {
        self.cards.iter().map(|c| c.face).collect()
    }
}
