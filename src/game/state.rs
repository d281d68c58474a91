//! Game state for one memory-match round.
//!
//! ## GameState
//!
//! - The shuffled deck (order fixed for the whole round)
//! - Positions currently face-up awaiting resolution (at most two)
//! - Ids of matched cards
//! - Move and coin counters
//!
//! The phase is derived from these fields rather than stored, so it can
//! never disagree with them.

use im::HashSet as ImHashSet;
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::cards::{Card, CardId, Deck, FaceValue};
use crate::core::error::{MatchError, Result};

/// Where the round stands.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Phase {
    /// Zero or one card revealed, waiting for a click.
    Idle,
    /// Two cards revealed, waiting for the resolution delay to elapse.
    Resolving,
    /// Every card has been matched.
    Complete,
}

/// Complete state of a round.
///
/// Uses `im` persistent collections, so snapshots via `clone` are O(1).
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    /// Shuffled deck.
    pub deck: Deck,

    /// Board positions face-up pending resolution, in click order.
    pub revealed: SmallVec<[usize; 2]>,

    /// Cards permanently face-up.
    pub matched: ImHashSet<CardId>,

    /// One per accepted flip.
    pub move_count: u32,

    /// Coins earned so far.
    pub total_reward: u64,
}

impl GameState {
    /// Fresh state over an already shuffled deck.
    #[must_use]
    pub fn new(deck: Deck) -> Self {
        Self {
            deck,
            revealed: SmallVec::new(),
            matched: ImHashSet::new(),
            move_count: 0,
            total_reward: 0,
        }
    }

    /// Current phase.
    #[must_use]
    pub fn phase(&self) -> Phase {
        if self.is_complete() {
            Phase::Complete
        } else if self.revealed.len() == 2 {
            Phase::Resolving
        } else {
            Phase::Idle
        }
    }

    /// Whether every card has been matched.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        !self.deck.is_empty() && self.matched.len() == self.deck.len()
    }

    /// Card at a board position.
    #[must_use]
    pub fn card(&self, position: usize) -> Option<&Card> {
        self.deck.get(position)
    }

    /// Whether the card at `position` is revealed and awaiting resolution.
    #[must_use]
    pub fn is_revealed(&self, position: usize) -> bool {
        self.revealed.contains(&position)
    }

    /// Whether the card at `position` has been matched.
    #[must_use]
    pub fn is_matched(&self, position: usize) -> bool {
        self.card(position)
            .is_some_and(|card| self.matched.contains(&card.id))
    }

    /// Whether the UI should draw the card at `position` face-up.
    #[must_use]
    pub fn is_face_up(&self, position: usize) -> bool {
        self.is_revealed(position) || self.is_matched(position)
    }

    /// Pairs found so far.
    #[must_use]
    pub fn matched_pairs(&self) -> usize {
        self.matched.len() / 2
    }

    /// Pairs on the board.
    #[must_use]
    pub fn total_pairs(&self) -> usize {
        self.deck.pair_count()
    }

    /// Encode the state with bincode.
    pub fn snapshot(&self) -> Result<Vec<u8>> {
        Ok(bincode::serialize(self)?)
    }

    /// Decode a snapshot, re-checking every state invariant.
    pub fn restore(bytes: &[u8]) -> Result<Self> {
        let state: Self = bincode::deserialize(bytes)?;
        state.validate()?;
        Ok(state)
    }

    /// Check that the state is one play could have reached.
    ///
    /// - The deck is valid
    /// - Matched ids belong to the deck and cover whole pairs
    /// - At most two positions are revealed, distinct and in range
    /// - A lone revealed card is unmatched; a revealed pair is either
    ///   unmatched or the pair that was just matched
    pub fn validate(&self) -> Result<()> {
        self.deck.validate()?;

        let faces: FxHashMap<CardId, FaceValue> =
            self.deck.iter().map(|card| (card.id, card.face)).collect();
        let mut matched_per_face: FxHashMap<FaceValue, usize> = FxHashMap::default();
        for id in &self.matched {
            let face = faces
                .get(id)
                .ok_or_else(|| invalid(format!("matched {id} is not in the deck")))?;
            *matched_per_face.entry(*face).or_insert(0) += 1;
        }
        if let Some((face, _)) = matched_per_face.iter().find(|(_, &count)| count != 2) {
            return Err(invalid(format!("face {face} is only half matched")));
        }

        if self.revealed.len() > 2 {
            return Err(invalid(format!("{} cards revealed", self.revealed.len())));
        }
        for (i, &position) in self.revealed.iter().enumerate() {
            if position >= self.deck.len() {
                return Err(invalid(format!("revealed position {position} is off the board")));
            }
            if self.revealed[..i].contains(&position) {
                return Err(invalid(format!("position {position} revealed twice")));
            }
        }

        match self.revealed.as_slice() {
            &[position] if self.is_matched(position) => Err(invalid(format!(
                "revealed position {position} is already matched"
            ))),
            &[first, second] if self.is_matched(first) != self.is_matched(second) => Err(
                invalid(format!("revealed pair {first}, {second} is partly matched")),
            ),
            &[first, second]
                if self.is_matched(first)
                    && self.card(first).map(|c| c.face) != self.card(second).map(|c| c.face) =>
            {
                Err(invalid(format!(
                    "revealed pair {first}, {second} is matched but faces differ"
                )))
            }
            _ => Ok(()),
        }
    }
}

fn invalid(reason: String) -> MatchError {
    MatchError::InvalidState(reason)
}
