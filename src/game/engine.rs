//! Flip and match resolution rules.
//!
//! `MemoryGame` owns a [`GameState`] and applies the only two inputs the
//! game has: a flip at a board position, and the end of the resolution
//! delay. It does not keep time itself; [`crate::session::GameSession`]
//! schedules `finish_resolution` after the configured delay.
//!
//! ## Rules
//!
//! - A flip is accepted only on an in-range card that is neither revealed
//!   nor matched, and only while fewer than two cards are revealed.
//!   Anything else is ignored without touching state.
//! - Every accepted flip counts as one move.
//! - The second flip resolves the pair immediately: equal faces are matched
//!   and the pair's reward is credited right then. The pair stays revealed
//!   until `finish_resolution`.

use serde::{Deserialize, Serialize};

use super::state::{GameState, Phase};
use crate::cards::{Card, CardId, Deck};

/// Result of a flip.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum FlipOutcome {
    /// Click rejected; nothing changed.
    Ignored,

    /// First card of a pair turned face-up.
    Revealed { position: usize },

    /// Second card turned face-up and the faces match.
    Matched {
        first: usize,
        second: usize,
        reward: u32,
        /// This pair finished the board.
        completed: bool,
    },

    /// Second card turned face-up and the faces differ.
    Mismatched { first: usize, second: usize },
}

impl FlipOutcome {
    /// Whether the flip changed state.
    #[must_use]
    pub fn is_accepted(&self) -> bool {
        !matches!(self, FlipOutcome::Ignored)
    }

    /// Whether this flip revealed the second card of a pair.
    #[must_use]
    pub fn starts_resolution(&self) -> bool {
        matches!(self, FlipOutcome::Matched { .. } | FlipOutcome::Mismatched { .. })
    }
}

/// The memory-match rules engine.
#[derive(Clone, Debug)]
pub struct MemoryGame {
    state: GameState,
}

impl MemoryGame {
    /// Start a round on an already shuffled deck.
    #[must_use]
    pub fn new(deck: Deck) -> Self {
        Self::from_state(GameState::new(deck))
    }

    /// Resume from an existing state.
    #[must_use]
    pub fn from_state(state: GameState) -> Self {
        Self { state }
    }

    /// Current state.
    #[must_use]
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Consume the engine, returning its state.
    #[must_use]
    pub fn into_state(self) -> GameState {
        self.state
    }

    /// Current phase.
    #[must_use]
    pub fn phase(&self) -> Phase {
        self.state.phase()
    }

    /// Whether a flip at `position` would be accepted.
    #[must_use]
    pub fn can_flip(&self, position: usize) -> bool {
        position < self.state.deck.len()
            && self.state.revealed.len() < 2
            && !self.state.is_face_up(position)
    }

    /// Flip the card at `position`.
    pub fn flip(&mut self, position: usize) -> FlipOutcome {
        if !self.can_flip(position) {
            tracing::trace!(position, phase = ?self.phase(), "flip ignored");
            return FlipOutcome::Ignored;
        }

        // Look up both cards before touching state
        let Some(&card) = self.state.card(position) else {
            return FlipOutcome::Ignored;
        };
        let pending = match self.state.revealed.first() {
            Some(&first) => match self.state.card(first) {
                Some(&first_card) => Some((first, first_card)),
                None => {
                    tracing::warn!(first, position, "revealed card is off the board");
                    return FlipOutcome::Ignored;
                }
            },
            None => None,
        };

        self.state.revealed.push(position);
        self.state.move_count += 1;
        tracing::debug!(position, moves = self.state.move_count, "card revealed");

        match pending {
            Some((first, first_card)) => self.resolve_pair(first, first_card, position, card),
            None => FlipOutcome::Revealed { position },
        }
    }

    /// Compare the two revealed cards and credit a match.
    fn resolve_pair(&mut self, first: usize, a: Card, second: usize, b: Card) -> FlipOutcome {
        if !a.matches(&b) {
            tracing::debug!(first, second, "mismatch");
            return FlipOutcome::Mismatched { first, second };
        }

        self.state.matched.insert(a.id);
        self.state.matched.insert(b.id);
        self.state.total_reward += u64::from(a.reward);
        let completed = self.state.is_complete();

        tracing::debug!(
            first,
            second,
            face = %a.face,
            reward = a.reward,
            total = self.state.total_reward,
            completed,
            "pair matched"
        );

        FlipOutcome::Matched {
            first,
            second,
            reward: a.reward,
            completed,
        }
    }

    /// End the resolution delay: flip unmatched cards back down.
    ///
    /// Returns `false` if no pair was awaiting resolution.
    pub fn finish_resolution(&mut self) -> bool {
        if self.state.revealed.len() < 2 {
            return false;
        }
        self.state.revealed.clear();
        tracing::trace!("revealed cards cleared");
        true
    }

    /// Ids of matched cards, sorted.
    #[must_use]
    pub fn matched_ids(&self) -> Vec<CardId> {
        let mut ids: Vec<_> = self.state.matched.iter().copied().collect();
        ids.sort_unstable();
        ids
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::FaceValue;

    /// Deck `[A, B, A, B]`, every pair worth 5.
    fn abab() -> MemoryGame {
        let a = FaceValue::new('A');
        let b = FaceValue::new('B');
        let deck = Deck::from_cards(vec![
            Card::new(CardId::new(0), a, 5),
            Card::new(CardId::new(1), b, 5),
            Card::new(CardId::new(2), a, 5),
            Card::new(CardId::new(3), b, 5),
        ])
        .unwrap();
        MemoryGame::new(deck)
    }

    #[test]
    fn test_first_flip_reveals() {
        let mut game = abab();
        assert_eq!(game.flip(0), FlipOutcome::Revealed { position: 0 });
        assert_eq!(game.phase(), Phase::Idle);
        assert_eq!(game.state().move_count, 1);
        assert!(game.state().is_revealed(0));
    }

    #[test]
    fn test_mismatch_leaves_score() {
        let mut game = abab();
        game.flip(0);
        let outcome = game.flip(1);

        assert_eq!(outcome, FlipOutcome::Mismatched { first: 0, second: 1 });
        assert!(outcome.starts_resolution());
        assert_eq!(game.phase(), Phase::Resolving);
        assert_eq!(game.state().total_reward, 0);
        assert!(game.state().matched.is_empty());
        assert_eq!(game.state().move_count, 2);

        assert!(game.finish_resolution());
        assert_eq!(game.phase(), Phase::Idle);
        assert!(game.state().revealed.is_empty());
    }

    #[test]
    fn test_match_credits_reward_immediately() {
        let mut game = abab();
        game.flip(0);
        let outcome = game.flip(2);

        assert_eq!(
            outcome,
            FlipOutcome::Matched { first: 0, second: 2, reward: 5, completed: false }
        );
        assert_eq!(game.state().total_reward, 5);
        assert_eq!(game.matched_ids(), vec![CardId::new(0), CardId::new(2)]);
        // Still revealed until the delay ends
        assert_eq!(game.phase(), Phase::Resolving);

        game.finish_resolution();
        assert!(game.state().is_face_up(0));
        assert!(game.state().is_face_up(2));
    }

    #[test]
    fn test_ignored_clicks() {
        let mut game = abab();

        assert_eq!(game.flip(4), FlipOutcome::Ignored);

        game.flip(0);
        assert_eq!(game.flip(0), FlipOutcome::Ignored);

        game.flip(1);
        assert_eq!(game.flip(3), FlipOutcome::Ignored);
        assert_eq!(game.state().move_count, 2);

        game.finish_resolution();
        game.flip(0);
        game.flip(2);
        game.finish_resolution();
        assert_eq!(game.flip(2), FlipOutcome::Ignored);
        assert!(!FlipOutcome::Ignored.is_accepted());
    }

    #[test]
    fn test_finish_without_pair_is_noop() {
        let mut game = abab();
        assert!(!game.finish_resolution());
        game.flip(1);
        assert!(!game.finish_resolution());
        assert!(game.state().is_revealed(1));
    }

    #[test]
    fn test_completion() {
        let mut game = abab();
        game.flip(0);
        game.flip(2);
        game.finish_resolution();
        game.flip(1);
        let last = game.flip(3);

        assert_eq!(
            last,
            FlipOutcome::Matched { first: 1, second: 3, reward: 5, completed: true }
        );
        assert_eq!(game.phase(), Phase::Complete);
        assert_eq!(game.state().total_reward, 10);

        game.finish_resolution();
        let before = game.state().clone();
        for position in 0..4 {
            assert_eq!(game.flip(position), FlipOutcome::Ignored);
        }
        assert_eq!(game.state(), &before);
    }

    #[test]
    fn test_flip_on_off_board_reveal_changes_nothing() {
        let mut state = abab().into_state();
        state.revealed.push(99);
        let mut game = MemoryGame::from_state(state);
        let before = game.state().clone();

        assert_eq!(game.flip(0), FlipOutcome::Ignored);
        assert_eq!(game.state(), &before);
        assert_eq!(game.state().move_count, 0);
        assert_eq!(game.phase(), Phase::Idle);
    }
}
