//! A memory-match window: the boundary the UI talks to.
//!
//! A `GameSession` is created each time the game view opens (fresh shuffle)
//! and dropped when it closes. It wraps a [`MemoryGame`] with a
//! [`Scheduler`] so the two timed transitions are explicit events:
//!
//! - **Resolution**: scheduled when the second card of a pair is revealed;
//!   clears the revealed cards after `resolution_delay`. Never cancelled.
//! - **Reward banner**: shown on every match and hidden after
//!   `reward_banner_duration`. A new match replaces the previous banner
//!   and its timer.
//!
//! The UI drives the session with `on_card_click`, `on_close` and
//! `advance`, and reads back state, a summary, and a queue of
//! [`SessionEvent`]s.
//!
//! ```
//! use std::time::Duration;
//! use memory_match::core::{GameConfig, GameRng};
//! use memory_match::session::GameSession;
//!
//! let mut session = GameSession::open(GameConfig::default(), &mut GameRng::new(7)).unwrap();
//! session.on_card_click(0);
//! session.on_card_click(1);
//! session.advance(Duration::from_secs(1));
//! assert_eq!(session.summary().moves, 2);
//! assert!(session.state().revealed.is_empty());
//! ```

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::cards::{CardFace, Deck};
use crate::core::config::GameConfig;
use crate::core::error::Result;
use crate::core::rng::RandomSource;
use crate::game::{FlipOutcome, GameState, MemoryGame, Phase};
use crate::schedule::{Scheduler, TimerId};

/// Timers a session schedules.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum SessionTimer {
    FinishResolution,
    HideReward,
}

/// Notifications for the UI layer, drained with
/// [`GameSession::drain_events`].
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum SessionEvent {
    /// A card turned face-up.
    CardRevealed { position: usize },
    /// A pair matched; show `+reward` coins.
    RewardEarned { reward: u32, total: u64 },
    /// Two revealed cards did not match.
    Mismatch { first: usize, second: usize },
    /// The resolution delay ended; unmatched cards are face-down again.
    RevealCleared,
    /// The reward banner timed out.
    RewardHidden,
    /// Every pair is matched.
    Completed { moves: u32, coins: u64 },
    /// The window was closed.
    Closed,
}

/// Counters shown in the status bar and completion message.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionSummary {
    pub moves: u32,
    pub matched_pairs: usize,
    pub total_pairs: usize,
    pub coins: u64,
    pub complete: bool,
}

/// One open memory-match window.
#[derive(Clone, Debug)]
pub struct GameSession {
    config: GameConfig,
    game: MemoryGame,
    timers: Scheduler<SessionTimer>,
    banner: Option<(u32, TimerId)>,
    close_requested: bool,
    events: Vec<SessionEvent>,
}

impl GameSession {
    /// Build and shuffle a deck from the config's catalog.
    pub fn open<R: RandomSource>(config: GameConfig, rng: &mut R) -> Result<Self> {
        let deck = Deck::build(&config.faces)?.shuffled(rng);
        tracing::debug!(cards = deck.len(), "memory game opened");
        Ok(Self::with_deck(config, deck))
    }

    /// Open on a specific, already arranged deck.
    #[must_use]
    pub fn with_deck(config: GameConfig, deck: Deck) -> Self {
        Self {
            config,
            game: MemoryGame::new(deck),
            timers: Scheduler::new(),
            banner: None,
            close_requested: false,
            events: Vec::new(),
        }
    }

    /// Handle a click on the card at `position`.
    ///
    /// Ignored once the session is closed, and for any click the game
    /// rules reject.
    pub fn on_card_click(&mut self, position: usize) -> FlipOutcome {
        if self.close_requested {
            return FlipOutcome::Ignored;
        }

        let outcome = self.game.flip(position);
        match outcome {
            FlipOutcome::Ignored => {}
            FlipOutcome::Revealed { position } => {
                self.events.push(SessionEvent::CardRevealed { position });
            }
            FlipOutcome::Mismatched { first, second } => {
                self.events.push(SessionEvent::CardRevealed { position: second });
                self.events.push(SessionEvent::Mismatch { first, second });
            }
            FlipOutcome::Matched {
                second,
                reward,
                completed,
                ..
            } => {
                self.events.push(SessionEvent::CardRevealed { position: second });
                self.show_reward(reward);
                if completed {
                    let state = self.game.state();
                    tracing::debug!(moves = state.move_count, coins = state.total_reward, "board cleared");
                    self.events.push(SessionEvent::Completed {
                        moves: state.move_count,
                        coins: state.total_reward,
                    });
                }
            }
        }

        if outcome.starts_resolution() {
            self.timers
                .schedule(self.config.resolution_delay, SessionTimer::FinishResolution);
        }
        outcome
    }

    fn show_reward(&mut self, reward: u32) {
        if let Some((_, previous)) = self.banner.take() {
            self.timers.cancel(previous);
        }
        let timer = self
            .timers
            .schedule(self.config.reward_banner_duration, SessionTimer::HideReward);
        self.banner = Some((reward, timer));
        self.events.push(SessionEvent::RewardEarned {
            reward,
            total: self.game.state().total_reward,
        });
    }

    /// Let `elapsed` time pass, applying any timers that come due.
    /// Returns the number of timers applied.
    pub fn advance(&mut self, elapsed: Duration) -> usize {
        if self.close_requested {
            return 0;
        }

        let game = &mut self.game;
        let banner = &mut self.banner;
        let events = &mut self.events;
        self.timers.advance_with(elapsed, |_, due| match due.event {
            SessionTimer::FinishResolution => {
                if game.finish_resolution() {
                    events.push(SessionEvent::RevealCleared);
                }
            }
            SessionTimer::HideReward => {
                if banner.is_some_and(|(_, id)| id == due.id) {
                    *banner = None;
                    events.push(SessionEvent::RewardHidden);
                }
            }
        })
    }

    /// The window's close button.
    pub fn on_close(&mut self) {
        if self.close_requested {
            return;
        }
        self.close_requested = true;
        self.banner = None;
        self.timers.clear();
        self.events.push(SessionEvent::Closed);
        tracing::debug!(moves = self.game.state().move_count, "memory game closed");
    }

    /// Whether the UI should unmount this window.
    #[must_use]
    pub fn close_requested(&self) -> bool {
        self.close_requested
    }

    /// Coins shown in the reward banner, while it is up.
    #[must_use]
    pub fn reward_banner(&self) -> Option<u32> {
        self.banner.map(|(reward, _)| reward)
    }

    /// Current game state.
    #[must_use]
    pub fn state(&self) -> &GameState {
        self.game.state()
    }

    /// Current phase.
    #[must_use]
    pub fn phase(&self) -> Phase {
        self.game.phase()
    }

    /// Catalog face for the card at `position`, for drawing it face-up.
    #[must_use]
    pub fn face_at(&self, position: usize) -> Option<&CardFace> {
        let card = self.game.state().card(position)?;
        self.config.face(card.face)
    }

    /// Status bar counters.
    #[must_use]
    pub fn summary(&self) -> SessionSummary {
        let state = self.game.state();
        SessionSummary {
            moves: state.move_count,
            matched_pairs: state.matched_pairs(),
            total_pairs: state.total_pairs(),
            coins: state.total_reward,
            complete: state.is_complete(),
        }
    }

    /// Virtual time since the session opened.
    #[must_use]
    pub fn elapsed(&self) -> Duration {
        self.timers.now()
    }

    /// The configuration this session runs with.
    #[must_use]
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Take all events emitted since the last drain.
    pub fn drain_events(&mut self) -> Vec<SessionEvent> {
        std::mem::take(&mut self.events)
    }
}
