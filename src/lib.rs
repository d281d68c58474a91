//! # memory-match
//!
//! A headless memory-match game engine for a desktop-style UI.
//!
//! ## Design Principles
//!
//! 1. **Deterministic**: Randomness is injected through `RandomSource` and
//!    time only advances when the caller says so. Every deal and every
//!    delay can be reproduced in a test.
//!
//! 2. **Timers are events**: Resolution delays, reward banners, debounce
//!    windows and search latency are entries on a virtual-clock
//!    `Scheduler` with cancellation tokens.
//!
//! 3. **No errors at play time**: Invalid clicks are ignored. Only deck
//!    construction, configuration and storage can fail.
//!
//! ## Modules
//!
//! - `core`: RNG, configuration, errors
//! - `cards`: Faces, cards and decks
//! - `game`: Game state and flip/match rules
//! - `schedule`: Virtual-clock timer queue
//! - `session`: The UI-facing game window
//! - `debounce`: Timer-reset debounce
//! - `search`: Debounced mock place search
//! - `prefs`: UI preferences and their stores

pub mod core;
pub mod cards;
pub mod game;
pub mod schedule;
pub mod session;
pub mod debounce;
pub mod search;
pub mod prefs;

#[cfg(feature = "python")]
pub mod python;

// Re-export commonly used types
pub use crate::core::{
    GameConfig, GameRng, MatchError, RandomSource, Result, ScriptedSource,
};

pub use crate::cards::{Card, CardFace, CardId, Deck, FaceValue};

pub use crate::game::{FlipOutcome, GameState, MemoryGame, Phase};

pub use crate::schedule::{Fired, Scheduler, TimerId};

pub use crate::session::{GameSession, SessionEvent, SessionSummary};

pub use crate::debounce::{Debounced, Debouncer};

pub use crate::search::{PlaceKind, PlaceSearch, RecentSearches, SearchResult};

pub use crate::prefs::{JsonFileStore, MemoryStore, Position, PreferenceStore, Preferences};
