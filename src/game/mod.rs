//! Memory-match game: state and rules.
//!
//! The game is a two-phase state machine (`Idle` ↔ `Resolving`) with a
//! terminal `Complete` phase. Time is not modelled here; the session layer
//! decides when a resolving pair is cleared.

pub mod engine;
pub mod state;

pub use engine::{FlipOutcome, MemoryGame};
pub use state::{GameState, Phase};
