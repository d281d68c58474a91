//! Core building blocks: randomness, configuration, errors.

pub mod config;
pub mod error;
pub mod rng;

pub use config::{classic_faces, GameConfig};
pub use error::{MatchError, Result};
pub use rng::{GameRng, RandomSource, ScriptedSource};
