//! Error types for the fallible boundaries of the crate.
//!
//! Gameplay itself never fails: invalid clicks are ignored. Errors only
//! come from building decks, loading configuration, preference storage,
//! and state snapshots.

use thiserror::Error;

use crate::cards::FaceValue;

/// Errors surfaced by deck construction, configuration and storage.
#[derive(Debug, Error)]
pub enum MatchError {
    #[error("card catalog is empty")]
    EmptyCatalog,

    #[error("face {0} appears more than once in the catalog")]
    DuplicateFace(FaceValue),

    #[error("face {0} has a zero reward")]
    ZeroReward(FaceValue),

    #[error("face {face} appears {count} times in the deck, expected 2")]
    UnpairedFace { face: FaceValue, count: usize },

    #[error("card ids must be unique, {0} is repeated")]
    DuplicateCardId(u32),

    #[error("inconsistent game state: {0}")]
    InvalidState(String),

    #[error("configuration error: {0}")]
    Config(#[from] serde_json::Error),

    #[error("preference store error: {0}")]
    Preferences(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("snapshot error: {0}")]
    Snapshot(#[from] bincode::Error),
}

pub type Result<T> = std::result::Result<T, MatchError>;
