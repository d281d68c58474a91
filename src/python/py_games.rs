//! Game bindings for Python.

use std::time::Duration;

use pyo3::prelude::*;

use crate::core::{GameConfig, GameRng};
use crate::session::GameSession;

use super::py_core::{PyFlipOutcome, PyGameConfig};

/// Python wrapper for GameSession.
///
/// One open memory-match board with a virtual clock.
#[pyclass(name = "MemoryGame")]
pub struct PyMemoryGame {
    session: GameSession,
}

#[pymethods]
impl PyMemoryGame {
    /// Open a new shuffled board.
    ///
    /// # Arguments
    /// - seed: RNG seed for a deterministic deal
    /// - config: Optional GameConfig (classic board by default)
    #[new]
    #[pyo3(signature = (seed = 42, config = None))]
    fn new(seed: u64, config: Option<PyGameConfig>) -> PyResult<Self> {
        let config = config.map_or_else(GameConfig::default, |c| c.0);
        let mut rng = GameRng::new(seed).for_context("deck");
        GameSession::open(config, &mut rng)
            .map(|session| Self { session })
            .map_err(|e| PyErr::new::<pyo3::exceptions::PyValueError, _>(e.to_string()))
    }

    /// Click the card at `position`.
    fn click(&mut self, position: usize) -> PyFlipOutcome {
        PyFlipOutcome(self.session.on_card_click(position))
    }

    /// Let `ms` milliseconds pass. Returns the number of timers applied.
    fn advance(&mut self, ms: u64) -> usize {
        self.session.advance(Duration::from_millis(ms))
    }

    /// Close the window.
    fn close(&mut self) {
        self.session.on_close();
    }

    /// Face symbols in board order.
    fn faces(&self) -> String {
        self.session
            .state()
            .deck
            .iter()
            .map(|card| card.face.symbol())
            .collect()
    }

    /// Whether the card at `position` is drawn face-up.
    fn is_face_up(&self, position: usize) -> bool {
        self.session.state().is_face_up(position)
    }

    #[getter]
    fn moves(&self) -> u32 {
        self.session.summary().moves
    }

    #[getter]
    fn coins(&self) -> u64 {
        self.session.summary().coins
    }

    #[getter]
    fn matched_pairs(&self) -> usize {
        self.session.summary().matched_pairs
    }

    #[getter]
    fn complete(&self) -> bool {
        self.session.summary().complete
    }

    #[getter]
    fn close_requested(&self) -> bool {
        self.session.close_requested()
    }

    /// Coins in the reward banner, if it is showing.
    #[getter]
    fn reward_banner(&self) -> Option<u32> {
        self.session.reward_banner()
    }

    fn __repr__(&self) -> String {
        let summary = self.session.summary();
        format!(
            "MemoryGame(moves={}, pairs={}/{}, coins={})",
            summary.moves, summary.matched_pairs, summary.total_pairs, summary.coins
        )
    }
}
