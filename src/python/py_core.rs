//! Core type bindings for Python.

use std::time::Duration;

use pyo3::prelude::*;

use crate::core::GameConfig;
use crate::game::FlipOutcome;

/// Python wrapper for GameConfig.
#[pyclass(name = "GameConfig")]
#[derive(Clone, Debug)]
pub struct PyGameConfig(pub GameConfig);

#[pymethods]
impl PyGameConfig {
    /// Create a config on the classic six-face board.
    ///
    /// # Arguments
    /// - resolution_delay_ms: Pause before a revealed pair is cleared (default: 1000)
    /// - reward_banner_ms: How long the coin banner stays up (default: 1500)
    #[new]
    #[pyo3(signature = (resolution_delay_ms = 1000, reward_banner_ms = 1500))]
    fn new(resolution_delay_ms: u64, reward_banner_ms: u64) -> Self {
        Self(
            GameConfig::default()
                .with_resolution_delay(Duration::from_millis(resolution_delay_ms))
                .with_reward_banner_duration(Duration::from_millis(reward_banner_ms)),
        )
    }

    /// Parse a config from JSON.
    #[staticmethod]
    fn from_json(json: &str) -> PyResult<Self> {
        GameConfig::from_json(json)
            .map(Self)
            .map_err(|e| PyErr::new::<pyo3::exceptions::PyValueError, _>(e.to_string()))
    }

    /// Serialize to JSON.
    fn to_json(&self) -> PyResult<String> {
        self.0
            .to_json()
            .map_err(|e| PyErr::new::<pyo3::exceptions::PyValueError, _>(e.to_string()))
    }

    #[getter]
    fn pair_count(&self) -> usize {
        self.0.faces.len()
    }

    fn __repr__(&self) -> String {
        format!(
            "GameConfig(pairs={}, resolution_delay_ms={})",
            self.0.faces.len(),
            self.0.resolution_delay.as_millis()
        )
    }
}

/// Python wrapper for FlipOutcome.
#[pyclass(name = "FlipOutcome")]
#[derive(Clone, Debug)]
pub struct PyFlipOutcome(pub FlipOutcome);

#[pymethods]
impl PyFlipOutcome {
    /// One of "ignored", "revealed", "matched", "mismatched".
    #[getter]
    fn kind(&self) -> &'static str {
        match self.0 {
            FlipOutcome::Ignored => "ignored",
            FlipOutcome::Revealed { .. } => "revealed",
            FlipOutcome::Matched { .. } => "matched",
            FlipOutcome::Mismatched { .. } => "mismatched",
        }
    }

    /// Coins earned by this flip (0 unless it completed a match).
    #[getter]
    fn reward(&self) -> u32 {
        match self.0 {
            FlipOutcome::Matched { reward, .. } => reward,
            _ => 0,
        }
    }

    /// Whether this flip finished the board.
    #[getter]
    fn completed(&self) -> bool {
        matches!(self.0, FlipOutcome::Matched { completed: true, .. })
    }

    fn __repr__(&self) -> String {
        format!("{:?}", self.0)
    }

    fn __eq__(&self, other: &Self) -> bool {
        self.0 == other.0
    }
}
