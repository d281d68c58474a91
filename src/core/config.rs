//! Game configuration.
//!
//! `GameConfig` bundles the card catalog with every timing constant the
//! session and search layers schedule against. It defaults to the classic
//! six-face board and can be loaded from JSON, with durations written as
//! whole milliseconds:
//!
//! ```
//! use memory_match::core::GameConfig;
//!
//! let config = GameConfig::from_json(r#"{ "resolution_delay": 500 }"#).unwrap();
//! assert_eq!(config.resolution_delay.as_millis(), 500);
//! assert_eq!(config.faces.len(), 6);
//! ```

use std::time::Duration;

use serde::{Deserialize, Serialize};

use super::error::Result;
use crate::cards::{CardFace, FaceValue};

/// Session and search timing plus the card catalog.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Faces dealt into the deck, each twice.
    pub faces: Vec<CardFace>,

    /// Pause after the second card of a pair is revealed before the pair
    /// is either kept face-up or flipped back.
    #[serde(with = "millis")]
    pub resolution_delay: Duration,

    /// How long the "+N coins" banner stays up after a match.
    #[serde(with = "millis")]
    pub reward_banner_duration: Duration,

    /// Quiet window for debounced search input.
    #[serde(with = "millis")]
    pub debounce_window: Duration,

    /// Simulated lookup time before search results are published.
    #[serde(with = "millis")]
    pub search_latency: Duration,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            faces: classic_faces(),
            resolution_delay: Duration::from_millis(1000),
            reward_banner_duration: Duration::from_millis(1500),
            debounce_window: Duration::from_millis(300),
            search_latency: Duration::from_millis(300),
        }
    }
}

impl GameConfig {
    /// Replace the card catalog.
    #[must_use]
    pub fn with_faces(mut self, faces: Vec<CardFace>) -> Self {
        self.faces = faces;
        self
    }

    /// Set the resolution delay.
    #[must_use]
    pub fn with_resolution_delay(mut self, delay: Duration) -> Self {
        self.resolution_delay = delay;
        self
    }

    /// Set how long the reward banner is shown.
    #[must_use]
    pub fn with_reward_banner_duration(mut self, duration: Duration) -> Self {
        self.reward_banner_duration = duration;
        self
    }

    /// Set the debounce quiet window.
    #[must_use]
    pub fn with_debounce_window(mut self, window: Duration) -> Self {
        self.debounce_window = window;
        self
    }

    /// Set the simulated search latency.
    #[must_use]
    pub fn with_search_latency(mut self, latency: Duration) -> Self {
        self.search_latency = latency;
        self
    }

    /// Look up a catalog face by value.
    #[must_use]
    pub fn face(&self, value: FaceValue) -> Option<&CardFace> {
        self.faces.iter().find(|f| f.value == value)
    }

    /// Parse a config from JSON. Missing fields take their defaults.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Serialize to pretty JSON.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

/// The six-face board: `A`..`F` worth 5 to 30 coins.
#[must_use]
pub fn classic_faces() -> Vec<CardFace> {
    ('A'..='F')
        .zip(1u32..)
        .map(|(symbol, n)| CardFace::new(FaceValue::new(symbol), format!("g{n}.svg"), n * 5))
        .collect()
}

mod millis {
    use std::time::Duration;

    use serde::ser::Error;
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(value: &Duration, serializer: S) -> Result<S::Ok, S::Error> {
        let millis = u64::try_from(value.as_millis())
            .map_err(|_| S::Error::custom(format!("{value:?} does not fit in u64 milliseconds")))?;
        serializer.serialize_u64(millis)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Duration, D::Error> {
        u64::deserialize(deserializer).map(Duration::from_millis)
    }
}
