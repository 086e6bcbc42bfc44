//! Mini-game progress record.
//!
//! DESIGN
//! ======
//! Stored as one JSON object `{memory, lock, roulette, heart}`. Every field
//! decodes on its own: a missing or wrong-typed field falls back to "not
//! completed" without discarding the others, so older or hand-edited records
//! still load.

#[cfg(test)]
#[path = "progress_test.rs"]
mod progress_test;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer, Serialize};

/// Number of mini-games counted in the summary score.
pub const GAME_COUNT: usize = 4;

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameProgress {
    #[serde(deserialize_with = "lenient_flag")]
    pub memory: bool,
    #[serde(deserialize_with = "lenient_flag")]
    pub lock: bool,
    #[serde(deserialize_with = "lenient")]
    pub roulette: Option<String>,
    #[serde(deserialize_with = "lenient")]
    pub heart: Option<HeartProfile>,
}

/// Result of the five-question survey.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HeartProfile {
    pub answers: [String; 5],
    pub summary: String,
}

impl GameProgress {
    /// Last roulette result, ignoring empty strings.
    #[must_use]
    pub fn roulette_result(&self) -> Option<&str> {
        self.roulette.as_deref().filter(|r| !r.is_empty())
    }

    /// How many of the [`GAME_COUNT`] games are done.
    #[must_use]
    pub fn completed_count(&self) -> usize {
        [self.memory, self.lock, self.roulette_result().is_some(), self.heart.is_some()]
            .into_iter()
            .filter(|done| *done)
            .count()
    }
}

fn lenient_flag<'de, D: Deserializer<'de>>(d: D) -> Result<bool, D::Error> {
    Ok(matches!(serde_json::Value::deserialize(d)?, serde_json::Value::Bool(true)))
}

fn lenient<'de, D: Deserializer<'de>, T: DeserializeOwned>(d: D) -> Result<Option<T>, D::Error> {
    let value = serde_json::Value::deserialize(d)?;
    Ok(serde_json::from_value(value).ok())
}
