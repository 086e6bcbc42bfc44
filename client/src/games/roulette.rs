//! Blessing roulette: spin, wait, land on one option uniformly.

#[cfg(test)]
#[path = "roulette_test.rs"]
mod roulette_test;

use std::time::Duration;

use crate::util::random::{self, RandomSource};

/// How long the wheel spins before landing.
pub const SPIN_DELAY: Duration = Duration::from_millis(1200);

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Roulette {
    spinning: bool,
    result: Option<String>,
}

impl Roulette {
    /// Start from a previously stored result.
    #[must_use]
    pub fn restore(result: Option<String>) -> Self {
        Self { spinning: false, result }
    }

    #[must_use]
    pub fn is_spinning(&self) -> bool {
        self.spinning
    }

    #[must_use]
    pub fn result(&self) -> Option<&str> {
        self.result.as_deref()
    }

    /// Start spinning. Returns the delay before [`Self::land`], or `None` when
    /// already spinning.
    pub fn spin(&mut self) -> Option<Duration> {
        if self.spinning {
            return None;
        }
        self.spinning = true;
        Some(SPIN_DELAY)
    }

    /// Stop and draw a result. `None` when not spinning or `options` is empty.
    pub fn land(&mut self, options: &[&str], rng: &mut dyn RandomSource) -> Option<String> {
        if !self.spinning {
            return None;
        }
        let result = draw(options, rng);
        self.settle(result.clone());
        result
    }

    /// Stop spinning and show `result`. `None` keeps the previous result.
    pub fn settle(&mut self, result: Option<String>) {
        self.spinning = false;
        if result.is_some() {
            self.result = result;
        }
    }
}

/// Uniform draw from `options`; `None` when empty.
pub fn draw(options: &[&str], rng: &mut dyn RandomSource) -> Option<String> {
    random::pick(options, rng).map(|s| (*s).to_owned())
}
