//! Memory pairing game.
//!
//! DESIGN
//! ======
//! States: `Idle` -> `OneSelected` -> `Checking` -> back to `Idle`, or to
//! `Resolved` once every pair is matched. The second selection returns the
//! delay the caller waits before calling [`PairingGame::resolve`]; input is
//! ignored while checking so a fast third click cannot break a pair apart.
//! Completion is reported by exactly one `resolve` call per deal.

#[cfg(test)]
#[path = "pairing_test.rs"]
mod pairing_test;

use std::time::Duration;

use crate::util::random::{self, RandomSource};

/// Pause before a matched pair locks in.
pub const MATCH_DELAY: Duration = Duration::from_millis(600);

/// Pause before a mismatched pair flips back.
pub const MISMATCH_DELAY: Duration = Duration::from_millis(800);

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Card {
    pub icon: &'static str,
    pub matched: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    Idle,
    OneSelected(usize),
    Checking { first: usize, second: usize },
    Resolved,
}

/// Result of a timed check.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Outcome {
    Match,
    Mismatch,
    /// The last pair matched; the deal is complete.
    Complete,
}

#[derive(Clone, Debug)]
pub struct PairingGame {
    icons: Vec<&'static str>,
    cards: Vec<Card>,
    phase: Phase,
    matches: usize,
    round: u32,
}

impl PairingGame {
    /// Deal every icon twice in shuffled order.
    pub fn deal(icons: &[&'static str], rng: &mut dyn RandomSource) -> Self {
        let mut game = Self { icons: icons.to_vec(), cards: Vec::new(), phase: Phase::Idle, matches: 0, round: 0 };
        game.reset(rng);
        game
    }

    /// Reshuffle a fresh deal.
    pub fn reset(&mut self, rng: &mut dyn RandomSource) {
        let mut cards: Vec<Card> = self
            .icons
            .iter()
            .chain(self.icons.iter())
            .map(|&icon| Card { icon, matched: false })
            .collect();
        random::shuffle(&mut cards, rng);
        self.cards = cards;
        self.phase = if self.icons.is_empty() { Phase::Resolved } else { Phase::Idle };
        self.matches = 0;
        self.round = self.round.wrapping_add(1);
    }

    /// Changes on every deal; lets a delayed resolve detect that the deal it
    /// was scheduled for has been replaced.
    #[must_use]
    pub fn round(&self) -> u32 {
        self.round
    }

    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    #[must_use]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    #[must_use]
    pub fn matches(&self) -> usize {
        self.matches
    }

    #[must_use]
    pub fn pairs(&self) -> usize {
        self.icons.len()
    }

    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.phase == Phase::Resolved
    }

    /// Whether card `index` is face up.
    #[must_use]
    pub fn is_revealed(&self, index: usize) -> bool {
        let selected = match self.phase {
            Phase::OneSelected(a) => a == index,
            Phase::Checking { first, second } => first == index || second == index,
            Phase::Idle | Phase::Resolved => false,
        };
        selected || self.cards.get(index).is_some_and(|c| c.matched)
    }

    /// Flip card `index`. Returns the delay before [`Self::resolve`] when this
    /// was the second card of a pair; `None` when the click was ignored or
    /// only the first card is up.
    pub fn select(&mut self, index: usize) -> Option<Duration> {
        if self.cards.get(index).is_none_or(|c| c.matched) {
            return None;
        }
        match self.phase {
            Phase::Idle => {
                self.phase = Phase::OneSelected(index);
                None
            }
            Phase::OneSelected(first) if first != index => {
                self.phase = Phase::Checking { first, second: index };
                Some(if self.cards[first].icon == self.cards[index].icon {
                    MATCH_DELAY
                } else {
                    MISMATCH_DELAY
                })
            }
            Phase::OneSelected(_) | Phase::Checking { .. } | Phase::Resolved => None,
        }
    }

    /// Settle the pending check. `None` when nothing was being checked.
    pub fn resolve(&mut self) -> Option<Outcome> {
        let Phase::Checking { first, second } = self.phase else {
            return None;
        };
        if self.cards[first].icon != self.cards[second].icon {
            self.phase = Phase::Idle;
            return Some(Outcome::Mismatch);
        }
        self.cards[first].matched = true;
        self.cards[second].matched = true;
        self.matches += 1;
        if self.matches == self.pairs() {
            self.phase = Phase::Resolved;
            Some(Outcome::Complete)
        } else {
            self.phase = Phase::Idle;
            Some(Outcome::Match)
        }
    }
}
