//! Seedable randomness for shuffles and draws.
//!
//! DESIGN
//! ======
//! Games depend on the small [`RandomSource`] trait instead of a concrete
//! generator so tests can inject scripted or seeded sources. Every `rand`
//! generator implements it through the blanket impl.

#[cfg(test)]
#[path = "random_test.rs"]
mod random_test;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::util::clock;

pub trait RandomSource {
    /// Uniform index in `0..len`. `len` must be non-zero.
    fn pick_index(&mut self, len: usize) -> usize;
}

impl<R: Rng + ?Sized> RandomSource for R {
    fn pick_index(&mut self, len: usize) -> usize {
        self.random_range(0..len)
    }
}

/// Uniformly pick one item, or `None` for an empty slice.
pub fn pick<'a, T>(items: &'a [T], rng: &mut dyn RandomSource) -> Option<&'a T> {
    if items.is_empty() {
        return None;
    }
    items.get(rng.pick_index(items.len()))
}

/// Fisher-Yates shuffle in place.
pub fn shuffle<T>(items: &mut [T], rng: &mut dyn RandomSource) {
    for i in (1..items.len()).rev() {
        let j = rng.pick_index(i + 1);
        items.swap(i, j);
    }
}

/// Generator for the current session, seeded from the clock.
pub fn session_rng() -> StdRng {
    StdRng::seed_from_u64(clock::now_millis())
}
