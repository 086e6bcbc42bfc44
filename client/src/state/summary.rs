//! Final-chapter summary derived from game progress and the message log.

#[cfg(test)]
#[path = "summary_test.rs"]
mod summary_test;

use slices::AggregateView;

use super::messages::{Message, SNAPSHOT_LEN, recent};
use super::progress::{GAME_COUNT, HeartProfile};
use super::site::{MessageSlice, ProgressSlice};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FinalSummary {
    pub memory: bool,
    pub lock: bool,
    pub roulette: Option<String>,
    pub heart: Option<HeartProfile>,
    pub completed: usize,
    pub total: usize,
    pub recent_messages: Vec<Message>,
}

impl FinalSummary {
    /// Score line, e.g. `2 / 4`.
    #[must_use]
    pub fn score(&self) -> String {
        format!("{} / {}", self.completed, self.total)
    }
}

pub struct SummaryView<'a> {
    pub progress: &'a ProgressSlice,
    pub messages: &'a MessageSlice,
}

impl AggregateView for SummaryView<'_> {
    type Summary = FinalSummary;

    fn compute(&self) -> FinalSummary {
        let progress = self.progress.reload();
        let log = self.messages.reload();
        FinalSummary {
            memory: progress.memory,
            lock: progress.lock,
            roulette: progress.roulette_result().map(str::to_owned),
            completed: progress.completed_count(),
            total: GAME_COUNT,
            heart: progress.heart,
            recent_messages: recent(&log, SNAPSHOT_LEN).to_vec(),
        }
    }
}
