//! Three-question lock.
//!
//! Answers are compared trimmed and case-insensitively. A wrong submission
//! never says which answer failed.

#[cfg(test)]
#[path = "lock_test.rs"]
mod lock_test;

use crate::content;
use crate::state::site::SiteSlices;
use crate::state::ui::UiState;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LockQuestion {
    pub prompt: &'static str,
    pub answer: &'static str,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LockVerdict {
    Open,
    Retry,
}

impl LockVerdict {
    #[must_use]
    pub fn message(self) -> &'static str {
        match self {
            Self::Open => content::LOCK_OPEN_MESSAGE,
            Self::Retry => content::LOCK_RETRY_MESSAGE,
        }
    }
}

fn normalize(s: &str) -> String {
    s.trim().to_lowercase()
}

/// Compare every answer; missing answers count as wrong.
#[must_use]
pub fn check_answers(questions: &[LockQuestion], answers: &[String]) -> LockVerdict {
    let all_correct = answers.len() >= questions.len()
        && questions
            .iter()
            .zip(answers)
            .all(|(q, a)| normalize(a) == normalize(q.answer));
    if all_correct { LockVerdict::Open } else { LockVerdict::Retry }
}

/// Check a submission and record the unlock. A retry writes nothing, to
/// `ui` or to storage.
pub fn submit(questions: &[LockQuestion], answers: &[String], ui: &mut UiState, site: &SiteSlices) -> LockVerdict {
    let verdict = check_answers(questions, answers);
    if verdict == LockVerdict::Open {
        ui.update_progress(site, |p| p.lock = true);
    }
    verdict
}
