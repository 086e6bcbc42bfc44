//! Five-question heart survey.

#[cfg(test)]
#[path = "survey_test.rs"]
mod survey_test;

use crate::state::progress::HeartProfile;

/// Used when the third answer is blank.
pub const FALLBACK_VALUE: &str = "companionship";

/// One-line synthesis built around the third answer.
#[must_use]
pub fn synthesize(answers: &[String; 5]) -> String {
    let value = answers[2].trim();
    let value = if value.is_empty() { FALLBACK_VALUE } else { value };
    format!("Your answers show a heart that values {value} and memories.")
}

#[must_use]
pub fn build_profile(answers: [String; 5]) -> HeartProfile {
    let summary = synthesize(&answers);
    HeartProfile { answers, summary }
}

/// Answers to pre-fill the form with.
#[must_use]
pub fn restore(profile: Option<&HeartProfile>) -> [String; 5] {
    profile.map(|p| p.answers.clone()).unwrap_or_default()
}
