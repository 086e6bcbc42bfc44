use super::*;

fn summary(memory: bool, lock: bool) -> FinalSummary {
    FinalSummary {
        memory,
        lock,
        roulette: None,
        heart: None,
        completed: usize::from(memory) + usize::from(lock),
        total: 4,
        recent_messages: Vec::new(),
    }
}

#[test]
fn lines_reflect_completion() {
    assert_eq!(memory_line(&summary(false, false)), "Some memories waiting to be found.");
    assert!(memory_line(&summary(true, false)).starts_with("You completed"));
    assert_eq!(lock_line(&summary(false, true)), "The past has been unlocked.");
    assert_eq!(lock_line(&summary(true, false)), "Answer the lock to reveal more.");
}
