use std::rc::Rc;

use slices::{KeyedStore, MemoryStore};

use super::*;
use crate::state::messages::{AUTHOR_USER, post, welcome_log};
use crate::state::site::SiteSlices;

fn site() -> (Rc<MemoryStore>, SiteSlices) {
    let raw = Rc::new(MemoryStore::new());
    (raw.clone(), SiteSlices::open(raw))
}

fn compute(site: &SiteSlices) -> FinalSummary {
    SummaryView { progress: &site.progress, messages: &site.messages }.compute()
}

// =============================================================
// Scoring
// =============================================================

#[test]
fn fresh_site_scores_zero() {
    let (_, site) = site();
    let summary = compute(&site);
    assert_eq!(summary.completed, 0);
    assert_eq!(summary.total, 4);
    assert_eq!(summary.score(), "0 / 4");
    assert_eq!(summary.recent_messages, welcome_log());
}

#[test]
fn memory_and_lock_score_two_of_four() {
    let (_, site) = site();
    site.progress.update(|p| {
        p.memory = true;
        p.lock = true;
    });
    let summary = compute(&site);
    assert!(summary.memory);
    assert!(summary.lock);
    assert_eq!(summary.roulette, None);
    assert_eq!(summary.heart, None);
    assert_eq!(summary.score(), "2 / 4");
}

// =============================================================
// Recompute and snapshot
// =============================================================

#[test]
fn snapshot_keeps_last_five_messages() {
    let (_, site) = site();
    site.messages.update(|log| {
        for (i, text) in ["a", "b", "c", "d", "e", "f"].into_iter().enumerate() {
            post(log, text, 100 + i as u64);
        }
    });
    let summary = compute(&site);
    let texts: Vec<&str> = summary.recent_messages.iter().map(|m| m.text.as_str()).collect();
    assert_eq!(texts, vec!["b", "c", "d", "e", "f"]);
    assert!(summary.recent_messages.iter().all(|m| m.author == AUTHOR_USER));
}

#[test]
fn picks_up_writes_from_another_tab() {
    let (raw, site) = site();
    assert_eq!(compute(&site).completed, 0);
    raw.set("game-progress", r#"{"memory":true,"roulette":"友情值 +1025！"}"#).expect("external write");
    let summary = compute(&site);
    assert_eq!(summary.completed, 2);
    assert_eq!(summary.roulette.as_deref(), Some("友情值 +1025！"));
}

#[test]
fn computing_never_writes() {
    let (raw, site) = site();
    let _ = compute(&site);
    let _ = compute(&site);
    assert!(raw.is_empty());
}
