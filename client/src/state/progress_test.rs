use slices::{Codec, JsonCodec};

use super::*;

fn decode(raw: &str) -> GameProgress {
    JsonCodec::<GameProgress>::new().decode_or(Some(raw), GameProgress::default())
}

fn profile() -> HeartProfile {
    HeartProfile {
        answers: ["海边".to_owned(), "安静倾听".to_owned(), "真诚".to_owned(), "吃饭".to_owned(), "加油".to_owned()],
        summary: "Your answers show a heart that values 真诚 and memories.".to_owned(),
    }
}

// =============================================================
// GameProgress defaults and scoring
// =============================================================

#[test]
fn default_progress_is_empty() {
    let p = GameProgress::default();
    assert!(!p.memory);
    assert!(!p.lock);
    assert_eq!(p.roulette, None);
    assert_eq!(p.heart, None);
    assert_eq!(p.completed_count(), 0);
}

#[test]
fn memory_and_lock_only_counts_two() {
    let p = GameProgress { memory: true, lock: true, roulette: None, heart: None };
    assert_eq!(p.completed_count(), 2);
}

#[test]
fn all_games_count_four() {
    let p = GameProgress {
        memory: true,
        lock: true,
        roulette: Some("友情值 +1025！".to_owned()),
        heart: Some(profile()),
    };
    assert_eq!(p.completed_count(), GAME_COUNT);
}

#[test]
fn empty_roulette_result_does_not_count() {
    let p = GameProgress { roulette: Some(String::new()), ..GameProgress::default() };
    assert_eq!(p.roulette_result(), None);
    assert_eq!(p.completed_count(), 0);
}

// =============================================================
// Lenient decoding
// =============================================================

#[test]
fn round_trips_through_json() {
    let p = GameProgress { memory: true, lock: false, roulette: Some("新的篇章".to_owned()), heart: Some(profile()) };
    let raw = JsonCodec::<GameProgress>::new().encode(&p).expect("encode").expect("payload");
    assert_eq!(decode(&raw), p);
}

#[test]
fn missing_fields_default_to_not_completed() {
    assert_eq!(decode(r#"{"lock":true}"#), GameProgress { lock: true, ..GameProgress::default() });
    assert_eq!(decode("{}"), GameProgress::default());
}

#[test]
fn legacy_numeric_roulette_is_ignored_without_losing_flags() {
    let p = decode(r#"{"memory":true,"lock":true,"roulette":0,"heart":null}"#);
    assert!(p.memory);
    assert!(p.lock);
    assert_eq!(p.roulette, None);
    assert_eq!(p.completed_count(), 2);
}

#[test]
fn malformed_heart_falls_back_alone() {
    let p = decode(r#"{"memory":true,"heart":{"answers":["only one"],"summary":"x"}}"#);
    assert!(p.memory);
    assert_eq!(p.heart, None);
}

#[test]
fn non_boolean_flags_read_as_false() {
    let p = decode(r#"{"memory":"yes","lock":1}"#);
    assert!(!p.memory);
    assert!(!p.lock);
}

#[test]
fn non_object_record_falls_back_to_default() {
    assert_eq!(decode("42"), GameProgress::default());
    assert_eq!(decode("garbage"), GameProgress::default());
}
