use std::rc::Rc;

use slices::{KeyedStore, MemoryStore, Namespaced};

use super::*;

fn open() -> (Rc<MemoryStore>, SiteSlices) {
    let raw = Rc::new(MemoryStore::new());
    let store: Rc<dyn KeyedStore> = Rc::new(Namespaced::new(raw.clone(), NAMESPACE));
    (raw, SiteSlices::open(store))
}

// =============================================================
// Defaults
// =============================================================

#[test]
fn empty_store_reads_defaults() {
    let (raw, site) = open();
    assert!(!site.unlocked.read());
    assert!(!site.playing.read());
    assert_eq!(site.tab.read(), ActiveTab::Home);
    assert_eq!(site.audio.read(), None);
    assert!(site.photos.read().is_empty());
    assert_eq!(site.progress.read(), GameProgress::default());
    assert_eq!(site.messages.read(), welcome_log());
    assert!(raw.is_empty());
}

#[test]
fn open_default_without_browser_renders_defaults() {
    let site = SiteSlices::open_default();
    assert!(!site.unlocked.read());
    assert_eq!(site.tab.read(), ActiveTab::Home);
}

// =============================================================
// Key layout
// =============================================================

#[test]
fn writes_land_under_namespace() {
    let (raw, site) = open();
    site.unlocked.write(true);
    site.tab.write(ActiveTab::Messages);

    assert_eq!(raw.get("keepsake:unlock-flag").as_deref(), Some("true"));
    assert_eq!(raw.get("keepsake:active-tab").as_deref(), Some("messages"));
}

#[test]
fn foreign_keys_are_untouched() {
    let (raw, site) = open();
    raw.set("other-app", "keep me").expect("seed");
    site.progress.update(|p| p.memory = true);
    site.reset_all();
    assert_eq!(raw.get("other-app").as_deref(), Some("keep me"));
}

#[test]
fn corrupt_entries_reset_only_their_slice() {
    let (raw, site) = open();
    raw.set("keepsake:photo-list", "{not json").expect("seed");
    raw.set("keepsake:unlock-flag", "true").expect("seed");
    raw.set("keepsake:active-tab", "attic").expect("seed");

    assert!(site.photos.read().is_empty());
    assert_eq!(site.tab.read(), ActiveTab::Home);
    assert!(site.unlocked.read());
}

#[test]
fn clearing_audio_removes_key() {
    let (raw, site) = open();
    site.audio.write(Some("data:audio/mpeg;base64,AA".to_owned()));
    assert!(raw.get("keepsake:audio-override").is_some());
    site.audio.write(None);
    assert_eq!(raw.get("keepsake:audio-override"), None);
}

// =============================================================
// Reset
// =============================================================

#[test]
fn reset_all_restores_every_default() {
    let (raw, site) = open();
    site.unlocked.write(true);
    site.playing.write(true);
    site.tab.write(ActiveTab::Final);
    site.audio.write(Some("data:audio/mpeg;base64,AA".to_owned()));
    site.photos.write(vec!["data:image/jpeg;base64,AA".to_owned()]);
    site.progress.update(|p| p.lock = true);
    site.messages.update(|log| {
        crate::state::messages::post(log, "hi", 10);
    });

    site.reset_all();

    assert!(raw.is_empty());
    assert!(!site.unlocked.read());
    assert!(!site.playing.read());
    assert_eq!(site.tab.read(), ActiveTab::Home);
    assert_eq!(site.audio.read(), None);
    assert!(site.photos.read().is_empty());
    assert_eq!(site.progress.read(), GameProgress::default());
    assert_eq!(site.messages.read(), welcome_log());
}

#[test]
fn quota_failure_keeps_session_value() {
    let raw = Rc::new(MemoryStore::with_quota(64));
    let site = SiteSlices::open(Rc::new(Namespaced::new(raw.clone(), NAMESPACE)));
    site.photos.write(vec![format!("data:image/jpeg;base64,{}", "A".repeat(256))]);

    assert_eq!(site.photos.read().len(), 1);
    assert!(!site.photos.is_persisted());
    assert_eq!(raw.get("keepsake:photo-list"), None);
}
