//! The site's persisted state bundle.
//!
//! SYSTEM CONTEXT
//! ==============
//! `SiteSlices` owns one [`PersistedSlice`] per persisted entity. One bundle
//! exists per thread (the browser has exactly one) and views reach it through
//! [`with_site`]; each view reads and writes only the slices it owns. Values
//! that drive re-rendering are mirrored into `UiState` signals.
//!
//! DESIGN
//! ======
//! Every key lives under the [`NAMESPACE`] prefix so the site never touches
//! foreign `localStorage` entries. Server rendering has no browser storage,
//! so it runs against an in-memory store and always renders defaults.

#[cfg(test)]
#[path = "site_test.rs"]
mod site_test;

use std::rc::Rc;

use slices::{JsonCodec, KeyedStore, Namespaced, OptionalTextCodec, PersistedSlice, TextCodec};

use super::album::checked_photos;
use super::messages::{Message, checked_log, welcome_log};
use super::progress::GameProgress;
use super::session::ActiveTab;

pub const NAMESPACE: &str = "keepsake";

pub const KEY_UNLOCKED: &str = "unlock-flag";
pub const KEY_PLAYING: &str = "playing-flag";
pub const KEY_TAB: &str = "active-tab";
pub const KEY_AUDIO: &str = "audio-override";
pub const KEY_PHOTOS: &str = "photo-list";
pub const KEY_PROGRESS: &str = "game-progress";
pub const KEY_MESSAGES: &str = "message-log";

thread_local! {
    static SITE: SiteSlices = SiteSlices::open_default();
}

/// Run `f` against this thread's bundle.
pub fn with_site<R>(f: impl FnOnce(&SiteSlices) -> R) -> R {
    SITE.with(f)
}

pub type FlagSlice = PersistedSlice<bool, TextCodec<bool>>;
pub type TabSlice = PersistedSlice<ActiveTab, TextCodec<ActiveTab>>;
pub type AudioSlice = PersistedSlice<Option<String>, OptionalTextCodec>;
pub type PhotoSlice = PersistedSlice<Vec<String>, JsonCodec<Vec<String>>>;
pub type ProgressSlice = PersistedSlice<GameProgress, JsonCodec<GameProgress>>;
pub type MessageSlice = PersistedSlice<Vec<Message>, JsonCodec<Vec<Message>>>;

#[derive(Debug)]
pub struct SiteSlices {
    pub unlocked: FlagSlice,
    pub playing: FlagSlice,
    pub tab: TabSlice,
    pub audio: AudioSlice,
    pub photos: PhotoSlice,
    pub progress: ProgressSlice,
    pub messages: MessageSlice,
}

impl SiteSlices {
    /// Bind every slice to `store`. Nothing is read until first access.
    pub fn open(store: Rc<dyn KeyedStore>) -> Self {
        Self {
            unlocked: PersistedSlice::new(store.clone(), KEY_UNLOCKED, false, TextCodec::new()),
            playing: PersistedSlice::new(store.clone(), KEY_PLAYING, false, TextCodec::new()),
            tab: PersistedSlice::new(store.clone(), KEY_TAB, ActiveTab::Home, TextCodec::new()),
            audio: PersistedSlice::new(store.clone(), KEY_AUDIO, None, OptionalTextCodec),
            photos: PersistedSlice::new(
                store.clone(),
                KEY_PHOTOS,
                Vec::new(),
                JsonCodec::new().with_shape(checked_photos),
            ),
            progress: PersistedSlice::new(store.clone(), KEY_PROGRESS, GameProgress::default(), JsonCodec::new()),
            messages: PersistedSlice::new(store, KEY_MESSAGES, welcome_log(), JsonCodec::new().with_shape(checked_log)),
        }
    }

    /// Browser `localStorage` under [`NAMESPACE`] when hydrated, otherwise an
    /// in-memory store.
    pub fn open_default() -> Self {
        #[cfg(feature = "hydrate")]
        let store: Rc<dyn KeyedStore> =
            Rc::new(Namespaced::new(crate::util::browser_store::BrowserStore, NAMESPACE));
        #[cfg(not(feature = "hydrate"))]
        let store: Rc<dyn KeyedStore> = Rc::new(Namespaced::new(slices::MemoryStore::new(), NAMESPACE));
        Self::open(store)
    }

    /// Remove every key; each slice returns to its default.
    pub fn reset_all(&self) {
        self.unlocked.reset();
        self.playing.reset();
        self.tab.reset();
        self.audio.reset();
        self.photos.reset();
        self.progress.reset();
        self.messages.reset();
        log::info!("site state reset to defaults");
    }
}
