//! Reactive session state shared by every view.
//!
//! DESIGN
//! ======
//! `UiState` lives in an `RwSignal` provided from `App`. Server rendering and
//! the first client render both see the default (not ready), so hydration
//! always matches; a client-only effect then calls [`UiState::restore`] with
//! the stored session and query-string overrides.

#[cfg(test)]
#[path = "ui_test.rs"]
mod ui_test;

use super::progress::GameProgress;
use super::session::{ActiveTab, LaunchOverrides};
use super::site::SiteSlices;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct UiState {
    /// False until stored state has been restored in the browser.
    pub ready: bool,
    pub unlocked: bool,
    pub tab: ActiveTab,
    pub progress: GameProgress,
}

impl UiState {
    /// Stored session combined with launch overrides. Overrides are not
    /// written back.
    #[must_use]
    pub fn restore(site: &SiteSlices, overrides: LaunchOverrides) -> Self {
        let (unlocked, tab) = overrides.apply(site.unlocked.read(), site.tab.read());
        Self { ready: true, unlocked, tab, progress: site.progress.read() }
    }

    pub fn unlock(&mut self, site: &SiteSlices) {
        self.unlocked = true;
        site.unlocked.write(true);
        log::info!("site unlocked");
    }

    pub fn select_tab(&mut self, site: &SiteSlices, tab: ActiveTab) {
        self.tab = tab;
        site.tab.write(tab);
    }

    /// Apply `f` to game progress and persist the result.
    pub fn update_progress(&mut self, site: &SiteSlices, f: impl FnOnce(&mut GameProgress)) {
        site.progress.update(f);
        self.progress = site.progress.read();
    }

    /// Clear every stored value and return to the defaults, gate included.
    pub fn reset(&mut self, site: &SiteSlices) {
        site.reset_all();
        *self = Self { ready: true, ..Self::default() };
    }
}
