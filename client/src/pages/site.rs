//! Top-level page: restore state, then show the gate or the unlocked site.

use leptos::prelude::*;
use leptos_router::hooks::use_query_map;

use crate::components::audio_dock::AudioDock;
use crate::components::header::Header;
use crate::pages::{
    album::AlbumPage, finale::FinalePage, games::GamesPage, gate::GatePage, home::HomePage,
    messages::MessagesPage,
};
use crate::state::session::{ActiveTab, LaunchOverrides};
use crate::state::site::with_site;
use crate::state::ui::UiState;

#[component]
pub fn SitePage() -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();
    let query = use_query_map();

    // Effects only run in the browser, so the server and the first client
    // render agree on the not-ready placeholder.
    Effect::new(move || {
        let (dev, tab) = query.with_untracked(|q| (q.get("dev"), q.get("tab")));
        let overrides = LaunchOverrides::from_params(dev.as_deref(), tab.as_deref());
        ui.set(with_site(|site| UiState::restore(site, overrides)));
    });

    let ready = Memo::new(move |_| ui.with(|u| u.ready));
    let unlocked = Memo::new(move |_| ui.with(|u| u.unlocked));
    let tab = Memo::new(move |_| ui.with(|u| u.tab));

    view! {
        <div class="site">
            <Show when=move || ready.get() fallback=|| view! { <div class="site__loading">"…"</div> }>
                <Show when=move || unlocked.get() fallback=|| view! { <GatePage/> }>
                    <Header/>
                    <main class="site__main">
                        {move || match tab.get() {
                            ActiveTab::Home => view! { <HomePage/> }.into_any(),
                            ActiveTab::Memories => view! { <AlbumPage/> }.into_any(),
                            ActiveTab::Games => view! { <GamesPage/> }.into_any(),
                            ActiveTab::Messages => view! { <MessagesPage/> }.into_any(),
                            ActiveTab::Final => view! { <FinalePage/> }.into_any(),
                        }}
                    </main>
                    <AudioDock/>
                </Show>
            </Show>
        </div>
    }
}
