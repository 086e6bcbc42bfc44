//! Site header with greeting and tab navigation.

use leptos::prelude::*;

use crate::content;
use crate::state::session::ActiveTab;
use crate::state::site::with_site;
use crate::state::ui::UiState;

#[component]
pub fn Header() -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();

    view! {
        <header class="header">
            <div>
                <h2 class="header__title">"Happy 22, " <span class="header__name">{content::HERO_NAME}</span></h2>
                <p class="header__byline">{format!("From your best friend {}", content::AUTHOR_NAME)}</p>
            </div>
            <nav class="header__nav">
                {ActiveTab::ALL
                    .into_iter()
                    .map(|tab| {
                        view! {
                            <button
                                class="btn header__tab"
                                class:header__tab--active=move || ui.with(|u| u.tab == tab)
                                on:click=move |_| ui.update(|u| with_site(|site| u.select_tab(site, tab)))
                            >
                                {tab.label()}
                            </button>
                        }
                    })
                    .collect_view()}
            </nav>
        </header>
    }
}
