//! Final chapter: score, last results, message snapshot and closing note.

#[cfg(test)]
#[path = "finale_test.rs"]
mod finale_test;

use leptos::prelude::*;
use slices::AggregateView;

use crate::content;
use crate::state::site::with_site;
use crate::state::summary::{FinalSummary, SummaryView};
use crate::state::ui::UiState;

fn memory_line(summary: &FinalSummary) -> &'static str {
    if summary.memory {
        "You completed the memory match — our photos are pieced back together."
    } else {
        "Some memories waiting to be found."
    }
}

fn lock_line(summary: &FinalSummary) -> &'static str {
    if summary.lock { "The past has been unlocked." } else { "Answer the lock to reveal more." }
}

#[component]
pub fn FinalePage() -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();
    let summary =
        with_site(|site| SummaryView { progress: &site.progress, messages: &site.messages }.compute());

    let on_top = move |_| {
        #[cfg(feature = "hydrate")]
        {
            if let Some(window) = web_sys::window() {
                window.scroll_to_with_x_and_y(0.0, 0.0);
            }
        }
    };

    let on_reset = move |_| {
        ui.update(|u| with_site(|site| u.reset(site)));
    };

    let roulette = summary.roulette.clone();
    let heart = summary.heart.as_ref().map(|h| h.summary.clone());

    view! {
        <section class="panel finale">
            <h3 class="finale__title">{content::FINAL_TITLE}</h3>
            <p class="panel__lead">{content::FINAL_SUBTITLE}</p>
            <div class="finale__cards">
                <div class="card">
                    <h4>"Moments We Shared"</h4>
                    <p>{memory_line(&summary)}</p>
                    <p>{lock_line(&summary)}</p>
                    {roulette.map(|r| view! { <p>{format!("Last roulette: {r}")}</p> })}
                    {heart.map(|h| view! { <p>{h}</p> })}
                </div>
                <div class="card">
                    <h4>"What You’ve Solved"</h4>
                    <p>"Detective Score"</p>
                    <div class="finale__score">{summary.score()}</div>
                    <p>"Based on the mini-games you completed."</p>
                </div>
            </div>
            <div class="card finale__snapshot">
                <h4>"Messages Snapshot"</h4>
                {summary
                    .recent_messages
                    .iter()
                    .map(|m| {
                        view! {
                            <div class="finale__message">
                                <strong>{m.author.clone()}</strong>
                                ": "
                                {m.text.clone()}
                            </div>
                        }
                    })
                    .collect_view()}
            </div>
            <div class="card finale__note">
                <h4>"Final Note"</h4>
                <p>{format!("To detective {} —", content::HERO_NAME)}</p>
                <p class="finale__letter">{content::FINAL_NOTE}</p>
                <p class="finale__signature">{format!("— from your best friend, {}", content::AUTHOR_NAME)}</p>
            </div>
            <div class="finale__actions">
                <button class="btn" on:click=on_top>"Back to Top"</button>
                <button class="btn btn--danger" on:click=on_reset>"Start Over"</button>
            </div>
        </section>
    }
}
