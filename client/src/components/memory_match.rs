//! Memory pairing game panel.

#[cfg(test)]
#[path = "memory_match_test.rs"]
mod memory_match_test;

use leptos::prelude::*;

use crate::content;
use crate::games::pairing::{Outcome, PairingGame};
use crate::state::site::with_site;
use crate::state::ui::UiState;
use crate::util::{random, timer};

const HIDDEN_FACE: &str = "❔";

fn card_face(game: &PairingGame, index: usize) -> &'static str {
    match game.cards().get(index) {
        Some(card) if game.is_revealed(index) => card.icon,
        _ => HIDDEN_FACE,
    }
}

/// Settle the check started when `snapshot` was taken.
///
/// While the panel is mounted the live game resolves; a deal replaced in the
/// meantime yields `None`. Once the panel is gone its signal is disposed and
/// the snapshot resolves instead, so a completing pair is still reported.
fn finish_check(game: RwSignal<PairingGame>, mut snapshot: PairingGame) -> Option<Outcome> {
    let live = game.try_update(|g| if g.round() == snapshot.round() { g.resolve() } else { None });
    match live {
        Some(outcome) => outcome,
        None => snapshot.resolve(),
    }
}

#[component]
pub fn MemoryMatch() -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();
    let game = RwSignal::new(PairingGame::deal(&content::MEMORY_ICONS, &mut random::session_rng()));

    let on_pick = move |index: usize| {
        let Some((delay, snapshot)) = game.try_update(|g| g.select(index).map(|d| (d, g.clone()))).flatten() else {
            return;
        };
        timer::after(delay, move || {
            if finish_check(game, snapshot) == Some(Outcome::Complete) {
                ui.update(|u| with_site(|site| u.update_progress(site, |p| p.memory = true)));
                log::info!("memory match completed");
            }
        });
    };

    let on_reset = move |_| game.update(|g| g.reset(&mut random::session_rng()));

    view! {
        <div class="game memory">
            <div class="game__header">
                <h4>"Find Our Moments（九宫格配对）"</h4>
                <span class="game__status">
                    {move || if ui.with(|u| u.progress.memory) { "Completed" } else { "Try it!" }}
                </span>
            </div>
            <div class="memory__grid">
                {move || {
                    game.with(|g| {
                        (0..g.cards().len())
                            .map(|i| {
                                let matched = g.cards()[i].matched;
                                view! {
                                    <button
                                        class="memory__card"
                                        class:memory__card--matched=matched
                                        on:click=move |_| on_pick(i)
                                    >
                                        {card_face(g, i)}
                                    </button>
                                }
                            })
                            .collect_view()
                    })
                }}
            </div>
            <div class="game__footer">
                <button class="btn" on:click=on_reset>"Reset"</button>
                <span>{move || game.with(|g| format!("Matches: {} / {}", g.matches(), g.pairs()))}</span>
            </div>
            <Show when=move || game.with(PairingGame::is_complete)>
                <div class="game__banner">
                    {format!("You’ve pieced the past together, detective {}.", content::HERO_NAME)}
                </div>
            </Show>
        </div>
    }
}
