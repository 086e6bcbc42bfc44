//! Birthday roulette panel.

#[cfg(test)]
#[path = "roulette_wheel_test.rs"]
mod roulette_wheel_test;

use leptos::prelude::*;

use crate::content;
use crate::games::roulette::{self, Roulette};
use crate::state::site::with_site;
use crate::state::ui::UiState;
use crate::util::random::{self, RandomSource};
use crate::util::timer;

/// Draw the blessing and stop the wheel. The draw does not go through the
/// wheel signal, so a spin that outlives its panel still lands.
fn finish_spin(wheel: RwSignal<Roulette>, options: &[&str], rng: &mut dyn RandomSource) -> Option<String> {
    let result = roulette::draw(options, rng);
    let _ = wheel.try_update(|w| w.settle(result.clone()));
    result
}

#[component]
pub fn RouletteWheel() -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();
    let wheel = RwSignal::new(Roulette::restore(ui.with_untracked(|u| u.progress.roulette_result().map(str::to_owned))));

    let on_spin = move |_| {
        let Some(delay) = wheel.try_update(Roulette::spin).flatten() else {
            return;
        };
        timer::after(delay, move || {
            if let Some(result) = finish_spin(wheel, &content::ROULETTE_OPTIONS, &mut random::session_rng()) {
                ui.update(|u| with_site(|site| u.update_progress(site, |p| p.roulette = Some(result))));
            }
        });
    };

    let face = move || {
        wheel.with(|w| {
            if w.is_spinning() {
                "...".to_owned()
            } else {
                w.result().unwrap_or("Spin").to_owned()
            }
        })
    };

    view! {
        <div class="game roulette">
            <div class="game__header">
                <h4>"Birthday Roulette（生日转盘）"</h4>
                <span class="game__status">
                    {move || if wheel.with(|w| w.result().is_some()) { "Result ready" } else { "Spin it" }}
                </span>
            </div>
            <div class="roulette__body">
                <div class="roulette__wheel" class:roulette__wheel--spinning=move || wheel.with(Roulette::is_spinning)>
                    {face}
                </div>
                <div>
                    <button class="btn btn--primary" on:click=on_spin>"旋转"</button>
                    {move || {
                        wheel
                            .with(|w| w.result().map(str::to_owned))
                            .map(|r| view! { <p class="game__message">{format!("签文：{r}")}</p> })
                    }}
                </div>
            </div>
        </div>
    }
}
