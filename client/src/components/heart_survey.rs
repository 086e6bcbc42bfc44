//! Five-question heart survey panel.

use leptos::prelude::*;

use crate::content;
use crate::games::survey;
use crate::state::site::with_site;
use crate::state::ui::UiState;

#[component]
pub fn HeartSurvey() -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();
    let previous = ui.with_untracked(|u| u.progress.heart.clone());
    let submitted = RwSignal::new(previous.is_some());
    let answers = RwSignal::new(survey::restore(previous.as_ref()));

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let profile = survey::build_profile(answers.get());
        ui.update(|u| with_site(|site| u.update_progress(site, |p| p.heart = Some(profile))));
        submitted.set(true);
    };

    let on_clear = move |_| {
        answers.set(Default::default());
        submitted.set(false);
    };

    view! {
        <form class="game heart" on:submit=on_submit>
            <div class="game__header">
                <h4>"Heart Detector（心理问答）"</h4>
                <span class="game__status">{move || if submitted.get() { "Submitted" } else { "Tell me" }}</span>
            </div>
            {content::SURVEY_QUESTIONS
                .iter()
                .enumerate()
                .map(|(idx, q)| {
                    view! {
                        <label class="game__question">
                            <span>{format!("{}. {q}", idx + 1)}</span>
                            <input
                                class="game__input"
                                type="text"
                                prop:value=move || answers.with(|a| a[idx].clone())
                                on:input=move |ev| {
                                    let value = event_target_value(&ev);
                                    answers.update(|a| a[idx] = value);
                                }
                            />
                        </label>
                    }
                })
                .collect_view()}
            <div class="game__footer">
                <button class="btn btn--primary" type="submit">"提交"</button>
                <button class="btn" type="button" on:click=on_clear>"重置"</button>
            </div>
            {move || {
                submitted
                    .get()
                    .then(|| ui.with(|u| u.progress.heart.as_ref().map(|h| h.summary.clone())))
                    .flatten()
                    .map(|s| view! { <p class="game__message">{s}</p> })
            }}
        </form>
    }
}
