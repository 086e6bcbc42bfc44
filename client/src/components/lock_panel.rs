//! Three-question lock panel.

use leptos::prelude::*;

use crate::content;
use crate::games::lock::{self, LockVerdict};
use crate::state::site::with_site;
use crate::state::ui::UiState;

#[component]
pub fn LockPanel() -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();
    let answers = RwSignal::new(vec![String::new(); content::LOCK_QUESTIONS.len()]);
    let message = RwSignal::new(None::<&'static str>);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let given = answers.get();
        let mut verdict = LockVerdict::Retry;
        ui.update(|u| {
            with_site(|site| verdict = lock::submit(&content::LOCK_QUESTIONS, &given, u, site));
        });
        if verdict == LockVerdict::Open {
            log::info!("lock opened");
        }
        message.set(Some(verdict.message()));
    };

    let on_clear = move |_| {
        answers.set(vec![String::new(); content::LOCK_QUESTIONS.len()]);
        message.set(None);
    };

    view! {
        <form class="game lock" on:submit=on_submit>
            <div class="game__header">
                <h4>"Unlock the Past（回忆密码锁）"</h4>
                <span class="game__status">
                    {move || if ui.with(|u| u.progress.lock) { "Unlocked" } else { "Locked" }}
                </span>
            </div>
            {content::LOCK_QUESTIONS
                .iter()
                .enumerate()
                .map(|(idx, q)| {
                    view! {
                        <label class="game__question">
                            <span>{format!("{}. {}", idx + 1, q.prompt)}</span>
                            <input
                                class="game__input"
                                type="text"
                                prop:value=move || answers.with(|a| a[idx].clone())
                                on:input=move |ev| {
                                    let value = event_target_value(&ev);
                                    answers.update(|a| a[idx] = value);
                                    message.set(None);
                                }
                            />
                        </label>
                    }
                })
                .collect_view()}
            <div class="game__footer">
                <button class="btn btn--primary" type="submit">"提交"</button>
                <button class="btn" type="button" on:click=on_clear>"重填"</button>
            </div>
            <Show when=move || message.get().is_some()>
                <p class="game__message">{move || message.get().unwrap_or_default()}</p>
            </Show>
        </form>
    }
}
