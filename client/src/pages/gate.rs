//! Password gate shown until the site is unlocked.

use leptos::prelude::*;

use crate::content;
use crate::state::session::check_password;
use crate::state::site::with_site;
use crate::state::ui::UiState;

#[component]
pub fn GatePage() -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();
    let attempt = RwSignal::new(String::new());
    let hint = RwSignal::new(None::<&'static str>);

    let try_unlock = move |value: String| match check_password(&value) {
        Ok(()) => {
            hint.set(None);
            ui.update(|u| with_site(|site| u.unlock(site)));
        }
        Err(msg) => hint.set(Some(msg)),
    };

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        try_unlock(attempt.get());
    };

    let on_default = move |_| {
        attempt.set(content::SITE_PASSWORD.to_owned());
        try_unlock(content::SITE_PASSWORD.to_owned());
    };

    view! {
        <div class="gate">
            <div class="gate__intro">
                <h1>{content::GATE_TITLE}</h1>
                <p class="gate__subtitle">{content::GATE_SUBTITLE}</p>
            </div>
            <form class="gate__form" on:submit=on_submit>
                <input
                    class="gate__input"
                    type="password"
                    placeholder="输入密码"
                    prop:value=move || attempt.get()
                    on:input=move |ev| {
                        attempt.set(event_target_value(&ev));
                        hint.set(None);
                    }
                />
                <div class="gate__actions">
                    <button class="btn btn--primary" type="submit">"解锁"</button>
                    <button class="btn" type="button" on:click=on_default>"试试默认"</button>
                </div>
                <Show when=move || hint.get().is_some()>
                    <p class="gate__hint">{move || hint.get().unwrap_or_default()}</p>
                </Show>
            </form>
            <p class="gate__tip">{content::GATE_TIP}</p>
        </div>
    }
}
