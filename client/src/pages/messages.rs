//! Messages tab: post to the board and receive a delayed auto-reply.

#[cfg(test)]
#[path = "messages_test.rs"]
mod messages_test;

use leptos::prelude::*;

use crate::content;
use crate::state::messages::{self, AUTHOR_SYSTEM, Message, PendingReply};
use crate::state::site::{SiteSlices, with_site};
use crate::util::random::{self, RandomSource};
use crate::util::{clock, timer};

/// Store the auto-reply, then refresh `board` if the tab is still open.
fn deliver_reply(
    site: &SiteSlices,
    board: RwSignal<Vec<Message>>,
    pending: &PendingReply,
    now_ms: u64,
    rng: &mut dyn RandomSource,
) {
    site.messages.update(|list| messages::deliver(list, pending, now_ms, rng));
    let _ = board.try_set(site.messages.read());
}

#[component]
pub fn MessagesPage() -> impl IntoView {
    let log = RwSignal::new(with_site(|site| site.messages.read()));
    let draft = RwSignal::new(String::new());

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let text = draft.get();
        let Some(pending) = with_site(|site| {
            let mut next = site.messages.read();
            let pending = messages::post(&mut next, &text, clock::now_millis())?;
            site.messages.write(next);
            Some(pending)
        }) else {
            return;
        };
        draft.set(String::new());
        log.set(with_site(|site| site.messages.read()));

        let delay = pending.delay;
        timer::after(delay, move || {
            with_site(|site| deliver_reply(site, log, &pending, clock::now_millis(), &mut random::session_rng()));
        });
    };

    view! {
        <section class="panel messages">
            <h3>"留言信笺 / Messages"</h3>
            <div class="messages__list">
                <For
                    each=move || log.get()
                    key=|m: &Message| m.id
                    children=|m: Message| {
                        let system = m.author == AUTHOR_SYSTEM;
                        view! {
                            <div class="messages__item" class:messages__item--system=system>
                                <div class="messages__author">{m.author}</div>
                                <div class="messages__text">{m.text}</div>
                            </div>
                        }
                    }
                />
            </div>
            <form class="messages__form" on:submit=on_submit>
                <input
                    class="messages__input"
                    type="text"
                    placeholder=content::MESSAGE_PLACEHOLDER
                    prop:value=move || draft.get()
                    on:input=move |ev| draft.set(event_target_value(&ev))
                />
                <button class="btn btn--primary" type="submit">"发送"</button>
            </form>
            <p class="messages__footer">{content::MESSAGE_FOOTER}</p>
        </section>
    }
}
