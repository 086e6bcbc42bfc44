//! Memories tab: photo upload, paged gallery and lightbox.
//!
//! DESIGN
//! ======
//! Photos are decoded and re-encoded one at a time in a spawned task; files
//! that fail are skipped with a warning and the rest of the batch still
//! lands. Arrow keys page the gallery, or step the lightbox while it is open.
//! After a few idle seconds (no pointer, touch or key input) the gallery
//! pages itself until the visitor returns.

use std::time::Duration;

use leptos::prelude::*;

use crate::content;
use crate::state::album::{self, AlbumView};
use crate::state::site::with_site;
use crate::util::{clock, timer};

#[component]
pub fn AlbumPage() -> impl IntoView {
    let photos = RwSignal::new(with_site(|site| site.photos.read()));
    let view_state = RwSignal::new(AlbumView::default());

    // Keep the page and lightbox valid as the list changes.
    Effect::new(move || {
        let count = photos.with(Vec::len);
        view_state.update(|v| *v = v.clamp(count));
    });

    let last_activity = StoredValue::new(clock::now_millis());
    let mark_active = move || last_activity.set_value(clock::now_millis());

    let keys = window_event_listener(leptos::ev::keydown, move |ev| {
        mark_active();
        let count = photos.with_untracked(Vec::len);
        match ev.key().as_str() {
            "ArrowLeft" => view_state.update(|v| *v = v.back(count)),
            "ArrowRight" => view_state.update(|v| *v = v.forward(count)),
            "Escape" => view_state.update(|v| *v = v.close()),
            _ => {}
        }
    });
    let pointer = window_event_listener(leptos::ev::mousemove, move |_| mark_active());
    let touch = window_event_listener(leptos::ev::touchstart, move |_| mark_active());
    on_cleanup(move || {
        keys.remove();
        pointer.remove();
        touch.remove();
    });

    timer::every(album::AUTOPLAY_INTERVAL, move || {
        let (Some(last), Some(count)) = (last_activity.try_get_value(), photos.try_with_untracked(Vec::len)) else {
            return;
        };
        let idle = Duration::from_millis(clock::now_millis().saturating_sub(last));
        let _ = view_state.try_update(|v| *v = v.autoplay(count, idle));
    });

    let on_files = move |ev: leptos::ev::Event| {
        #[cfg(feature = "hydrate")]
        {
            use wasm_bindgen::JsCast;

            use crate::util::media;

            let Some(input) = ev.target().and_then(|t| t.dyn_into::<web_sys::HtmlInputElement>().ok()) else {
                return;
            };
            let files = media::take_files(&input);
            leptos::task::spawn_local(async move {
                let mut added = Vec::new();
                for file in files {
                    match media::read_file(&file).await.and_then(|bytes| media::photo_data_url(&bytes)) {
                        Ok(url) => added.push(url),
                        Err(e) => log::warn!("skipped photo {:?}: {e}", file.name()),
                    }
                }
                if added.is_empty() {
                    return;
                }
                let next = with_site(|site| {
                    site.photos.update(|list| *list = album::append_photos(list.as_slice(), added));
                    site.photos.read()
                });
                let _ = photos.try_set(next);
            });
        }
        #[cfg(not(feature = "hydrate"))]
        let _ = ev;
    };

    let on_clear = move |_| {
        with_site(|site| site.photos.reset());
        photos.set(Vec::new());
        view_state.set(AlbumView::default());
    };

    let page_label = move || {
        let pages = album::page_count(photos.with(Vec::len)).max(1);
        format!("{} / {pages}", view_state.with(|v| v.page) + 1)
    };

    view! {
        <section class="panel album">
            <div class="panel__header">
                <div>
                    <h3>"回忆相册 / Memories"</h3>
                    <p class="panel__lead">{content::ALBUM_HINT}</p>
                </div>
                <div class="panel__actions">
                    <label class="btn btn--primary">
                        "上传照片"
                        <input class="visually-hidden" type="file" accept="image/*" multiple on:change=on_files/>
                    </label>
                    <button class="btn" on:click=on_clear>"清空"</button>
                </div>
            </div>

            <Show
                when=move || photos.with(|p| !p.is_empty())
                fallback=|| {
                    view! {
                        <div class="album__grid">
                            {(1..=content::ALBUM_PLACEHOLDERS)
                                .map(|i| {
                                    view! {
                                        <div class="album__tile album__tile--empty">
                                            <div class="album__placeholder">"📷"</div>
                                            <p>{format!("Memory {i}")}</p>
                                        </div>
                                    }
                                })
                                .collect_view()}
                        </div>
                    }
                }
            >
                <div class="album__toolbar">
                    <span>{move || format!("共 {} 张照片", photos.with(Vec::len))}</span>
                    <span class="album__page-label">{page_label}</span>
                    <div class="album__pager">
                        <button class="btn" on:click=move |_| {
                            let count = photos.with_untracked(Vec::len);
                            view_state.update(|v| *v = v.close().back(count));
                        }>"上一页"</button>
                        <button class="btn" on:click=move |_| {
                            let count = photos.with_untracked(Vec::len);
                            view_state.update(|v| *v = v.close().forward(count));
                        }>"下一页"</button>
                    </div>
                </div>
                <div class="album__grid">
                    {move || {
                        let page = view_state.with(|v| v.page);
                        photos.with(|list| {
                            album::page(list, page)
                                .iter()
                                .enumerate()
                                .map(|(i, src)| {
                                    let index = page * album::PAGE_SIZE + i;
                                    view! {
                                        <div
                                            class="album__tile"
                                            on:click=move |_| view_state.update(|v| *v = v.open(index))
                                        >
                                            <img src=src.clone() alt=format!("memory-{index}")/>
                                        </div>
                                    }
                                })
                                .collect_view()
                        })
                    }}
                </div>
            </Show>

            {move || {
                view_state.with(|v| v.lightbox).and_then(|index| photos.with(|list| list.get(index).cloned())).map(|src| {
                    let count = photos.with_untracked(Vec::len);
                    view! {
                        <div class="lightbox" on:click=move |_| view_state.update(|v| *v = v.close())>
                            <div class="lightbox__frame" on:click=move |ev| ev.stop_propagation()>
                                <img src=src alt="lightbox"/>
                                <button class="lightbox__prev" on:click=move |_| view_state.update(|v| *v = v.back(count))>"‹"</button>
                                <button class="lightbox__next" on:click=move |_| view_state.update(|v| *v = v.forward(count))>"›"</button>
                                <button class="lightbox__close" on:click=move |_| view_state.update(|v| *v = v.close())>"关闭"</button>
                            </div>
                        </div>
                    }
                })
            }}
        </section>
    }
}
