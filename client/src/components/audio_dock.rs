//! Floating background-music dock: play/pause, upload and reset.
//!
//! DESIGN
//! ======
//! Three sources can feed the `<audio>` element: a `blob:` URL for a track
//! uploaded this session, the stored data URL from an earlier upload, or the
//! bundled default offered as `<source>` children. The play flag is persisted
//! so a reload resumes playback once the browser allows it.

#[cfg(test)]
#[path = "audio_dock_test.rs"]
mod audio_dock_test;

use leptos::prelude::*;

use crate::state::audio;
use crate::state::site::with_site;

fn toggle_label(playing: bool) -> &'static str {
    if playing { "⏸" } else { "▶" }
}

#[cfg(feature = "hydrate")]
fn start(el: &web_sys::HtmlAudioElement) {
    match el.play() {
        Ok(promise) => leptos::task::spawn_local(async move {
            if let Err(e) = wasm_bindgen_futures::JsFuture::from(promise).await {
                log::debug!("playback waiting for user interaction: {e:?}");
            }
        }),
        Err(e) => log::debug!("play() refused: {e:?}"),
    }
}

#[component]
pub fn AudioDock() -> impl IntoView {
    let (saved, was_playing) = with_site(|site| (site.audio.read(), site.playing.read()));
    let stored = RwSignal::new(saved);
    let session_src = RwSignal::new(None::<String>);
    let playing = RwSignal::new(was_playing);
    let audio_ref = NodeRef::<leptos::html::Audio>::new();

    let source = Memo::new(move |_| {
        session_src.with(|s| stored.with(|st| audio::active_source(s.as_deref(), st.as_deref())))
    });

    Effect::new(move || {
        let on = playing.get();
        with_site(|site| site.playing.write(on));
        #[cfg(feature = "hydrate")]
        if let Some(el) = audio_ref.get() {
            if on {
                start(&el);
            } else {
                let _ = el.pause();
            }
        }
    });

    // A new source needs an explicit load before it can play.
    Effect::new(move || {
        source.track();
        #[cfg(feature = "hydrate")]
        if let Some(el) = audio_ref.get_untracked() {
            el.load();
            if playing.get_untracked() {
                start(&el);
            }
        }
    });

    on_cleanup(move || {
        #[cfg(feature = "hydrate")]
        if let Some(url) = session_src.get_untracked() {
            crate::util::media::revoke_object_url(&url);
        }
    });

    let on_upload = move |ev: leptos::ev::Event| {
        #[cfg(feature = "hydrate")]
        {
            use wasm_bindgen::JsCast;

            use crate::util::media;

            let Some(input) = ev.target().and_then(|t| t.dyn_into::<web_sys::HtmlInputElement>().ok()) else {
                return;
            };
            let Some(file) = media::take_files(&input).into_iter().next() else {
                return;
            };
            let Some(url) = media::object_url(&file) else {
                log::warn!("could not open {:?} for playback", file.name());
                return;
            };
            if let Some(prev) = session_src.get_untracked() {
                media::revoke_object_url(&prev);
            }
            session_src.set(Some(url));
            playing.set(true);

            #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
            let size = file.size() as usize;
            match audio::plan_upload(size) {
                audio::UploadPlan::Persist => leptos::task::spawn_local(async move {
                    match media::read_file(&file).await {
                        Ok(bytes) => {
                            let data_url = media::audio_data_url(&file.type_(), &bytes);
                            with_site(|site| site.audio.write(Some(data_url.clone())));
                            let _ = stored.try_set(Some(data_url));
                        }
                        Err(e) => log::warn!("uploaded track kept for this session only: {e}"),
                    }
                }),
                audio::UploadPlan::SessionOnly => {
                    log::info!("uploaded track over {} bytes, not saved", audio::PERSIST_LIMIT_BYTES);
                    with_site(|site| site.audio.write(None));
                    stored.set(None);
                }
            }
        }
        #[cfg(not(feature = "hydrate"))]
        let _ = ev;
    };

    let on_reset = move |_| {
        playing.set(false);
        #[cfg(feature = "hydrate")]
        if let Some(url) = session_src.get_untracked() {
            crate::util::media::revoke_object_url(&url);
        }
        session_src.set(None);
        stored.set(None);
        with_site(|site| site.audio.reset());
    };

    let [(mp3, mp3_type), (flac, flac_type)] = audio::default_sources();

    view! {
        <audio node_ref=audio_ref loop src=move || source.get()>
            <source src=mp3 type=mp3_type/>
            <source src=flac type=flac_type/>
        </audio>
        <div class="audio-dock">
            <div class="audio-dock__row">
                <label class="btn audio-dock__upload">
                    "上传音乐"
                    <input class="visually-hidden" type="file" accept="audio/*" on:change=on_upload/>
                </label>
                <button class="btn" on:click=on_reset>"重置音乐"</button>
            </div>
            <button class="audio-dock__toggle" on:click=move |_| playing.update(|p| *p = !*p)>
                {move || toggle_label(playing.get())}
            </button>
        </div>
    }
}
