//! Games tab: three sub-pages hosting the four mini-games.

#[cfg(test)]
#[path = "games_test.rs"]
mod games_test;

use leptos::prelude::*;

use crate::components::heart_survey::HeartSurvey;
use crate::components::lock_panel::LockPanel;
use crate::components::memory_match::MemoryMatch;
use crate::components::roulette_wheel::RouletteWheel;
use crate::content;
use crate::state::progress::GameProgress;
use crate::state::ui::UiState;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum GameSection {
    #[default]
    Memory,
    Lock,
    Roulette,
}

impl GameSection {
    pub const ALL: [GameSection; 3] = [Self::Memory, Self::Lock, Self::Roulette];

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Memory => "Page 1 · Memory",
            Self::Lock => "Page 2 · Lock",
            Self::Roulette => "Page 3 · Roulette",
        }
    }
}

fn mark(done: bool) -> &'static str {
    if done { "✓" } else { "✗" }
}

/// Progress footer for a section.
fn progress_line(section: GameSection, progress: &GameProgress) -> String {
    match section {
        GameSection::Memory => format!("Progress: Memory {}", mark(progress.memory)),
        GameSection::Lock => format!("Progress: Lock {}", mark(progress.lock)),
        GameSection::Roulette => format!(
            "Progress: Roulette {} · Heart {}",
            mark(progress.roulette_result().is_some()),
            mark(progress.heart.is_some()),
        ),
    }
}

#[component]
pub fn GamesPage() -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();
    let section = RwSignal::new(GameSection::default());

    view! {
        <section class="panel games">
            <h3>"Games / 小游戏"</h3>
            <p class="panel__lead">{content::GAMES_HINT}</p>
            <div class="games__nav">
                {GameSection::ALL
                    .into_iter()
                    .map(|s| {
                        view! {
                            <button
                                class="btn games__tab"
                                class:games__tab--active=move || section.get() == s
                                on:click=move |_| section.set(s)
                            >
                                {s.label()}
                            </button>
                        }
                    })
                    .collect_view()}
            </div>
            <div class="games__body">
                {move || match section.get() {
                    GameSection::Memory => view! { <MemoryMatch/> }.into_any(),
                    GameSection::Lock => view! { <LockPanel/> }.into_any(),
                    GameSection::Roulette => {
                        view! {
                            <RouletteWheel/>
                            <HeartSurvey/>
                        }
                            .into_any()
                    }
                }}
                <p class="games__progress">
                    {move || ui.with(|u| progress_line(section.get(), &u.progress))}
                </p>
            </div>
        </section>
    }
}
