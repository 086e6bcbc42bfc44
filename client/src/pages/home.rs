//! Home tab: greeting and today's mission.

use leptos::prelude::*;

use crate::content;

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <section class="panel home">
            <h3>{format!("Welcome to the mysterious web, detective {}", content::HERO_NAME)}</h3>
            <p class="panel__lead">{content::HOME_INTRO}</p>
            <div class="home__cards">
                <div class="card">
                    <h4>"Today's Mission"</h4>
                    <p>{content::HOME_MISSION}</p>
                </div>
                <div class="card">
                    <h4>"Tips"</h4>
                    <p>{content::HOME_TIPS}</p>
                </div>
            </div>
        </section>
    }
}
