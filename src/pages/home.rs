//! The single SocialFlow screen: header, tool tabs, active panel, footer.

use leptos::prelude::*;

use crate::components::caption_panel::CaptionPanel;
use crate::components::hashtag_panel::HashtagPanel;
use crate::components::mood_panel::MoodPanel;
use crate::components::tab_bar::TabBar;
use crate::state::ui::{ToolTab, UiState};

/// Home page — renders the tab bar and whichever tool panel is active.
#[component]
pub fn HomePage() -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();

    let active_tab = move || ui.get().active_tab;

    view! {
        <div class="home-page">
            <header class="home-page__header">
                <h1 class="home-page__title">"SOCIALFLOW"</h1>
                <p class="home-page__tagline">"Next-Gen AI Tools for Social Media"</p>
            </header>

            <TabBar/>

            <main class="home-page__content">
                {move || match active_tab() {
                    ToolTab::Caption => view! { <CaptionPanel/> }.into_any(),
                    ToolTab::Mood => view! { <MoodPanel/> }.into_any(),
                    ToolTab::Hashtags => view! { <HashtagPanel/> }.into_any(),
                }}
            </main>

            <footer class="home-page__footer">
                <p>"Perfect for Instagram, Twitter, TikTok, and all your social platforms! 🚀"</p>
            </footer>
        </div>
    }
}
