//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::pages::home::HomePage;
use crate::state::caption::CaptionState;
use crate::state::flow::any_in_flight;
use crate::state::hashtags::HashtagState;
use crate::state::mood::MoodState;
use crate::state::ui::UiState;

/// Derived busy flag shared by all three tool panels.
///
/// True iff any flow has a request in flight; never stored separately,
/// so it cannot desynchronize from the flow statuses.
#[derive(Clone, Copy)]
pub struct Busy(pub Signal<bool>);

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides one state context per tool flow plus the tab selector and
/// the derived busy flag.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let caption = RwSignal::new(CaptionState::default());
    let mood = RwSignal::new(MoodState::default());
    let hashtags = RwSignal::new(HashtagState::default());
    let ui = RwSignal::new(UiState::default());

    let busy = Busy(Signal::derive(move || {
        any_in_flight(&[
            caption.get().status,
            mood.get().status,
            hashtags.get().status,
        ])
    }));

    provide_context(caption);
    provide_context(mood);
    provide_context(hashtags);
    provide_context(ui);
    provide_context(busy);

    view! {
        <Stylesheet id="leptos" href="/pkg/socialflow.css"/>
        <Title text="SocialFlow"/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("") view=HomePage/>
            </Routes>
        </Router>
    }
}
