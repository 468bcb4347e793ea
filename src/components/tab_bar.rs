//! Tab selector switching between the three tools.

use leptos::prelude::*;

use crate::state::ui::{ToolTab, UiState};

/// Three-tab selector driving which tool panel is visible.
#[component]
pub fn TabBar() -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();

    let active = move || ui.get().active_tab;

    view! {
        <div class="tab-bar">
            {ToolTab::all()
                .into_iter()
                .map(|tab| {
                    view! {
                        <button
                            class="tab-bar__tab"
                            class:tab-bar__tab--active=move || active() == tab
                            on:click=move |_| ui.update(|u| u.active_tab = tab)
                        >
                            <span class="tab-bar__label">{tab.label()}</span>
                            <span class="tab-bar__desc">{tab.description()}</span>
                        </button>
                    }
                })
                .collect::<Vec<_>>()}
        </div>
    }
}
