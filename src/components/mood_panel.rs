//! Mood checker panel: paste text, see its detected sentiment.

use leptos::prelude::*;

use crate::app::Busy;
use crate::net::api;
use crate::state::mood::MoodState;

/// Mood checker tool.
///
/// The result card renders the emoji, mood label, and confidence label
/// from a single record, so the three never mix across responses.
#[component]
pub fn MoodPanel() -> impl IntoView {
    let mood = expect_context::<RwSignal<MoodState>>();
    let busy = expect_context::<Busy>();

    let do_check = move || {
        let state = mood.get();
        if !state.ready() || busy.0.get() {
            return;
        }
        let text = state.input;
        mood.update(MoodState::begin);
        leptos::task::spawn_local(async move {
            match api::check_mood(&text).await {
                Ok(result) => mood.update(|m| m.apply(result)),
                Err(err) => {
                    log::error!("mood request failed: {err}");
                    mood.update(|m| m.fail(err));
                }
            }
        });
    };

    let on_check = move |_| do_check();

    let disabled = move || busy.0.get() || !mood.get().ready();
    let action_label = move || {
        if mood.get().status.is_submitting() {
            "Analyzing Mood..."
        } else {
            "Check Mood 🔍"
        }
    };

    view! {
        <div class="tool-panel tool-panel--mood">
            <h2 class="tool-panel__title">"😊 Mood Checker"</h2>
            <p class="tool-panel__blurb">
                "Paste any text to analyze its emotional sentiment!"
            </p>

            <textarea
                class="tool-panel__textarea"
                placeholder="Paste a tweet, comment, or any text here..."
                prop:value=move || mood.get().input
                on:input=move |ev| mood.update(|m| m.input = event_target_value(&ev))
            ></textarea>

            <button class="btn btn--primary tool-panel__action" on:click=on_check disabled=disabled>
                {action_label}
            </button>

            {move || {
                mood.get()
                    .result
                    .map(|result| {
                        view! {
                            <div class="tool-panel__result tool-panel__result--mood">
                                <div class="tool-panel__mood-emoji">{result.emoji}</div>
                                <h3 class="tool-panel__mood-label">{result.mood}</h3>
                                <p class="tool-panel__mood-confidence">
                                    {format!("Detected sentiment with {} confidence", result.confidence)}
                                </p>
                            </div>
                        }
                    })
            }}
        </div>
    }
}
