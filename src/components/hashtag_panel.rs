//! Hashtag suggestor panel: keywords in, trending tags out.

use leptos::prelude::*;

use crate::app::Busy;
use crate::net::api;
use crate::state::hashtags::HashtagState;
use crate::util::clipboard;

/// Hashtag suggestor tool.
///
/// Tags render in the order the backend returned them; "Copy All" puts
/// the space-joined list on the clipboard.
#[component]
pub fn HashtagPanel() -> impl IntoView {
    let hashtags = expect_context::<RwSignal<HashtagState>>();
    let busy = expect_context::<Busy>();

    let do_suggest = move || {
        let state = hashtags.get();
        if !state.ready() || busy.0.get() {
            return;
        }
        let keywords = state.input;
        hashtags.update(HashtagState::begin);
        leptos::task::spawn_local(async move {
            match api::suggest_hashtags(&keywords).await {
                Ok(resp) => hashtags.update(|h| h.apply(resp)),
                Err(err) => {
                    log::error!("hashtag request failed: {err}");
                    hashtags.update(|h| h.fail(err));
                }
            }
        });
    };

    let on_suggest = move |_| do_suggest();

    let on_keydown = move |ev: leptos::ev::KeyboardEvent| {
        if ev.key() == "Enter" {
            ev.prevent_default();
            do_suggest();
        }
    };

    let on_copy = move |_| {
        let text = hashtags.get().copy_text();
        leptos::task::spawn_local(async move {
            match clipboard::write_text(&text).await {
                Ok(()) => {
                    let mut epoch = 0;
                    hashtags.update(|h| epoch = h.mark_copied());
                    clipboard::copied_reset_delay().await;
                    hashtags.update(|h| h.expire_copied(epoch));
                }
                Err(err) => log::error!("clipboard write failed: {err}"),
            }
        });
    };

    let disabled = move || busy.0.get() || !hashtags.get().ready();
    let action_label = move || {
        if hashtags.get().status.is_submitting() {
            "Finding Hashtags..."
        } else {
            "Suggest Hashtags 🏷️"
        }
    };

    view! {
        <div class="tool-panel tool-panel--hashtags">
            <h2 class="tool-panel__title">"#️⃣ Hashtag Suggestor"</h2>
            <p class="tool-panel__blurb">
                "Enter keywords and get trending hashtags for your post!"
            </p>

            <input
                class="tool-panel__input"
                type="text"
                placeholder="Enter keywords... (e.g., 'travel photography nature')"
                prop:value=move || hashtags.get().input
                on:input=move |ev| hashtags.update(|h| h.input = event_target_value(&ev))
                on:keydown=on_keydown
            />

            <button class="btn btn--primary tool-panel__action" on:click=on_suggest disabled=disabled>
                {action_label}
            </button>

            <Show when=move || !hashtags.get().tags.is_empty()>
                <div class="tool-panel__result">
                    <h3 class="tool-panel__result-title">"Suggested Hashtags:"</h3>
                    <div class="tool-panel__tags">
                        {move || {
                            hashtags
                                .get()
                                .tags
                                .into_iter()
                                .map(|tag| view! { <span class="tool-panel__tag">{tag}</span> })
                                .collect::<Vec<_>>()
                        }}
                    </div>
                    <button
                        class="btn tool-panel__copy"
                        class:tool-panel__copy--copied=move || hashtags.get().copied
                        on:click=on_copy
                    >
                        {move || {
                            if hashtags.get().copied { "Copied! ✓" } else { "Copy All Hashtags 📋" }
                        }}
                    </button>
                </div>
            </Show>
        </div>
    }
}
