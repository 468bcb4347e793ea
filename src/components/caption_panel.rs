//! Caption generator panel: describe an image, get a post-ready caption.

use leptos::prelude::*;

use crate::app::Busy;
use crate::net::api;
use crate::state::caption::CaptionState;
use crate::util::clipboard;

/// Caption generator tool.
///
/// Sends the image description to the caption endpoint and displays the
/// generated caption with a copy button. A failed request keeps the
/// previous caption on screen; nothing is shown to the user.
#[component]
pub fn CaptionPanel() -> impl IntoView {
    let caption = expect_context::<RwSignal<CaptionState>>();
    let busy = expect_context::<Busy>();

    let do_generate = move || {
        let state = caption.get();
        if !state.ready() || busy.0.get() {
            return;
        }
        let description = state.input;
        caption.update(CaptionState::begin);
        leptos::task::spawn_local(async move {
            match api::generate_caption(&description).await {
                Ok(resp) => caption.update(|c| c.apply(resp)),
                Err(err) => {
                    log::error!("caption request failed: {err}");
                    caption.update(|c| c.fail(err));
                }
            }
        });
    };

    let on_generate = move |_| do_generate();

    let on_copy = move |_| {
        let text = caption.get().caption;
        leptos::task::spawn_local(async move {
            match clipboard::write_text(&text).await {
                Ok(()) => {
                    let mut epoch = 0;
                    caption.update(|c| epoch = c.mark_copied());
                    clipboard::copied_reset_delay().await;
                    caption.update(|c| c.expire_copied(epoch));
                }
                Err(err) => log::error!("clipboard write failed: {err}"),
            }
        });
    };

    let disabled = move || busy.0.get() || !caption.get().ready();
    let action_label = move || {
        if caption.get().status.is_submitting() {
            "Generating Caption..."
        } else {
            "Generate Caption ✨"
        }
    };

    view! {
        <div class="tool-panel tool-panel--caption">
            <h2 class="tool-panel__title">"📸 Caption Generator"</h2>
            <p class="tool-panel__blurb">
                "Describe your image and get an Instagram-ready caption!"
            </p>

            <textarea
                class="tool-panel__textarea"
                placeholder="Describe your image... (e.g., 'Sunset at the beach with friends')"
                prop:value=move || caption.get().input
                on:input=move |ev| caption.update(|c| c.input = event_target_value(&ev))
            ></textarea>

            <button class="btn btn--primary tool-panel__action" on:click=on_generate disabled=disabled>
                {action_label}
            </button>

            <Show when=move || !caption.get().caption.is_empty()>
                <div class="tool-panel__result">
                    <h3 class="tool-panel__result-title">"Your Caption:"</h3>
                    <p class="tool-panel__caption">{move || caption.get().caption}</p>
                    <button
                        class="btn tool-panel__copy"
                        class:tool-panel__copy--copied=move || caption.get().copied
                        on:click=on_copy
                    >
                        {move || if caption.get().copied { "Copied! ✓" } else { "Copy Caption 📋" }}
                    </button>
                </div>
            </Show>
        </div>
    }
}
