use super::*;

// =============================================================
// UiState defaults
// =============================================================

#[test]
fn ui_state_default_tab_is_caption() {
    let state = UiState::default();
    assert_eq!(state.active_tab, ToolTab::Caption);
}

// =============================================================
// ToolTab
// =============================================================

#[test]
fn tool_tab_default_is_caption() {
    assert_eq!(ToolTab::default(), ToolTab::Caption);
}

#[test]
fn tool_tab_variants_are_distinct() {
    let variants = ToolTab::all();
    for (i, a) in variants.iter().enumerate() {
        for (j, b) in variants.iter().enumerate() {
            if i == j {
                assert_eq!(a, b);
            } else {
                assert_ne!(a, b);
            }
        }
    }
}

#[test]
fn tool_tab_display_order_is_caption_mood_hashtags() {
    assert_eq!(
        ToolTab::all(),
        [ToolTab::Caption, ToolTab::Mood, ToolTab::Hashtags]
    );
}

#[test]
fn tool_tab_labels_are_unique() {
    let labels = ToolTab::all().map(ToolTab::label);
    assert_ne!(labels[0], labels[1]);
    assert_ne!(labels[1], labels[2]);
    assert_ne!(labels[0], labels[2]);
}
