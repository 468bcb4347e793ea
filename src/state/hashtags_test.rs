use super::*;

fn response(tags: &[&str]) -> HashtagResponse {
    HashtagResponse {
        hashtags: tags.iter().map(|t| (*t).to_owned()).collect(),
    }
}

// =============================================================
// Defaults
// =============================================================

#[test]
fn hashtag_state_default_is_empty_and_idle() {
    let state = HashtagState::default();
    assert!(state.tags.is_empty());
    assert_eq!(state.status, FlowStatus::Idle);
    assert!(!state.copied);
}

// =============================================================
// ready
// =============================================================

#[test]
fn whitespace_keywords_are_not_ready() {
    let state = HashtagState {
        input: " \t ".to_owned(),
        ..HashtagState::default()
    };
    assert!(!state.ready());
}

// =============================================================
// Tag list replacement
// =============================================================

#[test]
fn apply_preserves_backend_order_and_count() {
    let mut state = HashtagState::default();
    state.begin();
    state.apply(response(&["#travel", "#nature", "#photography"]));
    assert_eq!(state.tags, ["#travel", "#nature", "#photography"]);
    assert_eq!(state.status, FlowStatus::Succeeded);
}

#[test]
fn apply_discards_previous_tags() {
    let mut state = HashtagState::default();
    state.apply(response(&["#old"]));
    state.apply(response(&["#new", "#tags"]));
    assert_eq!(state.tags, ["#new", "#tags"]);
}

#[test]
fn fail_keeps_previous_tags() {
    let mut state = HashtagState::default();
    state.apply(response(&["#travel", "#nature"]));
    state.begin();
    state.fail(ApiError::Transport("offline".to_owned()));
    assert_eq!(state.tags, ["#travel", "#nature"]);
    assert!(!state.status.is_submitting());
}

// =============================================================
// Copy text
// =============================================================

#[test]
fn copy_text_joins_tags_with_spaces() {
    let mut state = HashtagState::default();
    state.apply(response(&["#travel", "#nature", "#photography"]));
    assert_eq!(state.copy_text(), "#travel #nature #photography");
}

#[test]
fn copy_text_of_empty_list_is_empty() {
    let state = HashtagState::default();
    assert_eq!(state.copy_text(), "");
}

// =============================================================
// Copied-flag epochs
// =============================================================

#[test]
fn stale_expiry_is_ignored() {
    let mut state = HashtagState::default();
    let first = state.mark_copied();
    let second = state.mark_copied();
    state.expire_copied(first);
    assert!(state.copied);
    state.expire_copied(second);
    assert!(!state.copied);
}
