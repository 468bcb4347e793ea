use super::*;

// =============================================================
// Display
// =============================================================

#[test]
fn transport_display_includes_cause() {
    let err = ApiError::Transport("connection refused".to_owned());
    assert_eq!(err.to_string(), "request failed: connection refused");
}

#[test]
fn status_display_includes_code() {
    let err = ApiError::Status(502);
    assert_eq!(err.to_string(), "server returned status 502");
}

#[test]
fn malformed_display_includes_detail() {
    let err = ApiError::Malformed("missing field `caption`".to_owned());
    assert_eq!(err.to_string(), "malformed response: missing field `caption`");
}

// =============================================================
// Equality (flows store the error for assertions)
// =============================================================

#[test]
fn variants_compare_by_payload() {
    assert_eq!(ApiError::Status(404), ApiError::Status(404));
    assert_ne!(ApiError::Status(404), ApiError::Status(500));
    assert_ne!(
        ApiError::Transport("a".to_owned()),
        ApiError::Malformed("a".to_owned())
    );
}
