#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

/// Failure modes for a backend request.
///
/// None of these reach the user: callers record the error on the flow
/// state and log it, leaving the previous result on screen. Keeping the
/// taxonomy structured lets tests assert which failure occurred.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    /// The request never produced a response (DNS, connection, abort).
    #[error("request failed: {0}")]
    Transport(String),

    /// The server answered with a non-success HTTP status.
    #[error("server returned status {0}")]
    Status(u16),

    /// The response body was not JSON of the expected shape. Covers both
    /// missing fields and fields of the wrong type.
    #[error("malformed response: {0}")]
    Malformed(String),

    /// Browser-only capability invoked during server-side rendering.
    #[error("not available on the server")]
    Unavailable,
}
