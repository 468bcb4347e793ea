//! REST helpers for the three AI tool endpoints.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`. Server-side
//! (SSR): stubs returning [`ApiError::Unavailable`] since the endpoints
//! are only meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Every failure maps into [`ApiError`] so callers can record it on the
//! flow state and leave the previous result displayed. No retries, no
//! timeouts beyond the transport defaults.

#![allow(clippy::unused_async)]

use super::error::ApiError;
use super::types::{
    CaptionRequest, CaptionResponse, HashtagRequest, HashtagResponse, MoodRequest, MoodResult,
};

/// Ask the backend for a caption matching an image description.
///
/// # Errors
///
/// Returns [`ApiError`] if the request cannot be sent, the server answers
/// with a non-success status, or the body lacks a `caption` string.
pub async fn generate_caption(image_description: &str) -> Result<CaptionResponse, ApiError> {
    let body = CaptionRequest {
        image_description: image_description.to_owned(),
    };
    #[cfg(feature = "hydrate")]
    {
        post_json("/api/caption-generator", &body).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = body;
        Err(ApiError::Unavailable)
    }
}

/// Ask the backend to classify the sentiment of a piece of text.
///
/// The whole result record (mood, emoji, confidence) arrives together; a
/// body missing any of the three fields is malformed.
///
/// # Errors
///
/// Returns [`ApiError`] on transport, status, or decode failure.
pub async fn check_mood(text: &str) -> Result<MoodResult, ApiError> {
    let body = MoodRequest {
        text: text.to_owned(),
    };
    #[cfg(feature = "hydrate")]
    {
        post_json("/api/mood-checker", &body).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = body;
        Err(ApiError::Unavailable)
    }
}

/// Ask the backend for hashtags matching a set of keywords.
///
/// # Errors
///
/// Returns [`ApiError`] on transport, status, or decode failure —
/// including `hashtags` present but not a list of strings.
pub async fn suggest_hashtags(keywords: &str) -> Result<HashtagResponse, ApiError> {
    let body = HashtagRequest {
        keywords: keywords.to_owned(),
    };
    #[cfg(feature = "hydrate")]
    {
        post_json("/api/hashtag-suggestor", &body).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = body;
        Err(ApiError::Unavailable)
    }
}

/// Shared POST-JSON-expect-JSON plumbing for the tool endpoints.
#[cfg(feature = "hydrate")]
async fn post_json<B, T>(url: &str, body: &B) -> Result<T, ApiError>
where
    B: serde::Serialize,
    T: serde::de::DeserializeOwned,
{
    let resp = gloo_net::http::Request::post(url)
        .json(body)
        .map_err(|e| ApiError::Transport(e.to_string()))?
        .send()
        .await
        .map_err(|e| ApiError::Transport(e.to_string()))?;
    if !resp.ok() {
        return Err(ApiError::Status(resp.status()));
    }
    resp.json::<T>()
        .await
        .map_err(|e| ApiError::Malformed(e.to_string()))
}
