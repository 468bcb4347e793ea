//! Wire types for the three AI backend endpoints.
//!
//! Field names follow the backend's camelCase contract. Response types
//! declare every expected field as required: a body missing a field, or
//! carrying one of the wrong type, fails deserialization and is handled
//! as a malformed response rather than coerced.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// Request body for `POST /api/caption-generator`.
#[derive(Clone, Debug, Serialize)]
pub struct CaptionRequest {
    #[serde(rename = "imageDescription")]
    pub image_description: String,
}

/// Success response from the caption endpoint.
#[derive(Clone, Debug, Deserialize)]
pub struct CaptionResponse {
    pub caption: String,
}

/// Request body for `POST /api/mood-checker`.
#[derive(Clone, Debug, Serialize)]
pub struct MoodRequest {
    pub text: String,
}

/// Success response from the mood endpoint, kept whole as the displayed
/// result record so the three fields always update together.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct MoodResult {
    pub mood: String,
    pub emoji: String,
    pub confidence: String,
}

/// Request body for `POST /api/hashtag-suggestor`.
#[derive(Clone, Debug, Serialize)]
pub struct HashtagRequest {
    pub keywords: String,
}

/// Success response from the hashtag endpoint. Tag order is the
/// backend's and is preserved through display and copy.
#[derive(Clone, Debug, Deserialize)]
pub struct HashtagResponse {
    pub hashtags: Vec<String>,
}
