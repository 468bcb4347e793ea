use super::*;

// =============================================================
// Request serialization (camelCase contract)
// =============================================================

#[test]
fn caption_request_uses_camel_case_field() {
    let body = CaptionRequest {
        image_description: "Sunset at the beach".to_owned(),
    };
    let json = serde_json::to_value(&body).expect("serialize");
    assert_eq!(
        json,
        serde_json::json!({ "imageDescription": "Sunset at the beach" })
    );
}

#[test]
fn mood_request_serializes_text_field() {
    let body = MoodRequest {
        text: "what a day".to_owned(),
    };
    let json = serde_json::to_value(&body).expect("serialize");
    assert_eq!(json, serde_json::json!({ "text": "what a day" }));
}

#[test]
fn hashtag_request_serializes_keywords_field() {
    let body = HashtagRequest {
        keywords: "travel photography".to_owned(),
    };
    let json = serde_json::to_value(&body).expect("serialize");
    assert_eq!(json, serde_json::json!({ "keywords": "travel photography" }));
}

// =============================================================
// Response strictness: missing or wrong-typed fields are errors
// =============================================================

#[test]
fn caption_response_parses_expected_shape() {
    let resp: CaptionResponse =
        serde_json::from_value(serde_json::json!({ "caption": "Golden hour vibes 🌅" }))
            .expect("parse");
    assert_eq!(resp.caption, "Golden hour vibes 🌅");
}

#[test]
fn caption_response_rejects_empty_object() {
    let result = serde_json::from_value::<CaptionResponse>(serde_json::json!({}));
    assert!(result.is_err());
}

#[test]
fn mood_result_parses_all_fields() {
    let resp: MoodResult = serde_json::from_value(serde_json::json!({
        "mood": "joyful",
        "emoji": "😄",
        "confidence": "high"
    }))
    .expect("parse");
    assert_eq!(resp.mood, "joyful");
    assert_eq!(resp.emoji, "😄");
    assert_eq!(resp.confidence, "high");
}

#[test]
fn mood_result_rejects_partial_record() {
    let result =
        serde_json::from_value::<MoodResult>(serde_json::json!({ "mood": "joyful" }));
    assert!(result.is_err());
}

#[test]
fn hashtag_response_preserves_order() {
    let resp: HashtagResponse = serde_json::from_value(serde_json::json!({
        "hashtags": ["#travel", "#nature", "#photography"]
    }))
    .expect("parse");
    assert_eq!(resp.hashtags, ["#travel", "#nature", "#photography"]);
}

#[test]
fn hashtag_response_rejects_string_instead_of_list() {
    let result = serde_json::from_value::<HashtagResponse>(
        serde_json::json!({ "hashtags": "#travel #nature" }),
    );
    assert!(result.is_err());
}

#[test]
fn hashtag_response_rejects_non_string_elements() {
    let result =
        serde_json::from_value::<HashtagResponse>(serde_json::json!({ "hashtags": [1, 2] }));
    assert!(result.is_err());
}
