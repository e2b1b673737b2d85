//! ChatMessage decoding: strict timestamp, tolerant everything else.

use serde_json::json;
use storefront_models::{ChatMessage, ModelError, Payload};

fn payload(v: serde_json::Value) -> Payload {
    v.as_object().expect("fixture must be an object").clone()
}

// ---------------------------------------------------------------------------
// Decoding
// ---------------------------------------------------------------------------

#[test]
fn decodes_full_message() {
    let p = payload(json!({
        "id": "m-1",
        "message": "hello there",
        "userId": "u-5",
        "timestamp": "2024-06-15T08:00:00Z",
        "messageData": {"channel": "support"},
    }));
    let msg = ChatMessage::from_payload(&p).unwrap();
    assert_eq!(msg.id, "m-1");
    assert_eq!(msg.message, "hello there");
    assert_eq!(msg.user_id, Some("u-5".to_string()));
    assert_eq!(msg.timestamp.to_rfc3339(), "2024-06-15T08:00:00+00:00");
    assert_eq!(
        msg.message_data.unwrap().get("channel"),
        Some(&json!("support"))
    );
}

#[test]
fn missing_strings_default_to_empty() {
    let p = payload(json!({"timestamp": "2024-06-15T08:00:00Z"}));
    let msg = ChatMessage::from_payload(&p).unwrap();
    assert_eq!(msg.id, "");
    assert_eq!(msg.message, "");
    assert_eq!(msg.user_id, None);
    assert_eq!(msg.message_data, None);
}

// ---------------------------------------------------------------------------
// Hard failures
// ---------------------------------------------------------------------------

#[test]
fn malformed_timestamp_is_fatal() {
    let p = payload(json!({"id": "m-1", "message": "hi", "timestamp": "noon-ish"}));
    assert!(matches!(
        ChatMessage::from_payload(&p).unwrap_err(),
        ModelError::MalformedTimestamp { ref field, .. } if field == "timestamp"
    ));
}

#[test]
fn absent_timestamp_is_fatal() {
    let p = payload(json!({"id": "m-1", "message": "hi"}));
    assert!(ChatMessage::from_payload(&p).is_err());
}

// ---------------------------------------------------------------------------
// Encoding
// ---------------------------------------------------------------------------

#[test]
fn encode_is_camel_case_with_explicit_nulls() {
    let p = payload(json!({"id": "m-1", "message": "hi", "timestamp": "2024-06-15T08:00:00Z"}));
    let out = ChatMessage::from_payload(&p).unwrap().to_payload();
    assert_eq!(out.get("userId"), Some(&json!(null)));
    assert_eq!(out.get("messageData"), Some(&json!(null)));
    assert!(out.get("timestamp").and_then(|v| v.as_str()).is_some());
}
