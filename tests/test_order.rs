//! Order decoding: strict timestamp, strict total, required items sequence.

use serde_json::json;
use storefront_models::{ModelError, Order, Payload};

fn payload(v: serde_json::Value) -> Payload {
    v.as_object().expect("fixture must be an object").clone()
}

fn base_order() -> serde_json::Value {
    json!({
        "id": "o-100",
        "createdAt": "2024-03-01T10:30:00Z",
        "status": "pending",
        "totalPrice": 42.5,
        "items": [
            {"id": "ci-1", "quantity": 2, "productId": "p-1"},
            {"id": "ci-2", "quantity": 1},
        ],
    })
}

// ---------------------------------------------------------------------------
// Decoding
// ---------------------------------------------------------------------------

#[test]
fn decodes_order_with_items() {
    let order = Order::from_payload(&payload(base_order())).unwrap();
    assert_eq!(order.id, "o-100");
    assert_eq!(order.status, "pending");
    assert_eq!(order.total_price, 42.5);
    assert_eq!(order.items.len(), 2);
    assert_eq!(order.items[0].quantity, 2);
    assert_eq!(order.items[1].id, "ci-2");
    assert_eq!(order.created_at.to_rfc3339(), "2024-03-01T10:30:00+00:00");
}

#[test]
fn integer_total_is_accepted_as_double() {
    let mut p = payload(base_order());
    p.insert("totalPrice".into(), json!(40));
    assert_eq!(Order::from_payload(&p).unwrap().total_price, 40.0);
}

#[test]
fn empty_items_sequence_is_valid() {
    let mut p = payload(base_order());
    p.insert("items".into(), json!([]));
    assert!(Order::from_payload(&p).unwrap().items.is_empty());
}

// ---------------------------------------------------------------------------
// Hard failures
// ---------------------------------------------------------------------------

#[test]
fn non_sequence_items_is_fatal() {
    let mut p = payload(base_order());
    p.insert("items".into(), json!("not-a-list"));
    let err = Order::from_payload(&p).unwrap_err();
    assert!(matches!(err, ModelError::MissingRequiredSequence { ref field } if field == "items"));
}

#[test]
fn absent_items_is_fatal() {
    let mut p = payload(base_order());
    p.remove("items");
    assert!(Order::from_payload(&p).is_err());
}

#[test]
fn non_object_item_element_is_fatal() {
    let mut p = payload(base_order());
    p.insert("items".into(), json!([{"id": "ci-1", "quantity": 1}, "oops"]));
    let err = Order::from_payload(&p).unwrap_err();
    assert!(matches!(err, ModelError::TypeMismatch { ref field, .. } if field == "items[1]"));
}

#[test]
fn bad_item_quantity_propagates() {
    let mut p = payload(base_order());
    p.insert("items".into(), json!([{"id": "ci-1", "quantity": "2"}]));
    assert!(matches!(
        Order::from_payload(&p).unwrap_err(),
        ModelError::TypeMismatch { ref field, .. } if field == "quantity"
    ));
}

#[test]
fn string_total_price_is_fatal() {
    let mut p = payload(base_order());
    p.insert("totalPrice".into(), json!("42.5"));
    assert!(matches!(
        Order::from_payload(&p).unwrap_err(),
        ModelError::TypeMismatch { ref field, .. } if field == "totalPrice"
    ));
}

#[test]
fn malformed_created_at_is_fatal() {
    let mut p = payload(base_order());
    p.insert("createdAt".into(), json!("last tuesday"));
    assert!(matches!(
        Order::from_payload(&p).unwrap_err(),
        ModelError::MalformedTimestamp { ref field, .. } if field == "createdAt"
    ));
}

// ---------------------------------------------------------------------------
// Encoding
// ---------------------------------------------------------------------------

#[test]
fn encode_nests_items_and_serializes_timestamp() {
    let order = Order::from_payload(&payload(base_order())).unwrap();
    let out = order.to_payload();

    let items = out.get("items").and_then(|v| v.as_array()).unwrap();
    assert_eq!(items.len(), 2);
    assert_eq!(items[0].get("quantity"), Some(&json!(2)));
    assert_eq!(items[1].get("productId"), Some(&json!(null)));

    let ts = out.get("createdAt").and_then(|v| v.as_str()).unwrap();
    assert!(ts.starts_with("2024-03-01T10:30:00"));
    assert_eq!(out.get("orderData"), Some(&json!(null)));
}
