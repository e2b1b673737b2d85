use chrono::{DateTime, Utc};
use serde::Serialize;
use serde_json::Value;

use crate::error::{ModelError, Result};
use crate::models::CartItem;
use crate::payload::{self, Payload};

// ---------------------------------------------------------------------------
// Order
// ---------------------------------------------------------------------------

/// A placed order.
///
/// Everything financial or chronological here sits on the strict path:
/// `createdAt` must be well-formed ISO-8601, `totalPrice` must be a native
/// number, and `items` must be a sequence of decodable line items.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    pub id: String,
    pub created_at: DateTime<Utc>,
    pub status: String,
    pub total_price: f64,
    pub items: Vec<CartItem>,
    pub order_data: Option<Payload>,
}

impl Order {
    /// Decode an order from an untyped payload.
    ///
    /// # Errors
    ///
    /// * [`ModelError::MalformedTimestamp`] when `createdAt` is absent or
    ///   not valid ISO-8601.
    /// * [`ModelError::TypeMismatch`] when `totalPrice` is not a native
    ///   number, or an element of `items` is not an object.
    /// * [`ModelError::MissingRequiredSequence`] when `items` is absent or
    ///   not a sequence. Element decode errors propagate unchanged.
    pub fn from_payload(p: &Payload) -> Result<Self> {
        let items = payload::require_array(p, "items")?
            .iter()
            .enumerate()
            .map(|(i, v)| match v {
                Value::Object(item) => CartItem::from_payload(item),
                _ => Err(ModelError::TypeMismatch {
                    field: format!("items[{i}]"),
                    expected: "object",
                }),
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(Self {
            id: payload::string_or_empty(p, "id"),
            created_at: payload::require_timestamp(p, "createdAt")?,
            status: payload::string_or_empty(p, "status"),
            total_price: payload::require_f64(p, "totalPrice")?,
            items,
            order_data: payload::data_bag(p, "orderData"),
        })
    }

    /// Canonical camelCase encoding; `createdAt` is emitted as RFC 3339
    /// text and items are recursively encoded.
    pub fn to_payload(&self) -> Payload {
        match serde_json::to_value(self) {
            Ok(Value::Object(map)) => map,
            _ => Payload::new(),
        }
    }
}
