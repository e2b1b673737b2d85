use serde::Serialize;
use serde_json::Value;

use crate::error::Result;
use crate::payload::{self, Payload};

// ---------------------------------------------------------------------------
// CartItem
// ---------------------------------------------------------------------------

/// A line item in a cart or order.
///
/// `quantity` is on the strict numeric path: cart arithmetic must never run
/// on a silently-defaulted count, so a missing or non-numeric value fails
/// the decode outright.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CartItem {
    pub id: String,
    pub quantity: i64,
    pub product_id: Option<String>,
    pub package_id: Option<String>,
    pub item_data: Option<Payload>,
}

impl CartItem {
    /// Decode a cart item from an untyped payload.
    ///
    /// # Errors
    ///
    /// [`ModelError::TypeMismatch`](crate::ModelError::TypeMismatch) when
    /// `quantity` is absent or not a native number.
    pub fn from_payload(p: &Payload) -> Result<Self> {
        Ok(Self {
            id: payload::string_or_empty(p, "id"),
            quantity: payload::require_i64(p, "quantity")?,
            product_id: payload::optional_string(p, "productId"),
            package_id: payload::optional_string(p, "packageId"),
            item_data: payload::data_bag(p, "itemData"),
        })
    }

    /// Canonical camelCase encoding with explicit nulls for absent fields.
    pub fn to_payload(&self) -> Payload {
        match serde_json::to_value(self) {
            Ok(Value::Object(map)) => map,
            _ => Payload::new(),
        }
    }
}
