use serde::Serialize;
use serde_json::Value;

use crate::payload::{self, Payload};

/// Snake_case wire keys folded into `additional_data` when present.
///
/// Fixed compatibility table for the legacy API shape: these fields have no
/// typed counterpart (or only a camelCase one) and are retained verbatim so
/// nothing upstream sends is lost on normalization.
const EXTRA_FIELD_KEYS: &[&str] = &[
    "provider_id",
    "avatar_url",
    "bio",
    "location",
    "phone_number",
    "status",
    "is_blocked",
    "blocked_at",
    "privacy_accepted_at",
    "email_verified_at",
    "phone_verified_at",
    "created_at",
    "updated_at",
];

/// Canonical keys of the typed attributes; the allow-list merge never
/// shadows one of these into the open bag.
const TYPED_FIELD_KEYS: &[&str] = &["id", "name", "email", "role", "isBlocked", "additionalData"];

// ---------------------------------------------------------------------------
// User
// ---------------------------------------------------------------------------

/// An account holder, normalized from the users endpoint.
///
/// `is_blocked` is tri-state: `Some(true)`/`Some(false)` when the payload
/// carried a recognizable flag under `isBlocked` or `is_blocked`, `None`
/// when the flag was absent or unrecognizable.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: String,
    pub name: String,
    pub email: String,
    pub role: Option<String>,
    pub is_blocked: Option<bool>,
    pub additional_data: Option<Payload>,
}

impl User {
    /// Decode a user from an untyped payload. Never fails: every field is
    /// on the tolerant path.
    pub fn from_payload(p: &Payload) -> Self {
        let mut bag = payload::data_bag(p, "additionalData").unwrap_or_default();

        // Fold known legacy snake_case fields into the bag; a key already in
        // the bag wins, and typed attributes are never duplicated.
        for key in EXTRA_FIELD_KEYS {
            if TYPED_FIELD_KEYS.contains(key) || bag.contains_key(*key) {
                continue;
            }
            match p.get(*key) {
                Some(Value::Null) | None => {}
                Some(v) => {
                    bag.insert((*key).to_string(), v.clone());
                }
            }
        }

        Self {
            id: payload::string_or_empty(p, "id"),
            name: payload::string_or_empty(p, "name"),
            email: payload::string_or_empty(p, "email"),
            role: payload::optional_string(p, "role"),
            is_blocked: payload::tri_state_bool(p, &["isBlocked", "is_blocked"]),
            additional_data: if bag.is_empty() { None } else { Some(bag) },
        }
    }

    /// Canonical camelCase encoding with explicit nulls for absent fields.
    pub fn to_payload(&self) -> Payload {
        match serde_json::to_value(self) {
            Ok(Value::Object(map)) => map,
            _ => Payload::new(),
        }
    }
}
