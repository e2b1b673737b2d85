//! Coercion helpers for untyped API payloads.
//!
//! Upstream payloads arrive as loosely-shaped JSON objects: keys may be
//! missing, null, numeric-as-string, or spelled in either camelCase or
//! snake_case depending on the API version. Every record decoder in
//! [`crate::models`] is assembled from the extractors here.
//!
//! Two parsing disciplines coexist and must not be unified:
//!
//! * **strict** extractors ([`require_i64`], [`require_f64`],
//!   [`require_timestamp`], [`require_array`]) fail the whole decode —
//!   order and cart arithmetic must never run on silently-defaulted input.
//! * **lenient** extractors ([`lenient_f64`], [`lenient_i64`],
//!   [`tri_state_bool`], [`optional_string_seq`]) substitute a default and
//!   never fail — catalog display fields degrade gracefully.

use chrono::{DateTime, NaiveDateTime, TimeZone, Utc};
use serde_json::Value;

use crate::error::{ModelError, Result};

/// An untyped key-value payload as decoded from an API response body.
///
/// Keys keep their insertion order (`serde_json` with `preserve_order`), so
/// first-writer-wins merges into open bags are stable on re-encode.
pub type Payload = serde_json::Map<String, Value>;

// ---------------------------------------------------------------------------
// String coercion
// ---------------------------------------------------------------------------

/// Textual form of any non-null value.
///
/// Strings pass through verbatim; numbers and booleans use their display
/// form; objects and arrays render as compact JSON text.
pub fn stringify(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

/// Required string field: coerce any present value to text, absent/null
/// becomes the empty string.
pub fn string_or_empty(payload: &Payload, key: &str) -> String {
    match payload.get(key) {
        Some(Value::Null) | None => String::new(),
        Some(v) => stringify(v),
    }
}

/// Optional string field: absent/null stays absent, anything else is
/// stringified.
pub fn optional_string(payload: &Payload, key: &str) -> Option<String> {
    match payload.get(key) {
        Some(Value::Null) | None => None,
        Some(v) => Some(stringify(v)),
    }
}

/// Optional string field with prioritized candidate keys; the first present,
/// non-null key wins.
pub fn optional_string_multi(payload: &Payload, keys: &[&str]) -> Option<String> {
    keys.iter().find_map(|k| optional_string(payload, k))
}

// ---------------------------------------------------------------------------
// Strict numerics
// ---------------------------------------------------------------------------

/// Required integer field, strict path: only a native JSON number is
/// accepted. A missing, null, or non-numeric value is a hard failure.
pub fn require_i64(payload: &Payload, key: &str) -> Result<i64> {
    payload
        .get(key)
        .and_then(Value::as_i64)
        .ok_or_else(|| ModelError::TypeMismatch {
            field: key.to_string(),
            expected: "integer",
        })
}

/// Required floating-point field, strict path: only a native JSON number is
/// accepted (no string-to-number fallback).
pub fn require_f64(payload: &Payload, key: &str) -> Result<f64> {
    payload
        .get(key)
        .and_then(Value::as_f64)
        .ok_or_else(|| ModelError::TypeMismatch {
            field: key.to_string(),
            expected: "number",
        })
}

// ---------------------------------------------------------------------------
// Lenient numerics
// ---------------------------------------------------------------------------

/// Tolerant floating-point field: native numbers pass through, numeric
/// strings are parsed, everything else degrades to 0.0.
pub fn lenient_f64(payload: &Payload, key: &str) -> f64 {
    match payload.get(key) {
        Some(Value::Number(n)) => n.as_f64().unwrap_or(0.0),
        Some(Value::String(s)) => s.trim().parse().unwrap_or(0.0),
        _ => 0.0,
    }
}

/// Tolerant integer field: native numbers or numeric strings; anything else
/// stays absent.
pub fn lenient_i64(payload: &Payload, key: &str) -> Option<i64> {
    match payload.get(key) {
        Some(Value::Number(n)) => n.as_i64(),
        Some(Value::String(s)) => s.trim().parse().ok(),
        _ => None,
    }
}

// ---------------------------------------------------------------------------
// Tri-state booleans
// ---------------------------------------------------------------------------

/// Tri-state boolean over prioritized candidate keys.
///
/// The first present, non-null key is the one consulted; an unrecognized
/// value there yields unknown rather than falling through to later keys.
/// Accepted truthy forms: literal `true`, nonzero numbers, `"true"`, `"1"`,
/// `"yes"` (case-insensitive). Falsy: literal `false`, zero, `"false"`,
/// `"0"`, `"no"`.
pub fn tri_state_bool(payload: &Payload, keys: &[&str]) -> Option<bool> {
    let value = keys
        .iter()
        .find_map(|k| payload.get(*k).filter(|v| !v.is_null()))?;
    truthiness(value)
}

fn truthiness(value: &Value) -> Option<bool> {
    match value {
        Value::Bool(b) => Some(*b),
        Value::Number(n) => n.as_f64().map(|f| f != 0.0),
        Value::String(s) => match s.to_ascii_lowercase().as_str() {
            "true" | "1" | "yes" => Some(true),
            "false" | "0" | "no" => Some(false),
            _ => None,
        },
        _ => None,
    }
}

// ---------------------------------------------------------------------------
// Open bags
// ---------------------------------------------------------------------------

/// Open key-value bag: a nested object is taken as-is; an empty or
/// non-object value stays absent so round-trips do not grow empty maps.
pub fn data_bag(payload: &Payload, key: &str) -> Option<Payload> {
    match payload.get(key) {
        Some(Value::Object(map)) if !map.is_empty() => Some(map.clone()),
        _ => None,
    }
}

// ---------------------------------------------------------------------------
// Timestamps
// ---------------------------------------------------------------------------

/// Required timestamp field, strict path.
///
/// Accepts RFC 3339 or an offset-less `YYYY-MM-DDTHH:MM:SS[.fff]` form
/// (interpreted as UTC). A missing field, a non-string value, or any other
/// shape of text is a hard failure.
pub fn require_timestamp(payload: &Payload, key: &str) -> Result<DateTime<Utc>> {
    let raw = match payload.get(key) {
        Some(Value::String(s)) => s.as_str(),
        other => {
            return Err(ModelError::MalformedTimestamp {
                field: key.to_string(),
                value: other.map(stringify).unwrap_or_default(),
            })
        }
    };
    parse_iso8601(raw).ok_or_else(|| ModelError::MalformedTimestamp {
        field: key.to_string(),
        value: raw.to_string(),
    })
}

fn parse_iso8601(s: &str) -> Option<DateTime<Utc>> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt.with_timezone(&Utc));
    }
    s.parse::<NaiveDateTime>()
        .ok()
        .map(|naive| Utc.from_utc_datetime(&naive))
}

// ---------------------------------------------------------------------------
// Sequences
// ---------------------------------------------------------------------------

/// Required ordered-sequence field: a missing or non-sequence value is a
/// hard failure.
pub fn require_array<'a>(payload: &'a Payload, key: &str) -> Result<&'a Vec<Value>> {
    match payload.get(key) {
        Some(Value::Array(items)) => Ok(items),
        _ => Err(ModelError::MissingRequiredSequence {
            field: key.to_string(),
        }),
    }
}

/// Optional sequence of strings: each element is stringified independently;
/// absence or a non-sequence value degrades to empty.
pub fn optional_string_seq(payload: &Payload, key: &str) -> Vec<String> {
    match payload.get(key) {
        Some(Value::Array(items)) => items
            .iter()
            .filter(|v| !v.is_null())
            .map(stringify)
            .collect(),
        _ => Vec::new(),
    }
}
