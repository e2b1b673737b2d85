//! Typed data models for the storefront API.
//!
//! Normalizes loosely-shaped JSON payloads (missing keys, nulls, mixed
//! camelCase/snake_case naming, numbers-as-strings) into immutable, strongly
//! typed records, and encodes them back into a single canonical camelCase
//! shape. This crate is a pure transformation layer: no I/O, no shared
//! state, no concurrency surface.
//!
//! # Quick start
//!
//! ```
//! use storefront_models::User;
//!
//! let raw = serde_json::json!({
//!     "id": 5,
//!     "name": "Ana",
//!     "email": "a@x.com",
//!     "is_blocked": "yes",
//!     "bio": "hi",
//! });
//!
//! let user = User::from_payload(raw.as_object().unwrap());
//! assert_eq!(user.id, "5");
//! assert_eq!(user.is_blocked, Some(true));
//!
//! // Records are immutable; derive a changed copy with struct update syntax.
//! let renamed = User { name: "Anna".into(), ..user.clone() };
//! assert_eq!(renamed.email, user.email);
//! ```

pub mod error;
pub mod models;
pub mod payload;

pub use error::{ModelError, Result};
pub use models::*;
pub use payload::Payload;
