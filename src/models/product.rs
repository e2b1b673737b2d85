//! Catalog models.
//!
//! Everything in this file sits on the tolerant side of the parsing split:
//! these are display fields, so malformed numerics degrade to defaults and
//! decode never fails.

use serde::Serialize;
use serde_json::Value;

use crate::payload::{self, Payload};

// ---------------------------------------------------------------------------
// ProductCategory
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductCategory {
    pub id: String,
    pub name: String,
    pub localized_name: Option<String>,
}

impl ProductCategory {
    pub fn from_payload(p: &Payload) -> Self {
        Self {
            id: payload::string_or_empty(p, "id"),
            name: payload::string_or_empty(p, "name"),
            localized_name: payload::optional_string_multi(p, &["localizedName", "localized_name"]),
        }
    }

    pub fn to_payload(&self) -> Payload {
        to_object(self)
    }
}

// ---------------------------------------------------------------------------
// ProductDetails
// ---------------------------------------------------------------------------

/// Full catalog entry for one product.
///
/// `price` defaults to 0.0 and `stock` to absent when the upstream value is
/// unparsable; callers needing strict validation must check for the default
/// themselves.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductDetails {
    pub id: String,
    pub name: String,
    pub localized_name: Option<String>,
    pub description: Option<String>,
    pub localized_description: Option<String>,
    pub price: f64,
    pub image_url: String,
    pub image_urls: Vec<String>,
    pub stock: Option<i64>,
    pub category: Option<ProductCategory>,
}

impl ProductDetails {
    /// Decode a product from an untyped payload. Never fails.
    pub fn from_payload(p: &Payload) -> Self {
        let category = match p.get("category") {
            Some(Value::Object(c)) => Some(ProductCategory::from_payload(c)),
            _ => None,
        };

        Self {
            id: payload::string_or_empty(p, "id"),
            name: payload::string_or_empty(p, "name"),
            localized_name: payload::optional_string_multi(p, &["localizedName", "localized_name"]),
            description: payload::optional_string(p, "description"),
            localized_description: payload::optional_string_multi(
                p,
                &["localizedDescription", "localized_description"],
            ),
            price: payload::lenient_f64(p, "price"),
            image_url: payload::string_or_empty(p, "imageUrl"),
            image_urls: payload::optional_string_seq(p, "imageUrls"),
            stock: payload::lenient_i64(p, "stock"),
            category,
        }
    }

    /// Canonical camelCase encoding; the category is recursively encoded.
    pub fn to_payload(&self) -> Payload {
        to_object(self)
    }
}

// ---------------------------------------------------------------------------
// ProductComment
// ---------------------------------------------------------------------------

/// A customer comment shown on the product page. `created_at` is kept as
/// the verbatim upstream string: it is display-only and never ordered on.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductComment {
    pub id: String,
    pub user_id: Option<String>,
    pub user_name: String,
    pub text: String,
    pub created_at: Option<String>,
}

impl ProductComment {
    pub fn from_payload(p: &Payload) -> Self {
        Self {
            id: payload::string_or_empty(p, "id"),
            user_id: payload::optional_string(p, "userId"),
            user_name: payload::string_or_empty(p, "userName"),
            text: payload::string_or_empty(p, "text"),
            created_at: payload::optional_string(p, "createdAt"),
        }
    }

    pub fn to_payload(&self) -> Payload {
        to_object(self)
    }
}

// ---------------------------------------------------------------------------
// ProductRating
// ---------------------------------------------------------------------------

/// Aggregate rating across all reviewers.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductRating {
    pub average: f64,
    pub count: Option<i64>,
}

impl ProductRating {
    pub fn from_payload(p: &Payload) -> Self {
        Self {
            average: payload::lenient_f64(p, "average"),
            count: payload::lenient_i64(p, "count"),
        }
    }

    pub fn to_payload(&self) -> Payload {
        to_object(self)
    }
}

// ---------------------------------------------------------------------------
// ProductUserRating
// ---------------------------------------------------------------------------

/// One user's star rating. Defaults to 5 when absent or unparsable.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductUserRating {
    pub user_id: Option<String>,
    pub rating: i64,
}

impl ProductUserRating {
    pub fn from_payload(p: &Payload) -> Self {
        Self {
            user_id: payload::optional_string(p, "userId"),
            rating: payload::lenient_i64(p, "rating").unwrap_or(5),
        }
    }

    pub fn to_payload(&self) -> Payload {
        to_object(self)
    }
}

// ---------------------------------------------------------------------------
// ProductUserData
// ---------------------------------------------------------------------------

/// Per-user relationship to a product (wishlist flag, purchase history).
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductUserData {
    pub user_id: Option<String>,
    pub is_favorite: Option<bool>,
    pub has_purchased: Option<bool>,
}

impl ProductUserData {
    pub fn from_payload(p: &Payload) -> Self {
        Self {
            user_id: payload::optional_string(p, "userId"),
            is_favorite: payload::tri_state_bool(p, &["isFavorite", "is_favorite"]),
            has_purchased: payload::tri_state_bool(p, &["hasPurchased", "has_purchased"]),
        }
    }

    pub fn to_payload(&self) -> Payload {
        to_object(self)
    }
}

// ---------------------------------------------------------------------------
// ProductReviewForm
// ---------------------------------------------------------------------------

/// Contents of the review submission form. Rating defaults to 5 stars.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductReviewForm {
    pub name: String,
    pub email: String,
    pub comment: String,
    pub rating: i64,
}

impl ProductReviewForm {
    pub fn from_payload(p: &Payload) -> Self {
        Self {
            name: payload::string_or_empty(p, "name"),
            email: payload::string_or_empty(p, "email"),
            comment: payload::string_or_empty(p, "comment"),
            rating: payload::lenient_i64(p, "rating").unwrap_or(5),
        }
    }

    pub fn to_payload(&self) -> Payload {
        to_object(self)
    }
}

// ---------------------------------------------------------------------------

fn to_object<T: Serialize>(value: &T) -> Payload {
    match serde_json::to_value(value) {
        Ok(Value::Object(map)) => map,
        _ => Payload::new(),
    }
}
