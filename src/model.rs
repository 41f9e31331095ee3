//! Book and review records plus their request bodies. JSON keys are camelCase.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Book {
    pub id: i64,
    pub title: String,
    pub isbn: String,
    pub language: String,
    pub publisher: String,
    pub num_pages: i64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    /// Only populated on fetch-by-id.
    #[sqlx(skip)]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reviews: Option<Vec<Review>>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Review {
    pub id: i64,
    pub book_id: i64,
    pub rating: i64,
    pub comment: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Body of `POST /api/books`. Unknown keys (including `id`) are ignored.
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct NewBook {
    pub title: String,
    pub isbn: String,
    pub language: String,
    pub publisher: String,
    pub num_pages: i64,
}

/// Body of `POST /api/books/:id/reviews`. `id` and `bookId` are ignored; the path decides the book.
#[derive(Clone, Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewReview {
    pub rating: i64,
    #[serde(default)]
    pub comment: String,
}

/// Parse a path id. Anything that is not an unsigned integer representable in BIGINT matches no row.
pub fn parse_id(raw: &str) -> Option<i64> {
    raw.parse::<u64>().ok().and_then(|n| i64::try_from(n).ok())
}
