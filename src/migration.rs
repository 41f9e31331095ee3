//! Auto-migration: create the books and reviews tables at startup.
//! Idempotent (IF NOT EXISTS); existing tables are left untouched.

use crate::error::AppError;
use sqlx::PgPool;

pub const BOOKS_TABLE: &str = "books";
pub const REVIEWS_TABLE: &str = "reviews";

/// DDL in dependency order: books before reviews (foreign key).
pub fn ddl_statements() -> Vec<String> {
    vec![
        format!(
            r#"
            CREATE TABLE IF NOT EXISTS {books} (
                id BIGSERIAL PRIMARY KEY,
                title TEXT NOT NULL DEFAULT '',
                isbn TEXT NOT NULL DEFAULT '',
                language TEXT NOT NULL DEFAULT '',
                publisher TEXT NOT NULL DEFAULT '',
                num_pages BIGINT NOT NULL DEFAULT 0,
                created_at TIMESTAMPTZ NOT NULL DEFAULT NOW(),
                updated_at TIMESTAMPTZ NOT NULL DEFAULT NOW()
            )
            "#,
            books = BOOKS_TABLE
        ),
        format!(
            r#"
            CREATE TABLE IF NOT EXISTS {reviews} (
                id BIGSERIAL PRIMARY KEY,
                book_id BIGINT NOT NULL REFERENCES {books} (id) ON DELETE CASCADE,
                rating BIGINT NOT NULL,
                comment TEXT NOT NULL DEFAULT '',
                created_at TIMESTAMPTZ NOT NULL DEFAULT NOW(),
                updated_at TIMESTAMPTZ NOT NULL DEFAULT NOW()
            )
            "#,
            reviews = REVIEWS_TABLE,
            books = BOOKS_TABLE
        ),
        format!(
            "CREATE INDEX IF NOT EXISTS idx_{reviews}_book_id ON {reviews} (book_id)",
            reviews = REVIEWS_TABLE
        ),
    ]
}

pub async fn apply_migrations(pool: &PgPool) -> Result<(), AppError> {
    for sql in ddl_statements() {
        tracing::debug!(sql = %sql.trim(), "migration");
        sqlx::query(&sql).execute(pool).await?;
    }
    tracing::info!("tables {} and {} are in place", BOOKS_TABLE, REVIEWS_TABLE);
    Ok(())
}
