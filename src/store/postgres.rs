//! PostgreSQL-backed store over a sqlx pool.

use crate::config::DbConfig;
use crate::error::AppError;
use crate::migration::{BOOKS_TABLE, REVIEWS_TABLE};
use crate::model::{Book, NewBook, NewReview, Review};
use crate::store::BookStore;
use async_trait::async_trait;
use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;

const BOOK_COLUMNS: &str = "id, title, isbn, language, publisher, num_pages, created_at, updated_at";
const REVIEW_COLUMNS: &str = "id, book_id, rating, comment, created_at, updated_at";

#[derive(Clone)]
pub struct PgStore {
    pool: PgPool,
}

impl PgStore {
    pub fn new(pool: PgPool) -> Self {
        PgStore { pool }
    }

    /// Open a pool from config. Fails if the server is unreachable or rejects the credentials.
    pub async fn connect(config: &DbConfig) -> Result<Self, AppError> {
        let pool = PgPoolOptions::new()
            .max_connections(config.max_connections)
            .connect_with(config.connect_options())
            .await?;
        Ok(PgStore { pool })
    }

    pub fn pool(&self) -> &PgPool {
        &self.pool
    }
}

#[async_trait]
impl BookStore for PgStore {
    async fn ping(&self) -> Result<(), AppError> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }

    async fn list_books(&self) -> Result<Vec<Book>, AppError> {
        let sql = format!("SELECT {} FROM {} ORDER BY id", BOOK_COLUMNS, BOOKS_TABLE);
        tracing::debug!(sql = %sql, "query");
        let books = sqlx::query_as::<_, Book>(&sql).fetch_all(&self.pool).await?;
        Ok(books)
    }

    async fn find_book(&self, id: i64) -> Result<Option<Book>, AppError> {
        let sql = format!("SELECT {} FROM {} WHERE id = $1", BOOK_COLUMNS, BOOKS_TABLE);
        tracing::debug!(sql = %sql, id, "query");
        let book = sqlx::query_as::<_, Book>(&sql)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(book)
    }

    async fn list_reviews(&self, book_id: i64) -> Result<Vec<Review>, AppError> {
        let sql = format!(
            "SELECT {} FROM {} WHERE book_id = $1 ORDER BY id",
            REVIEW_COLUMNS, REVIEWS_TABLE
        );
        tracing::debug!(sql = %sql, book_id, "query");
        let reviews = sqlx::query_as::<_, Review>(&sql)
            .bind(book_id)
            .fetch_all(&self.pool)
            .await?;
        Ok(reviews)
    }

    async fn create_book(&self, book: NewBook) -> Result<Book, AppError> {
        let sql = format!(
            "INSERT INTO {} (title, isbn, language, publisher, num_pages) VALUES ($1, $2, $3, $4, $5) RETURNING {}",
            BOOKS_TABLE, BOOK_COLUMNS
        );
        tracing::debug!(sql = %sql, "query");
        let created = sqlx::query_as::<_, Book>(&sql)
            .bind(&book.title)
            .bind(&book.isbn)
            .bind(&book.language)
            .bind(&book.publisher)
            .bind(book.num_pages)
            .fetch_one(&self.pool)
            .await?;
        Ok(created)
    }

    async fn create_review(&self, book_id: i64, review: NewReview) -> Result<Review, AppError> {
        let sql = format!(
            "INSERT INTO {} (book_id, rating, comment) VALUES ($1, $2, $3) RETURNING {}",
            REVIEWS_TABLE, REVIEW_COLUMNS
        );
        tracing::debug!(sql = %sql, book_id, "query");
        let created = sqlx::query_as::<_, Review>(&sql)
            .bind(book_id)
            .bind(review.rating)
            .bind(&review.comment)
            .fetch_one(&self.pool)
            .await?;
        Ok(created)
    }
}
