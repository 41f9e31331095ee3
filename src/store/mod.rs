//! Persistence seam: the operations the HTTP layer needs, one call per route.

#[cfg(test)]
pub mod memory;
pub mod postgres;

#[cfg(test)]
pub use memory::MemoryStore;
pub use postgres::PgStore;

use crate::error::AppError;
use crate::model::{Book, NewBook, NewReview, Review};
use async_trait::async_trait;

#[async_trait]
pub trait BookStore: Send + Sync + 'static {
    /// Round-trip to the backing store. Used by the readiness probe.
    async fn ping(&self) -> Result<(), AppError>;

    /// All books ordered by id, without reviews.
    async fn list_books(&self) -> Result<Vec<Book>, AppError>;

    /// One book by primary key, without reviews.
    async fn find_book(&self, id: i64) -> Result<Option<Book>, AppError>;

    /// Reviews whose `book_id` equals `book_id`, ordered by id.
    async fn list_reviews(&self, book_id: i64) -> Result<Vec<Review>, AppError>;

    async fn create_book(&self, book: NewBook) -> Result<Book, AppError>;

    /// Insert a review for `book_id`. Callers check the book exists first.
    async fn create_review(&self, book_id: i64, review: NewReview) -> Result<Review, AppError>;

    /// One book with its reviews eager-loaded.
    async fn find_book_with_reviews(&self, id: i64) -> Result<Option<Book>, AppError> {
        let Some(mut book) = self.find_book(id).await? else {
            return Ok(None);
        };
        book.reviews = Some(self.list_reviews(id).await?);
        Ok(Some(book))
    }
}
