//! In-process store with the same semantics as the PostgreSQL one, for route tests. Ids start at 1.

use crate::error::AppError;
use crate::model::{Book, NewBook, NewReview, Review};
use crate::store::BookStore;
use async_trait::async_trait;
use chrono::Utc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::RwLock;

#[derive(Default)]
struct Tables {
    books: Vec<Book>,
    reviews: Vec<Review>,
}

#[derive(Default)]
pub struct MemoryStore {
    tables: RwLock<Tables>,
    unavailable: AtomicBool,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make every call fail as if the database were down.
    pub fn set_unavailable(&self, down: bool) {
        self.unavailable.store(down, Ordering::SeqCst);
    }

    pub fn review_count(&self) -> usize {
        self.tables.read().map(|t| t.reviews.len()).unwrap_or(0)
    }

    fn check(&self) -> Result<(), AppError> {
        if self.unavailable.load(Ordering::SeqCst) {
            return Err(AppError::Db(sqlx::Error::PoolTimedOut));
        }
        Ok(())
    }

    fn read(&self) -> Result<std::sync::RwLockReadGuard<'_, Tables>, AppError> {
        self.check()?;
        self.tables
            .read()
            .map_err(|e| AppError::Internal(format!("store lock poisoned: {}", e)))
    }

    fn write(&self) -> Result<std::sync::RwLockWriteGuard<'_, Tables>, AppError> {
        self.check()?;
        self.tables
            .write()
            .map_err(|e| AppError::Internal(format!("store lock poisoned: {}", e)))
    }
}

#[async_trait]
impl BookStore for MemoryStore {
    async fn ping(&self) -> Result<(), AppError> {
        self.check()
    }

    async fn list_books(&self) -> Result<Vec<Book>, AppError> {
        Ok(self.read()?.books.clone())
    }

    async fn find_book(&self, id: i64) -> Result<Option<Book>, AppError> {
        Ok(self.read()?.books.iter().find(|b| b.id == id).cloned())
    }

    async fn list_reviews(&self, book_id: i64) -> Result<Vec<Review>, AppError> {
        Ok(self
            .read()?
            .reviews
            .iter()
            .filter(|r| r.book_id == book_id)
            .cloned()
            .collect())
    }

    async fn create_book(&self, book: NewBook) -> Result<Book, AppError> {
        let mut tables = self.write()?;
        let now = Utc::now();
        let created = Book {
            id: tables.books.last().map(|b| b.id + 1).unwrap_or(1),
            title: book.title,
            isbn: book.isbn,
            language: book.language,
            publisher: book.publisher,
            num_pages: book.num_pages,
            created_at: now,
            updated_at: now,
            reviews: None,
        };
        tables.books.push(created.clone());
        Ok(created)
    }

    async fn create_review(&self, book_id: i64, review: NewReview) -> Result<Review, AppError> {
        let mut tables = self.write()?;
        if !tables.books.iter().any(|b| b.id == book_id) {
            return Err(AppError::Db(sqlx::Error::RowNotFound));
        }
        let now = Utc::now();
        let created = Review {
            id: tables.reviews.last().map(|r| r.id + 1).unwrap_or(1),
            book_id,
            rating: review.rating,
            comment: review.comment,
            created_at: now,
            updated_at: now,
        };
        tables.reviews.push(created.clone());
        Ok(created)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn new_book(title: &str) -> NewBook {
        NewBook {
            title: title.into(),
            ..NewBook::default()
        }
    }

    #[tokio::test]
    async fn assigns_sequential_ids() {
        let store = MemoryStore::new();
        let a = store.create_book(new_book("A")).await.unwrap();
        let b = store.create_book(new_book("B")).await.unwrap();
        assert_eq!((a.id, b.id), (1, 2));
        assert_eq!(store.list_books().await.unwrap().len(), 2);
    }

    #[tokio::test]
    async fn reviews_filtered_by_book_and_eager_loaded() {
        let store = MemoryStore::new();
        let a = store.create_book(new_book("A")).await.unwrap();
        let b = store.create_book(new_book("B")).await.unwrap();
        for (book, rating) in [(a.id, 5), (b.id, 2), (a.id, 4)] {
            store
                .create_review(book, NewReview { rating, comment: String::new() })
                .await
                .unwrap();
        }
        let reviews = store.list_reviews(a.id).await.unwrap();
        assert_eq!(reviews.iter().map(|r| r.rating).collect::<Vec<_>>(), vec![5, 4]);

        let loaded = store.find_book_with_reviews(a.id).await.unwrap().unwrap();
        assert_eq!(loaded.reviews.map(|r| r.len()), Some(2));
        assert!(store.find_book_with_reviews(99).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn review_for_missing_book_is_rejected() {
        let store = MemoryStore::new();
        let err = store
            .create_review(7, NewReview { rating: 1, comment: String::new() })
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::Db(sqlx::Error::RowNotFound)));
        assert_eq!(store.review_count(), 0);
    }

    #[tokio::test]
    async fn unavailable_store_fails() {
        let store = MemoryStore::new();
        store.set_unavailable(true);
        assert!(store.ping().await.is_err());
        assert!(store.list_books().await.is_err());
        store.set_unavailable(false);
        assert!(store.ping().await.is_ok());
    }
}
