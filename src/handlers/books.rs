//! Book handlers: list, read (with reviews), create.

use crate::error::AppError;
use crate::model::{parse_id, NewBook};
use crate::response::{created, ok};
use crate::state::AppState;
use axum::{
    extract::{rejection::JsonRejection, Path, State},
    response::IntoResponse,
    Json,
};

pub(crate) fn book_not_found(id: &str) -> AppError {
    AppError::NotFound(format!("book {}", id))
}

/// GET /api/books
pub async fn list_books(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let books = state.store.list_books().await?;
    Ok(ok(books))
}

/// GET /api/books/:id — the book with its reviews.
pub async fn get_book(
    State(state): State<AppState>,
    Path(id_str): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let id = parse_id(&id_str).ok_or_else(|| book_not_found(&id_str))?;
    let book = state
        .store
        .find_book_with_reviews(id)
        .await?
        .ok_or_else(|| book_not_found(&id_str))?;
    Ok(ok(book))
}

/// POST /api/books
pub async fn create_book(
    State(state): State<AppState>,
    payload: Result<Json<NewBook>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Json(book) = payload?;
    let book = state.store.create_book(book).await?;
    tracing::info!(book_id = book.id, "book created");
    Ok(created(book))
}
