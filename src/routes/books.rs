//! Book and review routes.

use crate::handlers::{create_book, create_review, get_book, list_books, list_reviews};
use crate::state::AppState;
use axum::{routing::get, Router};

pub fn book_routes(state: AppState) -> Router {
    Router::new()
        .route("/books", get(list_books).post(create_book))
        .route("/books/:id", get(get_book))
        .route("/books/:id/reviews", get(list_reviews).post(create_review))
        .with_state(state)
}
