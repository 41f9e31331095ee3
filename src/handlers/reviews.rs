use crate::error::AppError;
use crate::handlers::books::book_not_found;
use crate::model::{parse_id, NewReview};
use crate::response::{created, ok};
use crate::state::AppState;
use axum::{
    extract::{rejection::JsonRejection, Path, State},
    response::IntoResponse,
    Json,
};

/// GET /api/books/:id/reviews
pub async fn list_reviews(
    State(state): State<AppState>,
    Path(id_str): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let reviews = match parse_id(&id_str) {
        Some(book_id) => state.store.list_reviews(book_id).await?,
        None => Vec::new(),
    };
    Ok(ok(reviews))
}

/// POST /api/books/:id/reviews
///
/// The body is parsed first (400 if malformed), then the book must exist (404).
/// `bookId` always comes from the path and the store assigns `id`.
pub async fn create_review(
    State(state): State<AppState>,
    Path(id_str): Path<String>,
    payload: Result<Json<NewReview>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Json(review) = payload?;
    let book_id = parse_id(&id_str).ok_or_else(|| book_not_found(&id_str))?;
    if state.store.find_book(book_id).await?.is_none() {
        return Err(book_not_found(&id_str));
    }
    let review = state.store.create_review(book_id, review).await?;
    tracing::info!(book_id, review_id = review.id, "review created");
    Ok(created(review))
}
