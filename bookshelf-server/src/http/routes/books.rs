//! Book endpoints
//!
//! Each handler makes one repository call and writes one envelope.
//! Database failures map to 400, except lookups by id which use 500.

use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    routing::{delete, get, post},
    Json, Router,
};

use crate::http::error::ApiError;
use crate::http::extractors::{BookPayload, ValidBookId};
use crate::http::response::{DataResponse, MessageResponse};
use crate::http::server::AppState;
use crate::models::Book;

/// POST /api/create_books - insert a book
async fn create_book(
    State(state): State<Arc<AppState>>,
    BookPayload(new_book): BookPayload,
) -> Result<Json<DataResponse<Book>>, ApiError> {
    let book = state
        .books
        .create(new_book)
        .await
        .map_err(|e| ApiError::from_db(e, StatusCode::BAD_REQUEST, "could not create book"))?;

    tracing::info!(id = book.id, "Book created");
    Ok(Json(DataResponse::new("book has been added", book)))
}

/// DELETE /api/delete_book/{id} - delete a book by id
///
/// Succeeds whether or not the row existed.
async fn delete_book(
    State(state): State<Arc<AppState>>,
    ValidBookId(id): ValidBookId,
) -> Result<Json<MessageResponse>, ApiError> {
    let removed = state
        .books
        .delete(id)
        .await
        .map_err(|e| ApiError::from_db(e, StatusCode::BAD_REQUEST, "could not delete book"))?;

    tracing::debug!(%id, removed, "Book delete issued");
    Ok(Json(MessageResponse::new("book deleted successfully")))
}

/// GET /api/get_books - every book
async fn list_books(
    State(state): State<Arc<AppState>>,
) -> Result<Json<DataResponse<Vec<Book>>>, ApiError> {
    let books = state
        .books
        .list()
        .await
        .map_err(|e| ApiError::from_db(e, StatusCode::BAD_REQUEST, "could not get books"))?;

    Ok(Json(DataResponse::new("books fetched successfully", books)))
}

/// GET /api/get_book/{id} - a single book
async fn get_book(
    State(state): State<Arc<AppState>>,
    ValidBookId(id): ValidBookId,
) -> Result<Json<DataResponse<Book>>, ApiError> {
    let book = state.books.get(id).await.map_err(|e| {
        ApiError::from_db(e, StatusCode::INTERNAL_SERVER_ERROR, "could not get the book")
    })?;

    Ok(Json(DataResponse::new("book fetched successfully", book)))
}

/// Book routes, mounted under `/api`.
///
/// The trailing-slash variants have no `{id}` capture and answer with
/// the empty-id error.
pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/create_books", post(create_book))
        .route("/delete_book/", delete(delete_book))
        .route("/delete_book/{id}", delete(delete_book))
        .route("/get_books", get(list_books))
        .route("/get_book/", get(get_book))
        .route("/get_book/{id}", get(get_book))
}
