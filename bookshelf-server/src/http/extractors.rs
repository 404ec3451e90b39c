//! Custom Axum extractors

use axum::extract::rejection::PathRejection;
use axum::extract::{FromRequest, FromRequestParts, Path, Request};
use axum::http::header::CONTENT_TYPE;
use axum::http::request::Parts;
use axum::{Form, Json};

use super::error::ApiError;
use crate::models::{BookId, NewBook, ValidationError};

/// Extract and validate a book id from path.
///
/// Routes registered without an `{id}` segment yield an empty id,
/// which is rejected like a blank one.
pub struct ValidBookId(pub BookId);

impl<S> FromRequestParts<S> for ValidBookId
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(id): Path<String> = Path::from_request_parts(parts, state)
            .await
            .map_err(|rejection| match rejection {
                PathRejection::MissingPathParams(_) => {
                    ApiError::Validation(ValidationError::Empty { field: "id" })
                }
                other => {
                    tracing::debug!(rejection = %other, "Rejected book id");
                    ApiError::Validation(ValidationError::InvalidFormat {
                        field: "id",
                        reason: "must be valid UTF-8",
                    })
                }
            })?;

        Ok(Self(BookId::parse(&id)?))
    }
}

/// Extract a create request body.
///
/// Accepts `application/x-www-form-urlencoded` as well as JSON. Any
/// rejection (bad syntax, wrong types, missing content type) becomes a
/// 422 with a generic message.
pub struct BookPayload(pub NewBook);

impl<S> FromRequest<S> for BookPayload
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let is_form = req
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .is_some_and(|v| v.starts_with("application/x-www-form-urlencoded"));

        let book = if is_form {
            Form::<NewBook>::from_request(req, state)
                .await
                .map(|Form(book)| book)
                .map_err(|rejection| {
                    tracing::debug!(%rejection, "Rejected book form");
                    ApiError::Unprocessable
                })?
        } else {
            Json::<NewBook>::from_request(req, state)
                .await
                .map(|Json(book)| book)
                .map_err(|rejection| {
                    tracing::debug!(%rejection, "Rejected book payload");
                    ApiError::Unprocessable
                })?
        };

        Ok(Self(book))
    }
}
