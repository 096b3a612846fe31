//! Custom Axum extractors

use axum::body::Bytes;
use axum::extract::{FromRequest, FromRequestParts, Path, Request};
use axum::http::request::Parts;
use serde_json::Value;

use super::error::ApiError;
use crate::models::{BookmarkInput, ValidationError};

/// Bookmark id from the path.
///
/// Ids are integers; anything else cannot name a bookmark and is reported
/// as not found.
pub struct BookmarkId(pub i64);

impl<S> FromRequestParts<S> for BookmarkId
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(id): Path<String> = Path::from_request_parts(parts, state)
            .await
            .map_err(|_| ApiError::NotFound)?;

        id.parse().map(Self).map_err(|_| ApiError::NotFound)
    }
}

/// Request body as a loose bag of bookmark fields.
///
/// An empty body is an empty bag, so that presence checks report before
/// body shape does. A body that is not a JSON object is a 400; handlers that
/// must answer 404 first take `Result<InputBag, ApiError>`.
pub struct InputBag(pub BookmarkInput);

impl<S> FromRequest<S> for InputBag
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let malformed = || ApiError::Validation(ValidationError::MalformedBody);

        let bytes = Bytes::from_request(req, state)
            .await
            .map_err(|_| malformed())?;

        if bytes.iter().all(u8::is_ascii_whitespace) {
            return Ok(Self(BookmarkInput::default()));
        }

        let value: Value = serde_json::from_slice(&bytes).map_err(|_| malformed())?;
        if !value.is_object() {
            return Err(malformed());
        }

        serde_json::from_value(value)
            .map(Self)
            .map_err(|_| malformed())
    }
}
