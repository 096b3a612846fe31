//! Bookmark endpoints
//!
//! Reads sanitize `title` and `description` on the way out; writes validate
//! on the way in and store text as given.

use axum::{
    extract::{OriginalUri, State},
    http::{header, StatusCode},
    routing::get,
    Json, Router,
};

use crate::http::error::ApiError;
use crate::http::extractors::{BookmarkId, InputBag};
use crate::models::{Bookmark, BookmarkPatch, NewBookmark};
use crate::state::AppState;

/// GET /bookmarks - every bookmark, in insertion order
async fn list_bookmarks(State(state): State<AppState>) -> Result<Json<Vec<Bookmark>>, ApiError> {
    let bookmarks = state.store().list().await?;
    Ok(Json(bookmarks.into_iter().map(Bookmark::sanitized).collect()))
}

/// POST /bookmarks - validate and insert, Location points at the new record
async fn create_bookmark(
    State(state): State<AppState>,
    OriginalUri(uri): OriginalUri,
    InputBag(input): InputBag,
) -> Result<(StatusCode, [(header::HeaderName, String); 1], Json<Bookmark>), ApiError> {
    let new = NewBookmark::try_from(input)?;
    let bookmark = state.store().insert(new).await?;

    let location = format!("{}/{}", uri.path().trim_end_matches('/'), bookmark.id);
    tracing::info!("Bookmark with id {} was created", bookmark.id);

    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, location)],
        Json(bookmark),
    ))
}

/// GET /bookmarks/{id}
async fn get_bookmark(
    State(state): State<AppState>,
    BookmarkId(id): BookmarkId,
) -> Result<Json<Bookmark>, ApiError> {
    let bookmark = state.store().get(id).await?.ok_or_else(|| {
        tracing::debug!("Bookmark with id {} not found", id);
        ApiError::NotFound
    })?;

    Ok(Json(bookmark.sanitized()))
}

/// DELETE /bookmarks/{id} - the removed-row count decides 404 vs 204
async fn delete_bookmark(
    State(state): State<AppState>,
    BookmarkId(id): BookmarkId,
) -> Result<StatusCode, ApiError> {
    if state.store().delete(id).await? == 0 {
        return Err(ApiError::NotFound);
    }

    tracing::info!("Bookmark with id {} was deleted", id);
    Ok(StatusCode::NO_CONTENT)
}

/// PATCH /bookmarks/{id} - apply the supplied fields only
async fn update_bookmark(
    State(state): State<AppState>,
    BookmarkId(id): BookmarkId,
    body: Result<InputBag, ApiError>,
) -> Result<StatusCode, ApiError> {
    // Existence first: an unknown id is a 404 whatever the body holds.
    if state.store().get(id).await?.is_none() {
        return Err(ApiError::NotFound);
    }

    let InputBag(input) = body?;
    let patch = BookmarkPatch::try_from(input)?;

    // Deleted between the check and the write.
    if state.store().update(id, patch).await? == 0 {
        return Err(ApiError::NotFound);
    }

    tracing::info!("Bookmark with id {} was updated", id);
    Ok(StatusCode::NO_CONTENT)
}

/// Bookmark routes
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/bookmarks", get(list_bookmarks).post(create_bookmark))
        .route(
            "/bookmarks/{id}",
            get(get_bookmark)
                .delete(delete_bookmark)
                .patch(update_bookmark),
        )
}
