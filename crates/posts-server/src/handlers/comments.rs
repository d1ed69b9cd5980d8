//! Comment handlers (list and create for a post).

use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use posts_storage::{Comment, StorageError};

use super::{json_body, parse_post_id};
use crate::error::{messages, ApiError};
use crate::schema::comments::CreateCommentRequest;
use crate::state::AppState;

/// Lists the comments of an existing post.
///
/// `GET /api/posts/{id}/comments`
///
/// A post with no comments is a 404, distinct from a missing post.
pub async fn list_comments(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Vec<Comment>>, ApiError> {
    let id = parse_post_id(&id)?;
    let store = state.store.lock().await;

    store
        .find_by_id(id)
        .map_err(ApiError::storage(messages::COMMENTS_RETRIEVE_FAILED))?
        .ok_or_else(ApiError::post_not_found)?;

    let comments = store
        .find_post_comments(id)
        .map_err(ApiError::storage(messages::COMMENTS_RETRIEVE_FAILED))?;
    if comments.is_empty() {
        return Err(ApiError::NotFound(messages::NO_COMMENTS.to_string()));
    }
    Ok(Json(comments))
}

/// Adds a comment to an existing post.
///
/// `POST /api/posts/{id}/comments`
pub async fn create_comment(
    State(state): State<AppState>,
    Path(id): Path<String>,
    body: Result<Json<CreateCommentRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<Comment>), ApiError> {
    let id = parse_post_id(&id)?;
    let mut store = state.store.lock().await;

    store
        .find_by_id(id)
        .map_err(ApiError::storage(messages::COMMENT_SAVE_FAILED))?
        .ok_or_else(ApiError::post_not_found)?;

    let new_comment = json_body(body, messages::COMMENT_TEXT_REQUIRED)?
        .validate(id)
        .ok_or_else(|| ApiError::BadRequest(messages::COMMENT_TEXT_REQUIRED.to_string()))?;

    let comment = match store.insert_comment(&new_comment) {
        Ok(comment) => comment,
        Err(StorageError::PostNotFound(_)) => return Err(ApiError::post_not_found()),
        Err(err) => return Err(ApiError::storage(messages::COMMENT_SAVE_FAILED)(err)),
    };
    tracing::info!(post_id = %id, comment_id = %comment.id, "comment created");
    Ok((StatusCode::CREATED, Json(comment)))
}
