//! Post handlers (list, get, create, update, delete).

use axum::extract::rejection::{JsonRejection, QueryRejection};
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use posts_storage::{Post, PostFilter};

use super::{json_body, parse_post_id};
use crate::error::{messages, ApiError};
use crate::schema::posts::{CreatePostRequest, DeletePostResponse, UpdatePostRequest};
use crate::state::AppState;

/// Lists posts, optionally filtered by exact `title` / `contents`.
///
/// `GET /api/posts`
pub async fn list_posts(
    State(state): State<AppState>,
    filter: Result<Query<PostFilter>, QueryRejection>,
) -> Result<Json<Vec<Post>>, ApiError> {
    let Query(filter) = filter.map_err(|rejection| ApiError::BadRequest(rejection.body_text()))?;
    let store = state.store.lock().await;
    let posts = store
        .find(&filter)
        .map_err(ApiError::storage(messages::POSTS_RETRIEVE_FAILED))?;
    Ok(Json(posts))
}

/// Returns one post.
///
/// `GET /api/posts/{id}`
pub async fn get_post(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Post>, ApiError> {
    let id = parse_post_id(&id)?;
    let store = state.store.lock().await;
    let post = store
        .find_by_id(id)
        .map_err(ApiError::storage(messages::POST_RETRIEVE_FAILED))?
        .ok_or_else(ApiError::post_not_found)?;
    Ok(Json(post))
}

/// Creates a post.
///
/// `POST /api/posts`
pub async fn create_post(
    State(state): State<AppState>,
    body: Result<Json<CreatePostRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<Post>), ApiError> {
    let new_post = json_body(body, messages::POST_FIELDS_REQUIRED)?
        .validate()
        .ok_or_else(|| ApiError::BadRequest(messages::POST_FIELDS_REQUIRED.to_string()))?;

    let mut store = state.store.lock().await;
    let post = store
        .insert(&new_post)
        .map_err(ApiError::storage(messages::POST_SAVE_FAILED))?;
    tracing::info!(post_id = %post.id, "post created");
    Ok((StatusCode::CREATED, Json(post)))
}

/// Replaces a post's title and contents, returning the updated post.
///
/// `PUT /api/posts/{id}`
pub async fn update_post(
    State(state): State<AppState>,
    Path(id): Path<String>,
    body: Result<Json<UpdatePostRequest>, JsonRejection>,
) -> Result<Json<Post>, ApiError> {
    let id = parse_post_id(&id)?;
    let mut store = state.store.lock().await;

    if store
        .find_by_id(id)
        .map_err(ApiError::storage(messages::POST_UPDATE_FAILED))?
        .is_none()
    {
        return Err(ApiError::post_not_found());
    }

    let changes = json_body(body, messages::POST_FIELDS_REQUIRED)?
        .validate()
        .ok_or_else(|| ApiError::BadRequest(messages::POST_FIELDS_REQUIRED.to_string()))?;

    let post = store
        .update(id, &changes)
        .map_err(ApiError::storage(messages::POST_UPDATE_FAILED))?
        .ok_or_else(ApiError::post_not_found)?;
    tracing::info!(post_id = %post.id, "post updated");
    Ok(Json(post))
}

/// Deletes a post and its comments, returning the removed post.
///
/// `DELETE /api/posts/{id}`
pub async fn delete_post(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<DeletePostResponse>, ApiError> {
    let id = parse_post_id(&id)?;
    let mut store = state.store.lock().await;

    let post = store
        .find_by_id(id)
        .map_err(ApiError::storage(messages::POST_REMOVE_FAILED))?
        .ok_or_else(ApiError::post_not_found)?;

    let removed = store
        .remove(id)
        .map_err(ApiError::storage(messages::POST_REMOVE_FAILED))?;
    if removed == 0 {
        return Err(ApiError::post_not_found());
    }

    tracing::info!(post_id = %id, "post deleted");
    Ok(Json(DeletePostResponse {
        message: messages::POST_DELETED.to_string(),
        post,
    }))
}
