//! API error types with HTTP status code mapping.
//!
//! [`ApiError`] is the error type for every endpoint. It implements
//! `axum::response::IntoResponse`, choosing the status code and the JSON key
//! clients expect for each class of failure:
//!
//! | Variant | Status | Body |
//! |---|---|---|
//! | `BadRequest` | 400 | `{ "errorMessage": ... }` |
//! | `NotFound` | 404 | `{ "message": ... }` |
//! | `InternalError` | 500 | `{ "error": ... }` |

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use posts_storage::StorageError;

/// Fixed client-facing messages.
pub mod messages {
    pub const POSTS_RETRIEVE_FAILED: &str = "The posts information could not be retrieved.";
    pub const POST_RETRIEVE_FAILED: &str = "The post information could not be retrieved.";
    pub const POST_NOT_FOUND: &str = "The post with the specified ID does not exist.";
    pub const NO_COMMENTS: &str = "The post with the specified ID does not have any comments.";
    pub const COMMENTS_RETRIEVE_FAILED: &str = "The comments information could not be retrieved.";
    pub const POST_FIELDS_REQUIRED: &str = "Please provide title and contents for the post.";
    pub const POST_SAVE_FAILED: &str = "There was an error while saving the post to the database";
    pub const COMMENT_TEXT_REQUIRED: &str = "Please provide text for the comment.";
    pub const COMMENT_SAVE_FAILED: &str =
        "There was an error while saving the comment to the database";
    pub const POST_UPDATE_FAILED: &str = "The post information could not be modified.";
    pub const POST_REMOVE_FAILED: &str = "The post could not be removed";
    pub const POST_DELETED: &str = "post deleted";
}

/// API errors with HTTP status code mapping.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// Resource absent (404).
    #[error("not found: {0}")]
    NotFound(String),

    /// Missing or malformed input (400).
    #[error("bad request: {0}")]
    BadRequest(String),

    /// Persistence failure (500). Carries only the client-facing message.
    #[error("internal error: {0}")]
    InternalError(String),
}

impl ApiError {
    /// 404 for a post that does not exist.
    pub fn post_not_found() -> Self {
        ApiError::NotFound(messages::POST_NOT_FOUND.to_string())
    }

    /// Returns a `map_err` adapter that logs a storage failure and replaces
    /// it with a 500 carrying `message`.
    pub fn storage(message: &'static str) -> impl FnOnce(StorageError) -> ApiError {
        move |err| {
            tracing::error!(error = %err, "{}", message);
            ApiError::InternalError(message.to_string())
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, body) = match self {
            ApiError::NotFound(msg) => (
                StatusCode::NOT_FOUND,
                serde_json::json!({ "message": msg }),
            ),
            ApiError::BadRequest(msg) => (
                StatusCode::BAD_REQUEST,
                serde_json::json!({ "errorMessage": msg }),
            ),
            ApiError::InternalError(msg) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                serde_json::json!({ "error": msg }),
            ),
        };

        (status, axum::Json(body)).into_response()
    }
}
