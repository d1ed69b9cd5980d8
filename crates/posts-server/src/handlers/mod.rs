//! HTTP handler modules for the posts API.
//!
//! Each handler validates its input, acquires the store lock, awaits the
//! store calls it needs, and maps the outcome to a JSON response. No handler
//! calls another.

pub mod comments;
pub mod posts;
pub mod root;

use axum::extract::rejection::JsonRejection;
use axum::Json;
use posts_storage::PostId;

use crate::error::ApiError;

/// Parses a `{id}` path segment. Ids that are not integers cannot name a
/// stored post, so they resolve to 404.
fn parse_post_id(raw: &str) -> Result<PostId, ApiError> {
    raw.parse().map_err(|_| ApiError::post_not_found())
}

/// Unwraps a JSON body, turning a missing or unparsable body into a 400 with
/// the endpoint's validation message.
fn json_body<T>(body: Result<Json<T>, JsonRejection>, message: &str) -> Result<T, ApiError> {
    match body {
        Ok(Json(value)) => Ok(value),
        Err(rejection) => {
            tracing::debug!(%rejection, "rejected request body");
            Err(ApiError::BadRequest(message.to_string()))
        }
    }
}
