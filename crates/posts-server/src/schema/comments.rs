//! Comment request types.

use posts_storage::{NewComment, PostId};
use serde::Deserialize;

use super::required;

/// Body of `POST /api/posts/{id}/comments`.
///
/// Any `post_id` in the body is ignored; the post comes from the path.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CreateCommentRequest {
    #[serde(default)]
    pub text: Option<String>,
}

impl CreateCommentRequest {
    /// Returns the comment to insert on `post_id`, or `None` if text is
    /// missing.
    pub fn validate(self, post_id: PostId) -> Option<NewComment> {
        Some(NewComment {
            text: required(self.text)?,
            post_id,
        })
    }
}
