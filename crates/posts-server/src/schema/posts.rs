//! Post request/response types.

use posts_storage::{NewPost, Post};
use serde::{Deserialize, Serialize};

use super::required;

/// Body of `POST /api/posts`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CreatePostRequest {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub contents: Option<String>,
}

impl CreatePostRequest {
    /// Returns the post to insert, or `None` if title or contents is missing.
    pub fn validate(self) -> Option<NewPost> {
        Some(NewPost {
            title: required(self.title)?,
            contents: required(self.contents)?,
        })
    }
}

/// Body of `PUT /api/posts/{id}`. Both fields are replaced.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdatePostRequest {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub contents: Option<String>,
}

impl UpdatePostRequest {
    /// Returns the replacement fields, or `None` if either is missing.
    pub fn validate(self) -> Option<NewPost> {
        Some(NewPost {
            title: required(self.title)?,
            contents: required(self.contents)?,
        })
    }
}

/// Response of `DELETE /api/posts/{id}`.
#[derive(Debug, Clone, Serialize)]
pub struct DeletePostResponse {
    pub message: String,
    /// The post as it was before removal.
    pub post: Post,
}
