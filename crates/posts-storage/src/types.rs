//! Record, input and filter types shared by every [`PostStore`] backend.
//!
//! [`PostStore`]: crate::traits::PostStore

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Identifier of a stored post.
///
/// Assigned by the store on insert. The inner `i64` aligns with SQLite's
/// `INTEGER PRIMARY KEY`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PostId(pub i64);

impl fmt::Display for PostId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for PostId {
    type Err = std::num::ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim().parse().map(PostId)
    }
}

/// Identifier of a stored comment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CommentId(pub i64);

impl fmt::Display for CommentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A stored post.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Post {
    pub id: PostId,
    pub title: String,
    pub contents: String,
    /// UTC, `YYYY-MM-DD HH:MM:SS`.
    pub created_at: String,
    pub updated_at: String,
}

/// A stored comment, with the parent post's title joined in as `post`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Comment {
    pub id: CommentId,
    pub text: String,
    pub post_id: PostId,
    pub post: String,
    pub created_at: String,
    pub updated_at: String,
}

/// Validated post fields, used both for insert and for full-replace update.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewPost {
    pub title: String,
    pub contents: String,
}

/// Validated comment fields. `post_id` comes from the request path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewComment {
    pub text: String,
    pub post_id: PostId,
}

/// Equality filter for listing posts. Unset fields match every post.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct PostFilter {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub contents: Option<String>,
}

impl PostFilter {
    /// Returns `true` if `post` satisfies every set field.
    pub fn matches(&self, post: &Post) -> bool {
        self.title.as_deref().map_or(true, |t| t == post.title)
            && self.contents.as_deref().map_or(true, |c| c == post.contents)
    }
}
