//! The [`PostStore`] trait defining the persistence contract for posts and
//! comments.
//!
//! All backends ([`InMemoryStore`](crate::InMemoryStore),
//! [`SqliteStore`](crate::SqliteStore)) implement this trait, so the HTTP layer
//! can be handed either one without changing handler logic.

use crate::error::StorageError;
use crate::types::{Comment, CommentId, NewComment, NewPost, Post, PostFilter, PostId};

/// The storage contract for posts and their comments.
///
/// The trait is synchronous. Callers that share a store between async tasks
/// wrap it in an async mutex, so every call has completed before the caller
/// inspects its result.
///
/// Absence is never an error: lookups return `Option`, and `remove` returns
/// the number of rows it deleted.
pub trait PostStore: Send {
    // -------------------------------------------------------------------
    // Posts
    // -------------------------------------------------------------------

    /// Lists posts matching `filter`, ordered by id.
    fn find(&self, filter: &PostFilter) -> Result<Vec<Post>, StorageError>;

    /// Returns the post with the given id, if any.
    fn find_by_id(&self, id: PostId) -> Result<Option<Post>, StorageError>;

    /// Inserts a post and returns it with its assigned id and timestamps.
    fn insert(&mut self, post: &NewPost) -> Result<Post, StorageError>;

    /// Replaces title and contents of an existing post.
    ///
    /// Returns the updated post, or `None` if no post has that id.
    fn update(&mut self, id: PostId, changes: &NewPost) -> Result<Option<Post>, StorageError>;

    /// Deletes a post together with its comments.
    ///
    /// Returns the number of posts removed (0 or 1).
    fn remove(&mut self, id: PostId) -> Result<usize, StorageError>;

    // -------------------------------------------------------------------
    // Comments
    // -------------------------------------------------------------------

    /// Lists the comments of a post, ordered by id. Empty if the post has
    /// none or does not exist.
    fn find_post_comments(&self, post_id: PostId) -> Result<Vec<Comment>, StorageError>;

    /// Returns the comment with the given id, if any.
    fn find_comment_by_id(&self, id: CommentId) -> Result<Option<Comment>, StorageError>;

    /// Inserts a comment on an existing post.
    ///
    /// Fails with [`StorageError::PostNotFound`] if the parent post is absent.
    fn insert_comment(&mut self, comment: &NewComment) -> Result<Comment, StorageError>;
}
