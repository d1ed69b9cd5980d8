//! In-memory implementation of [`PostStore`].
//!
//! [`InMemoryStore`] is a first-class backend for tests and for running the
//! server without a database file. It keeps records in `BTreeMap`s so listing
//! order matches the SQLite backend's `ORDER BY id`.

use std::collections::BTreeMap;

use crate::error::StorageError;
use crate::traits::PostStore;
use crate::types::{Comment, CommentId, NewComment, NewPost, Post, PostFilter, PostId};

/// Comment row as stored; the parent title is joined on read.
#[derive(Debug, Clone)]
struct StoredComment {
    text: String,
    post_id: PostId,
    created_at: String,
    updated_at: String,
}

/// In-memory implementation of [`PostStore`].
#[derive(Debug)]
pub struct InMemoryStore {
    posts: BTreeMap<PostId, Post>,
    comments: BTreeMap<CommentId, StoredComment>,
    next_post_id: i64,
    next_comment_id: i64,
}

impl InMemoryStore {
    /// Creates a new empty in-memory store.
    pub fn new() -> Self {
        InMemoryStore {
            posts: BTreeMap::new(),
            comments: BTreeMap::new(),
            next_post_id: 1,
            next_comment_id: 1,
        }
    }

    fn joined(&self, id: CommentId, stored: &StoredComment) -> Result<Comment, StorageError> {
        let post = self
            .posts
            .get(&stored.post_id)
            .ok_or_else(|| StorageError::IntegrityError {
                reason: format!("comment {} references missing post {}", id, stored.post_id),
            })?;
        Ok(Comment {
            id,
            text: stored.text.clone(),
            post_id: stored.post_id,
            post: post.title.clone(),
            created_at: stored.created_at.clone(),
            updated_at: stored.updated_at.clone(),
        })
    }
}

impl Default for InMemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

/// Current UTC time in the same text format SQLite's `strftime` produces.
fn now() -> String {
    chrono::Utc::now().format("%Y-%m-%d %H:%M:%S").to_string()
}

impl PostStore for InMemoryStore {
    fn find(&self, filter: &PostFilter) -> Result<Vec<Post>, StorageError> {
        Ok(self
            .posts
            .values()
            .filter(|p| filter.matches(p))
            .cloned()
            .collect())
    }

    fn find_by_id(&self, id: PostId) -> Result<Option<Post>, StorageError> {
        Ok(self.posts.get(&id).cloned())
    }

    fn insert(&mut self, post: &NewPost) -> Result<Post, StorageError> {
        let id = PostId(self.next_post_id);
        self.next_post_id += 1;
        let ts = now();
        let stored = Post {
            id,
            title: post.title.clone(),
            contents: post.contents.clone(),
            created_at: ts.clone(),
            updated_at: ts,
        };
        self.posts.insert(id, stored.clone());
        Ok(stored)
    }

    fn update(&mut self, id: PostId, changes: &NewPost) -> Result<Option<Post>, StorageError> {
        let Some(post) = self.posts.get_mut(&id) else {
            return Ok(None);
        };
        post.title = changes.title.clone();
        post.contents = changes.contents.clone();
        post.updated_at = now();
        Ok(Some(post.clone()))
    }

    fn remove(&mut self, id: PostId) -> Result<usize, StorageError> {
        if self.posts.remove(&id).is_none() {
            return Ok(0);
        }
        self.comments.retain(|_, c| c.post_id != id);
        Ok(1)
    }

    fn find_post_comments(&self, post_id: PostId) -> Result<Vec<Comment>, StorageError> {
        self.comments
            .iter()
            .filter(|(_, c)| c.post_id == post_id)
            .map(|(&id, c)| self.joined(id, c))
            .collect()
    }

    fn find_comment_by_id(&self, id: CommentId) -> Result<Option<Comment>, StorageError> {
        self.comments
            .get(&id)
            .map(|c| self.joined(id, c))
            .transpose()
    }

    fn insert_comment(&mut self, comment: &NewComment) -> Result<Comment, StorageError> {
        if !self.posts.contains_key(&comment.post_id) {
            return Err(StorageError::PostNotFound(comment.post_id.0));
        }
        let id = CommentId(self.next_comment_id);
        self.next_comment_id += 1;
        let ts = now();
        let stored = StoredComment {
            text: comment.text.clone(),
            post_id: comment.post_id,
            created_at: ts.clone(),
            updated_at: ts,
        };
        let joined = self.joined(id, &stored)?;
        self.comments.insert(id, stored);
        Ok(joined)
    }
}
