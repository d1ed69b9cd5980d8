//! SQLite implementation of [`PostStore`].
//!
//! [`SqliteStore`] persists posts and comments with WAL mode, a transaction
//! around every write, and automatic schema migrations. Comment reads join
//! the parent post's title.

use rusqlite::{params, Connection, OptionalExtension, Row};

use crate::error::StorageError;
use crate::traits::PostStore;
use crate::types::{Comment, CommentId, NewComment, NewPost, Post, PostFilter, PostId};

const POST_COLUMNS: &str = "id, title, contents, created_at, updated_at";

const COMMENT_SELECT: &str = "SELECT c.id, c.text, c.post_id, p.title, c.created_at, c.updated_at \
     FROM comments c JOIN posts p ON p.id = c.post_id";

/// SQLite-backed implementation of [`PostStore`].
pub struct SqliteStore {
    conn: Connection,
}

impl SqliteStore {
    /// Opens (or creates) a SQLite database at `path`.
    pub fn new(path: &str) -> Result<Self, StorageError> {
        let conn = crate::schema::open_database(path)?;
        Ok(SqliteStore { conn })
    }

    /// Opens an in-memory SQLite database (for testing).
    pub fn in_memory() -> Result<Self, StorageError> {
        let conn = crate::schema::open_in_memory()?;
        Ok(SqliteStore { conn })
    }

    fn post_from_row(row: &Row<'_>) -> rusqlite::Result<Post> {
        Ok(Post {
            id: PostId(row.get(0)?),
            title: row.get(1)?,
            contents: row.get(2)?,
            created_at: row.get(3)?,
            updated_at: row.get(4)?,
        })
    }

    fn comment_from_row(row: &Row<'_>) -> rusqlite::Result<Comment> {
        Ok(Comment {
            id: CommentId(row.get(0)?),
            text: row.get(1)?,
            post_id: PostId(row.get(2)?),
            post: row.get(3)?,
            created_at: row.get(4)?,
            updated_at: row.get(5)?,
        })
    }

    fn select_post(conn: &Connection, id: PostId) -> Result<Option<Post>, StorageError> {
        let post = conn
            .prepare_cached(&format!("SELECT {POST_COLUMNS} FROM posts WHERE id = ?1"))?
            .query_row(params![id.0], Self::post_from_row)
            .optional()?;
        Ok(post)
    }

    fn select_comment(conn: &Connection, id: CommentId) -> Result<Option<Comment>, StorageError> {
        let comment = conn
            .prepare_cached(&format!("{COMMENT_SELECT} WHERE c.id = ?1"))?
            .query_row(params![id.0], Self::comment_from_row)
            .optional()?;
        Ok(comment)
    }
}

impl PostStore for SqliteStore {
    fn find(&self, filter: &PostFilter) -> Result<Vec<Post>, StorageError> {
        // NULL parameters disable the corresponding condition.
        let mut stmt = self.conn.prepare_cached(&format!(
            "SELECT {POST_COLUMNS} FROM posts \
             WHERE (?1 IS NULL OR title = ?1) AND (?2 IS NULL OR contents = ?2) \
             ORDER BY id"
        ))?;
        let rows = stmt.query_map(
            params![filter.title.as_deref(), filter.contents.as_deref()],
            Self::post_from_row,
        )?;
        let mut result = Vec::new();
        for row in rows {
            result.push(row?);
        }
        Ok(result)
    }

    fn find_by_id(&self, id: PostId) -> Result<Option<Post>, StorageError> {
        Self::select_post(&self.conn, id)
    }

    fn insert(&mut self, post: &NewPost) -> Result<Post, StorageError> {
        let tx = self.conn.transaction()?;
        tx.execute(
            "INSERT INTO posts (title, contents) VALUES (?1, ?2)",
            params![post.title, post.contents],
        )?;
        let id = PostId(tx.last_insert_rowid());
        let stored = Self::select_post(&tx, id)?.ok_or_else(|| StorageError::IntegrityError {
            reason: format!("inserted post {} could not be read back", id),
        })?;
        tx.commit()?;
        Ok(stored)
    }

    fn update(&mut self, id: PostId, changes: &NewPost) -> Result<Option<Post>, StorageError> {
        let tx = self.conn.transaction()?;
        let affected = tx.execute(
            "UPDATE posts SET title = ?1, contents = ?2, \
             updated_at = strftime('%Y-%m-%d %H:%M:%S', 'now') WHERE id = ?3",
            params![changes.title, changes.contents, id.0],
        )?;
        if affected == 0 {
            return Ok(None);
        }
        let updated = Self::select_post(&tx, id)?;
        tx.commit()?;
        Ok(updated)
    }

    fn remove(&mut self, id: PostId) -> Result<usize, StorageError> {
        let tx = self.conn.transaction()?;
        // Comments go through ON DELETE CASCADE.
        let affected = tx.execute("DELETE FROM posts WHERE id = ?1", params![id.0])?;
        tx.commit()?;
        Ok(affected)
    }

    fn find_post_comments(&self, post_id: PostId) -> Result<Vec<Comment>, StorageError> {
        let mut stmt = self
            .conn
            .prepare_cached(&format!("{COMMENT_SELECT} WHERE c.post_id = ?1 ORDER BY c.id"))?;
        let rows = stmt.query_map(params![post_id.0], Self::comment_from_row)?;
        let mut result = Vec::new();
        for row in rows {
            result.push(row?);
        }
        Ok(result)
    }

    fn find_comment_by_id(&self, id: CommentId) -> Result<Option<Comment>, StorageError> {
        Self::select_comment(&self.conn, id)
    }

    fn insert_comment(&mut self, comment: &NewComment) -> Result<Comment, StorageError> {
        let tx = self.conn.transaction()?;
        if Self::select_post(&tx, comment.post_id)?.is_none() {
            return Err(StorageError::PostNotFound(comment.post_id.0));
        }
        tx.execute(
            "INSERT INTO comments (text, post_id) VALUES (?1, ?2)",
            params![comment.text, comment.post_id.0],
        )?;
        let id = CommentId(tx.last_insert_rowid());
        let stored = Self::select_comment(&tx, id)?.ok_or_else(|| StorageError::IntegrityError {
            reason: format!("inserted comment {} could not be read back", id),
        })?;
        tx.commit()?;
        Ok(stored)
    }
}
