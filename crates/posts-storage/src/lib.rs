//! Storage layer for posts and their comments.
//!
//! Provides the [`PostStore`] trait defining the persistence contract the API
//! handlers consume, plus the [`InMemoryStore`] and [`SqliteStore`] backends.
//!
//! # Modules
//!
//! - [`error`]: StorageError enum with all failure modes
//! - [`types`]: Post/Comment records, ids, inputs and filters
//! - [`traits`]: PostStore trait definition
//! - [`memory`]: InMemoryStore implementation
//! - [`schema`]: migration setup for the SQLite backend
//! - [`sqlite`]: SqliteStore implementation

pub mod error;
pub mod memory;
pub mod schema;
pub mod sqlite;
pub mod traits;
pub mod types;

pub use error::StorageError;
pub use memory::InMemoryStore;
pub use sqlite::SqliteStore;
pub use traits::PostStore;
pub use types::{Comment, CommentId, NewComment, NewPost, Post, PostFilter, PostId};
