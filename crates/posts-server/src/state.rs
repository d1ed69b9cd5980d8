//! Application state holding the shared post store.
//!
//! [`AppState`] wraps the store in `Arc<tokio::sync::Mutex<>>` for use with
//! axum handlers. Handlers hold the lock for the duration of a request, so an
//! existence check and the write that depends on it see the same store state,
//! and every store call has completed before the handler branches on it.

use std::sync::Arc;

use posts_storage::{InMemoryStore, PostStore, SqliteStore, StorageError};

use crate::config::ServerConfig;

/// The store behind the async mutex. Any [`PostStore`] backend fits.
pub type SharedStore = Arc<tokio::sync::Mutex<Box<dyn PostStore>>>;

/// Shared application state for the HTTP server.
#[derive(Clone)]
pub struct AppState {
    /// The persistence backend.
    pub store: SharedStore,
}

impl AppState {
    /// Wraps an existing store.
    pub fn new(store: impl PostStore + 'static) -> Self {
        AppState {
            store: Arc::new(tokio::sync::Mutex::new(Box::new(store))),
        }
    }

    /// State backed by a fresh [`InMemoryStore`].
    pub fn in_memory() -> Self {
        Self::new(InMemoryStore::new())
    }

    /// State backed by a SQLite database file.
    pub fn sqlite(db_path: &str) -> Result<Self, StorageError> {
        Ok(Self::new(SqliteStore::new(db_path)?))
    }

    /// Picks the backend named by `config`.
    pub fn from_config(config: &ServerConfig) -> Result<Self, StorageError> {
        match &config.db_path {
            Some(path) => Self::sqlite(path),
            None => Ok(Self::in_memory()),
        }
    }
}
