//! HTTP/JSON API for posts and their comments.
//!
//! Thin handlers validate input, await one or two calls on the shared
//! [`PostStore`](posts_storage::PostStore), and map the outcome to a status
//! code and JSON body. This crate contains the route table, request/response
//! schema types, error mapping, configuration and application state.

pub mod config;
pub mod error;
pub mod handlers;
pub mod router;
pub mod schema;
pub mod state;
