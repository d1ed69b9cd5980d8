//! API schema types for request/response definitions.
//!
//! Request bodies are typed per endpoint. Required fields are `Option` on the
//! wire so a missing field reaches validation (and a 400 with the endpoint's
//! message) instead of failing deserialization.

pub mod comments;
pub mod posts;

/// Returns the field if it is present and not blank.
fn required(field: Option<String>) -> Option<String> {
    field.filter(|v| !v.trim().is_empty())
}
