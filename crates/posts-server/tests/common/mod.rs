//! Shared helpers for driving the router without a network server.

#![allow(dead_code)]

use axum::body::Body;
use axum::http::{Method, Request, StatusCode};
use axum::Router;
use serde_json::{json, Value};
use tower::ServiceExt;

/// Sends a request, with an optional JSON body, and returns (status, json).
///
/// Non-JSON bodies come back as `Value::String`.
pub async fn send(
    app: &Router,
    method: Method,
    path: &str,
    body: Option<Value>,
) -> (StatusCode, Value) {
    let builder = Request::builder().method(method).uri(path);
    let request = match body {
        Some(body) => builder
            .header("content-type", "application/json")
            .body(Body::from(serde_json::to_vec(&body).unwrap()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let json = serde_json::from_slice(&bytes)
        .unwrap_or_else(|_| Value::String(String::from_utf8_lossy(&bytes).into_owned()));
    (status, json)
}

pub async fn get_json(app: &Router, path: &str) -> (StatusCode, Value) {
    send(app, Method::GET, path, None).await
}

pub async fn post_json(app: &Router, path: &str, body: Value) -> (StatusCode, Value) {
    send(app, Method::POST, path, Some(body)).await
}

pub async fn put_json(app: &Router, path: &str, body: Value) -> (StatusCode, Value) {
    send(app, Method::PUT, path, Some(body)).await
}

pub async fn delete(app: &Router, path: &str) -> (StatusCode, Value) {
    send(app, Method::DELETE, path, None).await
}

/// Creates a post through the API and returns its id.
pub async fn create_post(app: &Router, title: &str, contents: &str) -> i64 {
    let (status, body) = post_json(
        app,
        "/api/posts",
        json!({ "title": title, "contents": contents }),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED, "create post failed: {:?}", body);
    body["id"].as_i64().unwrap()
}

/// Number of posts currently listed.
pub async fn post_count(app: &Router) -> usize {
    let (status, body) = get_json(app, "/api/posts").await;
    assert_eq!(status, StatusCode::OK);
    body.as_array().unwrap().len()
}
