//! End-to-end tests for the posts HTTP API.
//!
//! Each test builds a fresh router over an in-memory store and drives it with
//! `tower::ServiceExt::oneshot`.

mod common;

use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::Router;
use serde_json::json;
use tower::ServiceExt;

use posts_server::router::build_router;
use posts_server::state::AppState;
use posts_storage::SqliteStore;

use common::*;

const NOT_FOUND: &str = "The post with the specified ID does not exist.";

fn test_app() -> Router {
    build_router(AppState::in_memory())
}

// ---------------------------------------------------------------------------
// Landing page
// ---------------------------------------------------------------------------

#[tokio::test]
async fn root_serves_html_greeting() {
    let app = test_app();
    let response = app
        .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let content_type = response.headers()["content-type"].to_str().unwrap().to_string();
    assert!(content_type.starts_with("text/html"));
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    assert!(String::from_utf8_lossy(&bytes).contains("Posts API"));
}

// ---------------------------------------------------------------------------
// GET /api/posts
// ---------------------------------------------------------------------------

#[tokio::test]
async fn empty_store_lists_empty_array() {
    let app = test_app();
    let (status, body) = get_json(&app, "/api/posts").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!([]));
}

#[tokio::test]
async fn list_applies_query_filter() {
    let app = test_app();
    create_post(&app, "alpha", "one").await;
    create_post(&app, "beta", "two").await;
    create_post(&app, "alpha", "three").await;

    let (status, body) = get_json(&app, "/api/posts?title=alpha").await;
    assert_eq!(status, StatusCode::OK);
    let contents: Vec<_> = body
        .as_array()
        .unwrap()
        .iter()
        .map(|p| p["contents"].as_str().unwrap().to_string())
        .collect();
    assert_eq!(contents, vec!["one", "three"]);

    let (_, body) = get_json(&app, "/api/posts?title=gamma").await;
    assert_eq!(body, json!([]));
}

// ---------------------------------------------------------------------------
// POST /api/posts + GET /api/posts/{id}
// ---------------------------------------------------------------------------

#[tokio::test]
async fn created_post_is_fetchable() {
    let app = test_app();
    let (status, created) = post_json(
        &app,
        "/api/posts",
        json!({ "title": "Hello", "contents": "World" }),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(created["title"], "Hello");
    assert_eq!(created["contents"], "World");
    assert!(created["created_at"].is_string());

    let id = created["id"].as_i64().unwrap();
    let (status, fetched) = get_json(&app, &format!("/api/posts/{}", id)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(fetched["title"], "Hello");
    assert_eq!(fetched["contents"], "World");
    assert_eq!(fetched["id"], id);
}

#[tokio::test]
async fn create_without_contents_is_rejected_without_writing() {
    let app = test_app();
    create_post(&app, "existing", "post").await;

    let (status, body) = post_json(&app, "/api/posts", json!({ "title": "only title" })).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(
        body["errorMessage"],
        "Please provide title and contents for the post."
    );

    let (status, _) = post_json(&app, "/api/posts", json!({ "contents": "no title" })).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    assert_eq!(post_count(&app).await, 1);
}

#[tokio::test]
async fn create_with_missing_body_is_a_validation_error() {
    let app = test_app();
    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/api/posts")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/api/posts")
                .header("content-type", "application/json")
                .body(Body::from("{not json"))
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(post_count(&app).await, 0);
}

#[tokio::test]
async fn get_missing_post_is_404_with_message() {
    let app = test_app();
    let (status, body) = get_json(&app, "/api/posts/12345").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["message"], NOT_FOUND);
}

#[tokio::test]
async fn non_numeric_id_is_404() {
    let app = test_app();
    let (status, body) = get_json(&app, "/api/posts/not-a-number").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["message"], NOT_FOUND);
}

// ---------------------------------------------------------------------------
// Comments
// ---------------------------------------------------------------------------

#[tokio::test]
async fn comment_on_missing_post_is_404() {
    let app = test_app();
    let (status, body) = post_json(&app, "/api/posts/77/comments", json!({ "text": "hi" })).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["message"], NOT_FOUND);
}

#[tokio::test]
async fn comment_with_empty_text_is_400() {
    let app = test_app();
    let id = create_post(&app, "t", "c").await;

    let (status, body) = post_json(
        &app,
        &format!("/api/posts/{}/comments", id),
        json!({ "text": "" }),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["errorMessage"], "Please provide text for the comment.");

    let (status, _) = post_json(&app, &format!("/api/posts/{}/comments", id), json!({})).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn comment_uses_path_post_id() {
    let app = test_app();
    let target = create_post(&app, "target", "c").await;
    let other = create_post(&app, "other", "c").await;

    let (status, comment) = post_json(
        &app,
        &format!("/api/posts/{}/comments", target),
        json!({ "text": "nice post", "post_id": other }),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(comment["post_id"], target);
    assert_eq!(comment["text"], "nice post");
    assert_eq!(comment["post"], "target");

    let (status, _) = get_json(&app, &format!("/api/posts/{}/comments", other)).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn list_comments_distinguishes_missing_post_from_no_comments() {
    let app = test_app();

    let (status, body) = get_json(&app, "/api/posts/5/comments").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["message"], NOT_FOUND);

    let id = create_post(&app, "quiet", "post").await;
    let (status, body) = get_json(&app, &format!("/api/posts/{}/comments", id)).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(
        body["message"],
        "The post with the specified ID does not have any comments."
    );

    for text in ["first", "second"] {
        let (status, _) = post_json(
            &app,
            &format!("/api/posts/{}/comments", id),
            json!({ "text": text }),
        )
        .await;
        assert_eq!(status, StatusCode::CREATED);
    }

    let (status, body) = get_json(&app, &format!("/api/posts/{}/comments", id)).await;
    assert_eq!(status, StatusCode::OK);
    let texts: Vec<_> = body
        .as_array()
        .unwrap()
        .iter()
        .map(|c| c["text"].as_str().unwrap().to_string())
        .collect();
    assert_eq!(texts, vec!["first", "second"]);
}

// ---------------------------------------------------------------------------
// PUT /api/posts/{id}
// ---------------------------------------------------------------------------

#[tokio::test]
async fn update_replaces_fields_idempotently() {
    let app = test_app();
    let id = create_post(&app, "original", "text").await;
    let path = format!("/api/posts/{}", id);
    let changes = json!({ "title": "revised", "contents": "new text" });

    let (status, updated) = put_json(&app, &path, changes.clone()).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(updated["title"], "revised");
    assert_eq!(updated["contents"], "new text");
    assert_eq!(updated["id"], id);

    let (status, again) = put_json(&app, &path, changes).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(again["title"], updated["title"]);
    assert_eq!(again["contents"], updated["contents"]);

    let (_, fetched) = get_json(&app, &path).await;
    assert_eq!(fetched["title"], "revised");
    assert_eq!(fetched["contents"], "new text");
}

#[tokio::test]
async fn update_with_missing_fields_is_400_and_leaves_post_alone() {
    let app = test_app();
    let id = create_post(&app, "keep", "me").await;
    let path = format!("/api/posts/{}", id);

    let (status, body) = put_json(&app, &path, json!({ "title": "half" })).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(
        body["errorMessage"],
        "Please provide title and contents for the post."
    );

    let (_, fetched) = get_json(&app, &path).await;
    assert_eq!(fetched["title"], "keep");
}

#[tokio::test]
async fn update_missing_post_is_404() {
    let app = test_app();
    let (status, body) = put_json(
        &app,
        "/api/posts/42",
        json!({ "title": "t", "contents": "c" }),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["message"], NOT_FOUND);
}

// ---------------------------------------------------------------------------
// DELETE /api/posts/{id}
// ---------------------------------------------------------------------------

#[tokio::test]
async fn delete_removes_post_and_returns_it() {
    let app = test_app();
    let id = create_post(&app, "short", "lived").await;
    let path = format!("/api/posts/{}", id);

    let (status, body) = delete(&app, &path).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "post deleted");
    assert_eq!(body["post"]["title"], "short");

    let (status, _) = get_json(&app, &path).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, body) = delete(&app, &path).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["message"], NOT_FOUND);
}

#[tokio::test]
async fn delete_missing_post_is_404() {
    let app = test_app();
    let (status, _) = delete(&app, "/api/posts/9001").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

// ---------------------------------------------------------------------------
// SQLite backend
// ---------------------------------------------------------------------------

#[tokio::test]
async fn full_flow_over_sqlite_store() {
    let app = build_router(AppState::new(SqliteStore::in_memory().unwrap()));

    let id = create_post(&app, "persisted", "row").await;
    let (status, _) = post_json(
        &app,
        &format!("/api/posts/{}/comments", id),
        json!({ "text": "joined" }),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);

    let (status, comments) = get_json(&app, &format!("/api/posts/{}/comments", id)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(comments[0]["post"], "persisted");

    let (status, _) = delete(&app, &format!("/api/posts/{}", id)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(post_count(&app).await, 0);
}
