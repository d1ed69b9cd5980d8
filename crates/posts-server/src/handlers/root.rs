//! Static landing page.

use axum::response::Html;

/// `GET /`
pub async fn greeting() -> Html<&'static str> {
    Html("<h2>Posts API</h2>\n<h3>Posts and comments over JSON at /api/posts</h3>\n")
}
