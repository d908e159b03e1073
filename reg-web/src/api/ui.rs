//! UI serving routes
//!
//! Serves the static search page embedded at build time.

use axum::response::Html;

const INDEX_HTML: &str = include_str!("../ui/index.html");

/// GET / and GET /index
///
/// Serves the main search page
pub async fn serve_index() -> Html<&'static str> {
    Html(INDEX_HTML)
}
