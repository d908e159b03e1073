//! reg-web library - registrar HTTP service
//!
//! Read-only query service over the course catalog: wildcard overview
//! search and per-class detail lookup, plus the static search page.

use axum::Router;
use sqlx::SqlitePool;

pub mod api;

/// Application state shared across HTTP handlers
#[derive(Clone)]
pub struct AppState {
    /// Catalog connection pool (read-only)
    pub db: SqlitePool,
}

impl AppState {
    /// Create new application state
    pub fn new(db: SqlitePool) -> Self {
        Self { db }
    }
}

/// Build application router
pub fn build_router(state: AppState) -> Router {
    use axum::routing::get;

    Router::new()
        .route("/", get(api::serve_index))
        .route("/index", get(api::serve_index))
        .route("/regoverviews", get(api::reg_overviews))
        .route("/regdetails", get(api::reg_details))
        .merge(api::health_routes())
        .with_state(state)
}
