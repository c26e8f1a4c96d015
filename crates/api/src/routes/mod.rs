pub mod admin;
pub mod api;
pub mod health;
pub mod sets;

use axum::routing::{get, post};
use axum::Router;

use crate::handlers;
use crate::state::AppState;

/// Build the application route tree.
///
/// Route hierarchy:
///
/// ```text
/// /                          homepage
/// /health                    service + database health
///
/// /sets                      list
/// /sets/new                  create form, create (POST)
/// /sets/{id}                 detail, delete (DELETE)
/// /sets/{id}/cards/new       add card form, add card (POST)
/// /sets/{id}/comment         comment form, comment (POST)
/// /sets/{id}/review          review form, review (POST)
///
/// /telemetry                 record event (POST, JSON)
///
/// /admin/daily_limit         view, update (POST)
///
/// /api/sets                  sets as JSON
/// /api/version               version
/// ```
pub fn app_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(handlers::home::home))
        .merge(health::router())
        .nest("/sets", sets::router())
        .route("/telemetry", post(handlers::telemetry::record_event))
        .nest("/admin", admin::router())
        .nest("/api", api::router())
}
