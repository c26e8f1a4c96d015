use axum::routing::get;
use axum::Router;

use crate::handlers::api;
use crate::state::AppState;

/// JSON routes mounted at `/api`.
///
/// ```text
/// GET /sets     -> list_sets
/// GET /version  -> version
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/sets", get(api::list_sets))
        .route("/version", get(api::version))
}
