use axum::routing::get;
use axum::Router;

use crate::handlers::admin;
use crate::state::AppState;

/// Admin routes mounted at `/admin`.
///
/// ```text
/// GET  /daily_limit  -> daily_limit_form
/// POST /daily_limit  -> update_daily_limit
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route(
        "/daily_limit",
        get(admin::daily_limit_form).post(admin::update_daily_limit),
    )
}
