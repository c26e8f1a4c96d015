use axum::extract::State;
use axum::response::Html;

use crate::error::AppResult;
use crate::state::AppState;

/// GET /
pub async fn home(State(state): State<AppState>) -> AppResult<Html<String>> {
    Ok(state.pages.home()?)
}
