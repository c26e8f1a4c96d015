use axum::extract::State;
use axum::response::{Html, Redirect};
use serde::Deserialize;

use crate::error::{AppError, AppResult};
use crate::extract::BrowserForm;
use crate::state::AppState;

/// Form body for `POST /admin/daily_limit`.
#[derive(Debug, Default, Deserialize)]
pub struct DailyLimitForm {
    pub daily_limit: Option<String>,
}

/// GET /admin/daily_limit
pub async fn daily_limit_form(State(state): State<AppState>) -> AppResult<Html<String>> {
    Ok(state
        .pages
        .daily_limit_form(state.daily_limit.get(), state.config.daily_limit)?)
}

/// POST /admin/daily_limit
///
/// Replaces the in-memory limit. Concurrent updates are last-write-wins and
/// nothing is persisted.
pub async fn update_daily_limit(
    State(state): State<AppState>,
    BrowserForm(form): BrowserForm<DailyLimitForm>,
) -> AppResult<Redirect> {
    let new_limit: i64 = form
        .daily_limit
        .as_deref()
        .and_then(|v| v.trim().parse().ok())
        .ok_or_else(|| AppError::Rejected("Invalid limit".to_string()))?;

    let previous = state.daily_limit.set(new_limit);

    tracing::info!(previous, new_limit, "Daily set limit updated");

    Ok(Redirect::to("/sets"))
}
