use axum::extract::State;
use axum::response::{Html, IntoResponse, Redirect, Response};
use flashcards_core::validation::{optional_text, required_text, validate_input};
use flashcards_db::models::comment::CreateComment;
use flashcards_db::repositories::CommentRepo;
use serde::Deserialize;

use super::ensure_set_exists;
use crate::error::{AppError, AppResult};
use crate::extract::{BrowserForm, SetId};
use crate::state::AppState;

/// Form body for `POST /sets/{id}/comment`.
#[derive(Debug, Default, Deserialize)]
pub struct CommentForm {
    pub comment: Option<String>,
    pub author: Option<String>,
}

/// GET /sets/{id}/comment
pub async fn comment_form(
    State(state): State<AppState>,
    SetId(set_id): SetId,
) -> AppResult<Html<String>> {
    let set = ensure_set_exists(&state.pool, set_id).await?;
    Ok(state.pages.comment_form(&set, None)?)
}

/// POST /sets/{id}/comment
pub async fn create_comment(
    State(state): State<AppState>,
    SetId(set_id): SetId,
    BrowserForm(form): BrowserForm<CommentForm>,
) -> AppResult<Response> {
    let set = ensure_set_exists(&state.pool, set_id).await?;

    let Some(comment) = required_text(form.comment) else {
        return Ok(state
            .pages
            .comment_form(&set, Some("A comment is required."))?
            .into_response());
    };

    let input = CreateComment {
        set_id,
        comment,
        author: optional_text(form.author),
    };
    validate_input(&input).map_err(AppError::rejected)?;

    let comment = CommentRepo::create(&state.pool, &input).await?;

    tracing::info!(set_id, comment_id = comment.id, "Comment added");

    Ok(Redirect::to(&format!("/sets/{set_id}")).into_response())
}
