//! Handlers for creating, listing, viewing and deleting flashcard sets.

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Redirect, Response};
use axum::Json;
use chrono::Utc;
use flashcards_core::daily_limit::LIMIT_REACHED_MESSAGE;
use flashcards_core::error::CoreError;
use flashcards_core::validation::{required_text, validate_input};
use flashcards_db::models::flashcard_set::{CreateFlashcardSet, SetCreation};
use flashcards_db::repositories::FlashcardSetRepo;
use serde::Deserialize;

use crate::error::{AppError, AppResult};
use crate::extract::{BrowserForm, SetId};
use crate::response::MessageResponse;
use crate::state::AppState;

/// Form body for `POST /sets/new`.
#[derive(Debug, Default, Deserialize)]
pub struct NewSetForm {
    pub name: Option<String>,
}

/// GET /sets
pub async fn list_sets(State(state): State<AppState>) -> AppResult<Html<String>> {
    let sets = FlashcardSetRepo::list(&state.pool).await?;
    Ok(state.pages.set_list(&sets)?)
}

/// GET /sets/new
pub async fn new_set_form(State(state): State<AppState>) -> AppResult<Html<String>> {
    Ok(state.pages.new_set_form(None)?)
}

/// POST /sets/new
///
/// Redisplays the form when the name is missing, answers with a plain-text
/// notice once today's limit is used up, and otherwise redirects to the
/// listing.
pub async fn create_set(
    State(state): State<AppState>,
    BrowserForm(form): BrowserForm<NewSetForm>,
) -> AppResult<Response> {
    let Some(name) = required_text(form.name) else {
        return Ok(state
            .pages
            .new_set_form(Some("Name is required."))?
            .into_response());
    };

    let input = CreateFlashcardSet { name };
    validate_input(&input).map_err(AppError::rejected)?;

    let limit = state.daily_limit.get();
    match FlashcardSetRepo::create_within_limit(&state.pool, &input, limit, Utc::now()).await? {
        SetCreation::Created(set) => {
            tracing::info!(set_id = set.id, name = %set.name, "Flashcard set created");
            Ok(Redirect::to("/sets").into_response())
        }
        SetCreation::LimitReached { count_today } => {
            tracing::warn!(count_today, limit, "Set creation refused, daily limit reached");
            Ok(LIMIT_REACHED_MESSAGE.into_response())
        }
    }
}

/// GET /sets/{id}
pub async fn set_detail(
    State(state): State<AppState>,
    SetId(set_id): SetId,
) -> AppResult<Html<String>> {
    let detail = FlashcardSetRepo::find_detail(&state.pool, set_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "FlashcardSet",
            id: set_id,
        }))?;

    Ok(state.pages.set_detail(&detail)?)
}

/// DELETE /sets/{id}
///
/// 204 on success; 404 with `{"message": "Flashcard set not found"}` for an
/// unknown or unparseable id.
pub async fn delete_set(
    State(state): State<AppState>,
    set_id: Result<SetId, AppError>,
) -> AppResult<Response> {
    let Ok(SetId(set_id)) = set_id else {
        return Ok(set_not_found());
    };

    if !FlashcardSetRepo::delete(&state.pool, set_id).await? {
        return Ok(set_not_found());
    }

    tracing::info!(set_id, "Flashcard set deleted");

    Ok(StatusCode::NO_CONTENT.into_response())
}

fn set_not_found() -> Response {
    (
        StatusCode::NOT_FOUND,
        Json(MessageResponse {
            message: "Flashcard set not found",
        }),
    )
        .into_response()
}
