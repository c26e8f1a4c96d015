use axum::extract::State;
use axum::response::{Html, IntoResponse, Redirect, Response};
use flashcards_core::validation::{hidden_flag, required_text, validate_input};
use flashcards_db::models::flashcard::CreateFlashcard;
use flashcards_db::repositories::FlashcardRepo;
use serde::Deserialize;

use super::ensure_set_exists;
use crate::error::{AppError, AppResult};
use crate::extract::{BrowserForm, SetId};
use crate::state::AppState;

/// Form body for `POST /sets/{id}/cards/new`.
#[derive(Debug, Default, Deserialize)]
pub struct NewCardForm {
    pub question: Option<String>,
    pub answer: Option<String>,
    pub hidden: Option<String>,
}

/// GET /sets/{id}/cards/new
pub async fn new_card_form(
    State(state): State<AppState>,
    SetId(set_id): SetId,
) -> AppResult<Html<String>> {
    let set = ensure_set_exists(&state.pool, set_id).await?;
    Ok(state.pages.new_card_form(&set, None)?)
}

/// POST /sets/{id}/cards/new
pub async fn create_card(
    State(state): State<AppState>,
    SetId(set_id): SetId,
    BrowserForm(form): BrowserForm<NewCardForm>,
) -> AppResult<Response> {
    let set = ensure_set_exists(&state.pool, set_id).await?;

    let hidden = hidden_flag(form.hidden.as_deref());
    let (Some(question), Some(answer)) = (required_text(form.question), required_text(form.answer))
    else {
        return Ok(state
            .pages
            .new_card_form(&set, Some("Question and answer are required."))?
            .into_response());
    };

    let input = CreateFlashcard {
        set_id,
        question,
        answer,
        hidden,
    };
    validate_input(&input).map_err(AppError::rejected)?;

    let card = FlashcardRepo::create(&state.pool, &input).await?;

    tracing::info!(set_id, card_id = card.id, hidden = card.hidden, "Flashcard added");

    Ok(Redirect::to(&format!("/sets/{set_id}")).into_response())
}
