use axum::extract::State;
use axum::response::{Html, IntoResponse, Redirect, Response};
use flashcards_core::review::{parse_rating, validate_rating};
use flashcards_core::validation::{optional_text, validate_input};
use flashcards_db::models::review::CreateReview;
use flashcards_db::repositories::ReviewRepo;
use serde::Deserialize;

use super::ensure_set_exists;
use crate::error::{AppError, AppResult};
use crate::extract::{BrowserForm, SetId};
use crate::state::AppState;

/// Form body for `POST /sets/{id}/review`.
#[derive(Debug, Default, Deserialize)]
pub struct ReviewForm {
    pub rating: Option<String>,
    pub review_text: Option<String>,
    pub author: Option<String>,
}

/// GET /sets/{id}/review
pub async fn review_form(
    State(state): State<AppState>,
    SetId(set_id): SetId,
) -> AppResult<Html<String>> {
    let set = ensure_set_exists(&state.pool, set_id).await?;
    Ok(state.pages.review_form(&set)?)
}

/// POST /sets/{id}/review
///
/// An unparseable rating counts as 0 and is refused by the range check along
/// with every other value outside 1..=5.
pub async fn create_review(
    State(state): State<AppState>,
    SetId(set_id): SetId,
    BrowserForm(form): BrowserForm<ReviewForm>,
) -> AppResult<Response> {
    ensure_set_exists(&state.pool, set_id).await?;

    let rating = parse_rating(form.rating.as_deref());
    validate_rating(rating).map_err(AppError::rejected)?;

    let input = CreateReview {
        set_id,
        rating,
        review_text: optional_text(form.review_text),
        author: optional_text(form.author),
    };
    validate_input(&input).map_err(AppError::rejected)?;

    let review = ReviewRepo::create(&state.pool, &input).await?;

    tracing::info!(set_id, review_id = review.id, rating, "Review added");

    Ok(Redirect::to(&format!("/sets/{set_id}")).into_response())
}
