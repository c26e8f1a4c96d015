//! Route definitions for flashcard sets and their cards, comments and reviews.

use axum::routing::get;
use axum::Router;

use crate::handlers::{cards, comments, reviews, sets};
use crate::state::AppState;

/// Set routes mounted at `/sets`.
///
/// ```text
/// GET    /                 -> list_sets
/// GET    /new              -> new_set_form
/// POST   /new              -> create_set
/// GET    /{id}             -> set_detail
/// DELETE /{id}             -> delete_set
/// GET    /{id}/cards/new   -> new_card_form
/// POST   /{id}/cards/new   -> create_card
/// GET    /{id}/comment     -> comment_form
/// POST   /{id}/comment     -> create_comment
/// GET    /{id}/review      -> review_form
/// POST   /{id}/review      -> create_review
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(sets::list_sets))
        .route("/new", get(sets::new_set_form).post(sets::create_set))
        .route("/{id}", get(sets::set_detail).delete(sets::delete_set))
        .route(
            "/{id}/cards/new",
            get(cards::new_card_form).post(cards::create_card),
        )
        .route(
            "/{id}/comment",
            get(comments::comment_form).post(comments::create_comment),
        )
        .route(
            "/{id}/review",
            get(reviews::review_form).post(reviews::create_review),
        )
}
