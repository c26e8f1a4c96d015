//! Review models and DTOs.

use flashcards_core::types::DbId;
use flashcards_core::validation::{MAX_AUTHOR_LENGTH, MAX_REVIEW_TEXT_LENGTH};
use serde::Serialize;
use sqlx::FromRow;
use validator::Validate;

/// A row from the `reviews` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Review {
    pub id: DbId,
    pub set_id: DbId,
    pub rating: i32,
    pub review_text: Option<String>,
    pub author: Option<String>,
}

/// DTO for reviewing a set. The rating range is checked by
/// `flashcards_core::review::validate_rating` before this is built.
#[derive(Debug, Clone, Validate)]
pub struct CreateReview {
    pub set_id: DbId,
    pub rating: i32,
    #[validate(length(
        max = MAX_REVIEW_TEXT_LENGTH,
        message = "Review text must be at most 500 characters"
    ))]
    pub review_text: Option<String>,
    #[validate(length(
        max = MAX_AUTHOR_LENGTH,
        message = "Author must be at most 50 characters"
    ))]
    pub author: Option<String>,
}
