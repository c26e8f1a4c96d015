//! Flashcard models and DTOs.

use flashcards_core::types::DbId;
use flashcards_core::validation::MAX_CARD_TEXT_LENGTH;
use serde::Serialize;
use sqlx::FromRow;
use validator::Validate;

/// A row from the `flashcards` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Flashcard {
    pub id: DbId,
    pub set_id: DbId,
    pub question: String,
    pub answer: String,
    pub hidden: bool,
}

/// DTO for adding a card to a set.
#[derive(Debug, Clone, Validate)]
pub struct CreateFlashcard {
    pub set_id: DbId,
    #[validate(length(
        max = MAX_CARD_TEXT_LENGTH,
        message = "Question must be at most 200 characters"
    ))]
    pub question: String,
    #[validate(length(
        max = MAX_CARD_TEXT_LENGTH,
        message = "Answer must be at most 200 characters"
    ))]
    pub answer: String,
    pub hidden: bool,
}
