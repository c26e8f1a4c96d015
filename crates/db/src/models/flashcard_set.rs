//! Flashcard set models and DTOs.

use flashcards_core::types::{DbId, Timestamp};
use flashcards_core::validation::MAX_SET_NAME_LENGTH;
use serde::Serialize;
use sqlx::FromRow;
use validator::Validate;

use super::comment::Comment;
use super::flashcard::Flashcard;
use super::review::Review;

/// A row from the `flashcard_sets` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct FlashcardSet {
    pub id: DbId,
    pub name: String,
    pub created_at: Timestamp,
}

/// A set together with everything that hangs off it, for the detail page.
#[derive(Debug, Clone, Serialize)]
pub struct FlashcardSetDetail {
    #[serde(flatten)]
    pub set: FlashcardSet,
    pub flashcards: Vec<Flashcard>,
    pub comments: Vec<Comment>,
    pub reviews: Vec<Review>,
}

/// DTO for creating a new set.
#[derive(Debug, Clone, Validate)]
pub struct CreateFlashcardSet {
    #[validate(length(
        max = MAX_SET_NAME_LENGTH,
        message = "Set name must be at most 100 characters"
    ))]
    pub name: String,
}

/// Result of a limit-checked set creation.
#[derive(Debug, Clone)]
pub enum SetCreation {
    /// The set was inserted.
    Created(FlashcardSet),
    /// `count_today` sets already exist for the current UTC day.
    LimitReached { count_today: i64 },
}
