//! Comment models and DTOs.

use flashcards_core::types::DbId;
use flashcards_core::validation::{MAX_AUTHOR_LENGTH, MAX_COMMENT_LENGTH};
use serde::Serialize;
use sqlx::FromRow;
use validator::Validate;

/// A row from the `comments` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Comment {
    pub id: DbId,
    pub set_id: DbId,
    pub comment: String,
    pub author: Option<String>,
}

/// DTO for commenting on a set.
#[derive(Debug, Clone, Validate)]
pub struct CreateComment {
    pub set_id: DbId,
    #[validate(length(
        max = MAX_COMMENT_LENGTH,
        message = "Comment must be at most 200 characters"
    ))]
    pub comment: String,
    #[validate(length(
        max = MAX_AUTHOR_LENGTH,
        message = "Author must be at most 50 characters"
    ))]
    pub author: Option<String>,
}
