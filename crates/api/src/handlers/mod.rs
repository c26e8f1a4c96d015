//! Request handlers.
//!
//! Browser flows (`sets`, `cards`, `comments`, `reviews`, `admin`) answer with
//! rendered pages, redirects or plain-text rejections. The `api` and
//! `telemetry` handlers speak JSON. All of them delegate persistence to the
//! repositories in `flashcards_db` and map errors via [`AppError`].

pub mod admin;
pub mod api;
pub mod cards;
pub mod comments;
pub mod home;
pub mod reviews;
pub mod sets;
pub mod telemetry;

use flashcards_core::error::CoreError;
use flashcards_core::types::DbId;
use flashcards_db::models::flashcard_set::FlashcardSet;
use flashcards_db::repositories::FlashcardSetRepo;

use crate::error::{AppError, AppResult};

/// Verify that a flashcard set exists, returning the full row.
pub(crate) async fn ensure_set_exists(pool: &sqlx::PgPool, id: DbId) -> AppResult<FlashcardSet> {
    FlashcardSetRepo::find_by_id(pool, id)
        .await?
        .ok_or_else(|| {
            AppError::Core(CoreError::NotFound {
                entity: "FlashcardSet",
                id,
            })
        })
}
