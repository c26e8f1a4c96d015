//! Repository for the `flashcards` table.

use flashcards_core::types::DbId;
use sqlx::PgPool;

use crate::models::flashcard::{CreateFlashcard, Flashcard};

/// Column list for `flashcards` queries.
const COLUMNS: &str = "id, set_id, question, answer, hidden";

/// Provides data access for flashcards.
pub struct FlashcardRepo;

impl FlashcardRepo {
    /// Insert a card into its set.
    pub async fn create(pool: &PgPool, input: &CreateFlashcard) -> Result<Flashcard, sqlx::Error> {
        let query = format!(
            "INSERT INTO flashcards (set_id, question, answer, hidden) \
             VALUES ($1, $2, $3, $4) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Flashcard>(&query)
            .bind(input.set_id)
            .bind(&input.question)
            .bind(&input.answer)
            .bind(input.hidden)
            .fetch_one(pool)
            .await
    }

    /// List the cards of a set in insertion order.
    pub async fn list_by_set(pool: &PgPool, set_id: DbId) -> Result<Vec<Flashcard>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM flashcards WHERE set_id = $1 ORDER BY id");
        sqlx::query_as::<_, Flashcard>(&query)
            .bind(set_id)
            .fetch_all(pool)
            .await
    }
}
