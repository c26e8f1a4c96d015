//! Repository for the `flashcard_sets` table.
//!
//! Sets own their flashcards, comments, reviews and telemetry through
//! `ON DELETE CASCADE` foreign keys, so [`FlashcardSetRepo::delete`] removes
//! every dependent row in the same statement.

use flashcards_core::daily_limit::{has_capacity, start_of_utc_day};
use flashcards_core::types::{DbId, Timestamp};
use sqlx::PgPool;

use crate::models::flashcard_set::{
    CreateFlashcardSet, FlashcardSet, FlashcardSetDetail, SetCreation,
};
use crate::repositories::{CommentRepo, FlashcardRepo, ReviewRepo};

/// Column list for `flashcard_sets` queries.
const COLUMNS: &str = "id, name, created_at";

/// Provides data access for flashcard sets.
pub struct FlashcardSetRepo;

impl FlashcardSetRepo {
    /// List every set in primary-key order.
    pub async fn list(pool: &PgPool) -> Result<Vec<FlashcardSet>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM flashcard_sets ORDER BY id");
        sqlx::query_as::<_, FlashcardSet>(&query)
            .fetch_all(pool)
            .await
    }

    /// Find a set by its ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<FlashcardSet>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM flashcard_sets WHERE id = $1");
        sqlx::query_as::<_, FlashcardSet>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Load a set with its flashcards, comments and reviews.
    ///
    /// Returns `None` if the set does not exist.
    pub async fn find_detail(
        pool: &PgPool,
        id: DbId,
    ) -> Result<Option<FlashcardSetDetail>, sqlx::Error> {
        let Some(set) = Self::find_by_id(pool, id).await? else {
            return Ok(None);
        };

        let flashcards = FlashcardRepo::list_by_set(pool, id).await?;
        let comments = CommentRepo::list_by_set(pool, id).await?;
        let reviews = ReviewRepo::list_by_set(pool, id).await?;

        Ok(Some(FlashcardSetDetail {
            set,
            flashcards,
            comments,
            reviews,
        }))
    }

    /// Count all sets.
    pub async fn count(pool: &PgPool) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM flashcard_sets")
            .fetch_one(pool)
            .await
    }

    /// Insert a set without consulting the daily limit.
    pub async fn create(
        pool: &PgPool,
        input: &CreateFlashcardSet,
    ) -> Result<FlashcardSet, sqlx::Error> {
        let query = format!("INSERT INTO flashcard_sets (name) VALUES ($1) RETURNING {COLUMNS}");
        sqlx::query_as::<_, FlashcardSet>(&query)
            .bind(&input.name)
            .fetch_one(pool)
            .await
    }

    /// Insert a set stamped with `now`, unless `limit` sets already exist for
    /// the UTC day containing `now`.
    ///
    /// The count and the insert share a transaction holding a
    /// `SHARE ROW EXCLUSIVE` lock on `flashcard_sets`, so concurrent creators
    /// are serialized and cannot overshoot the limit.
    pub async fn create_within_limit(
        pool: &PgPool,
        input: &CreateFlashcardSet,
        limit: i64,
        now: Timestamp,
    ) -> Result<SetCreation, sqlx::Error> {
        let mut tx = pool.begin().await?;

        sqlx::query("LOCK TABLE flashcard_sets IN SHARE ROW EXCLUSIVE MODE")
            .execute(&mut *tx)
            .await?;

        let count_today = sqlx::query_scalar::<_, i64>(
            "SELECT COUNT(*) FROM flashcard_sets WHERE created_at >= $1",
        )
        .bind(start_of_utc_day(now))
        .fetch_one(&mut *tx)
        .await?;

        if !has_capacity(count_today, limit) {
            tracing::debug!(count_today, limit, "Daily set limit reached");
            tx.rollback().await?;
            return Ok(SetCreation::LimitReached { count_today });
        }

        let query = format!(
            "INSERT INTO flashcard_sets (name, created_at) VALUES ($1, $2) RETURNING {COLUMNS}"
        );
        let set = sqlx::query_as::<_, FlashcardSet>(&query)
            .bind(&input.name)
            .bind(now)
            .fetch_one(&mut *tx)
            .await?;

        tx.commit().await?;
        Ok(SetCreation::Created(set))
    }

    /// Delete a set and, by cascade, everything that references it.
    ///
    /// Returns `true` if a row was deleted.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM flashcard_sets WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
