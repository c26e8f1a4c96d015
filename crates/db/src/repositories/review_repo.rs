//! Repository for the `reviews` table.

use flashcards_core::types::DbId;
use sqlx::PgPool;

use crate::models::review::{CreateReview, Review};

/// Column list for `reviews` queries.
const COLUMNS: &str = "id, set_id, rating, review_text, author";

/// Provides data access for set reviews.
pub struct ReviewRepo;

impl ReviewRepo {
    /// Insert a review. The `ck_reviews_rating` constraint rejects ratings
    /// outside 1..=5.
    pub async fn create(pool: &PgPool, input: &CreateReview) -> Result<Review, sqlx::Error> {
        let query = format!(
            "INSERT INTO reviews (set_id, rating, review_text, author) \
             VALUES ($1, $2, $3, $4) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Review>(&query)
            .bind(input.set_id)
            .bind(input.rating)
            .bind(&input.review_text)
            .bind(&input.author)
            .fetch_one(pool)
            .await
    }

    /// List the reviews of a set, oldest first.
    pub async fn list_by_set(pool: &PgPool, set_id: DbId) -> Result<Vec<Review>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM reviews WHERE set_id = $1 ORDER BY id");
        sqlx::query_as::<_, Review>(&query)
            .bind(set_id)
            .fetch_all(pool)
            .await
    }

    /// Count all reviews.
    pub async fn count(pool: &PgPool) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM reviews")
            .fetch_one(pool)
            .await
    }
}
