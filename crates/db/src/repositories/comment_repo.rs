//! Repository for the `comments` table.

use flashcards_core::types::DbId;
use sqlx::PgPool;

use crate::models::comment::{Comment, CreateComment};

/// Column list for `comments` queries.
const COLUMNS: &str = "id, set_id, comment, author";

/// Provides data access for set comments.
pub struct CommentRepo;

impl CommentRepo {
    /// Insert a comment.
    pub async fn create(pool: &PgPool, input: &CreateComment) -> Result<Comment, sqlx::Error> {
        let query = format!(
            "INSERT INTO comments (set_id, comment, author) \
             VALUES ($1, $2, $3) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Comment>(&query)
            .bind(input.set_id)
            .bind(&input.comment)
            .bind(&input.author)
            .fetch_one(pool)
            .await
    }

    /// List the comments on a set, oldest first.
    pub async fn list_by_set(pool: &PgPool, set_id: DbId) -> Result<Vec<Comment>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM comments WHERE set_id = $1 ORDER BY id");
        sqlx::query_as::<_, Comment>(&query)
            .bind(set_id)
            .fetch_all(pool)
            .await
    }
}
