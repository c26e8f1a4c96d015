//! Repository for the `telemetry` table.
//!
//! Inserts do not pre-check that the referenced set or flashcard exists;
//! the foreign keys reject dangling references with SQLSTATE `23503`.

use flashcards_core::types::DbId;
use sqlx::PgPool;

use crate::models::telemetry::{CreateTelemetryEvent, TelemetryEvent};

/// Column list for `telemetry` queries.
const COLUMNS: &str = "id, flashcard_set_id, flashcard_id, event, duration, recorded_at";

/// Provides data access for telemetry events.
pub struct TelemetryRepo;

impl TelemetryRepo {
    /// Record an event with a server-assigned timestamp.
    pub async fn create(
        pool: &PgPool,
        input: &CreateTelemetryEvent,
    ) -> Result<TelemetryEvent, sqlx::Error> {
        let query = format!(
            "INSERT INTO telemetry (flashcard_set_id, flashcard_id, event, duration) \
             VALUES ($1, $2, $3, $4) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, TelemetryEvent>(&query)
            .bind(input.flashcard_set_id)
            .bind(input.flashcard_id)
            .bind(&input.event)
            .bind(input.duration)
            .fetch_one(pool)
            .await
    }

    /// List the events recorded against a set, oldest first.
    pub async fn list_by_set(
        pool: &PgPool,
        flashcard_set_id: DbId,
    ) -> Result<Vec<TelemetryEvent>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM telemetry WHERE flashcard_set_id = $1 ORDER BY id"
        );
        sqlx::query_as::<_, TelemetryEvent>(&query)
            .bind(flashcard_set_id)
            .fetch_all(pool)
            .await
    }

    /// Count all events.
    pub async fn count(pool: &PgPool) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM telemetry")
            .fetch_one(pool)
            .await
    }
}
