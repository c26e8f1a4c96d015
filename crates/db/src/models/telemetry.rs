//! Telemetry event models and DTOs.

use flashcards_core::types::{DbId, Timestamp};
use flashcards_core::validation::MAX_EVENT_LENGTH;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

/// A row from the `telemetry` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct TelemetryEvent {
    pub id: DbId,
    pub flashcard_set_id: DbId,
    pub flashcard_id: Option<DbId>,
    pub event: String,
    pub duration: Option<f64>,
    pub recorded_at: Timestamp,
}

/// JSON payload accepted by `POST /telemetry`.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateTelemetryEvent {
    pub flashcard_set_id: DbId,
    pub flashcard_id: Option<DbId>,
    #[validate(length(
        max = MAX_EVENT_LENGTH,
        message = "Event name must be at most 100 characters"
    ))]
    pub event: String,
    /// Seconds.
    pub duration: Option<f64>,
}
