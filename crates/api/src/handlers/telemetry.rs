//! Handler for client usage telemetry.

use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::Json;
use flashcards_core::validation::validate_input;
use flashcards_db::models::telemetry::CreateTelemetryEvent;
use flashcards_db::repositories::TelemetryRepo;

use crate::error::{AppError, AppResult};
use crate::response::MessageResponse;
use crate::state::AppState;

/// POST /telemetry
///
/// Any body that is not JSON, or lacks `flashcard_set_id` or `event`, is a
/// 400. References are not pre-checked: the foreign keys reject unknown set
/// or flashcard ids and the error surfaces as `INVALID_REFERENCE`.
pub async fn record_event(
    State(state): State<AppState>,
    payload: Result<Json<CreateTelemetryEvent>, JsonRejection>,
) -> AppResult<Json<MessageResponse>> {
    let Json(input) = payload.map_err(|rejection| {
        tracing::debug!(error = %rejection, "Rejected telemetry payload");
        AppError::BadRequest("Invalid data".to_string())
    })?;
    validate_input(&input)?;

    let event = TelemetryRepo::create(&state.pool, &input).await?;

    tracing::debug!(
        telemetry_id = event.id,
        set_id = event.flashcard_set_id,
        event = %event.event,
        "Telemetry recorded",
    );

    Ok(Json(MessageResponse {
        message: "Telemetry data recorded",
    }))
}
