//! Read-only JSON endpoints.

use axum::extract::State;
use axum::Json;
use flashcards_db::models::flashcard_set::FlashcardSet;
use flashcards_db::repositories::FlashcardSetRepo;

use crate::error::AppResult;
use crate::response::VersionResponse;
use crate::state::AppState;

/// Version reported by `GET /api/version`.
pub const API_VERSION: &str = "1.0.0";

/// GET /api/sets
///
/// Every set as `{id, name, created_at}`, `created_at` in RFC 3339.
pub async fn list_sets(State(state): State<AppState>) -> AppResult<Json<Vec<FlashcardSet>>> {
    let sets = FlashcardSetRepo::list(&state.pool).await?;
    Ok(Json(sets))
}

/// GET /api/version
pub async fn version() -> Json<VersionResponse> {
    Json(VersionResponse {
        version: API_VERSION,
    })
}
