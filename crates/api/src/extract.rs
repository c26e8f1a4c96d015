//! Custom extractors for the browser-facing routes.

use axum::extract::rejection::FormRejection;
use axum::extract::{FromRequest, FromRequestParts, Path, Request};
use axum::http::request::Parts;
use axum::Form;
use flashcards_core::types::DbId;
use serde::de::DeserializeOwned;

use crate::error::AppError;

/// The `{id}` segment of a `/sets/{id}/...` route.
///
/// A segment that is not a valid id cannot name a set, so it is rejected as
/// 404 rather than as a malformed request.
#[derive(Debug, Clone, Copy)]
pub struct SetId(pub DbId);

impl<S> FromRequestParts<S> for SetId
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(id) = Path::<DbId>::from_request_parts(parts, state)
            .await
            .map_err(|rejection| {
                tracing::debug!(error = %rejection.body_text(), "Unparseable set id");
                AppError::NotFound("FlashcardSet not found".to_string())
            })?;
        Ok(SetId(id))
    }
}

/// A urlencoded form body that degrades to `T::default()` when the request
/// carries no form content type, so the handler redisplays its page with
/// the usual "required" notice instead of failing with 415.
#[derive(Debug)]
pub struct BrowserForm<T>(pub T);

impl<T, S> FromRequest<S> for BrowserForm<T>
where
    T: DeserializeOwned + Default,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        match Form::<T>::from_request(req, state).await {
            Ok(Form(value)) => Ok(BrowserForm(value)),
            Err(FormRejection::InvalidFormContentType(_)) => Ok(BrowserForm(T::default())),
            Err(rejection) => Err(AppError::BadRequest(rejection.body_text())),
        }
    }
}
