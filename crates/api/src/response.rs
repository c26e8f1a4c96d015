//! Small JSON bodies shared by the API handlers.

use serde::Serialize;

/// `{ "message": ... }` acknowledgement or failure body.
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: &'static str,
}

/// `{ "version": ... }` body for `GET /api/version`.
#[derive(Debug, Serialize)]
pub struct VersionResponse {
    pub version: &'static str,
}
