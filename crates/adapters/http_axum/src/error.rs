//! HTTP error response mapping.

use axum::Json;
use axum::http::{StatusCode, Uri};
use axum::response::{IntoResponse, Response};
use serde::Serialize;

/// JSON error body returned by the fixture API.
#[derive(Serialize)]
struct ErrorBody {
    error: String,
}

/// A fixture document that does not exist.
pub struct FixtureNotFound(pub Uri);

impl IntoResponse for FixtureNotFound {
    fn into_response(self) -> Response {
        tracing::debug!(uri = %self.0, "fixture not found");
        (
            StatusCode::NOT_FOUND,
            Json(ErrorBody {
                error: format!("fixture {} not found", self.0.path()),
            }),
        )
            .into_response()
    }
}
