//! Common error types used across the workspace.
//!
//! Each layer converts into [`PanelError`] via `#[from]`. Every variant is
//! scoped to a single feature or interaction: nothing here is fatal to the
//! panel as a whole.

use crate::feature::FeatureKind;

/// Top-level error for panel operations.
#[derive(Debug, thiserror::Error)]
pub enum PanelError {
    #[error("validation error: {0}")]
    Validation(#[from] ValidationError),

    #[error("not found: {0}")]
    NotFound(#[from] NotFoundError),

    #[error("api error: {0}")]
    Api(#[from] ApiError),

    #[error("render error: {0}")]
    Render(#[from] RenderError),
}

/// A feature description or a UI value violates a domain invariant.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("unknown feature kind {kind:?}")]
    UnknownKind { kind: String },

    #[error("invalid {kind} value {value:?}")]
    InvalidValue { kind: FeatureKind, value: String },

    #[error("temperature {0} is outside 60..=80")]
    TemperatureOutOfRange(i64),

    #[error("feature {feature:?} must belong to a room")]
    MissingRoom { feature: String },

    #[error("room selector {feature:?} must be a home feature")]
    NestedRoomSelector { feature: String },

    #[error("feature id must not be empty")]
    EmptyFeatureId,
}

/// A lookup by id found nothing.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{what} {id} not found")]
pub struct NotFoundError {
    pub what: &'static str,
    pub id: String,
}

/// The fixture API could not be reached or returned something unusable.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    #[error("request to {url} failed: {message}")]
    Transport { url: String, message: String },

    #[error("{url} answered with HTTP {status}")]
    Status { url: String, status: u16 },

    #[error("could not decode {url}: {message}")]
    Decode { url: String, message: String },
}

/// A control template failed to render.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("failed to render control {anchor}: {message}")]
pub struct RenderError {
    pub anchor: String,
    pub message: String,
}
