//! Axum router assembly.

use std::path::PathBuf;

use axum::Router;
use axum::extract::Request;
use axum::handler::HandlerWithoutStateExt;
use axum::http::Uri;
use axum::middleware::{self, Next};
use axum::response::Response;
use axum::routing::get;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::error::FixtureNotFound;

/// Mount point of the fixture API.
pub const API_PREFIX: &str = "/API";

/// Directories the router serves files from.
#[derive(Debug, Clone)]
pub struct StaticDirs {
    /// Root of the fixture documents (contains `homes/`).
    pub fixtures: PathBuf,
    /// Root of the page, stylesheet, graphic and browser bundle.
    pub assets: PathBuf,
}

/// Build the top-level axum [`Router`].
///
/// Fixture documents are served under [`API_PREFIX`], everything else falls
/// through to the assets directory (`/` serves `index.html`). Includes a
/// [`TraceLayer`] that logs each HTTP request/response at the `DEBUG` level
/// using the `tracing` ecosystem.
pub fn build(dirs: &StaticDirs) -> Router {
    let fixtures = ServeDir::new(&dirs.fixtures).not_found_service(fixture_not_found.into_service());
    let assets = ServeDir::new(&dirs.assets).append_index_html_on_directories(true);

    Router::new()
        .route("/health", get(health_check))
        .nest_service(API_PREFIX, fixtures)
        .fallback_service(assets)
        .layer(middleware::from_fn(log_saves))
        .layer(TraceLayer::new_for_http())
}

async fn health_check() -> &'static str {
    "OK"
}

async fn fixture_not_found(uri: Uri) -> FixtureNotFound {
    FixtureNotFound(uri)
}

/// Saves are `GET`s carrying query parameters; the documents stay unchanged.
async fn log_saves(request: Request, next: Next) -> Response {
    let uri = request.uri();
    if let Some(query) = uri.query()
        && uri.path().starts_with(API_PREFIX)
    {
        tracing::info!(path = uri.path(), query, "save acknowledged, fixtures are read-only");
    }
    next.run(request).await
}
