//! # homepanel-adapter-http-axum
//!
//! HTTP adapter built on [axum](https://docs.rs/axum).
//!
//! ## Responsibilities
//! - Serve the **fixture API**: the JSON documents under the fixtures
//!   directory, mounted at `/API` (`/API/homes/{home}/house.json`, …)
//! - Serve the **panel assets**: the page, stylesheet, floor-plan graphic
//!   and the compiled browser bundle, from the assets directory
//! - Answer `/health`
//!
//! The fixture API is static: saves arrive as `GET` requests with query
//! parameters and are answered with the unchanged document, which the panel
//! treats as accepted. They are logged but nothing is written.
//!
//! ## Dependency rule
//! Knows nothing about the panel's domain. The documents are served as
//! files; only the browser adapter parses them.

pub mod error;
pub mod router;
