//! Port definitions: traits that adapters implement.
//!
//! Ports are the boundaries between the panel logic and the outside world
//! (the fixture API over HTTP, the browser DOM, the embedded floor plan).
//! They are defined here so that both the use-case layer and the adapter
//! layer can depend on them without creating circular dependencies.
//!
//! Futures returned by ports carry no `Send` bound: the panel runs on the
//! single browser thread.

pub mod fixture_api;
pub mod floor_plan;
pub mod notifier;
pub mod panel_dom;

pub use fixture_api::FixtureApi;
pub use floor_plan::FloorPlan;
pub use notifier::Notifier;
pub use panel_dom::{Fragment, PanelDom};
