//! # homepanel-app
//!
//! Application layer: the control panel use-cases and **port definitions**
//! (traits).
//!
//! ## Responsibilities
//! - Define **port traits** that adapters must implement:
//!   - `FixtureApi`: read the home/room documents, send saves
//!   - `PanelDom`: mount markup, read and write control inputs
//!   - `FloorPlan`: style the room elements of the house graphic
//!   - `Notifier`: blocking user-visible notification
//! - Define the **control** capability (render → read → reflect → persist)
//!   and its four variants
//! - Map feature kinds to controls (factory), track mounted controls
//!   (registry), build the panel, coordinate change events and keep the
//!   floor plan in sync
//! - Provide the in-process house-update bus
//!
//! ## Dependency rule
//! Depends on `homepanel-domain` only (plus `tokio::sync` for the bus and
//! `askama` for markup). Never imports adapter crates.

pub mod controls;
pub mod coordinator;
pub mod factory;
pub mod house_update_bus;
pub mod panel;
pub mod ports;
pub mod registry;
pub mod session;
pub mod visual_sync;

#[cfg(test)]
pub(crate) mod testing;
