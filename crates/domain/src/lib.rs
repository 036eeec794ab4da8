//! # homepanel-domain
//!
//! Pure domain model for the homepanel control panel.
//!
//! ## Responsibilities
//! - Foundational types: typed identifiers, error conventions
//! - Define **Features** (one controllable attribute: a light, a curtain,
//!   the temperature, or the room selector itself)
//! - Define **Rooms** and the **Home** snapshot returned by the fixture API
//! - Define typed **control values** (`On`/`Off`, `Open`/`Closed`, 60–80°F)
//! - Floor-plan arithmetic (fill colours, curtain opacity, temperature tint)
//! - **Save requests** and **house-update** events
//!
//! ## Dependency rule
//! This crate has **no internal dependencies**.
//! It must never import anything from `app`, adapters, or external IO crates.
//! All IO boundaries are expressed as traits in the `app` crate (ports).

pub mod error;
pub mod id;

pub mod feature;
pub mod floor_plan;
pub mod house_update;
pub mod room;
pub mod save;
pub mod value;
