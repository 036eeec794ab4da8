//! # homepanel-adapter-web
//!
//! Browser adapter: implements the panel ports on top of the page and
//! boots the control panel when the bundle loads.
//!
//! ## Wiring
//! - [`api::HttpFixtureApi`] fetches documents and sends saves with `gloo-net`
//! - [`dom::BrowserDom`] mounts control markup into `#control-panel-content`
//! - [`floor_plan::BrowserFloorPlan`] styles the graphic in `<object id="home-map">`
//! - [`notifier::AlertNotifier`] shows failures with `window.alert`
//! - [`events`] forwards `change` events and floor-plan clicks to the session
//!
//! The home id comes from the container's `data-home` attribute.

pub mod api;
mod console;
pub mod dom;
pub mod events;
pub mod floor_plan;
pub mod notifier;

use std::rc::Rc;

use tracing::Level;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;

use homepanel_app::panel::DEFAULT_CONTAINER;
use homepanel_app::session::PanelSession;
use homepanel_domain::error::PanelError;

use crate::api::HttpFixtureApi;
use crate::dom::BrowserDom;
use crate::floor_plan::BrowserFloorPlan;
use crate::notifier::AlertNotifier;

/// The session as wired in the browser.
pub type BrowserSession = PanelSession<HttpFixtureApi, BrowserDom, BrowserFloorPlan, AlertNotifier>;

/// Home shown when the container carries no `data-home`.
const FALLBACK_HOME: &str = "whitehouse";

#[derive(Debug, thiserror::Error)]
enum BootError {
    #[error("no window")]
    MissingWindow,
    #[error("no document")]
    MissingDocument,
    #[error("element #{0} is missing")]
    MissingElement(&'static str),
    #[error("browser error: {0}")]
    Browser(String),
    #[error(transparent)]
    Panel(#[from] PanelError),
}

impl From<JsValue> for BootError {
    fn from(value: JsValue) -> Self {
        Self::Browser(format!("{value:?}"))
    }
}

#[wasm_bindgen(start)]
pub fn start() {
    console::init(Level::INFO);
    spawn_local(async {
        if let Err(err) = boot().await {
            tracing::error!(error = %err, "control panel failed to start");
        }
    });
}

async fn boot() -> Result<(), BootError> {
    let window = web_sys::window().ok_or(BootError::MissingWindow)?;
    let document = window.document().ok_or(BootError::MissingDocument)?;
    let container = document
        .get_element_by_id(DEFAULT_CONTAINER)
        .ok_or(BootError::MissingElement(DEFAULT_CONTAINER))?;
    let home = container
        .get_attribute("data-home")
        .filter(|home| !home.trim().is_empty())
        .unwrap_or_else(|| FALLBACK_HOME.to_string());
    tracing::info!(%home, "starting control panel");

    let plan = BrowserFloorPlan::new(document.clone());
    let session = Rc::new(PanelSession::new(
        HttpFixtureApi::new(home),
        BrowserDom::new(document),
        plan.clone(),
        AlertNotifier::new(window),
    ));

    events::log_house_updates(session.subscribe());
    events::on_panel_change(&container, Rc::clone(&session))?;

    let report = session.initialize().await?;
    tracing::info!(
        mounted = report.mounted.len(),
        skipped = report.skipped.len(),
        "home controls mounted"
    );

    match plan.host() {
        Some(host) => events::on_floor_plan_ready(&host, plan, session)?,
        None => tracing::warn!(
            host = floor_plan::DEFAULT_HOST,
            "no floor plan on the page"
        ),
    }
    Ok(())
}
