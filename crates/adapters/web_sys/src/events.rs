//! Page-lifetime event listeners wiring the browser to the session.

use std::rc::Rc;

use tokio::sync::broadcast::{self, error::RecvError};
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;
use web_sys::{Document, DocumentReadyState, Element, Event, EventTarget, HtmlObjectElement};

use homepanel_domain::house_update::HouseUpdate;

use crate::BrowserSession;
use crate::floor_plan::BrowserFloorPlan;

/// Selector matching the room elements of the floor plan.
const ROOM_ELEMENT_SELECTOR: &str = "[id^='g-']";

/// Attach `handler` to `event` on `target`. The listener lives as long as
/// the page.
fn listen(
    target: &EventTarget,
    event: &str,
    handler: impl FnMut(Event) + 'static,
) -> Result<(), JsValue> {
    let closure = Closure::<dyn FnMut(Event)>::new(handler);
    target.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref())?;
    closure.forget();
    Ok(())
}

/// Route `change` events bubbling up to the container to the control whose
/// anchor is the event target's id.
///
/// # Errors
///
/// Returns the browser error when the listener cannot be attached.
pub fn on_panel_change(container: &Element, session: Rc<BrowserSession>) -> Result<(), JsValue> {
    listen(container, "change", move |event| {
        let Some(anchor) = target_id(&event) else {
            return;
        };
        let session = Rc::clone(&session);
        spawn_local(async move {
            match session.handle_change(&anchor).await {
                Ok(outcome) => tracing::debug!(%anchor, ?outcome, "change handled"),
                Err(err) => tracing::error!(%anchor, error = %err, "failed to handle change"),
            }
        });
    })
}

/// Sync the floor plan and listen to room clicks once the graphic is
/// loaded, now if it already is, and again after every reload.
///
/// # Errors
///
/// Returns the browser error when a listener cannot be attached.
pub fn on_floor_plan_ready(
    host: &HtmlObjectElement,
    plan: BrowserFloorPlan,
    session: Rc<BrowserSession>,
) -> Result<(), JsValue> {
    if let Some(document) = plan.plan_document()
        && document.ready_state() == DocumentReadyState::Complete
    {
        floor_plan_loaded(&document, Rc::clone(&session))?;
    }

    listen(host, "load", move |_| {
        let Some(document) = plan.plan_document() else {
            tracing::warn!("floor plan loaded without an accessible document");
            return;
        };
        if let Err(err) = floor_plan_loaded(&document, Rc::clone(&session)) {
            tracing::error!(?err, "failed to listen to floor plan clicks");
        }
    })
}

fn floor_plan_loaded(document: &Document, session: Rc<BrowserSession>) -> Result<(), JsValue> {
    let syncing = Rc::clone(&session);
    spawn_local(async move {
        match syncing.sync_floor_plan().await {
            Ok(report) => tracing::info!(
                applied = report.applied,
                absent = report.absent,
                invalid = report.invalid,
                "floor plan synced"
            ),
            Err(err) => tracing::error!(error = %err, "failed to sync floor plan"),
        }
    });

    listen(document, "click", move |event| {
        let Some(element_id) = room_element_id(&event) else {
            return;
        };
        let session = Rc::clone(&session);
        spawn_local(async move {
            match session.handle_floor_plan_click(&element_id).await {
                Ok(outcome) => tracing::debug!(%element_id, ?outcome, "floor plan click handled"),
                Err(err) => {
                    tracing::error!(%element_id, error = %err, "failed to handle floor plan click");
                }
            }
        });
    })
}

/// Log every published house update until the session goes away.
pub fn log_house_updates(mut updates: broadcast::Receiver<HouseUpdate>) {
    spawn_local(async move {
        loop {
            match updates.recv().await {
                Ok(update) => tracing::info!("{update}"),
                Err(RecvError::Lagged(missed)) => tracing::warn!(missed, "house updates dropped"),
                Err(RecvError::Closed) => break,
            }
        }
    });
}

fn target_id(event: &Event) -> Option<String> {
    let id = event.target()?.dyn_into::<Element>().ok()?.id();
    (!id.is_empty()).then_some(id)
}

// Targets inside the graphic come from another realm, `dyn_into` rejects them.
fn room_element_id(event: &Event) -> Option<String> {
    let target = event.target()?.unchecked_into::<Element>();
    let room = target.closest(ROOM_ELEMENT_SELECTOR).ok()??;
    Some(room.id())
}
