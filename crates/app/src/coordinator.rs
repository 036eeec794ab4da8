//! Event coordinator: the single reaction to a control's input changing.
//!
//! The synchronous half runs `read_value` then `reflect`, so visible state
//! is updated before the session issues the `persist` call.

use homepanel_domain::error::PanelError;
use homepanel_domain::id::{AnchorId, RoomId};
use homepanel_domain::value::ControlValue;

use crate::controls::Control;
use crate::panel::PanelState;
use crate::ports::{FloorPlan, PanelDom};

/// A change that was read and reflected, awaiting persistence.
#[derive(Debug, Clone)]
pub struct Reaction {
    /// Snapshot of the control; it stays usable after its room is unmounted.
    pub control: Control,
    pub value: ControlValue,
}

/// Read and reflect the change of the control mounted under `anchor`.
///
/// Returns `Ok(None)` when no control is registered there (the event came
/// from an element the panel does not own).
///
/// # Errors
///
/// Returns the control's read error; nothing is reflected in that case.
pub fn react(
    state: &PanelState,
    dom: &impl PanelDom,
    plan: &impl FloorPlan,
    anchor: &str,
) -> Result<Option<Reaction>, PanelError> {
    let Some(control) = state.registry().get(anchor) else {
        tracing::debug!(anchor, "change on unregistered element");
        return Ok(None);
    };

    let value = control.read_value(dom)?;
    control.reflect(&value, dom, plan);

    Ok(Some(Reaction {
        control: control.clone(),
        value,
    }))
}

/// Point the room selector at the room behind a clicked floor-plan element.
///
/// Returns the selector's anchor so the caller can run the change flow, or
/// `None` when the element is not a room, no selector is mounted, or the
/// selector does not offer that room.
pub fn select_from_floor_plan(
    state: &PanelState,
    dom: &impl PanelDom,
    element_id: &str,
) -> Option<AnchorId> {
    let room = RoomId::from_floor_plan_element(element_id)?;
    let Some(control @ Control::RoomSelector(selector)) = state.registry().room_selector() else {
        tracing::debug!(element_id, "floor-plan click without a room selector");
        return None;
    };
    if !selector.offers(&room) {
        tracing::debug!(%room, "floor-plan room is not selectable");
        return None;
    }

    let anchor = control.anchor().clone();
    dom.set_value(&anchor, room.as_str());
    Some(anchor)
}
