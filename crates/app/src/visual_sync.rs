//! Visual sync: keeps the floor-plan graphic in step with feature state.
//!
//! The `apply_*` helpers are shared with the controls' `reflect` step; an
//! absent floor-plan element turns every one of them into a no-op.

use homepanel_domain::feature::FeatureKind;
use homepanel_domain::floor_plan::{
    BackdropTint, StyleProperty, curtain_opacity, light_fill, parse_opacity,
};
use homepanel_domain::id::RoomId;
use homepanel_domain::room::RoomMap;
use homepanel_domain::value::{CurtainState, LightState, Temperature};

use crate::ports::FloorPlan;

/// Swap the room's fill colour. Returns whether the element was present.
pub fn apply_light(plan: &impl FloorPlan, room: &RoomId, state: LightState) -> bool {
    let applied = plan.set_room_style(room, StyleProperty::Fill, light_fill(state));
    if !applied {
        tracing::debug!(%room, "floor-plan element absent, light not reflected");
    }
    applied
}

/// Step the room's fill opacity. Returns whether the element was present.
pub fn apply_curtain(plan: &impl FloorPlan, room: &RoomId, state: CurtainState) -> bool {
    let current = parse_opacity(plan.room_style(room, StyleProperty::FillOpacity).as_deref());
    let next = curtain_opacity(current, state);
    let applied = plan.set_room_style(room, StyleProperty::FillOpacity, &next.to_string());
    if !applied {
        tracing::debug!(%room, "floor-plan element absent, curtain not reflected");
    }
    applied
}

/// Tint the floor-plan backdrop. Returns whether the host element was present.
pub fn apply_temperature(plan: &impl FloorPlan, temperature: Temperature) -> bool {
    let tint = BackdropTint::for_temperature(temperature);
    plan.set_backdrop_style(StyleProperty::Background, &tint.to_string())
}

/// Counts from one floor-plan sync pass.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SyncReport {
    /// Features written onto a present element.
    pub applied: usize,
    /// Features whose room element was absent.
    pub absent: usize,
    /// Features with a value that could not be parsed.
    pub invalid: usize,
}

/// Reflect the persisted value of every light and curtain onto the plan.
///
/// Other kinds (including unknown ones) are not floor-plan features and are
/// passed over silently.
pub fn sync_floor_plan(plan: &impl FloorPlan, rooms: &RoomMap) -> SyncReport {
    let mut report = SyncReport::default();

    for (room_id, room) in rooms.iter() {
        for feature in &room.features {
            let applied = match feature.kind() {
                Ok(FeatureKind::Light) => {
                    match LightState::from_feature_value(&feature.current_value) {
                        Ok(state) => apply_light(plan, room_id, state),
                        Err(err) => {
                            tracing::warn!(room = %room_id, feature = %feature.id, error = %err, "skipping light");
                            report.invalid += 1;
                            continue;
                        }
                    }
                }
                Ok(FeatureKind::Curtain) => {
                    match CurtainState::from_feature_value(&feature.current_value) {
                        Ok(state) => apply_curtain(plan, room_id, state),
                        Err(err) => {
                            tracing::warn!(room = %room_id, feature = %feature.id, error = %err, "skipping curtain");
                            report.invalid += 1;
                            continue;
                        }
                    }
                }
                _ => continue,
            };

            if applied {
                report.applied += 1;
            } else {
                report.absent += 1;
            }
        }
    }

    tracing::debug!(
        applied = report.applied,
        absent = report.absent,
        invalid = report.invalid,
        "floor plan synced"
    );
    report
}
