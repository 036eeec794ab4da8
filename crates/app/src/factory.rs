//! Control factory: maps a feature's kind to its control variant.

use homepanel_domain::error::{PanelError, ValidationError};
use homepanel_domain::feature::{Feature, FeatureKind};
use homepanel_domain::id::{AnchorId, RoomId};

use crate::controls::{Control, CurtainControl, LightControl, RoomSelector, TemperatureControl};

/// Build the control for `feature`, mounted under `anchor`.
///
/// `room` is set when the feature comes from a room document. It scopes
/// light and curtain controls, which fall back to the feature's own
/// `room_id`.
///
/// # Errors
///
/// Returns [`ValidationError::UnknownKind`] for a kind outside the supported
/// set, [`ValidationError::MissingRoom`] for a room-scoped feature without a
/// room, [`ValidationError::NestedRoomSelector`] for a room selector inside a
/// room, or the value error of the variant. Callers log and skip the feature.
pub fn create_control(
    feature: Feature,
    anchor: AnchorId,
    room: Option<RoomId>,
) -> Result<Control, PanelError> {
    let kind = feature.kind()?;
    let control = match kind {
        FeatureKind::RoomSelector if room.is_some() => {
            return Err(ValidationError::NestedRoomSelector {
                feature: feature.id.to_string(),
            }
            .into());
        }
        FeatureKind::RoomSelector => Control::RoomSelector(RoomSelector::new(anchor, feature)?),
        FeatureKind::Temperature => {
            Control::Temperature(TemperatureControl::new(anchor, feature)?)
        }
        FeatureKind::Light => {
            let room = scoped_room(&feature, room)?;
            Control::Light(LightControl::new(anchor, feature, room)?)
        }
        FeatureKind::Curtain => {
            let room = scoped_room(&feature, room)?;
            Control::Curtain(CurtainControl::new(anchor, feature, room)?)
        }
    };
    Ok(control)
}

fn scoped_room(feature: &Feature, room: Option<RoomId>) -> Result<RoomId, ValidationError> {
    room.or_else(|| feature.room_id.clone())
        .ok_or_else(|| ValidationError::MissingRoom {
            feature: feature.id.to_string(),
        })
}
