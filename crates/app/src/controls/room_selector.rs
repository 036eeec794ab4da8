//! Room selector: a dropdown choosing which room's controls are shown.
//!
//! Selecting a room changes which sub-panel is mounted; the selector itself
//! neither touches the floor plan nor persists anything. Mounting the room
//! is driven by the coordinator from the value this control reads.

use askama::Template;

use homepanel_domain::error::{PanelError, ValidationError};
use homepanel_domain::feature::{Feature, FeatureKind, FeatureValue};
use homepanel_domain::id::{AnchorId, RoomId};
use homepanel_domain::save::SaveRequest;

use super::{FeatureControl, element_missing, render_failed};
use crate::ports::{FloorPlan, PanelDom};

struct OptionView<'a> {
    id: &'a RoomId,
    name: &'a str,
    selected: bool,
}

#[derive(Template)]
#[template(path = "room_selector.html")]
struct RoomSelectorTemplate<'a> {
    anchor: &'a AnchorId,
    options: Vec<OptionView<'a>>,
}

/// Dropdown listing every room of the home.
#[derive(Debug, Clone)]
pub struct RoomSelector {
    anchor: AnchorId,
    feature: Feature,
    initial: Option<RoomId>,
}

impl RoomSelector {
    /// Bind the room-selector feature to `anchor`.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::InvalidValue`] when the current value is
    /// not a room id string.
    pub fn new(anchor: AnchorId, feature: Feature) -> Result<Self, ValidationError> {
        let initial = match &feature.current_value {
            FeatureValue::Text(room) if room.is_empty() => None,
            FeatureValue::Text(room) => Some(RoomId::from(room.as_str())),
            FeatureValue::Number(_) | FeatureValue::Other(_) => {
                return Err(ValidationError::InvalidValue {
                    kind: FeatureKind::RoomSelector,
                    value: feature.current_value.to_string(),
                });
            }
        };
        Ok(Self {
            anchor,
            feature,
            initial,
        })
    }

    /// Whether `room` is one of the selectable options.
    #[must_use]
    pub fn offers(&self, room: &RoomId) -> bool {
        self.feature.options.iter().any(|option| &option.id == room)
    }
}

impl FeatureControl for RoomSelector {
    type Value = Option<RoomId>;

    fn anchor(&self) -> &AnchorId {
        &self.anchor
    }

    fn feature(&self) -> &Feature {
        &self.feature
    }

    fn render(&self) -> Result<String, PanelError> {
        let options = self
            .feature
            .options
            .iter()
            .map(|option| OptionView {
                id: &option.id,
                name: &option.name,
                selected: self.initial.as_ref() == Some(&option.id),
            })
            .collect();

        RoomSelectorTemplate {
            anchor: &self.anchor,
            options,
        }
        .render()
        .map_err(|err| render_failed(&self.anchor, &err))
    }

    fn read_value(&self, dom: &impl PanelDom) -> Result<Option<RoomId>, PanelError> {
        let raw = dom
            .value(&self.anchor)
            .ok_or_else(|| element_missing(&self.anchor))?;
        Ok((!raw.is_empty()).then(|| RoomId::from(raw)))
    }

    fn reflect(&self, _value: &Option<RoomId>, _dom: &impl PanelDom, _plan: &impl FloorPlan) {}

    fn save_request(&self, _value: &Option<RoomId>) -> Option<SaveRequest> {
        None
    }
}
