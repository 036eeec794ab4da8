//! Light: a checkbox that swaps the fill colour of its room.

use askama::Template;

use homepanel_domain::error::{PanelError, ValidationError};
use homepanel_domain::feature::Feature;
use homepanel_domain::id::{AnchorId, RoomId};
use homepanel_domain::save::{RoomTarget, SaveRequest};
use homepanel_domain::value::LightState;

use super::{FeatureControl, element_missing, render_failed};
use crate::ports::{FloorPlan, PanelDom};
use crate::visual_sync;

#[derive(Template)]
#[template(path = "light.html")]
struct LightTemplate<'a> {
    anchor: &'a AnchorId,
    name: &'a str,
    value: LightState,
    checked: bool,
}

/// Checkbox bound to one light of a room.
#[derive(Debug, Clone)]
pub struct LightControl {
    anchor: AnchorId,
    feature: Feature,
    room: RoomId,
    initial: LightState,
}

impl LightControl {
    /// Bind a light feature to `anchor` inside `room`.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::InvalidValue`] when the feature's value is
    /// neither `On` nor `Off`.
    pub fn new(anchor: AnchorId, feature: Feature, room: RoomId) -> Result<Self, ValidationError> {
        let initial = LightState::from_feature_value(&feature.current_value)?;
        Ok(Self {
            anchor,
            feature,
            room,
            initial,
        })
    }

    #[must_use]
    pub fn room(&self) -> &RoomId {
        &self.room
    }
}

impl FeatureControl for LightControl {
    type Value = LightState;

    fn anchor(&self) -> &AnchorId {
        &self.anchor
    }

    fn feature(&self) -> &Feature {
        &self.feature
    }

    fn render(&self) -> Result<String, PanelError> {
        LightTemplate {
            anchor: &self.anchor,
            name: &self.feature.name,
            value: self.initial,
            checked: self.initial.is_checked(),
        }
        .render()
        .map_err(|err| render_failed(&self.anchor, &err))
    }

    fn read_value(&self, dom: &impl PanelDom) -> Result<LightState, PanelError> {
        dom.checked(&self.anchor)
            .map(LightState::from_checked)
            .ok_or_else(|| element_missing(&self.anchor))
    }

    fn reflect(&self, value: &LightState, _dom: &impl PanelDom, plan: &impl FloorPlan) {
        visual_sync::apply_light(plan, &self.room, *value);
    }

    fn save_request(&self, value: &LightState) -> Option<SaveRequest> {
        Some(SaveRequest::Room {
            room: self.room.clone(),
            target: RoomTarget::Light,
            name: self.feature.name.clone(),
            value: value.to_string(),
        })
    }
}
