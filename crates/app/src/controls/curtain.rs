//! Curtain: a "Drawn" checkbox that steps the fill opacity of its room.

use askama::Template;

use homepanel_domain::error::{PanelError, ValidationError};
use homepanel_domain::feature::Feature;
use homepanel_domain::id::{AnchorId, RoomId};
use homepanel_domain::save::{RoomTarget, SaveRequest};
use homepanel_domain::value::CurtainState;

use super::{FeatureControl, element_missing, render_failed};
use crate::ports::{FloorPlan, PanelDom};
use crate::visual_sync;

#[derive(Template)]
#[template(path = "curtain.html")]
struct CurtainTemplate<'a> {
    anchor: &'a AnchorId,
    name: &'a str,
    value: CurtainState,
    checked: bool,
}

/// Checkbox bound to one curtain of a room; ticked means closed.
#[derive(Debug, Clone)]
pub struct CurtainControl {
    anchor: AnchorId,
    feature: Feature,
    room: RoomId,
    initial: CurtainState,
}

impl CurtainControl {
    /// Bind a curtain feature to `anchor` inside `room`.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::InvalidValue`] when the feature's value is
    /// neither `Open` nor `Closed`.
    pub fn new(anchor: AnchorId, feature: Feature, room: RoomId) -> Result<Self, ValidationError> {
        let initial = CurtainState::from_feature_value(&feature.current_value)?;
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

impl FeatureControl for CurtainControl {
    type Value = CurtainState;

    fn anchor(&self) -> &AnchorId {
        &self.anchor
    }

    fn feature(&self) -> &Feature {
        &self.feature
    }

    fn render(&self) -> Result<String, PanelError> {
        CurtainTemplate {
            anchor: &self.anchor,
            name: &self.feature.name,
            value: self.initial,
            checked: self.initial.is_checked(),
        }
        .render()
        .map_err(|err| render_failed(&self.anchor, &err))
    }

    fn read_value(&self, dom: &impl PanelDom) -> Result<CurtainState, PanelError> {
        dom.checked(&self.anchor)
            .map(CurtainState::from_checked)
            .ok_or_else(|| element_missing(&self.anchor))
    }

    fn reflect(&self, value: &CurtainState, _dom: &impl PanelDom, plan: &impl FloorPlan) {
        visual_sync::apply_curtain(plan, &self.room, *value);
    }

    fn save_request(&self, value: &CurtainState) -> Option<SaveRequest> {
        Some(SaveRequest::Room {
            room: self.room.clone(),
            target: RoomTarget::Curtain,
            name: self.feature.name.clone(),
            value: value.to_string(),
        })
    }
}
