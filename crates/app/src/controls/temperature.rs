//! Temperature: a 60–80°F slider that tints the floor-plan backdrop.

use askama::Template;

use homepanel_domain::error::{PanelError, ValidationError};
use homepanel_domain::feature::Feature;
use homepanel_domain::id::AnchorId;
use homepanel_domain::save::SaveRequest;
use homepanel_domain::value::Temperature;

use super::{FeatureControl, element_missing, render_failed};
use crate::ports::{FloorPlan, PanelDom};
use crate::visual_sync;

#[derive(Template)]
#[template(path = "temperature.html")]
struct TemperatureTemplate<'a> {
    anchor: &'a AnchorId,
    label: &'a AnchorId,
    name: &'a str,
    value: Temperature,
    min: i64,
    max: i64,
}

/// Range slider bound to the house temperature.
#[derive(Debug, Clone)]
pub struct TemperatureControl {
    anchor: AnchorId,
    label: AnchorId,
    feature: Feature,
    initial: Temperature,
}

impl TemperatureControl {
    /// Bind the temperature feature to `anchor`.
    ///
    /// # Errors
    ///
    /// Returns a [`ValidationError`] when the feature's value is not a
    /// temperature within `60..=80`.
    pub fn new(anchor: AnchorId, feature: Feature) -> Result<Self, ValidationError> {
        let initial = Temperature::from_feature_value(&feature.current_value)?;
        Ok(Self {
            label: anchor.suffixed("temp"),
            anchor,
            feature,
            initial,
        })
    }
}

impl FeatureControl for TemperatureControl {
    type Value = Temperature;

    fn anchor(&self) -> &AnchorId {
        &self.anchor
    }

    fn feature(&self) -> &Feature {
        &self.feature
    }

    fn render(&self) -> Result<String, PanelError> {
        TemperatureTemplate {
            anchor: &self.anchor,
            label: &self.label,
            name: &self.feature.name,
            value: self.initial,
            min: Temperature::MIN,
            max: Temperature::MAX,
        }
        .render()
        .map_err(|err| render_failed(&self.anchor, &err))
    }

    fn read_value(&self, dom: &impl PanelDom) -> Result<Temperature, PanelError> {
        let raw = dom
            .value(&self.anchor)
            .ok_or_else(|| element_missing(&self.anchor))?;
        Ok(raw.parse()?)
    }

    fn reflect(&self, value: &Temperature, dom: &impl PanelDom, plan: &impl FloorPlan) {
        dom.set_text(&self.label, &format!("{value}\u{2109}"));
        visual_sync::apply_temperature(plan, *value);
    }

    fn save_request(&self, value: &Temperature) -> Option<SaveRequest> {
        Some(SaveRequest::House {
            temperature: *value,
        })
    }
}
