//! Controls: UI and behaviour units bound to one feature.
//!
//! Every control follows the same lifecycle: **render** its markup from the
//! feature, **read** the value the user entered, **reflect** that value onto
//! the floor plan, and **persist** it through the fixture API. The variants
//! form a closed set; [`Control`] dispatches over them exhaustively.

mod curtain;
mod light;
mod room_selector;
mod temperature;

pub use curtain::CurtainControl;
pub use light::LightControl;
pub use room_selector::RoomSelector;
pub use temperature::TemperatureControl;

use homepanel_domain::error::{NotFoundError, PanelError, RenderError};
use homepanel_domain::feature::{Feature, FeatureKind};
use homepanel_domain::id::{AnchorId, RoomId};
use homepanel_domain::save::SaveRequest;
use homepanel_domain::value::ControlValue;

use crate::ports::{FixtureApi, FloorPlan, Notifier, PanelDom};

/// Capability set shared by all control variants.
pub trait FeatureControl {
    /// Value domain of this control.
    type Value;

    /// DOM id the control's input is mounted under.
    fn anchor(&self) -> &AnchorId;

    /// Feature this control is bound to.
    fn feature(&self) -> &Feature;

    /// Markup for the control. Pure: mutates nothing.
    ///
    /// # Errors
    ///
    /// Returns [`PanelError::Render`] if the template fails.
    fn render(&self) -> Result<String, PanelError>;

    /// Extract the user-entered value from the live UI.
    ///
    /// # Errors
    ///
    /// Returns [`PanelError::NotFound`] when the input is not mounted, or
    /// [`PanelError::Validation`] when it holds an invalid value.
    fn read_value(&self, dom: &impl PanelDom) -> Result<Self::Value, PanelError>;

    /// Push `value` onto secondary surfaces. A no-op when they are absent.
    fn reflect(&self, value: &Self::Value, dom: &impl PanelDom, plan: &impl FloorPlan);

    /// The write that persists `value`, if this control persists anything.
    fn save_request(&self, value: &Self::Value) -> Option<SaveRequest>;
}

/// Result of a persist call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PersistOutcome {
    /// The control has nothing to persist.
    Skipped,
    Accepted,
    /// The API answered `success: false`.
    Rejected,
    /// The request never produced a usable answer.
    Failed,
}

/// A control of any kind.
#[derive(Debug, Clone)]
pub enum Control {
    RoomSelector(RoomSelector),
    Light(LightControl),
    Curtain(CurtainControl),
    Temperature(TemperatureControl),
}

impl Control {
    #[must_use]
    pub fn anchor(&self) -> &AnchorId {
        match self {
            Self::RoomSelector(c) => c.anchor(),
            Self::Light(c) => c.anchor(),
            Self::Curtain(c) => c.anchor(),
            Self::Temperature(c) => c.anchor(),
        }
    }

    #[must_use]
    pub fn feature(&self) -> &Feature {
        match self {
            Self::RoomSelector(c) => c.feature(),
            Self::Light(c) => c.feature(),
            Self::Curtain(c) => c.feature(),
            Self::Temperature(c) => c.feature(),
        }
    }

    #[must_use]
    pub fn kind(&self) -> FeatureKind {
        match self {
            Self::RoomSelector(_) => FeatureKind::RoomSelector,
            Self::Light(_) => FeatureKind::Light,
            Self::Curtain(_) => FeatureKind::Curtain,
            Self::Temperature(_) => FeatureKind::Temperature,
        }
    }

    /// Room the control is scoped to, `None` for home-level controls.
    #[must_use]
    pub fn room(&self) -> Option<&RoomId> {
        match self {
            Self::Light(c) => Some(c.room()),
            Self::Curtain(c) => Some(c.room()),
            Self::RoomSelector(_) | Self::Temperature(_) => None,
        }
    }

    /// See [`FeatureControl::render`].
    ///
    /// # Errors
    ///
    /// Returns [`PanelError::Render`] if the template fails.
    pub fn render(&self) -> Result<String, PanelError> {
        match self {
            Self::RoomSelector(c) => c.render(),
            Self::Light(c) => c.render(),
            Self::Curtain(c) => c.render(),
            Self::Temperature(c) => c.render(),
        }
    }

    /// See [`FeatureControl::read_value`].
    ///
    /// # Errors
    ///
    /// Returns [`PanelError::NotFound`] or [`PanelError::Validation`].
    pub fn read_value(&self, dom: &impl PanelDom) -> Result<ControlValue, PanelError> {
        Ok(match self {
            Self::RoomSelector(c) => ControlValue::RoomSelector(c.read_value(dom)?),
            Self::Light(c) => ControlValue::Light(c.read_value(dom)?),
            Self::Curtain(c) => ControlValue::Curtain(c.read_value(dom)?),
            Self::Temperature(c) => ControlValue::Temperature(c.read_value(dom)?),
        })
    }

    /// See [`FeatureControl::reflect`]. A value of another kind is ignored.
    pub fn reflect(&self, value: &ControlValue, dom: &impl PanelDom, plan: &impl FloorPlan) {
        match (self, value) {
            (Self::RoomSelector(c), ControlValue::RoomSelector(v)) => c.reflect(v, dom, plan),
            (Self::Light(c), ControlValue::Light(v)) => c.reflect(v, dom, plan),
            (Self::Curtain(c), ControlValue::Curtain(v)) => c.reflect(v, dom, plan),
            (Self::Temperature(c), ControlValue::Temperature(v)) => c.reflect(v, dom, plan),
            (control, value) => {
                tracing::debug!(
                    anchor = %control.anchor(),
                    kind = %value.kind(),
                    "ignoring value of another kind"
                );
            }
        }
    }

    /// See [`FeatureControl::save_request`].
    #[must_use]
    pub fn save_request(&self, value: &ControlValue) -> Option<SaveRequest> {
        match (self, value) {
            (Self::RoomSelector(c), ControlValue::RoomSelector(v)) => c.save_request(v),
            (Self::Light(c), ControlValue::Light(v)) => c.save_request(v),
            (Self::Curtain(c), ControlValue::Curtain(v)) => c.save_request(v),
            (Self::Temperature(c), ControlValue::Temperature(v)) => c.save_request(v),
            _ => None,
        }
    }

    /// Send `value` to the fixture API.
    ///
    /// A rejection or a transport failure shows exactly one notification.
    /// Nothing is retried and the UI is left as reflected.
    pub async fn persist(
        &self,
        value: &ControlValue,
        api: &impl FixtureApi,
        notifier: &impl Notifier,
    ) -> PersistOutcome {
        let Some(request) = self.save_request(value) else {
            return PersistOutcome::Skipped;
        };

        match api.save(&request).await {
            Ok(response) if response.is_rejected() => {
                tracing::warn!(anchor = %self.anchor(), "save rejected by api");
                notifier.notify("Error saving adjustment: false");
                PersistOutcome::Rejected
            }
            Ok(_) => PersistOutcome::Accepted,
            Err(err) => {
                tracing::warn!(anchor = %self.anchor(), error = %err, "save failed");
                notifier.notify(&format!("Error saving adjustment: {err}"));
                PersistOutcome::Failed
            }
        }
    }
}

fn element_missing(anchor: &AnchorId) -> PanelError {
    NotFoundError {
        what: "element",
        id: anchor.to_string(),
    }
    .into()
}

fn render_failed(anchor: &AnchorId, err: &askama::Error) -> PanelError {
    RenderError {
        anchor: anchor.to_string(),
        message: err.to_string(),
    }
    .into()
}
