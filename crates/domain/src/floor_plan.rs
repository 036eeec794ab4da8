//! Floor-plan arithmetic: how control values look on the house graphic.
//!
//! Lights swap the fill colour of their room, curtains step the room's fill
//! opacity and the temperature tints the backdrop behind the whole plan.

use std::fmt;

use crate::value::{CurtainState, LightState, Temperature};

/// Fill of a room whose light is on.
pub const LIGHT_ON_FILL: &str = "#FFFF00";
/// Fill of a room whose light is off.
pub const LIGHT_OFF_FILL: &str = "#A9A9A9";
/// Opacity change applied per curtain toggle.
pub const CURTAIN_STEP: f64 = 0.3;
/// Opacity assumed when a room element carries no readable opacity yet.
pub const DEFAULT_OPACITY: f64 = 1.0;

/// Inline style properties the panel writes on the floor plan.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StyleProperty {
    Fill,
    FillOpacity,
    Background,
}

impl StyleProperty {
    /// CSS property name.
    #[must_use]
    pub fn css_name(self) -> &'static str {
        match self {
            Self::Fill => "fill",
            Self::FillOpacity => "fill-opacity",
            Self::Background => "background",
        }
    }
}

/// Fill colour of a room for the given light state.
#[must_use]
pub fn light_fill(state: LightState) -> &'static str {
    match state {
        LightState::On => LIGHT_ON_FILL,
        LightState::Off => LIGHT_OFF_FILL,
    }
}

/// Read an inline opacity, falling back to [`DEFAULT_OPACITY`].
#[must_use]
pub fn parse_opacity(raw: Option<&str>) -> f64 {
    raw.and_then(|value| value.trim().parse::<f64>().ok())
        .filter(|value| value.is_finite())
        .unwrap_or(DEFAULT_OPACITY)
}

/// Next fill opacity after a curtain moves to `state`.
///
/// Opening raises the opacity by [`CURTAIN_STEP`], closing lowers it. The
/// result is clamped to `[0, 1]` and rounded to two decimals so repeated
/// toggles cannot drift.
#[must_use]
pub fn curtain_opacity(current: f64, state: CurtainState) -> f64 {
    let next = match state {
        CurtainState::Open => current + CURTAIN_STEP,
        CurtainState::Closed => current - CURTAIN_STEP,
    };
    (next.clamp(0.0, 1.0) * 100.0).round() / 100.0
}

/// Backdrop tint for a temperature, interpolated around 70°F.
///
/// Channels are not clamped: at 80°F `cold` is 305.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BackdropTint {
    pub warmth: i64,
    pub cold: i64,
}

impl BackdropTint {
    #[must_use]
    pub fn for_temperature(temperature: Temperature) -> Self {
        let degrees = temperature.degrees();
        Self {
            warmth: 255 - (degrees - Temperature::MIDPOINT) * 5,
            cold: 255 - (Temperature::MIDPOINT - degrees) * 5,
        }
    }
}

impl fmt::Display for BackdropTint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "rgba({}, {}, {}, 0.5)",
            self.cold, self.warmth, self.warmth
        )
    }
}
