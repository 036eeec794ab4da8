//! Typed control values: what a control reads from the UI.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;
use crate::feature::{FeatureKind, FeatureValue};
use crate::id::RoomId;

/// State of a light.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LightState {
    On,
    Off,
}

impl LightState {
    /// Light state represented by a checkbox.
    #[must_use]
    pub fn from_checked(checked: bool) -> Self {
        if checked { Self::On } else { Self::Off }
    }

    /// Whether the checkbox for this state is ticked.
    #[must_use]
    pub fn is_checked(self) -> bool {
        matches!(self, Self::On)
    }

    /// Parse the raw value stored on a light feature.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::InvalidValue`] unless the value is `On` or `Off`.
    pub fn from_feature_value(value: &FeatureValue) -> Result<Self, ValidationError> {
        match value {
            FeatureValue::Text(text) => text.parse(),
            FeatureValue::Number(_) | FeatureValue::Other(_) => {
                Err(ValidationError::InvalidValue {
                    kind: FeatureKind::Light,
                    value: value.to_string(),
                })
            }
        }
    }
}

impl fmt::Display for LightState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::On => f.write_str("On"),
            Self::Off => f.write_str("Off"),
        }
    }
}

impl FromStr for LightState {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "On" => Ok(Self::On),
            "Off" => Ok(Self::Off),
            other => Err(ValidationError::InvalidValue {
                kind: FeatureKind::Light,
                value: other.to_string(),
            }),
        }
    }
}

/// Position of a curtain. A ticked checkbox means the curtain is drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CurtainState {
    Open,
    Closed,
}

impl CurtainState {
    /// Curtain state represented by a checkbox.
    #[must_use]
    pub fn from_checked(checked: bool) -> Self {
        if checked { Self::Closed } else { Self::Open }
    }

    /// Whether the checkbox for this state is ticked.
    #[must_use]
    pub fn is_checked(self) -> bool {
        matches!(self, Self::Closed)
    }

    /// Parse the raw value stored on a curtain feature.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::InvalidValue`] unless the value is `Open` or `Closed`.
    pub fn from_feature_value(value: &FeatureValue) -> Result<Self, ValidationError> {
        match value {
            FeatureValue::Text(text) => text.parse(),
            FeatureValue::Number(_) | FeatureValue::Other(_) => {
                Err(ValidationError::InvalidValue {
                    kind: FeatureKind::Curtain,
                    value: value.to_string(),
                })
            }
        }
    }
}

impl fmt::Display for CurtainState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Open => f.write_str("Open"),
            Self::Closed => f.write_str("Closed"),
        }
    }
}

impl FromStr for CurtainState {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Open" => Ok(Self::Open),
            "Closed" => Ok(Self::Closed),
            other => Err(ValidationError::InvalidValue {
                kind: FeatureKind::Curtain,
                value: other.to_string(),
            }),
        }
    }
}

/// House temperature in degrees Fahrenheit, within `60..=80`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "i64")]
pub struct Temperature(i64);

impl Temperature {
    pub const MIN: i64 = 60;
    pub const MAX: i64 = 80;
    /// Neutral point of the backdrop tint.
    pub const MIDPOINT: i64 = 70;

    /// Validate and wrap a temperature.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::TemperatureOutOfRange`] outside `60..=80`.
    pub fn new(degrees: i64) -> Result<Self, ValidationError> {
        if (Self::MIN..=Self::MAX).contains(&degrees) {
            Ok(Self(degrees))
        } else {
            Err(ValidationError::TemperatureOutOfRange(degrees))
        }
    }

    /// Parse the raw value stored on a temperature feature.
    ///
    /// # Errors
    ///
    /// Returns a [`ValidationError`] for non-numeric or out-of-range values.
    pub fn from_feature_value(value: &FeatureValue) -> Result<Self, ValidationError> {
        match value {
            FeatureValue::Number(degrees) => Self::new(*degrees),
            FeatureValue::Text(text) => text.parse(),
            FeatureValue::Other(_) => Err(ValidationError::InvalidValue {
                kind: FeatureKind::Temperature,
                value: value.to_string(),
            }),
        }
    }

    #[must_use]
    pub fn degrees(self) -> i64 {
        self.0
    }
}

impl TryFrom<i64> for Temperature {
    type Error = ValidationError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Temperature> for i64 {
    fn from(value: Temperature) -> Self {
        value.0
    }
}

impl fmt::Display for Temperature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl FromStr for Temperature {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let degrees = s
            .trim()
            .parse::<i64>()
            .map_err(|_| ValidationError::InvalidValue {
                kind: FeatureKind::Temperature,
                value: s.to_string(),
            })?;
        Self::new(degrees)
    }
}

/// Value read from a mounted control, typed by the control's kind.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "kebab-case")]
pub enum ControlValue {
    /// Selected room, `None` for the "Choose Room" placeholder.
    RoomSelector(Option<RoomId>),
    Light(LightState),
    Curtain(CurtainState),
    Temperature(Temperature),
}

impl ControlValue {
    /// Kind of control this value belongs to.
    #[must_use]
    pub fn kind(&self) -> FeatureKind {
        match self {
            Self::RoomSelector(_) => FeatureKind::RoomSelector,
            Self::Light(_) => FeatureKind::Light,
            Self::Curtain(_) => FeatureKind::Curtain,
            Self::Temperature(_) => FeatureKind::Temperature,
        }
    }

    /// Parse the raw value stored on a feature of the given kind.
    ///
    /// # Errors
    ///
    /// Returns a [`ValidationError`] when the value does not fit the kind.
    pub fn from_feature_value(
        kind: FeatureKind,
        value: &FeatureValue,
    ) -> Result<Self, ValidationError> {
        match (kind, value) {
            (FeatureKind::RoomSelector, FeatureValue::Text(room)) if room.is_empty() => {
                Ok(Self::RoomSelector(None))
            }
            (FeatureKind::RoomSelector, FeatureValue::Text(room)) => {
                Ok(Self::RoomSelector(Some(RoomId::from(room.as_str()))))
            }
            (FeatureKind::RoomSelector, FeatureValue::Number(_) | FeatureValue::Other(_)) => {
                Err(ValidationError::InvalidValue {
                    kind,
                    value: value.to_string(),
                })
            }
            (FeatureKind::Light, _) => LightState::from_feature_value(value).map(Self::Light),
            (FeatureKind::Curtain, _) => CurtainState::from_feature_value(value).map(Self::Curtain),
            (FeatureKind::Temperature, _) => {
                Temperature::from_feature_value(value).map(Self::Temperature)
            }
        }
    }
}

impl fmt::Display for ControlValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::RoomSelector(Some(room)) => room.fmt(f),
            Self::RoomSelector(None) => f.write_str("none"),
            Self::Light(state) => state.fmt(f),
            Self::Curtain(state) => state.fmt(f),
            Self::Temperature(temp) => temp.fmt(f),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_map_checkbox_to_light_state() {
        assert_eq!(LightState::from_checked(true), LightState::On);
        assert_eq!(LightState::from_checked(false), LightState::Off);
        assert!(LightState::On.is_checked());
    }

    #[test]
    fn should_treat_checked_curtain_as_closed() {
        assert_eq!(CurtainState::from_checked(true), CurtainState::Closed);
        assert_eq!(CurtainState::from_checked(false), CurtainState::Open);
    }

    #[test]
    fn should_reject_temperature_outside_range() {
        assert_eq!(
            Temperature::new(59),
            Err(ValidationError::TemperatureOutOfRange(59))
        );
        assert_eq!(
            Temperature::new(81),
            Err(ValidationError::TemperatureOutOfRange(81))
        );
        assert!(Temperature::new(60).is_ok());
        assert!(Temperature::new(80).is_ok());
    }

    #[test]
    fn should_parse_temperature_from_slider_text() {
        assert_eq!("72".parse::<Temperature>().unwrap().degrees(), 72);
        assert!("warm".parse::<Temperature>().is_err());
    }

    #[test]
    fn should_reject_invalid_light_value() {
        let result = ControlValue::from_feature_value(FeatureKind::Light, &"Dim".into());
        assert_eq!(
            result,
            Err(ValidationError::InvalidValue {
                kind: FeatureKind::Light,
                value: "Dim".to_string()
            })
        );
    }

    #[test]
    fn should_read_empty_room_selection_as_none() {
        let value =
            ControlValue::from_feature_value(FeatureKind::RoomSelector, &"".into()).unwrap();
        assert_eq!(value, ControlValue::RoomSelector(None));
    }

    #[test]
    fn should_read_numeric_temperature_value() {
        let raw = FeatureValue::Number(68);
        let value = ControlValue::from_feature_value(FeatureKind::Temperature, &raw).unwrap();
        assert_eq!(value.kind(), FeatureKind::Temperature);
        assert_eq!(value, ControlValue::Temperature(Temperature::new(68).unwrap()));
    }

    #[test]
    fn should_reject_numeric_light_value() {
        let result = ControlValue::from_feature_value(FeatureKind::Light, &FeatureValue::Number(1));
        assert!(result.is_err());
    }
}
