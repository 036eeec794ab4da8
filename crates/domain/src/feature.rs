//! Feature: one controllable attribute of the home.
//!
//! A feature is plain data: what it is called, which kind of control drives
//! it, and its last known value. The `kind` is kept as the raw tag from the
//! fixture document so that an unknown tag can be rejected per feature
//! (see [`Feature::kind`]) instead of failing the whole document.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;
use crate::id::{FeatureId, RoomId};

/// Closed set of control kinds the panel knows how to render.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FeatureKind {
    #[serde(alias = "rooms")]
    RoomSelector,
    Light,
    Curtain,
    #[serde(alias = "temp")]
    Temperature,
}

impl FeatureKind {
    /// Canonical tag used in fixture documents.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::RoomSelector => "room-selector",
            Self::Light => "light",
            Self::Curtain => "curtain",
            Self::Temperature => "temperature",
        }
    }
}

impl fmt::Display for FeatureKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FeatureKind {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "room-selector" | "rooms" => Ok(Self::RoomSelector),
            "light" => Ok(Self::Light),
            "curtain" => Ok(Self::Curtain),
            "temperature" | "temp" => Ok(Self::Temperature),
            other => Err(ValidationError::UnknownKind {
                kind: other.to_string(),
            }),
        }
    }
}

/// Raw value stored on a feature: a string (`"On"`, `"Closed"`, a room id)
/// or a number (a temperature).
///
/// Any other JSON value is kept as [`FeatureValue::Other`] so the document
/// still parses and only that feature fails validation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FeatureValue {
    Number(i64),
    Text(String),
    Other(serde_json::Value),
}

impl Default for FeatureValue {
    fn default() -> Self {
        Self::Text(String::new())
    }
}

impl fmt::Display for FeatureValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(n) => n.fmt(f),
            Self::Text(s) => f.write_str(s),
            Self::Other(value) => value.fmt(f),
        }
    }
}

impl From<&str> for FeatureValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<i64> for FeatureValue {
    fn from(value: i64) -> Self {
        Self::Number(value)
    }
}

/// One entry of the room selector dropdown.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoomOption {
    pub id: RoomId,
    #[serde(alias = "displayName")]
    pub name: String,
}

/// Description of one controllable thing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Feature {
    #[serde(default)]
    pub id: FeatureId,
    pub name: String,
    #[serde(alias = "controller")]
    pub kind: String,
    #[serde(default, alias = "status")]
    pub current_value: FeatureValue,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub room_id: Option<RoomId>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub options: Vec<RoomOption>,
}

impl Feature {
    /// Create a builder for constructing a [`Feature`].
    #[must_use]
    pub fn builder() -> FeatureBuilder {
        FeatureBuilder::default()
    }

    /// Resolve the raw kind tag against the closed set of known kinds.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::UnknownKind`] for any tag outside the set.
    pub fn kind(&self) -> Result<FeatureKind, ValidationError> {
        self.kind.parse()
    }
}

/// Step-by-step builder for [`Feature`].
#[derive(Debug, Default)]
pub struct FeatureBuilder {
    id: Option<FeatureId>,
    name: Option<String>,
    kind: Option<String>,
    current_value: Option<FeatureValue>,
    room_id: Option<RoomId>,
    options: Vec<RoomOption>,
}

impl FeatureBuilder {
    #[must_use]
    pub fn id(mut self, id: impl Into<FeatureId>) -> Self {
        self.id = Some(id.into());
        self
    }

    #[must_use]
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    #[must_use]
    pub fn kind(mut self, kind: FeatureKind) -> Self {
        self.kind = Some(kind.as_str().to_string());
        self
    }

    /// Set a raw kind tag, bypassing the closed set.
    #[must_use]
    pub fn raw_kind(mut self, kind: impl Into<String>) -> Self {
        self.kind = Some(kind.into());
        self
    }

    #[must_use]
    pub fn current_value(mut self, value: impl Into<FeatureValue>) -> Self {
        self.current_value = Some(value.into());
        self
    }

    #[must_use]
    pub fn room_id(mut self, room_id: impl Into<RoomId>) -> Self {
        self.room_id = Some(room_id.into());
        self
    }

    #[must_use]
    pub fn option(mut self, id: impl Into<RoomId>, name: impl Into<String>) -> Self {
        self.options.push(RoomOption {
            id: id.into(),
            name: name.into(),
        });
        self
    }

    /// Consume the builder and return a [`Feature`].
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::EmptyFeatureId`] if `id` is missing or empty.
    pub fn build(self) -> Result<Feature, ValidationError> {
        let id = self.id.unwrap_or_default();
        if id.is_empty() {
            return Err(ValidationError::EmptyFeatureId);
        }
        Ok(Feature {
            id,
            name: self.name.unwrap_or_default(),
            kind: self.kind.unwrap_or_default(),
            current_value: self.current_value.unwrap_or_default(),
            room_id: self.room_id,
            options: self.options,
        })
    }
}
