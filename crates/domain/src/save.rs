//! Save requests: what a control sends back to the fixture API.

use serde::{Deserialize, Serialize};

use crate::id::RoomId;
use crate::value::Temperature;

/// Which room-scoped feature a save targets; also the query key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RoomTarget {
    Light,
    Curtain,
}

impl RoomTarget {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Curtain => "curtain",
        }
    }
}

/// A best-effort write to the fixture API.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SaveRequest {
    /// `rooms/{room}.json?{light|curtain}={name}&value={value}`
    Room {
        room: RoomId,
        target: RoomTarget,
        name: String,
        value: String,
    },
    /// `house.json?temp={value}`
    House { temperature: Temperature },
}

impl SaveRequest {
    /// Query parameters carried by the request.
    #[must_use]
    pub fn params(&self) -> Vec<(&'static str, String)> {
        match self {
            Self::Room {
                target,
                name,
                value,
                ..
            } => vec![(target.as_str(), name.clone()), ("value", value.clone())],
            Self::House { temperature } => vec![("temp", temperature.to_string())],
        }
    }
}

/// Body returned by a save. Static fixtures carry no `success` flag, which
/// counts as accepted.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SaveResponse {
    #[serde(default)]
    pub success: Option<bool>,
}

impl SaveResponse {
    /// Whether the API explicitly rejected the save.
    #[must_use]
    pub fn is_rejected(&self) -> bool {
        self.success == Some(false)
    }
}
