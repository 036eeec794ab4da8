//! House-update events: published after every handled control change.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::feature::FeatureKind;
use crate::value::ControlValue;

/// Record of one user-driven change to the house.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HouseUpdate {
    pub control_type: FeatureKind,
    pub control_name: String,
    pub value: ControlValue,
}

impl HouseUpdate {
    #[must_use]
    pub fn new(control_name: impl Into<String>, value: ControlValue) -> Self {
        Self {
            control_type: value.kind(),
            control_name: control_name.into(),
            value,
        }
    }
}

impl fmt::Display for HouseUpdate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "house-update: {{ type: {}, name: '{}', value: {} }}",
            self.control_type, self.control_name, self.value
        )
    }
}
