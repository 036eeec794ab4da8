//! Typed identifier newtypes backed by strings.
//!
//! Ids come from the fixture documents (room and feature ids) or are derived
//! from the panel layout (anchor ids), so they are plain strings rather than
//! generated values.

use std::borrow::Borrow;
use std::fmt;

use serde::{Deserialize, Serialize};

macro_rules! define_id {
    ($(#[doc = $doc:expr])* $name:ident) => {
        $(#[doc = $doc])*
        #[derive(
            Debug, Clone, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
        )]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            /// Wrap an existing string.
            #[must_use]
            pub fn new(value: impl Into<String>) -> Self {
                Self(value.into())
            }

            /// Borrow the inner string.
            #[must_use]
            pub fn as_str(&self) -> &str {
                &self.0
            }

            /// Whether the id is the empty string.
            #[must_use]
            pub fn is_empty(&self) -> bool {
                self.0.is_empty()
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl From<&str> for $name {
            fn from(value: &str) -> Self {
                Self(value.to_string())
            }
        }

        impl From<String> for $name {
            fn from(value: String) -> Self {
                Self(value)
            }
        }

        impl AsRef<str> for $name {
            fn as_ref(&self) -> &str {
                &self.0
            }
        }

        impl Borrow<str> for $name {
            fn borrow(&self) -> &str {
                &self.0
            }
        }
    };
}

define_id!(
    /// Identifier of a home in the fixture API (e.g. `whitehouse`).
    HomeId
);

define_id!(
    /// Identifier of a [`Room`](crate::room::Room) (e.g. `kitchen`).
    RoomId
);

define_id!(
    /// Identifier of a [`Feature`](crate::feature::Feature).
    FeatureId
);

define_id!(
    /// DOM identifier a control is mounted under and addressed by.
    AnchorId
);

/// Prefix of floor-plan element ids (`g-{room}`).
const FLOOR_PLAN_PREFIX: &str = "g-";

impl RoomId {
    /// Id of the floor-plan element that represents this room.
    #[must_use]
    pub fn floor_plan_element(&self) -> String {
        format!("{FLOOR_PLAN_PREFIX}{}", self.0)
    }

    /// Resolve a floor-plan element id back to its room.
    ///
    /// Returns `None` when `element_id` is not a room element.
    #[must_use]
    pub fn from_floor_plan_element(element_id: &str) -> Option<Self> {
        element_id
            .strip_prefix(FLOOR_PLAN_PREFIX)
            .filter(|room| !room.is_empty())
            .map(Self::from)
    }
}

impl AnchorId {
    /// Anchor of the home-level wrapper.
    #[must_use]
    pub fn home() -> Self {
        Self::from("home")
    }

    /// Anchor of the wrapper holding one room's controls.
    #[must_use]
    pub fn room(room: &RoomId) -> Self {
        Self::home().child(room)
    }

    /// Anchor of a nested element, `{self}_{part}`.
    #[must_use]
    pub fn child(&self, part: impl fmt::Display) -> Self {
        Self(format!("{}_{part}", self.0))
    }

    /// Id of a secondary element belonging to this anchor, `{self}-{suffix}`.
    #[must_use]
    pub fn suffixed(&self, suffix: &str) -> Self {
        Self(format!("{}-{suffix}", self.0))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn should_build_nested_anchor_ids() {
        let room = RoomId::from("kitchen");
        assert_eq!(AnchorId::home().as_str(), "home");
        assert_eq!(AnchorId::home().child(0).as_str(), "home_0");
        assert_eq!(AnchorId::room(&room).as_str(), "home_kitchen");
        assert_eq!(AnchorId::room(&room).child(2).as_str(), "home_kitchen_2");
    }

    #[test]
    fn should_build_suffixed_anchor_id() {
        let anchor = AnchorId::home().child(1);
        assert_eq!(anchor.suffixed("temp").as_str(), "home_1-temp");
    }

    #[test]
    fn should_map_room_to_floor_plan_element_and_back() {
        let room = RoomId::from("den");
        let element = room.floor_plan_element();
        assert_eq!(element, "g-den");
        assert_eq!(RoomId::from_floor_plan_element(&element), Some(room));
    }

    #[test]
    fn should_reject_non_room_floor_plan_elements() {
        assert_eq!(RoomId::from_floor_plan_element("home-map"), None);
        assert_eq!(RoomId::from_floor_plan_element("g-"), None);
    }

    #[test]
    fn should_look_up_map_entries_by_str() {
        let mut map = HashMap::new();
        map.insert(AnchorId::from("home_0"), 1);
        assert_eq!(map.get("home_0"), Some(&1));
    }

    #[test]
    fn should_serialize_as_plain_string() {
        let json = serde_json::to_string(&RoomId::from("kitchen")).unwrap();
        assert_eq!(json, "\"kitchen\"");
    }
}
