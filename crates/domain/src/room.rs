//! Rooms and the home snapshot returned by the fixture API.
//!
//! Snapshots are replaced wholesale on every fetch; nothing here merges
//! incrementally.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::feature::Feature;
use crate::id::RoomId;

/// A room and the features it owns.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Room {
    #[serde(default)]
    pub id: RoomId,
    pub name: String,
    #[serde(default)]
    pub features: Vec<Feature>,
}

impl Room {
    /// Fill in missing ids from the room id the document was fetched for.
    #[must_use]
    pub fn normalized(mut self, id: &RoomId) -> Self {
        if self.id.is_empty() {
            self.id = id.clone();
        }
        for feature in &mut self.features {
            if feature.room_id.is_none() {
                feature.room_id = Some(self.id.clone());
            }
        }
        self
    }
}

/// Home-level features (temperature, the room selector).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Home {
    #[serde(default)]
    pub features: Vec<Feature>,
}

/// Body of `house.json`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HouseDocument {
    pub home: Home,
}

/// Body of `rooms.json`: every room keyed by id.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RoomMap(BTreeMap<RoomId, Room>);

impl RoomMap {
    /// Normalise every room against the key it is stored under.
    #[must_use]
    pub fn normalized(self) -> Self {
        Self(
            self.0
                .into_iter()
                .map(|(id, room)| {
                    let room = room.normalized(&id);
                    (id, room)
                })
                .collect(),
        )
    }

    #[must_use]
    pub fn get(&self, id: &RoomId) -> Option<&Room> {
        self.0.get(id)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&RoomId, &Room)> {
        self.0.iter()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl FromIterator<Room> for RoomMap {
    fn from_iter<T: IntoIterator<Item = Room>>(iter: T) -> Self {
        Self(iter.into_iter().map(|room| (room.id.clone(), room)).collect())
    }
}
