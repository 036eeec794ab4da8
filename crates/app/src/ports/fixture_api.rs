//! Fixture API port: read the home documents, send best-effort saves.

use std::future::Future;

use homepanel_domain::error::PanelError;
use homepanel_domain::id::RoomId;
use homepanel_domain::room::{HouseDocument, Room, RoomMap};
use homepanel_domain::save::{SaveRequest, SaveResponse};

/// Read and write access to one home of the fixture API.
pub trait FixtureApi {
    /// `GET homes/{home}/house.json`
    fn fetch_house(&self) -> impl Future<Output = Result<HouseDocument, PanelError>>;

    /// `GET homes/{home}/rooms.json`
    fn fetch_rooms(&self) -> impl Future<Output = Result<RoomMap, PanelError>>;

    /// `GET homes/{home}/rooms/{room}.json`
    fn fetch_room(&self, room: &RoomId) -> impl Future<Output = Result<Room, PanelError>>;

    /// Send a save; transport failures are errors, an explicit
    /// `success: false` is a successful call carrying a rejection.
    fn save(
        &self,
        request: &SaveRequest,
    ) -> impl Future<Output = Result<SaveResponse, PanelError>>;
}

impl<T: FixtureApi> FixtureApi for std::rc::Rc<T> {
    fn fetch_house(&self) -> impl Future<Output = Result<HouseDocument, PanelError>> {
        (**self).fetch_house()
    }

    fn fetch_rooms(&self) -> impl Future<Output = Result<RoomMap, PanelError>> {
        (**self).fetch_rooms()
    }

    fn fetch_room(&self, room: &RoomId) -> impl Future<Output = Result<Room, PanelError>> {
        (**self).fetch_room(room)
    }

    fn save(
        &self,
        request: &SaveRequest,
    ) -> impl Future<Output = Result<SaveResponse, PanelError>> {
        (**self).save(request)
    }
}

/// Relative path of a fixture document under the API base.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FixturePath<'a> {
    House,
    Rooms,
    Room(&'a RoomId),
}

impl FixturePath<'_> {
    /// Path for the given home, e.g. `homes/whitehouse/rooms/kitchen.json`.
    #[must_use]
    pub fn for_home(self, home: &str) -> String {
        match self {
            Self::House => format!("homes/{home}/house.json"),
            Self::Rooms => format!("homes/{home}/rooms.json"),
            Self::Room(room) => format!("homes/{home}/rooms/{room}.json"),
        }
    }
}

impl<'a> From<&'a SaveRequest> for FixturePath<'a> {
    fn from(request: &'a SaveRequest) -> Self {
        match request {
            SaveRequest::Room { room, .. } => Self::Room(room),
            SaveRequest::House { .. } => Self::House,
        }
    }
}
