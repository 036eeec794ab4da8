//! In-memory port fakes and fixture builders shared by the unit tests.

use std::cell::{Cell, RefCell};
use std::collections::{HashMap, HashSet};

use homepanel_domain::error::{ApiError, NotFoundError, PanelError};
use homepanel_domain::feature::{Feature, FeatureKind};
use homepanel_domain::floor_plan::StyleProperty;
use homepanel_domain::id::{AnchorId, RoomId};
use homepanel_domain::room::{Home, HouseDocument, Room, RoomMap};
use homepanel_domain::save::{SaveRequest, SaveResponse};

use crate::ports::{FixtureApi, FloorPlan, Fragment, Notifier, PanelDom};

/// Home with a room selector (`home_0`, nothing selected) and a temperature
/// slider at 68 (`home_1`).
pub fn sample_home() -> Home {
    Home {
        features: vec![
            Feature::builder()
                .id("rooms")
                .name("Rooms")
                .kind(FeatureKind::RoomSelector)
                .option("kitchen", "Kitchen")
                .option("den", "Den")
                .build()
                .unwrap(),
            Feature::builder()
                .id("temp")
                .name("Temperature")
                .kind(FeatureKind::Temperature)
                .current_value(68_i64)
                .build()
                .unwrap(),
        ],
    }
}

/// Room with a light (`Off`) and a curtain (`Open`).
pub fn room(id: &str, name: &str) -> Room {
    Room {
        id: RoomId::from(id),
        name: name.to_string(),
        features: vec![
            Feature::builder()
                .id(format!("{id}-light"))
                .name("Ceiling")
                .kind(FeatureKind::Light)
                .current_value("Off")
                .build()
                .unwrap(),
            Feature::builder()
                .id(format!("{id}-curtain"))
                .name("Bay Window")
                .kind(FeatureKind::Curtain)
                .current_value("Open")
                .build()
                .unwrap(),
        ],
    }
}

// -- fixture api --

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SaveBehaviour {
    Accept,
    Reject,
    Fail,
}

pub struct FakeApi {
    house: HouseDocument,
    rooms: RoomMap,
    behaviour: Cell<SaveBehaviour>,
    saves: RefCell<Vec<SaveRequest>>,
    room_fetches: RefCell<Vec<RoomId>>,
}

impl FakeApi {
    pub fn new() -> Self {
        Self::with_home(sample_home())
    }

    pub fn with_home(home: Home) -> Self {
        Self {
            house: HouseDocument { home },
            rooms: vec![room("kitchen", "Kitchen"), room("den", "Den")]
                .into_iter()
                .collect(),
            behaviour: Cell::new(SaveBehaviour::Accept),
            saves: RefCell::new(Vec::new()),
            room_fetches: RefCell::new(Vec::new()),
        }
    }

    /// Serve `room` instead of the sample room with the same id.
    pub fn with_room(mut self, room: Room) -> Self {
        let mut rooms: Vec<Room> = self
            .rooms
            .iter()
            .filter(|(id, _)| **id != room.id)
            .map(|(_, existing)| existing.clone())
            .collect();
        rooms.push(room);
        self.rooms = rooms.into_iter().collect();
        self
    }

    pub fn set_save_behaviour(&self, behaviour: SaveBehaviour) {
        self.behaviour.set(behaviour);
    }

    pub fn saves(&self) -> Vec<SaveRequest> {
        self.saves.borrow().clone()
    }

    pub fn room_fetches(&self) -> Vec<RoomId> {
        self.room_fetches.borrow().clone()
    }
}

impl FixtureApi for FakeApi {
    async fn fetch_house(&self) -> Result<HouseDocument, PanelError> {
        Ok(self.house.clone())
    }

    async fn fetch_rooms(&self) -> Result<RoomMap, PanelError> {
        Ok(self.rooms.clone())
    }

    async fn fetch_room(&self, room: &RoomId) -> Result<Room, PanelError> {
        self.room_fetches.borrow_mut().push(room.clone());
        self.rooms.get(room).cloned().ok_or_else(|| {
            NotFoundError {
                what: "room",
                id: room.to_string(),
            }
            .into()
        })
    }

    async fn save(&self, request: &SaveRequest) -> Result<SaveResponse, PanelError> {
        self.saves.borrow_mut().push(request.clone());
        match self.behaviour.get() {
            SaveBehaviour::Accept => Ok(SaveResponse::default()),
            SaveBehaviour::Reject => Ok(SaveResponse {
                success: Some(false),
            }),
            SaveBehaviour::Fail => Err(ApiError::Status {
                url: "fake".to_string(),
                status: 500,
            }
            .into()),
        }
    }
}

// -- notifier --

#[derive(Default)]
pub struct RecordingNotifier {
    messages: RefCell<Vec<String>>,
}

impl RecordingNotifier {
    pub fn messages(&self) -> Vec<String> {
        self.messages.borrow().clone()
    }
}

impl Notifier for RecordingNotifier {
    fn notify(&self, message: &str) {
        self.messages.borrow_mut().push(message.to_string());
    }
}

// -- floor plan --

pub struct FakeFloorPlan {
    present: HashSet<RoomId>,
    styles: RefCell<HashMap<(RoomId, StyleProperty), String>>,
    backdrop: RefCell<HashMap<StyleProperty, String>>,
    writes: RefCell<Vec<String>>,
}

impl FakeFloorPlan {
    pub fn with_rooms(rooms: &[&str]) -> Self {
        Self {
            present: rooms.iter().map(|room| RoomId::from(*room)).collect(),
            styles: RefCell::new(HashMap::new()),
            backdrop: RefCell::new(HashMap::new()),
            writes: RefCell::new(Vec::new()),
        }
    }

    pub fn backdrop(&self, property: StyleProperty) -> Option<String> {
        self.backdrop.borrow().get(&property).cloned()
    }

    /// Every successful write, formatted `{element}:{property}={value}`.
    pub fn writes(&self) -> Vec<String> {
        self.writes.borrow().clone()
    }
}

impl FloorPlan for FakeFloorPlan {
    fn room_style(&self, room: &RoomId, property: StyleProperty) -> Option<String> {
        if !self.present.contains(room) {
            return None;
        }
        self.styles.borrow().get(&(room.clone(), property)).cloned()
    }

    fn set_room_style(&self, room: &RoomId, property: StyleProperty, value: &str) -> bool {
        if !self.present.contains(room) {
            return false;
        }
        self.styles
            .borrow_mut()
            .insert((room.clone(), property), value.to_string());
        self.writes.borrow_mut().push(format!(
            "{}:{}={value}",
            room.floor_plan_element(),
            property.css_name()
        ));
        true
    }

    fn set_backdrop_style(&self, property: StyleProperty, value: &str) -> bool {
        self.backdrop
            .borrow_mut()
            .insert(property, value.to_string());
        self.writes
            .borrow_mut()
            .push(format!("home-map:{}={value}", property.css_name()));
        true
    }
}

// -- panel dom --

#[derive(Debug, Default, Clone)]
struct FakeElement {
    value: Option<String>,
    checked: Option<bool>,
    text: Option<String>,
}

struct MountedFragment {
    root: AnchorId,
    parent: AnchorId,
    markup: String,
    ids: Vec<String>,
}

#[derive(Default)]
struct DomState {
    fragments: Vec<MountedFragment>,
    elements: HashMap<String, FakeElement>,
}

/// A DOM that understands just enough of the rendered markup to track ids,
/// input values, checkbox state and span text.
pub struct FakeDom {
    container: AnchorId,
    state: RefCell<DomState>,
}

impl FakeDom {
    pub fn with_container(container: &str) -> Self {
        Self {
            container: AnchorId::from(container),
            state: RefCell::new(DomState::default()),
        }
    }

    pub fn is_mounted(&self, root: &str) -> bool {
        self.state
            .borrow()
            .fragments
            .iter()
            .any(|fragment| fragment.root.as_str() == root)
    }

    pub fn parent_of(&self, root: &str) -> Option<String> {
        self.state
            .borrow()
            .fragments
            .iter()
            .find(|fragment| fragment.root.as_str() == root)
            .map(|fragment| fragment.parent.to_string())
    }

    pub fn fragment_count(&self) -> usize {
        self.state.borrow().fragments.len()
    }

    pub fn markup(&self) -> String {
        self.state
            .borrow()
            .fragments
            .iter()
            .map(|fragment| fragment.markup.as_str())
            .collect()
    }

    pub fn has_element(&self, id: &str) -> bool {
        self.state.borrow().elements.contains_key(id)
    }

    pub fn set_checked(&self, id: &str, checked: bool) {
        if let Some(element) = self.state.borrow_mut().elements.get_mut(id) {
            element.checked = Some(checked);
        }
    }

    pub fn text(&self, id: &str) -> Option<String> {
        self.state
            .borrow()
            .elements
            .get(id)
            .and_then(|element| element.text.clone())
    }
}

impl PanelDom for FakeDom {
    fn mount(&self, parent: &AnchorId, fragment: &Fragment) -> Result<(), PanelError> {
        let mut state = self.state.borrow_mut();
        if parent != &self.container && !state.elements.contains_key(parent.as_str()) {
            return Err(NotFoundError {
                what: "element",
                id: parent.to_string(),
            }
            .into());
        }

        let elements = scan(&fragment.markup);
        let ids = elements.iter().map(|(id, _)| id.clone()).collect();
        state.elements.extend(elements);
        state.fragments.push(MountedFragment {
            root: fragment.root.clone(),
            parent: parent.clone(),
            markup: fragment.markup.clone(),
            ids,
        });
        Ok(())
    }

    fn unmount(&self, root: &AnchorId) {
        let mut state = self.state.borrow_mut();
        let mut doomed = vec![root.to_string()];
        while let Some(target) = doomed.pop() {
            let Some(position) = state
                .fragments
                .iter()
                .position(|fragment| fragment.root.as_str() == target)
            else {
                continue;
            };
            let fragment = state.fragments.remove(position);
            for id in &fragment.ids {
                state.elements.remove(id);
                doomed.extend(
                    state
                        .fragments
                        .iter()
                        .filter(|child| child.parent.as_str() == id)
                        .map(|child| child.root.to_string()),
                );
            }
        }
    }

    fn checked(&self, id: &AnchorId) -> Option<bool> {
        self.state
            .borrow()
            .elements
            .get(id.as_str())
            .and_then(|element| element.checked)
    }

    fn value(&self, id: &AnchorId) -> Option<String> {
        self.state
            .borrow()
            .elements
            .get(id.as_str())
            .and_then(|element| element.value.clone())
    }

    fn set_value(&self, id: &AnchorId, value: &str) {
        if let Some(element) = self.state.borrow_mut().elements.get_mut(id.as_str()) {
            element.value = Some(value.to_string());
        }
    }

    fn set_text(&self, id: &AnchorId, text: &str) {
        if let Some(element) = self.state.borrow_mut().elements.get_mut(id.as_str()) {
            element.text = Some(text.to_string());
        }
    }
}

struct OpenSelect {
    id: String,
    first: Option<String>,
    selected: Option<String>,
}

fn scan(markup: &str) -> Vec<(String, FakeElement)> {
    let mut elements = Vec::new();
    let mut select: Option<OpenSelect> = None;
    let mut rest = markup;

    while let Some(start) = rest.find('<') {
        let after = &rest[start + 1..];
        let Some(end) = after.find('>') else {
            break;
        };
        let tag = &after[..end];
        let body = &after[end + 1..];
        rest = body;

        if let Some(closing) = tag.strip_prefix('/') {
            if closing.trim() == "select" {
                if let Some(open) = select.take() {
                    let value = open.selected.or(open.first).unwrap_or_default();
                    elements.push((
                        open.id,
                        FakeElement {
                            value: Some(value),
                            ..FakeElement::default()
                        },
                    ));
                }
            }
            continue;
        }

        let tag = tag.trim_end_matches('/').trim();
        let (name, raw_attrs) = tag.split_once(char::is_whitespace).unwrap_or((tag, ""));
        let attrs = parse_attrs(raw_attrs);
        let attr = |key: &str| {
            attrs
                .iter()
                .find(|(name, _)| name == key)
                .map(|(_, value)| value.clone().unwrap_or_default())
        };

        match name {
            "select" => {
                select = attr("id").map(|id| OpenSelect {
                    id,
                    first: None,
                    selected: None,
                });
            }
            "option" => {
                if let Some(open) = select.as_mut() {
                    let value = attr("value").unwrap_or_default();
                    if open.first.is_none() {
                        open.first = Some(value.clone());
                    }
                    if attr("selected").is_some() {
                        open.selected = Some(value);
                    }
                }
            }
            _ => {
                let Some(id) = attr("id") else {
                    continue;
                };
                let element = FakeElement {
                    value: attr("value"),
                    checked: (attr("type").as_deref() == Some("checkbox"))
                        .then(|| attr("checked").is_some()),
                    text: (name == "span")
                        .then(|| body[..body.find('<').unwrap_or(body.len())].to_string()),
                };
                elements.push((id, element));
            }
        }
    }

    elements
}

fn parse_attrs(raw: &str) -> Vec<(String, Option<String>)> {
    let mut attrs = Vec::new();
    let mut rest = raw.trim_start();

    while !rest.is_empty() {
        let name_end = rest
            .find(|c: char| c == '=' || c.is_whitespace())
            .unwrap_or(rest.len());
        let name = rest[..name_end].to_string();
        rest = &rest[name_end..];

        if let Some(quoted) = rest.strip_prefix("=\"") {
            let value_end = quoted.find('"').unwrap_or(quoted.len());
            attrs.push((name, Some(quoted[..value_end].to_string())));
            rest = quoted.get(value_end + 1..).unwrap_or("");
        } else {
            attrs.push((name, None));
        }
        rest = rest.trim_start();
    }

    attrs
}
