//! Panel session: owns the ports and drives the panel for one page.
//!
//! All mutable panel state lives behind a `RefCell` that is only borrowed
//! inside synchronous sections, never across an `.await`. Concurrent change
//! handlers on the browser's single thread therefore interleave safely.

use std::cell::RefCell;

use tokio::sync::broadcast;

use homepanel_domain::error::PanelError;
use homepanel_domain::house_update::HouseUpdate;
use homepanel_domain::id::{AnchorId, RoomId};
use homepanel_domain::value::ControlValue;

use crate::controls::{Control, PersistOutcome};
use crate::coordinator::{self, Reaction};
use crate::house_update_bus::HouseUpdateBus;
use crate::panel::{MountReport, PanelState};
use crate::ports::{FixtureApi, FloorPlan, Notifier, PanelDom};
use crate::visual_sync::{self, SyncReport};

/// What handling a change event led to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChangeOutcome {
    /// The element does not belong to a registered control.
    Ignored,
    /// The room selection changed; the new room is mounted, or nothing when
    /// the selection was cleared or superseded.
    RoomSelected(Option<RoomId>),
    /// The value was reflected and a save attempted.
    Persisted(PersistOutcome),
}

/// The control panel of one home, bound to its adapters.
pub struct PanelSession<A, D, F, N> {
    api: A,
    dom: D,
    plan: F,
    notifier: N,
    state: RefCell<PanelState>,
    updates: HouseUpdateBus,
}

impl<A, D, F, N> PanelSession<A, D, F, N>
where
    A: FixtureApi,
    D: PanelDom,
    F: FloorPlan,
    N: Notifier,
{
    pub fn new(api: A, dom: D, plan: F, notifier: N) -> Self {
        Self {
            api,
            dom,
            plan,
            notifier,
            state: RefCell::new(PanelState::default()),
            updates: HouseUpdateBus::default(),
        }
    }

    /// Listen to the updates published for every handled change.
    #[must_use]
    pub fn subscribe(&self) -> broadcast::Receiver<HouseUpdate> {
        self.updates.subscribe()
    }

    /// Fetch the house document and mount the home-level controls.
    ///
    /// When the room selector already names a room, that room is mounted
    /// too.
    ///
    /// # Errors
    ///
    /// Returns the fetch error, or the mount error when the container is
    /// absent.
    pub async fn initialize(&self) -> Result<MountReport, PanelError> {
        let house = self.api.fetch_house().await?;
        let (report, preselected) = {
            let mut state = self.state.borrow_mut();
            let report = state.mount_home(&self.dom, &house.home)?;
            let preselected = match state.registry().room_selector() {
                Some(selector) => match selector.read_value(&self.dom)? {
                    ControlValue::RoomSelector(room) => room,
                    _ => None,
                },
                None => None,
            };
            (report, preselected)
        };

        if preselected.is_some() {
            self.select_room(preselected).await?;
        }
        Ok(report)
    }

    /// React to the input of the control under `anchor` changing.
    ///
    /// Runs read, reflect and persist in that order. Room selector changes
    /// swap the mounted room instead of persisting.
    ///
    /// # Errors
    ///
    /// Returns the read error of the control, or the fetch/mount error of a
    /// room switch. Save failures are not errors: they are notified and
    /// reported as [`ChangeOutcome::Persisted`].
    pub async fn handle_change(&self, anchor: &str) -> Result<ChangeOutcome, PanelError> {
        let reaction = {
            let state = self.state.borrow();
            coordinator::react(&state, &self.dom, &self.plan, anchor)?
        };
        let Some(Reaction { control, value }) = reaction else {
            return Ok(ChangeOutcome::Ignored);
        };

        self.publish(&control, &value);

        match value {
            ControlValue::RoomSelector(room) => {
                let mounted = self.select_room(room.clone()).await?;
                Ok(ChangeOutcome::RoomSelected(mounted.and(room)))
            }
            value => {
                let outcome = control.persist(&value, &self.api, &self.notifier).await;
                Ok(ChangeOutcome::Persisted(outcome))
            }
        }
    }

    /// Select the room behind a clicked floor-plan element.
    ///
    /// # Errors
    ///
    /// See [`handle_change`](Self::handle_change).
    pub async fn handle_floor_plan_click(
        &self,
        element_id: &str,
    ) -> Result<ChangeOutcome, PanelError> {
        let anchor = {
            let state = self.state.borrow();
            coordinator::select_from_floor_plan(&state, &self.dom, element_id)
        };
        match anchor {
            Some(anchor) => self.handle_change(anchor.as_str()).await,
            None => Ok(ChangeOutcome::Ignored),
        }
    }

    /// Switch the mounted room. `None` only clears the current room and
    /// makes no API call.
    ///
    /// Returns the mount report, or `None` when nothing was mounted (cleared
    /// selection, or a newer selection won while the room was loading).
    ///
    /// # Errors
    ///
    /// Returns the room fetch error or the mount error.
    pub async fn select_room(
        &self,
        room: Option<RoomId>,
    ) -> Result<Option<MountReport>, PanelError> {
        let ticket = self.state.borrow_mut().select_room(&self.dom, room);
        let Some(ticket) = ticket else {
            return Ok(None);
        };

        let fetched = self.api.fetch_room(ticket.room()).await?;
        let room = fetched.normalized(ticket.room());
        self.state
            .borrow_mut()
            .mount_room(&self.dom, &ticket, &room)
    }

    /// Fetch every room and reflect its lights and curtains onto the floor
    /// plan. Meant to run once the graphic has loaded.
    ///
    /// # Errors
    ///
    /// Returns the rooms fetch error.
    pub async fn sync_floor_plan(&self) -> Result<SyncReport, PanelError> {
        let rooms = self.api.fetch_rooms().await?.normalized();
        Ok(visual_sync::sync_floor_plan(&self.plan, &rooms))
    }

    /// Anchors of every registered control, sorted.
    #[must_use]
    pub fn registered_anchors(&self) -> Vec<AnchorId> {
        self.state.borrow().registry().anchors()
    }

    #[must_use]
    pub fn mounted_room(&self) -> Option<RoomId> {
        self.state.borrow().mounted_room().cloned()
    }

    fn publish(&self, control: &Control, value: &ControlValue) {
        let update = HouseUpdate::new(control.feature().name.clone(), value.clone());
        self.updates.publish(update);
    }
}
