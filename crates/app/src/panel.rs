//! Panel builder: turns the home's feature tree into mounted controls.
//!
//! The container holds the home wrapper (`home`), one control per home-level
//! feature, and, when a room is selected, exactly one room wrapper
//! (`home_{room}`) appended after it. Selecting another room tears the
//! previous wrapper down together with every registry entry it added before
//! anything new is mounted.

use askama::Template;

use homepanel_domain::error::{PanelError, RenderError};
use homepanel_domain::feature::Feature;
use homepanel_domain::id::{AnchorId, RoomId};
use homepanel_domain::room::{Home, Room};

use crate::controls::Control;
use crate::factory::create_control;
use crate::ports::{Fragment, PanelDom};
use crate::registry::ControlRegistry;

/// Id of the element the panel is mounted into.
pub const DEFAULT_CONTAINER: &str = "control-panel-content";

#[derive(Template)]
#[template(path = "home_panel.html")]
struct HomePanelTemplate<'a> {
    root: &'a AnchorId,
    controls: Vec<String>,
}

#[derive(Template)]
#[template(path = "room_panel.html")]
struct RoomPanelTemplate<'a> {
    root: &'a AnchorId,
    name: &'a str,
    controls: Vec<String>,
}

/// Features mounted and skipped by one build.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MountReport {
    pub mounted: Vec<AnchorId>,
    /// Features left out, with the reason they were skipped.
    pub skipped: Vec<(AnchorId, String)>,
}

/// Claim on mounting one room, issued by [`PanelState::select_room`].
///
/// Only the ticket of the latest selection is honoured.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoomTicket {
    generation: u64,
    room: RoomId,
}

impl RoomTicket {
    #[must_use]
    pub fn room(&self) -> &RoomId {
        &self.room
    }
}

/// Mounted controls and the current room selection.
#[derive(Debug)]
pub struct PanelState {
    container: AnchorId,
    registry: ControlRegistry,
    generation: u64,
    mounted_room: Option<RoomId>,
    /// Anchors registered by the mounted room.
    room_anchors: Vec<AnchorId>,
}

impl Default for PanelState {
    fn default() -> Self {
        Self::new(AnchorId::from(DEFAULT_CONTAINER))
    }
}

impl PanelState {
    #[must_use]
    pub fn new(container: AnchorId) -> Self {
        Self {
            container,
            registry: ControlRegistry::new(),
            generation: 0,
            mounted_room: None,
            room_anchors: Vec::new(),
        }
    }

    #[must_use]
    pub fn registry(&self) -> &ControlRegistry {
        &self.registry
    }

    /// Room whose controls are currently mounted.
    #[must_use]
    pub fn mounted_room(&self) -> Option<&RoomId> {
        self.mounted_room.as_ref()
    }

    /// Mount the home-level controls, replacing anything mounted before.
    ///
    /// # Errors
    ///
    /// Returns [`PanelError::NotFound`] when the container is absent, or
    /// [`PanelError::Render`] if the wrapper template fails. Individual
    /// features that cannot be built are skipped and reported.
    pub fn mount_home(
        &mut self,
        dom: &impl PanelDom,
        home: &Home,
    ) -> Result<MountReport, PanelError> {
        let root = AnchorId::home();
        self.unmount_room(dom);
        dom.unmount(&root);
        self.registry = ControlRegistry::new();
        self.generation += 1;

        let (controls, report) = build_controls(&root, &home.features, None);
        let markup = HomePanelTemplate {
            root: &root,
            controls: controls.iter().map(|(_, markup)| markup.clone()).collect(),
        }
        .render()
        .map_err(|err| wrapper_failed(&root, &err))?;

        dom.mount(&self.container, &Fragment { root, markup })?;
        for (control, _) in controls {
            self.registry.insert(control);
        }

        tracing::info!(
            mounted = report.mounted.len(),
            skipped = report.skipped.len(),
            "home panel mounted"
        );
        Ok(report)
    }

    /// Switch the selection to `room`.
    ///
    /// The previously mounted room is unmounted and unregistered right away.
    /// Returns the ticket to mount `room` with once it has been fetched, or
    /// `None` when the selection was cleared.
    pub fn select_room(&mut self, dom: &impl PanelDom, room: Option<RoomId>) -> Option<RoomTicket> {
        self.generation += 1;
        self.unmount_room(dom);
        room.map(|room| RoomTicket {
            generation: self.generation,
            room,
        })
    }

    /// Mount the controls of a fetched room.
    ///
    /// Returns `Ok(None)` without touching the DOM when `ticket` was
    /// superseded by a later selection.
    ///
    /// # Errors
    ///
    /// Returns [`PanelError::NotFound`] when the container is absent, or
    /// [`PanelError::Render`] if the wrapper template fails.
    pub fn mount_room(
        &mut self,
        dom: &impl PanelDom,
        ticket: &RoomTicket,
        room: &Room,
    ) -> Result<Option<MountReport>, PanelError> {
        if ticket.generation != self.generation {
            tracing::debug!(room = %ticket.room, "discarding room fetched for a stale selection");
            return Ok(None);
        }
        self.unmount_room(dom);

        let root = AnchorId::room(&ticket.room);
        let (controls, report) = build_controls(&root, &room.features, Some(&ticket.room));
        let markup = RoomPanelTemplate {
            root: &root,
            name: &room.name,
            controls: controls.iter().map(|(_, markup)| markup.clone()).collect(),
        }
        .render()
        .map_err(|err| wrapper_failed(&root, &err))?;

        dom.mount(&self.container, &Fragment { root, markup })?;
        for (control, _) in controls {
            self.room_anchors.push(control.anchor().clone());
            self.registry.insert(control);
        }
        self.mounted_room = Some(ticket.room.clone());

        tracing::info!(
            room = %ticket.room,
            mounted = report.mounted.len(),
            skipped = report.skipped.len(),
            "room panel mounted"
        );
        Ok(Some(report))
    }

    fn unmount_room(&mut self, dom: &impl PanelDom) {
        if let Some(previous) = self.mounted_room.take() {
            dom.unmount(&AnchorId::room(&previous));
            let removed = self.registry.remove_all(&self.room_anchors);
            self.room_anchors.clear();
            tracing::debug!(room = %previous, removed, "room panel unmounted");
        }
    }
}

fn build_controls(
    root: &AnchorId,
    features: &[Feature],
    room: Option<&RoomId>,
) -> (Vec<(Control, String)>, MountReport) {
    let mut controls = Vec::with_capacity(features.len());
    let mut report = MountReport::default();

    for (index, feature) in features.iter().enumerate() {
        let anchor = root.child(index);
        let built = create_control(feature.clone(), anchor.clone(), room.cloned())
            .and_then(|control| control.render().map(|markup| (control, markup)));
        match built {
            Ok(pair) => {
                report.mounted.push(anchor);
                controls.push(pair);
            }
            Err(err) => {
                tracing::warn!(
                    %anchor,
                    feature = %feature.id,
                    kind = %feature.kind,
                    error = %err,
                    "skipping feature"
                );
                report.skipped.push((anchor, err.to_string()));
            }
        }
    }

    (controls, report)
}

fn wrapper_failed(root: &AnchorId, err: &askama::Error) -> PanelError {
    RenderError {
        anchor: root.to_string(),
        message: err.to_string(),
    }
    .into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{FakeDom, room, sample_home};

    #[test]
    fn should_mount_home_controls_under_indexed_anchors() {
        let dom = FakeDom::with_container(DEFAULT_CONTAINER);
        let mut state = PanelState::default();

        let report = state.mount_home(&dom, &sample_home()).unwrap();

        assert_eq!(
            report.mounted,
            vec![AnchorId::from("home_0"), AnchorId::from("home_1")]
        );
        assert!(dom.is_mounted("home"));
        assert_eq!(dom.value(&AnchorId::from("home_1")).as_deref(), Some("68"));
        assert_eq!(state.registry().len(), 2);
    }

    #[test]
    fn should_skip_unknown_kind_and_keep_others() {
        let dom = FakeDom::with_container(DEFAULT_CONTAINER);
        let mut state = PanelState::default();
        let mut home = sample_home();
        home.features.insert(
            1,
            Feature::builder()
                .id("fire")
                .name("Fireplace")
                .raw_kind("fireplace")
                .current_value("On")
                .build()
                .unwrap(),
        );

        let report = state.mount_home(&dom, &home).unwrap();

        assert_eq!(report.skipped.len(), 1);
        assert_eq!(report.skipped[0].0, AnchorId::from("home_1"));
        assert_eq!(
            state.registry().anchors(),
            vec![AnchorId::from("home_0"), AnchorId::from("home_2")]
        );
        assert!(!dom.markup().contains("Fireplace"));
    }

    #[test]
    fn should_fail_when_container_is_absent() {
        let dom = FakeDom::with_container("elsewhere");
        let mut state = PanelState::default();

        let result = state.mount_home(&dom, &sample_home());

        assert!(matches!(result, Err(PanelError::NotFound(_))));
        assert!(state.registry().is_empty());
    }

    #[test]
    fn should_mount_room_next_to_home_wrapper() {
        let dom = FakeDom::with_container(DEFAULT_CONTAINER);
        let mut state = PanelState::default();
        state.mount_home(&dom, &sample_home()).unwrap();

        let ticket = state
            .select_room(&dom, Some(RoomId::from("kitchen")))
            .unwrap();
        let report = state
            .mount_room(&dom, &ticket, &room("kitchen", "Kitchen"))
            .unwrap()
            .unwrap();

        assert_eq!(
            report.mounted,
            vec![
                AnchorId::from("home_kitchen_0"),
                AnchorId::from("home_kitchen_1")
            ]
        );
        assert_eq!(
            dom.parent_of("home_kitchen").as_deref(),
            Some(DEFAULT_CONTAINER)
        );
        assert!(dom.markup().contains("<h3>Kitchen</h3>"));
        assert_eq!(state.mounted_room(), Some(&RoomId::from("kitchen")));
    }

    #[test]
    fn should_unmount_previous_room_before_mounting_next() {
        let dom = FakeDom::with_container(DEFAULT_CONTAINER);
        let mut state = PanelState::default();
        state.mount_home(&dom, &sample_home()).unwrap();

        let kitchen = state
            .select_room(&dom, Some(RoomId::from("kitchen")))
            .unwrap();
        state
            .mount_room(&dom, &kitchen, &room("kitchen", "Kitchen"))
            .unwrap();
        let den = state.select_room(&dom, Some(RoomId::from("den"))).unwrap();

        assert!(!dom.is_mounted("home_kitchen"));
        assert!(
            state
                .registry()
                .anchors()
                .iter()
                .all(|anchor| !anchor.as_str().starts_with("home_kitchen"))
        );

        state.mount_room(&dom, &den, &room("den", "Den")).unwrap();
        assert!(dom.is_mounted("home_den"));
        assert_eq!(dom.fragment_count(), 2);
    }

    #[test]
    fn should_unregister_every_control_of_previous_room() {
        let dom = FakeDom::with_container(DEFAULT_CONTAINER);
        let mut state = PanelState::default();
        state.mount_home(&dom, &sample_home()).unwrap();
        let mut kitchen = room("kitchen", "Kitchen");
        kitchen.features.push(
            Feature::builder()
                .id("oven")
                .name("Oven")
                .raw_kind("temperature")
                .current_value(70_i64)
                .build()
                .unwrap(),
        );

        let ticket = state
            .select_room(&dom, Some(RoomId::from("kitchen")))
            .unwrap();
        let report = state.mount_room(&dom, &ticket, &kitchen).unwrap().unwrap();
        assert_eq!(report.mounted.len(), 3);

        let den = state.select_room(&dom, Some(RoomId::from("den"))).unwrap();
        state.mount_room(&dom, &den, &room("den", "Den")).unwrap();

        assert_eq!(
            state.registry().anchors(),
            vec![
                AnchorId::from("home_0"),
                AnchorId::from("home_1"),
                AnchorId::from("home_den_0"),
                AnchorId::from("home_den_1"),
            ]
        );
    }

    #[test]
    fn should_unmount_room_when_home_is_remounted() {
        let dom = FakeDom::with_container(DEFAULT_CONTAINER);
        let mut state = PanelState::default();
        state.mount_home(&dom, &sample_home()).unwrap();
        let ticket = state
            .select_room(&dom, Some(RoomId::from("kitchen")))
            .unwrap();
        state
            .mount_room(&dom, &ticket, &room("kitchen", "Kitchen"))
            .unwrap();

        state.mount_home(&dom, &sample_home()).unwrap();

        assert!(!dom.is_mounted("home_kitchen"));
        assert_eq!(dom.fragment_count(), 1);
        assert_eq!(state.mounted_room(), None);
    }

    #[test]
    fn should_discard_room_fetched_for_superseded_selection() {
        let dom = FakeDom::with_container(DEFAULT_CONTAINER);
        let mut state = PanelState::default();
        state.mount_home(&dom, &sample_home()).unwrap();

        let stale = state
            .select_room(&dom, Some(RoomId::from("kitchen")))
            .unwrap();
        let fresh = state.select_room(&dom, Some(RoomId::from("den"))).unwrap();

        let discarded = state
            .mount_room(&dom, &stale, &room("kitchen", "Kitchen"))
            .unwrap();
        assert!(discarded.is_none());
        assert!(!dom.is_mounted("home_kitchen"));

        state.mount_room(&dom, &fresh, &room("den", "Den")).unwrap();
        assert_eq!(state.mounted_room(), Some(&RoomId::from("den")));
    }

    #[test]
    fn should_clear_room_when_selection_is_empty() {
        let dom = FakeDom::with_container(DEFAULT_CONTAINER);
        let mut state = PanelState::default();
        state.mount_home(&dom, &sample_home()).unwrap();
        let ticket = state
            .select_room(&dom, Some(RoomId::from("kitchen")))
            .unwrap();
        state
            .mount_room(&dom, &ticket, &room("kitchen", "Kitchen"))
            .unwrap();

        assert!(state.select_room(&dom, None).is_none());

        assert!(!dom.is_mounted("home_kitchen"));
        assert_eq!(state.mounted_room(), None);
        assert_eq!(state.registry().len(), 2);
    }
}
