//! Control registry: live controls keyed by the anchor they are mounted
//! under.

use std::collections::HashMap;

use homepanel_domain::id::AnchorId;

use crate::controls::Control;

/// Map from anchor id to the control mounted there.
///
/// Holds at most one control per anchor. The panel drops the entries it
/// mounted for a room as soon as that room's sub-panel is unmounted.
#[derive(Debug, Default)]
pub struct ControlRegistry {
    controls: HashMap<AnchorId, Control>,
}

impl ControlRegistry {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `control` under its anchor, replacing any previous entry.
    pub fn insert(&mut self, control: Control) {
        let anchor = control.anchor().clone();
        if let Some(previous) = self.controls.insert(anchor, control) {
            tracing::debug!(anchor = %previous.anchor(), "replaced registered control");
        }
    }

    #[must_use]
    pub fn get(&self, anchor: &str) -> Option<&Control> {
        self.controls.get(anchor)
    }

    /// Drop the controls registered under `anchors`, returning how many
    /// were present.
    pub fn remove_all<'a>(&mut self, anchors: impl IntoIterator<Item = &'a AnchorId>) -> usize {
        anchors
            .into_iter()
            .filter(|anchor| self.controls.remove(*anchor).is_some())
            .count()
    }

    /// Registered anchors in sorted order.
    #[must_use]
    pub fn anchors(&self) -> Vec<AnchorId> {
        let mut anchors: Vec<AnchorId> = self.controls.keys().cloned().collect();
        anchors.sort();
        anchors
    }

    /// The room selector, if one is mounted.
    #[must_use]
    pub fn room_selector(&self) -> Option<&Control> {
        self.controls
            .values()
            .find(|control| matches!(control, Control::RoomSelector(_)))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.controls.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.controls.is_empty()
    }
}
