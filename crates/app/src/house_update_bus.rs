//! In-process house-update bus backed by a tokio broadcast channel.

use tokio::sync::broadcast;

use homepanel_domain::house_update::HouseUpdate;

/// Fan-out of [`HouseUpdate`]s to any number of listeners.
///
/// Publishing succeeds even when there are no active subscribers
/// (the update is simply dropped).
#[derive(Debug, Clone)]
pub struct HouseUpdateBus {
    sender: broadcast::Sender<HouseUpdate>,
}

impl HouseUpdateBus {
    /// Create a new bus with the given channel capacity.
    #[must_use]
    pub fn new(capacity: usize) -> Self {
        let (sender, _) = broadcast::channel(capacity);
        Self { sender }
    }

    /// Subscribe to updates published *after* this call.
    #[must_use]
    pub fn subscribe(&self) -> broadcast::Receiver<HouseUpdate> {
        self.sender.subscribe()
    }

    /// Publish `update`, returning how many subscribers received it.
    pub fn publish(&self, update: HouseUpdate) -> usize {
        tracing::debug!(%update, "publishing");
        // send fails only when there are zero receivers
        self.sender.send(update).unwrap_or(0)
    }
}

impl Default for HouseUpdateBus {
    fn default() -> Self {
        Self::new(64)
    }
}
