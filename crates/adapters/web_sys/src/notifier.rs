//! [`Notifier`] backed by `window.alert`.

use web_sys::Window;

use homepanel_app::ports::Notifier;

#[derive(Debug, Clone)]
pub struct AlertNotifier {
    window: Window,
}

impl AlertNotifier {
    pub fn new(window: Window) -> Self {
        Self { window }
    }
}

impl Notifier for AlertNotifier {
    fn notify(&self, message: &str) {
        if let Err(err) = self.window.alert_with_message(message) {
            tracing::error!(%message, ?err, "failed to show notification");
        }
    }
}
