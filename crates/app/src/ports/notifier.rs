//! Notifier port: surfaces failures to the user.

/// Shows a blocking, user-visible notification.
pub trait Notifier {
    fn notify(&self, message: &str);
}

impl<T: Notifier> Notifier for std::rc::Rc<T> {
    fn notify(&self, message: &str) {
        (**self).notify(message);
    }
}
