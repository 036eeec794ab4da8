//! Panel DOM port: the container controls are mounted into.

use homepanel_domain::error::PanelError;
use homepanel_domain::id::AnchorId;

/// A markup fragment whose outermost element carries `root` as its id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Fragment {
    pub root: AnchorId,
    pub markup: String,
}

/// Access to the control-panel part of the page.
pub trait PanelDom {
    /// Append `fragment` as the last child of the element `parent`.
    ///
    /// # Errors
    ///
    /// Returns [`PanelError::NotFound`] when `parent` is absent.
    fn mount(&self, parent: &AnchorId, fragment: &Fragment) -> Result<(), PanelError>;

    /// Remove the element `root` and its subtree. Absent elements are ignored.
    fn unmount(&self, root: &AnchorId);

    /// Checked state of a checkbox, `None` if the element is absent.
    fn checked(&self, id: &AnchorId) -> Option<bool>;

    /// Current value of an input or select, `None` if the element is absent.
    fn value(&self, id: &AnchorId) -> Option<String>;

    /// Overwrite the value of an input or select.
    fn set_value(&self, id: &AnchorId, value: &str);

    /// Replace the text content of an element.
    fn set_text(&self, id: &AnchorId, text: &str);
}

impl<T: PanelDom> PanelDom for std::rc::Rc<T> {
    fn mount(&self, parent: &AnchorId, fragment: &Fragment) -> Result<(), PanelError> {
        (**self).mount(parent, fragment)
    }

    fn unmount(&self, root: &AnchorId) {
        (**self).unmount(root);
    }

    fn checked(&self, id: &AnchorId) -> Option<bool> {
        (**self).checked(id)
    }

    fn value(&self, id: &AnchorId) -> Option<String> {
        (**self).value(id)
    }

    fn set_value(&self, id: &AnchorId, value: &str) {
        (**self).set_value(id, value);
    }

    fn set_text(&self, id: &AnchorId, text: &str) {
        (**self).set_text(id, text);
    }
}
