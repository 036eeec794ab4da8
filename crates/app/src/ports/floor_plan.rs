//! Floor-plan port: inline styles on the embedded house graphic.
//!
//! Every method tolerates an absent element: the graphic loads
//! independently of the panel, so a missing node is an expected transient
//! state, not an error.

use homepanel_domain::floor_plan::StyleProperty;
use homepanel_domain::id::RoomId;

/// Styling access to the floor-plan graphic.
pub trait FloorPlan {
    /// Read an inline style property of the room's element (`g-{room}`).
    ///
    /// Returns `None` when the element or the property is absent.
    fn room_style(&self, room: &RoomId, property: StyleProperty) -> Option<String>;

    /// Set an inline style property on the room's element.
    ///
    /// Returns `false` when the element is absent.
    fn set_room_style(&self, room: &RoomId, property: StyleProperty, value: &str) -> bool;

    /// Set an inline style property on the element hosting the graphic.
    ///
    /// Returns `false` when the host element is absent.
    fn set_backdrop_style(&self, property: StyleProperty, value: &str) -> bool;
}

impl<T: FloorPlan> FloorPlan for std::rc::Rc<T> {
    fn room_style(&self, room: &RoomId, property: StyleProperty) -> Option<String> {
        (**self).room_style(room, property)
    }

    fn set_room_style(&self, room: &RoomId, property: StyleProperty, value: &str) -> bool {
        (**self).set_room_style(room, property, value)
    }

    fn set_backdrop_style(&self, property: StyleProperty, value: &str) -> bool {
        (**self).set_backdrop_style(property, value)
    }
}
