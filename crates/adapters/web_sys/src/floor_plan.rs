//! [`FloorPlan`] on the graphic embedded through `<object id="home-map">`.
//!
//! The graphic is a separate document. Its nodes belong to another realm,
//! so `instanceof` based casts fail on them and the style accessors below
//! use unchecked casts.

use wasm_bindgen::JsCast;
use web_sys::{CssStyleDeclaration, Document, HtmlElement, HtmlObjectElement, SvgElement};

use homepanel_app::ports::FloorPlan;
use homepanel_domain::floor_plan::StyleProperty;
use homepanel_domain::id::RoomId;

/// Id of the element hosting the graphic.
pub const DEFAULT_HOST: &str = "home-map";

#[derive(Debug, Clone)]
pub struct BrowserFloorPlan {
    document: Document,
    host: String,
}

impl BrowserFloorPlan {
    pub fn new(document: Document) -> Self {
        Self {
            document,
            host: DEFAULT_HOST.to_string(),
        }
    }

    /// The hosting `<object>`, if present.
    pub fn host(&self) -> Option<HtmlObjectElement> {
        self.document
            .get_element_by_id(&self.host)?
            .dyn_into::<HtmlObjectElement>()
            .ok()
    }

    /// The graphic's own document, once loaded.
    pub fn plan_document(&self) -> Option<Document> {
        self.host()?.content_document()
    }

    fn room_element_style(&self, room: &RoomId) -> Option<CssStyleDeclaration> {
        let element = self
            .plan_document()?
            .get_element_by_id(&room.floor_plan_element())?;
        Some(element.unchecked_ref::<SvgElement>().style())
    }
}

impl FloorPlan for BrowserFloorPlan {
    fn room_style(&self, room: &RoomId, property: StyleProperty) -> Option<String> {
        let value = self
            .room_element_style(room)?
            .get_property_value(property.css_name())
            .ok()?;
        (!value.is_empty()).then_some(value)
    }

    fn set_room_style(&self, room: &RoomId, property: StyleProperty, value: &str) -> bool {
        let Some(style) = self.room_element_style(room) else {
            return false;
        };
        if let Err(err) = style.set_property(property.css_name(), value) {
            tracing::warn!(%room, property = property.css_name(), ?err, "failed to style room");
            return false;
        }
        true
    }

    fn set_backdrop_style(&self, property: StyleProperty, value: &str) -> bool {
        let Some(host) = self.host() else {
            return false;
        };
        let style = host.unchecked_into::<HtmlElement>().style();
        if let Err(err) = style.set_property(property.css_name(), value) {
            tracing::warn!(property = property.css_name(), ?err, "failed to style backdrop");
            return false;
        }
        true
    }
}
