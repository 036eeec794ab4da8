//! [`PanelDom`] on the page document.

use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlInputElement, HtmlSelectElement};

use homepanel_app::ports::{Fragment, PanelDom};
use homepanel_domain::error::{NotFoundError, PanelError, RenderError};
use homepanel_domain::id::AnchorId;

#[derive(Debug, Clone)]
pub struct BrowserDom {
    document: Document,
}

impl BrowserDom {
    pub fn new(document: Document) -> Self {
        Self { document }
    }

    fn element(&self, id: &AnchorId) -> Option<Element> {
        self.document.get_element_by_id(id.as_str())
    }
}

impl PanelDom for BrowserDom {
    fn mount(&self, parent: &AnchorId, fragment: &Fragment) -> Result<(), PanelError> {
        let host = self.element(parent).ok_or_else(|| NotFoundError {
            what: "element",
            id: parent.to_string(),
        })?;
        host.insert_adjacent_html("beforeend", &fragment.markup)
            .map_err(|err| RenderError {
                anchor: fragment.root.to_string(),
                message: format!("{err:?}"),
            })?;
        Ok(())
    }

    fn unmount(&self, root: &AnchorId) {
        if let Some(element) = self.element(root) {
            element.remove();
        }
    }

    fn checked(&self, id: &AnchorId) -> Option<bool> {
        self.element(id)?
            .dyn_into::<HtmlInputElement>()
            .ok()
            .map(|input| input.checked())
    }

    fn value(&self, id: &AnchorId) -> Option<String> {
        let element = self.element(id)?;
        match element.dyn_into::<HtmlSelectElement>() {
            Ok(select) => Some(select.value()),
            Err(element) => element
                .dyn_into::<HtmlInputElement>()
                .ok()
                .map(|input| input.value()),
        }
    }

    fn set_value(&self, id: &AnchorId, value: &str) {
        let Some(element) = self.element(id) else {
            tracing::debug!(%id, "cannot set value of absent element");
            return;
        };
        match element.dyn_into::<HtmlSelectElement>() {
            Ok(select) => select.set_value(value),
            Err(element) => {
                if let Ok(input) = element.dyn_into::<HtmlInputElement>() {
                    input.set_value(value);
                }
            }
        }
    }

    fn set_text(&self, id: &AnchorId, text: &str) {
        if let Some(element) = self.element(id) {
            element.set_text_content(Some(text));
        }
    }
}
