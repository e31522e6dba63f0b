use super::{ElementLocator, StyledElement};
use wasm_bindgen::JsCast;
use web_sys::{CssStyleDeclaration, Document, Element, HtmlElement, SvgElement};

/// The live page document
#[derive(Debug, Clone)]
pub struct BrowserDocument {
    document: Document,
}

impl BrowserDocument {
    #[must_use]
    pub fn new(document: Document) -> Self {
        Self { document }
    }

    /// Document of the current window
    ///
    /// # Errors
    ///
    /// Returns an error when running outside a window (e.g. in a worker)
    pub fn current() -> Result<Self, String> {
        let document = web_sys::window()
            .ok_or("No window available")?
            .document()
            .ok_or("No document available")?;
        Ok(Self::new(document))
    }

    #[must_use]
    pub fn document(&self) -> &Document {
        &self.document
    }
}

impl ElementLocator for BrowserDocument {
    type Element = Element;

    fn element_by_id(&self, id: &str) -> Option<Element> {
        self.document.get_element_by_id(id)
    }
}

/// Inline style of an HTML or SVG element; other elements have none
fn inline_style(element: &Element) -> Option<CssStyleDeclaration> {
    if let Some(html) = element.dyn_ref::<HtmlElement>() {
        return Some(html.style());
    }
    element.dyn_ref::<SvgElement>().map(SvgElement::style)
}

impl StyledElement for Element {
    fn set_display(&self, value: &str) -> Result<(), String> {
        inline_style(self)
            .ok_or_else(|| format!("Element #{} has no inline style", self.id()))?
            .set_property("display", value)
            .map_err(|e| format!("Failed to set display on #{}: {e:?}", self.id()))
    }

    fn add_class(&self, name: &str) -> Result<(), String> {
        self.class_list()
            .add_1(name)
            .map_err(|e| format!("Failed to add class {name:?} to #{}: {e:?}", self.id()))
    }

    fn remove_class(&self, name: &str) -> Result<(), String> {
        self.class_list()
            .remove_1(name)
            .map_err(|e| format!("Failed to remove class {name:?} from #{}: {e:?}", self.id()))
    }
}
