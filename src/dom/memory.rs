use super::{ElementLocator, StyledElement};
use std::cell::RefCell;
use std::collections::{BTreeSet, HashMap};
use std::rc::Rc;

#[derive(Debug, Default)]
struct ElementState {
    display: String,
    classes: BTreeSet<String>,
}

/// Handle to an element in a [`MemoryDocument`]
///
/// Handles share state with the document, so a mutation through one is visible
/// through every other handle to the same id.
#[derive(Debug, Clone)]
pub struct MemoryElement(Rc<RefCell<ElementState>>);

impl MemoryElement {
    /// Current inline `display` value, empty if never set
    #[must_use]
    pub fn display(&self) -> String {
        self.0.borrow().display.clone()
    }

    #[must_use]
    pub fn has_class(&self, name: &str) -> bool {
        self.0.borrow().classes.contains(name)
    }

    #[must_use]
    pub fn classes(&self) -> Vec<String> {
        self.0.borrow().classes.iter().cloned().collect()
    }
}

impl StyledElement for MemoryElement {
    fn set_display(&self, value: &str) -> Result<(), String> {
        value.clone_into(&mut self.0.borrow_mut().display);
        Ok(())
    }

    fn add_class(&self, name: &str) -> Result<(), String> {
        if name.is_empty() || name.contains(char::is_whitespace) {
            return Err(format!("Invalid class name: {name:?}"));
        }
        self.0.borrow_mut().classes.insert(name.to_string());
        Ok(())
    }

    fn remove_class(&self, name: &str) -> Result<(), String> {
        if name.is_empty() || name.contains(char::is_whitespace) {
            return Err(format!("Invalid class name: {name:?}"));
        }
        self.0.borrow_mut().classes.remove(name);
        Ok(())
    }
}

/// Id-indexed element store standing in for a browser document
#[derive(Debug, Default)]
pub struct MemoryDocument {
    elements: RefCell<HashMap<String, MemoryElement>>,
}

impl MemoryDocument {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an element with the given id, replacing any existing one
    pub fn insert(&self, id: &str) -> MemoryElement {
        let element = MemoryElement(Rc::new(RefCell::new(ElementState::default())));
        self.elements
            .borrow_mut()
            .insert(id.to_string(), element.clone());
        element
    }

    /// Add an element with an initial inline `display` value
    pub fn insert_with_display(&self, id: &str, display: &str) -> MemoryElement {
        let element = self.insert(id);
        display.clone_into(&mut element.0.borrow_mut().display);
        element
    }

    /// Detach the element with the given id, returning it if it existed
    pub fn remove(&self, id: &str) -> Option<MemoryElement> {
        self.elements.borrow_mut().remove(id)
    }
}

impl ElementLocator for MemoryDocument {
    type Element = MemoryElement;

    fn element_by_id(&self, id: &str) -> Option<MemoryElement> {
        self.elements.borrow().get(id).cloned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dom::require;

    #[test]
    fn test_handles_share_state() {
        let doc = MemoryDocument::new();
        let inserted = doc.insert("panel");

        let found = doc.element_by_id("panel").expect("element should exist");
        found.set_display("block").expect("display should be set");
        found.add_class("shown").expect("class should be added");

        assert_eq!(inserted.display(), "block");
        assert!(inserted.has_class("shown"));
    }

    #[test]
    fn test_class_set_semantics() {
        let doc = MemoryDocument::new();
        let element = doc.insert("panel");

        element.add_class("shown").expect("class should be added");
        element.add_class("shown").expect("class should be added");
        assert_eq!(element.classes(), vec!["shown".to_string()]);

        element.remove_class("shown").expect("class should be removed");
        element.remove_class("shown").expect("removing again is a no-op");
        assert!(element.classes().is_empty());
    }

    #[test]
    fn test_invalid_class_name_is_rejected() {
        let doc = MemoryDocument::new();
        let element = doc.insert("panel");

        assert!(element.add_class("").is_err());
        assert!(element.add_class("two words").is_err());
        assert!(element.remove_class("").is_err());
    }

    #[test]
    fn test_removed_element_is_no_longer_found() {
        let doc = MemoryDocument::new();
        doc.insert_with_display("overlay", "none");

        assert!(doc.remove("overlay").is_some());
        assert!(doc.element_by_id("overlay").is_none());
        assert!(doc.remove("overlay").is_none());
    }

    #[test]
    fn test_require_names_the_missing_id() {
        let doc = MemoryDocument::new();
        let err = require(&doc, "sidebar").expect_err("lookup should fail");
        assert_eq!(err, "Required element not found: #sidebar");
    }
}
