//! Element lookup and mutation seams used by the menu toggles.
//!
//! The page never hands us element handles directly; every toggle asks an
//! [`ElementLocator`] for the element by id at call time. Browser builds use
//! [`BrowserDocument`], everything else can use [`MemoryDocument`].

#[cfg(target_arch = "wasm32")]
mod browser;
mod memory;

#[cfg(target_arch = "wasm32")]
pub use browser::BrowserDocument;
pub use memory::{MemoryDocument, MemoryElement};

/// The subset of element mutation the toggles need
pub trait StyledElement {
    /// Set the inline `display` style
    ///
    /// # Errors
    ///
    /// Returns an error if the host rejects the style write
    fn set_display(&self, value: &str) -> Result<(), String>;

    /// Add a class; adding one that is already present is a no-op
    ///
    /// # Errors
    ///
    /// Returns an error if the host rejects the class list change
    fn add_class(&self, name: &str) -> Result<(), String>;

    /// Remove a class; removing one that is absent is a no-op
    ///
    /// # Errors
    ///
    /// Returns an error if the host rejects the class list change
    fn remove_class(&self, name: &str) -> Result<(), String>;
}

/// Finds elements by id, fresh on every call
pub trait ElementLocator {
    type Element: StyledElement;

    fn element_by_id(&self, id: &str) -> Option<Self::Element>;
}

/// Look up an element the page is expected to always have
///
/// # Errors
///
/// Returns an error naming the id if no such element exists
pub fn require<L: ElementLocator>(locator: &L, id: &str) -> Result<L::Element, String> {
    locator
        .element_by_id(id)
        .ok_or_else(|| format!("Required element not found: #{id}"))
}
