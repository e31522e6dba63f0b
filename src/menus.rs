use crate::constants::{
    ACCOUNT_MENU_ID, DISPLAY_BLOCK, DISPLAY_NONE, OVERLAY_ID, SHOWN_CLASS, SIDEBAR_ID,
};
use crate::dom::{require, ElementLocator, StyledElement};

/// Show/hide commands for the login form and the sidebar
///
/// `#account-menu` and `#sidebar` are required: if either is missing the
/// corresponding command fails and the error reaches the caller. `#overlay` is
/// optional and silently skipped when absent.
///
/// Every command looks its elements up again, so the page may add or remove them
/// between calls.
#[derive(Debug, Clone)]
pub struct Menus<L> {
    locator: L,
}

impl<L: ElementLocator> Menus<L> {
    #[must_use]
    pub fn new(locator: L) -> Self {
        Self { locator }
    }

    #[must_use]
    pub fn locator(&self) -> &L {
        &self.locator
    }

    /// # Errors
    ///
    /// Returns an error if `#account-menu` is missing or cannot be restyled
    pub fn open_login_form(&self) -> Result<(), String> {
        require(&self.locator, ACCOUNT_MENU_ID)?.set_display(DISPLAY_BLOCK)
    }

    /// # Errors
    ///
    /// Returns an error if `#account-menu` is missing or cannot be restyled
    pub fn close_login_form(&self) -> Result<(), String> {
        require(&self.locator, ACCOUNT_MENU_ID)?.set_display(DISPLAY_NONE)
    }

    /// Mark the sidebar as shown and reveal the overlay if the page has one
    ///
    /// # Errors
    ///
    /// Returns an error if `#sidebar` is missing or either element rejects the change
    pub fn open_sidebar(&self) -> Result<(), String> {
        require(&self.locator, SIDEBAR_ID)?.add_class(SHOWN_CLASS)?;
        self.set_overlay_display(DISPLAY_BLOCK)
    }

    /// Clear the sidebar's shown marker and hide the overlay if the page has one
    ///
    /// # Errors
    ///
    /// Returns an error if `#sidebar` is missing or either element rejects the change
    pub fn close_sidebar(&self) -> Result<(), String> {
        require(&self.locator, SIDEBAR_ID)?.remove_class(SHOWN_CLASS)?;
        self.set_overlay_display(DISPLAY_NONE)
    }

    fn set_overlay_display(&self, value: &str) -> Result<(), String> {
        match self.locator.element_by_id(OVERLAY_ID) {
            Some(overlay) => overlay.set_display(value),
            None => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dom::MemoryDocument;

    fn page_with(ids: &[&str]) -> Menus<MemoryDocument> {
        let doc = MemoryDocument::new();
        for id in ids {
            doc.insert_with_display(id, DISPLAY_NONE);
        }
        Menus::new(doc)
    }

    fn element(menus: &Menus<MemoryDocument>, id: &str) -> crate::dom::MemoryElement {
        menus.locator().element_by_id(id).expect("element should exist")
    }

    #[test]
    fn test_login_form_open_then_close_restores_hidden() {
        let menus = page_with(&[ACCOUNT_MENU_ID]);
        let form = element(&menus, ACCOUNT_MENU_ID);

        menus.open_login_form().expect("open should succeed");
        assert_eq!(form.display(), "block");

        menus.close_login_form().expect("close should succeed");
        assert_eq!(form.display(), "none");
    }

    #[test]
    fn test_login_form_toggles_are_idempotent() {
        let menus = page_with(&[ACCOUNT_MENU_ID]);
        let form = element(&menus, ACCOUNT_MENU_ID);

        menus.open_login_form().expect("open should succeed");
        menus.open_login_form().expect("second open should succeed");
        assert_eq!(form.display(), "block");

        menus.close_login_form().expect("close should succeed");
        menus.close_login_form().expect("second close should succeed");
        assert_eq!(form.display(), "none");
    }

    #[test]
    fn test_sidebar_with_overlay() {
        let menus = page_with(&[SIDEBAR_ID, OVERLAY_ID]);
        let sidebar = element(&menus, SIDEBAR_ID);
        let overlay = element(&menus, OVERLAY_ID);

        menus.open_sidebar().expect("open should succeed");
        assert!(sidebar.has_class("shown"));
        assert_eq!(overlay.display(), "block");

        menus.close_sidebar().expect("close should succeed");
        assert!(!sidebar.has_class("shown"));
        assert_eq!(overlay.display(), "none");
    }

    #[test]
    fn test_sidebar_toggles_are_idempotent() {
        let menus = page_with(&[SIDEBAR_ID, OVERLAY_ID]);
        let sidebar = element(&menus, SIDEBAR_ID);

        menus.open_sidebar().expect("open should succeed");
        menus.open_sidebar().expect("second open should succeed");
        assert_eq!(sidebar.classes(), vec!["shown".to_string()]);

        menus.close_sidebar().expect("close should succeed");
        menus.close_sidebar().expect("second close should succeed");
        assert!(sidebar.classes().is_empty());
    }

    #[test]
    fn test_sidebar_without_overlay() {
        let menus = page_with(&[SIDEBAR_ID]);
        let sidebar = element(&menus, SIDEBAR_ID);

        menus.open_sidebar().expect("missing overlay should be tolerated");
        assert!(sidebar.has_class("shown"));

        menus.close_sidebar().expect("missing overlay should be tolerated");
        assert!(!sidebar.has_class("shown"));
    }

    #[test]
    fn test_sidebar_keeps_other_classes() {
        let menus = page_with(&[SIDEBAR_ID]);
        let sidebar = element(&menus, SIDEBAR_ID);
        sidebar.add_class("dark").expect("class should be added");

        menus.open_sidebar().expect("open should succeed");
        menus.close_sidebar().expect("close should succeed");

        assert_eq!(sidebar.classes(), vec!["dark".to_string()]);
    }

    #[test]
    fn test_missing_account_menu_is_an_error() {
        let menus = page_with(&[]);

        assert_eq!(
            menus.open_login_form(),
            Err("Required element not found: #account-menu".to_string())
        );
        assert!(menus.close_login_form().is_err());
    }

    #[test]
    fn test_missing_sidebar_is_an_error_even_with_overlay() {
        let menus = page_with(&[OVERLAY_ID]);
        let overlay = element(&menus, OVERLAY_ID);

        assert_eq!(
            menus.open_sidebar(),
            Err("Required element not found: #sidebar".to_string())
        );
        assert!(menus.close_sidebar().is_err());
        // The overlay is never touched once the sidebar lookup fails
        assert_eq!(overlay.display(), "none");
    }

    #[test]
    fn test_elements_are_looked_up_on_every_call() {
        let menus = page_with(&[SIDEBAR_ID, OVERLAY_ID]);
        let old_overlay = element(&menus, OVERLAY_ID);

        menus.locator().remove(OVERLAY_ID);
        menus.open_sidebar().expect("open should succeed");
        assert_eq!(old_overlay.display(), "none");

        let new_overlay = menus.locator().insert(OVERLAY_ID);
        menus.close_sidebar().expect("close should succeed");
        assert_eq!(new_overlay.display(), "none");
        menus.open_sidebar().expect("open should succeed");
        assert_eq!(new_overlay.display(), "block");
    }
}
