/// Login form container toggled by the account menu buttons
pub const ACCOUNT_MENU_ID: &str = "account-menu";

/// Slide-in navigation sidebar
pub const SIDEBAR_ID: &str = "sidebar";

/// Optional backdrop shown behind the open sidebar
pub const OVERLAY_ID: &str = "overlay";

/// Inline JSON config block read by [`crate::config::SiteConfig`]
pub const CONFIG_ELEMENT_ID: &str = "site-config";

/// Class marking the sidebar as open
pub const SHOWN_CLASS: &str = "shown";

pub const DISPLAY_BLOCK: &str = "block";
pub const DISPLAY_NONE: &str = "none";
