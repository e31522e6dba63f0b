//! JavaScript surface for pages that load the wasm module.
//!
//! ```js
//! import init, { SiteHandle } from "./site_ui.js";
//! await init();
//! const site = new SiteHandle();
//! button.onclick = () => site.menus.openSidebar();
//! site.debug.WARNING = false;
//! ```

#[allow(unused_imports)]
use crate::logging::log;
use crate::config::SiteConfig;
use crate::debug::{DebugFlags, OutputSink};
use crate::django::Django;
use crate::dom::BrowserDocument;
use crate::site::Site;
use crate::theme::Theme;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;

#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
}

/// Writes to the browser console
#[derive(Debug, Clone, Copy, Default)]
pub struct ConsoleSink;

impl OutputSink for ConsoleSink {
    type Message = JsValue;

    fn warn(&self, msg: &JsValue) {
        web_sys::console::warn_1(msg);
    }

    fn info(&self, msg: &JsValue) {
        web_sys::console::log_1(msg);
    }

    fn error(&self, msg: &JsValue) {
        web_sys::console::error_1(msg);
    }
}

fn to_js_error(message: String) -> JsValue {
    js_sys::Error::new(&message).into()
}

/// Page-facing namespace: `site.debug`, `site.django`, `site.menus`, `site.theme`
#[wasm_bindgen]
pub struct SiteHandle {
    site: Rc<RefCell<Site<BrowserDocument, ConsoleSink>>>,
}

#[wasm_bindgen]
impl SiteHandle {
    /// Build the namespace for the current document
    ///
    /// Without an explicit JSON config the page's `#site-config` block is used,
    /// and without that every logging severity is on.
    ///
    /// # Errors
    ///
    /// Throws if there is no document or the config does not parse
    #[wasm_bindgen(constructor)]
    pub fn new(config_json: Option<String>) -> Result<SiteHandle, JsValue> {
        let document = BrowserDocument::current().map_err(to_js_error)?;
        let config = match config_json {
            Some(json) => SiteConfig::from_json(&json),
            None => SiteConfig::from_document(document.document()),
        }
        .map_err(to_js_error)?;

        log!("Site namespace ready, debug flags: {:?}", config.debug.flags());

        Ok(Self {
            site: Rc::new(RefCell::new(Site::new(&config, document, ConsoleSink))),
        })
    }

    #[wasm_bindgen(getter)]
    pub fn debug(&self) -> DebugHandle {
        DebugHandle {
            site: Rc::clone(&self.site),
        }
    }

    #[wasm_bindgen(getter)]
    pub fn django(&self) -> DjangoHandle {
        DjangoHandle {
            _placeholder: self.site.borrow().django,
        }
    }

    #[wasm_bindgen(getter)]
    pub fn menus(&self) -> MenusHandle {
        MenusHandle {
            site: Rc::clone(&self.site),
        }
    }

    #[wasm_bindgen(getter)]
    pub fn theme(&self) -> ThemeHandle {
        ThemeHandle {
            _placeholder: self.site.borrow().theme,
        }
    }
}

/// `site.debug`: the logging shim and its `ERROR`/`WARNING`/`INFO` flags
#[wasm_bindgen]
pub struct DebugHandle {
    site: Rc<RefCell<Site<BrowserDocument, ConsoleSink>>>,
}

#[wasm_bindgen]
impl DebugHandle {
    pub fn warn(&self, msg: &JsValue) {
        self.site.borrow().debug.warn(msg);
    }

    pub fn info(&self, msg: &JsValue) {
        self.site.borrow().debug.info(msg);
    }

    pub fn error(&self, msg: &JsValue) {
        self.site.borrow().debug.error(msg);
    }

    #[wasm_bindgen(getter = ERROR)]
    pub fn error_flag(&self) -> bool {
        self.flag(DebugFlags::ERROR)
    }

    #[wasm_bindgen(setter = ERROR)]
    pub fn set_error_flag(&self, enabled: bool) {
        self.set_flag(DebugFlags::ERROR, enabled);
    }

    #[wasm_bindgen(getter = WARNING)]
    pub fn warning_flag(&self) -> bool {
        self.flag(DebugFlags::WARNING)
    }

    #[wasm_bindgen(setter = WARNING)]
    pub fn set_warning_flag(&self, enabled: bool) {
        self.set_flag(DebugFlags::WARNING, enabled);
    }

    #[wasm_bindgen(getter = INFO)]
    pub fn info_flag(&self) -> bool {
        self.flag(DebugFlags::INFO)
    }

    #[wasm_bindgen(setter = INFO)]
    pub fn set_info_flag(&self, enabled: bool) {
        self.set_flag(DebugFlags::INFO, enabled);
    }
}

impl DebugHandle {
    fn flag(&self, flag: DebugFlags) -> bool {
        self.site.borrow().debug.flags().contains(flag)
    }

    fn set_flag(&self, flag: DebugFlags, enabled: bool) {
        self.site.borrow_mut().debug.set_flag(flag, enabled);
    }
}

/// `site.menus`: login form and sidebar toggles
#[wasm_bindgen]
pub struct MenusHandle {
    site: Rc<RefCell<Site<BrowserDocument, ConsoleSink>>>,
}

#[wasm_bindgen]
impl MenusHandle {
    /// # Errors
    ///
    /// Throws if `#account-menu` is missing
    #[wasm_bindgen(js_name = openLoginForm)]
    pub fn open_login_form(&self) -> Result<(), JsValue> {
        self.site.borrow().menus.open_login_form().map_err(to_js_error)
    }

    /// # Errors
    ///
    /// Throws if `#account-menu` is missing
    #[wasm_bindgen(js_name = closeLoginForm)]
    pub fn close_login_form(&self) -> Result<(), JsValue> {
        self.site.borrow().menus.close_login_form().map_err(to_js_error)
    }

    /// # Errors
    ///
    /// Throws if `#sidebar` is missing
    #[wasm_bindgen(js_name = openSidebar)]
    pub fn open_sidebar(&self) -> Result<(), JsValue> {
        self.site.borrow().menus.open_sidebar().map_err(to_js_error)
    }

    /// # Errors
    ///
    /// Throws if `#sidebar` is missing
    #[wasm_bindgen(js_name = closeSidebar)]
    pub fn close_sidebar(&self) -> Result<(), JsValue> {
        self.site.borrow().menus.close_sidebar().map_err(to_js_error)
    }
}

/// `site.django`, empty for now
#[wasm_bindgen]
pub struct DjangoHandle {
    _placeholder: Django,
}

/// `site.theme`, empty for now
#[wasm_bindgen]
pub struct ThemeHandle {
    _placeholder: Theme,
}
