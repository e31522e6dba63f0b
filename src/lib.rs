pub mod logging;
pub mod constants;
pub mod config;
pub mod debug;
pub mod dom;
pub mod menus;
pub mod django;
pub mod theme;
pub mod site;

#[cfg(target_arch = "wasm32")]
pub mod bindings;

pub use config::{DebugConfig, SiteConfig};
pub use debug::{DebugFlags, DebugLog, OutputSink};
pub use dom::{ElementLocator, StyledElement};
pub use menus::Menus;
pub use site::Site;

#[cfg(target_arch = "wasm32")]
pub use bindings::{ConsoleSink, DebugHandle, DjangoHandle, MenusHandle, SiteHandle, ThemeHandle};
