/// Conditional logging for development builds
///
/// The `log!` macro writes crate-internal diagnostics to the browser console and
/// is compiled out in release builds unless the `console_logging` feature is on.
/// It is not the page-facing logging shim; that lives in [`crate::debug`] and is
/// gated by runtime flags instead.
///
/// Only call it from `wasm32` code paths. On native targets `web_sys` console
/// bindings panic when invoked.
///
/// # Examples
///
/// ```rust,ignore
/// use crate::logging::log;
///
/// log!("Site namespace ready: {:?}", flags);
/// ```
#[macro_export]
macro_rules! log {
    ($($arg:expr),+ $(,)?) => {
        #[cfg(any(debug_assertions, feature = "console_logging"))]
        {
            web_sys::console::log_1(&format!($($arg),+).into());
        }
    };
}

pub use log;
