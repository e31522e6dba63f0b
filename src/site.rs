use crate::config::SiteConfig;
use crate::debug::{DebugLog, OutputSink};
use crate::django::Django;
use crate::dom::ElementLocator;
use crate::menus::Menus;
use crate::theme::Theme;

/// The page's utility namespace: logging shim, menu toggles and two placeholders
#[derive(Debug, Clone)]
pub struct Site<L, S> {
    pub debug: DebugLog<S>,
    pub django: Django,
    pub menus: Menus<L>,
    pub theme: Theme,
}

impl<L: ElementLocator, S: OutputSink> Site<L, S> {
    #[must_use]
    pub fn new(config: &SiteConfig, locator: L, sink: S) -> Self {
        Self {
            debug: DebugLog::new(config.debug.flags(), sink),
            django: Django,
            menus: Menus::new(locator),
            theme: Theme,
        }
    }
}
