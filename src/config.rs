use crate::debug::DebugFlags;
use serde::{Deserialize, Serialize};

const fn enabled() -> bool {
    true
}

/// Which logging severities start out enabled; each one defaults to on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DebugConfig {
    #[serde(default = "enabled")]
    pub error: bool,
    #[serde(default = "enabled")]
    pub warning: bool,
    #[serde(default = "enabled")]
    pub info: bool,
}

impl Default for DebugConfig {
    fn default() -> Self {
        Self {
            error: true,
            warning: true,
            info: true,
        }
    }
}

impl DebugConfig {
    #[must_use]
    pub fn flags(self) -> DebugFlags {
        let mut flags = DebugFlags::empty();
        flags.set(DebugFlags::ERROR, self.error);
        flags.set(DebugFlags::WARNING, self.warning);
        flags.set(DebugFlags::INFO, self.info);
        flags
    }
}

impl From<DebugFlags> for DebugConfig {
    fn from(flags: DebugFlags) -> Self {
        Self {
            error: flags.contains(DebugFlags::ERROR),
            warning: flags.contains(DebugFlags::WARNING),
            info: flags.contains(DebugFlags::INFO),
        }
    }
}

/// Page-supplied settings for the site namespace
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SiteConfig {
    #[serde(default)]
    pub debug: DebugConfig,
}

impl SiteConfig {
    /// Parse settings from a JSON document
    ///
    /// # Errors
    ///
    /// Returns an error if the text is not valid JSON for this shape
    pub fn from_json(json: &str) -> Result<Self, String> {
        serde_json::from_str(json).map_err(|e| format!("Failed to parse site config: {e}"))
    }

    /// # Errors
    ///
    /// Returns an error if the config cannot be serialized
    pub fn to_json(&self) -> Result<String, String> {
        serde_json::to_string(self).map_err(|e| format!("Failed to serialize site config: {e}"))
    }

    /// Read settings from the page's inline `<script type="application/json" id="site-config">`
    ///
    /// Pages without the block get the defaults.
    ///
    /// # Errors
    ///
    /// Returns an error if the block exists but does not parse
    #[cfg(target_arch = "wasm32")]
    pub fn from_document(document: &web_sys::Document) -> Result<Self, String> {
        let Some(element) = document.get_element_by_id(crate::constants::CONFIG_ELEMENT_ID) else {
            return Ok(Self::default());
        };
        match element.text_content() {
            Some(text) if !text.trim().is_empty() => Self::from_json(&text),
            _ => Ok(Self::default()),
        }
    }
}
