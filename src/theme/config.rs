//! Theme resolver configuration.

use serde::Deserialize;

use super::error::ThemeError;
use super::preference::ThemePreference;

/// Storage key kept from the first release so existing preferences survive.
pub const DEFAULT_STORAGE_KEY: &str = "darkMode";
pub const DEFAULT_MEDIA_QUERY: &str = "(prefers-color-scheme: dark)";
pub const DEFAULT_ROOT_CLASS: &str = "dark";
pub const DEFAULT_ROOT_ATTRIBUTE: &str = "data-theme";

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

/// How the resolved theme is marked on the document root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RootMarker {
    /// Class present on `<html>` while dark.
    pub class: String,
    /// Attribute set to `"dark"`/`"light"` on every change, if any.
    pub attribute: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ThemeConfig {
    pub storage_key: String,
    pub media_query: String,
    pub root_class: String,
    pub root_attribute: Option<String>,
    /// Used when there is no stored preference and no OS signal.
    pub fallback: ThemePreference,
    /// Ignore OS signal changes while the page is hidden.
    pub respect_page_visibility: bool,
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            storage_key: DEFAULT_STORAGE_KEY.to_owned(),
            media_query: DEFAULT_MEDIA_QUERY.to_owned(),
            root_class: DEFAULT_ROOT_CLASS.to_owned(),
            root_attribute: Some(DEFAULT_ROOT_ATTRIBUTE.to_owned()),
            fallback: ThemePreference::Light,
            respect_page_visibility: true,
        }
    }
}

impl ThemeConfig {
    /// Parse a config from JSON, filling absent fields with defaults.
    ///
    /// # Errors
    ///
    /// Returns [`ThemeError::Config`] if the JSON is malformed or fails
    /// [`ThemeConfig::validate`].
    pub fn from_json(raw: &str) -> Result<Self, ThemeError> {
        let config: Self = serde_json::from_str(raw).map_err(|e| ThemeError::Config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Check that every field can be used against the DOM.
    ///
    /// # Errors
    ///
    /// Returns [`ThemeError::Config`] naming the first invalid field.
    pub fn validate(&self) -> Result<(), ThemeError> {
        if self.storage_key.trim().is_empty() {
            return Err(ThemeError::Config("storage_key must not be empty".to_owned()));
        }
        if self.media_query.trim().is_empty() {
            return Err(ThemeError::Config("media_query must not be empty".to_owned()));
        }
        if self.root_class.is_empty() || self.root_class.chars().any(char::is_whitespace) {
            return Err(ThemeError::Config(format!(
                "root_class must be a single class name, got '{}'",
                self.root_class
            )));
        }
        if let Some(attr) = &self.root_attribute {
            if attr.is_empty() || attr.chars().any(char::is_whitespace) {
                return Err(ThemeError::Config(format!("root_attribute is not a valid name: '{attr}'")));
            }
        }
        Ok(())
    }

    #[must_use]
    pub fn root_marker(&self) -> RootMarker {
        RootMarker { class: self.root_class.clone(), attribute: self.root_attribute.clone() }
    }
}
