//! Environment seam for the theme resolver.
//!
//! SYSTEM CONTEXT
//! ==============
//! The resolver never touches `web_sys` directly. Everything it needs from the
//! browser (durable storage, the OS color-scheme signal, page visibility, and
//! the document root) goes through [`ThemeHost`], so the decision logic runs
//! and is tested on the native target.

use super::config::RootMarker;
use super::error::ThemeError;

pub trait ThemeHost {
    /// Read the raw persisted value for `key`.
    ///
    /// # Errors
    ///
    /// Returns an error if storage is unavailable or the read throws.
    fn read_preference(&self, key: &str) -> Result<Option<String>, ThemeError>;

    /// Persist `value` under `key`.
    ///
    /// # Errors
    ///
    /// Returns an error if storage is unavailable or the write throws.
    fn write_preference(&mut self, key: &str, value: &str) -> Result<(), ThemeError>;

    /// Remove the persisted value for `key`.
    ///
    /// # Errors
    ///
    /// Returns an error if storage is unavailable or the removal throws.
    fn remove_preference(&mut self, key: &str) -> Result<(), ThemeError>;

    /// Current value of the OS color-scheme signal; `None` when the platform
    /// does not report one.
    ///
    /// # Errors
    ///
    /// Returns an error if the media query cannot be evaluated.
    fn system_prefers_dark(&self, query: &str) -> Result<Option<bool>, ThemeError>;

    /// Whether the page is currently in the foreground.
    fn page_visible(&self) -> bool {
        true
    }

    /// Mark the document root as dark or light.
    ///
    /// # Errors
    ///
    /// Returns an error if the document root is unreachable.
    fn apply_root(&mut self, marker: &RootMarker, dark: bool) -> Result<(), ThemeError>;
}

impl<H: ThemeHost + ?Sized> ThemeHost for Box<H> {
    fn read_preference(&self, key: &str) -> Result<Option<String>, ThemeError> {
        (**self).read_preference(key)
    }

    fn write_preference(&mut self, key: &str, value: &str) -> Result<(), ThemeError> {
        (**self).write_preference(key, value)
    }

    fn remove_preference(&mut self, key: &str) -> Result<(), ThemeError> {
        (**self).remove_preference(key)
    }

    fn system_prefers_dark(&self, query: &str) -> Result<Option<bool>, ThemeError> {
        (**self).system_prefers_dark(query)
    }

    fn page_visible(&self) -> bool {
        (**self).page_visible()
    }

    fn apply_root(&mut self, marker: &RootMarker, dark: bool) -> Result<(), ThemeError> {
        (**self).apply_root(marker, dark)
    }
}
