//! Theme preference resolution.
//!
//! Reconciles three sources into one `is_dark` flag: an explicit persisted
//! user choice, the live OS color-scheme signal, and cross-tab storage
//! notifications. An explicit choice always wins until it is cleared; without
//! one the resolved theme follows the OS signal.
//!
//! Every mutator returns `Some(new_state)` when the state changed so the
//! caller can publish it. The document root is re-marked on every explicit
//! set, changed or not.

use log::{debug, warn};

use super::config::ThemeConfig;
use super::host::ThemeHost;
use super::preference::ThemePreference;

#[cfg(test)]
#[path = "resolver_test.rs"]
mod resolver_test;

/// Resolved theme plus whether it came from an explicit choice.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ThemeState {
    pub is_dark: bool,
    pub has_user_preference: bool,
}

impl ThemeState {
    #[must_use]
    pub fn preference(self) -> ThemePreference {
        ThemePreference::from_dark(self.is_dark)
    }
}

pub struct ThemeResolver<H: ThemeHost> {
    host: H,
    config: ThemeConfig,
    state: ThemeState,
}

impl<H: ThemeHost> ThemeResolver<H> {
    /// Resolve the initial theme and mark the document root.
    ///
    /// A valid stored value becomes the user preference; legacy encodings are
    /// rewritten in the current format. Otherwise the OS signal decides, and
    /// `config.fallback` applies when there is no signal.
    pub fn init(host: H, config: ThemeConfig) -> Self {
        let mut resolver = Self { host, config, state: ThemeState::default() };

        let stored = resolver.read_stored();
        resolver.state = match stored {
            Some((preference, raw)) => {
                if !preference.is_current_encoding(&raw) {
                    debug!("theme: migrating legacy stored value {raw:?} to {preference}");
                    resolver.write_stored(preference);
                }
                ThemeState { is_dark: preference.is_dark(), has_user_preference: true }
            }
            None => ThemeState { is_dark: resolver.system_or_fallback(), has_user_preference: false },
        };
        resolver.apply_root();
        debug!("theme: initialized {:?}", resolver.state);
        resolver
    }

    #[must_use]
    pub fn state(&self) -> ThemeState {
        self.state
    }

    #[must_use]
    pub fn is_dark(&self) -> bool {
        self.state.is_dark
    }

    #[must_use]
    pub fn has_user_preference(&self) -> bool {
        self.state.has_user_preference
    }

    #[cfg(test)]
    pub(crate) fn config(&self) -> &ThemeConfig {
        &self.config
    }

    #[cfg(test)]
    pub(crate) fn host(&self) -> &H {
        &self.host
    }

    /// Set the theme. With `persist`, the choice is stored and becomes the
    /// user preference; without it, only the in-memory theme changes.
    pub fn set_dark_mode(&mut self, dark: bool, persist: bool) -> Option<ThemeState> {
        let previous = self.state;
        self.state.is_dark = dark;
        if persist {
            self.state.has_user_preference = true;
            self.write_stored(ThemePreference::from_dark(dark));
        }
        self.apply_root();
        self.changed_from(previous)
    }

    pub fn toggle_dark_mode(&mut self) -> Option<ThemeState> {
        self.set_dark_mode(!self.state.is_dark, true)
    }

    /// Forget the user preference and follow the OS signal again.
    pub fn clear_user_preference(&mut self) -> Option<ThemeState> {
        let key = self.config.storage_key.clone();
        if let Err(err) = self.host.remove_preference(&key) {
            warn!("theme: failed to remove stored preference: {err}");
        }
        self.follow_system()
    }

    /// React to a storage event raised by another tab.
    ///
    /// `key == None` means the other tab cleared all of storage. The change is
    /// consumed without writing back.
    pub fn handle_storage_change(&mut self, key: Option<&str>, new_value: Option<&str>) -> Option<ThemeState> {
        if key.is_some_and(|k| k != self.config.storage_key) {
            return None;
        }
        let Some(raw) = new_value.filter(|_| key.is_some()) else {
            debug!("theme: preference removed in another tab");
            return self.follow_system();
        };
        let Some(preference) = ThemePreference::decode(raw) else {
            debug!("theme: ignoring malformed cross-tab value {raw:?}");
            return None;
        };
        let previous = self.state;
        self.state = ThemeState { is_dark: preference.is_dark(), has_user_preference: true };
        self.apply_root_if_changed(previous);
        self.changed_from(previous)
    }

    /// React to an OS color-scheme change.
    pub fn handle_system_change(&mut self, prefers_dark: bool) -> Option<ThemeState> {
        if self.state.has_user_preference {
            return None;
        }
        if self.config.respect_page_visibility && !self.host.page_visible() {
            debug!("theme: page hidden, deferring system change");
            return None;
        }
        let previous = self.state;
        self.state.is_dark = prefers_dark;
        self.apply_root_if_changed(previous);
        self.changed_from(previous)
    }

    /// Pick up any OS change deferred while the page was hidden.
    pub fn handle_visibility_change(&mut self, visible: bool) -> Option<ThemeState> {
        if !visible || self.state.has_user_preference {
            return None;
        }
        let previous = self.state;
        match self.system_signal() {
            Some(dark) => self.state.is_dark = dark,
            None => return None,
        }
        self.apply_root_if_changed(previous);
        self.changed_from(previous)
    }

    fn follow_system(&mut self) -> Option<ThemeState> {
        let previous = self.state;
        self.state = ThemeState { is_dark: self.system_or_fallback(), has_user_preference: false };
        self.apply_root_if_changed(previous);
        self.changed_from(previous)
    }

    fn read_stored(&self) -> Option<(ThemePreference, String)> {
        let raw = match self.host.read_preference(&self.config.storage_key) {
            Ok(raw) => raw?,
            Err(err) => {
                debug!("theme: stored preference unreadable: {err}");
                return None;
            }
        };
        match ThemePreference::decode(&raw) {
            Some(preference) => Some((preference, raw)),
            None => {
                debug!("theme: ignoring malformed stored value {raw:?}");
                None
            }
        }
    }

    fn write_stored(&mut self, preference: ThemePreference) {
        let key = self.config.storage_key.clone();
        if let Err(err) = self.host.write_preference(&key, preference.as_str()) {
            warn!("theme: failed to persist preference: {err}");
        }
    }

    fn system_signal(&self) -> Option<bool> {
        match self.host.system_prefers_dark(&self.config.media_query) {
            Ok(signal) => signal,
            Err(err) => {
                debug!("theme: OS signal unavailable: {err}");
                None
            }
        }
    }

    fn system_or_fallback(&self) -> bool {
        self.system_signal().unwrap_or_else(|| self.config.fallback.is_dark())
    }

    fn apply_root(&mut self) {
        let marker = self.config.root_marker();
        if let Err(err) = self.host.apply_root(&marker, self.state.is_dark) {
            warn!("theme: failed to mark document root: {err}");
        }
    }

    fn apply_root_if_changed(&mut self, previous: ThemeState) {
        if previous.is_dark != self.state.is_dark {
            self.apply_root();
        }
    }

    fn changed_from(&self, previous: ThemeState) -> Option<ThemeState> {
        (previous != self.state).then_some(self.state)
    }
}

impl<H: ThemeHost> std::fmt::Debug for ThemeResolver<H> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ThemeResolver")
            .field("config", &self.config)
            .field("state", &self.state)
            .finish_non_exhaustive()
    }
}
