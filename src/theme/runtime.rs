//! Process-wide theme instance.
//!
//! SYSTEM CONTEXT
//! ==============
//! The UI runs on a single thread, so the one resolver and its broadcast live
//! in thread-locals. The application entry point calls `init` once before
//! the first render; everything else (components, event listeners) goes
//! through the free functions here. The resolver is the only mutator of the
//! theme: no component touches the document root itself.
//!
//! State changes are published after the resolver borrow is released, so a
//! subscriber may call back into this module.

use std::cell::RefCell;

use log::debug;

use super::broadcast::{SubscriptionId, ThemeBroadcast};
use super::config::ThemeConfig;
use super::host::ThemeHost;
use super::resolver::{ThemeResolver, ThemeState};

#[cfg(test)]
#[path = "runtime_test.rs"]
mod runtime_test;

type DynResolver = ThemeResolver<Box<dyn ThemeHost>>;

thread_local! {
    static RESOLVER: RefCell<Option<DynResolver>> = const { RefCell::new(None) };
    static BROADCAST: ThemeBroadcast = ThemeBroadcast::new();
    #[cfg(feature = "hydrate")]
    static LISTENERS: RefCell<Option<super::browser::BrowserListeners>> = const { RefCell::new(None) };
}

/// Resolve the theme from the browser and start tracking storage, OS, and
/// visibility changes.
///
/// Call once from the entry point before mounting so the first paint already
/// carries the right theme. An invalid config is logged and replaced by the
/// default.
#[cfg(feature = "hydrate")]
pub fn init(config: ThemeConfig) -> ThemeState {
    let config = match config.validate() {
        Ok(()) => config,
        Err(err) => {
            log::warn!("theme: {err}; using default config");
            ThemeConfig::default()
        }
    };
    let media_query = config.media_query.clone();
    let state = install(Box::new(super::browser::BrowserHost::new()), config);

    release_listeners();
    let listeners = super::browser::BrowserListeners::attach(&media_query);
    LISTENERS.with(|slot| *slot.borrow_mut() = listeners);
    state
}

/// Install `host` as the theme environment, replacing any previous instance.
///
/// Existing subscribers are kept and receive the new state.
pub fn install(host: Box<dyn ThemeHost>, config: ThemeConfig) -> ThemeState {
    let resolver = ThemeResolver::init(host, config);
    let state = resolver.state();
    RESOLVER.with(|slot| *slot.borrow_mut() = Some(resolver));
    BROADCAST.with(|b| b.publish(state));
    state
}

/// Detach browser listeners and drop the instance. Subscribers are dropped too.
///
/// Safe to call from a subscriber: listeners are detached on a later
/// microtask, after the browser callback that is running has returned.
pub fn shutdown() {
    #[cfg(feature = "hydrate")]
    release_listeners();
    RESOLVER.with(|slot| slot.borrow_mut().take());
    BROADCAST.with(ThemeBroadcast::clear);
}

#[cfg(feature = "hydrate")]
fn release_listeners() {
    if let Some(listeners) = LISTENERS.with(|slot| slot.borrow_mut().take()) {
        listeners.release_later();
    }
}

#[must_use]
pub fn current() -> Option<ThemeState> {
    RESOLVER.with(|slot| slot.borrow().as_ref().map(ThemeResolver::state))
}

pub fn set_dark_mode(dark: bool, persist: bool) -> Option<ThemeState> {
    mutate("set_dark_mode", |r| r.set_dark_mode(dark, persist))
}

pub fn toggle_dark_mode() -> Option<ThemeState> {
    mutate("toggle_dark_mode", ThemeResolver::toggle_dark_mode)
}

pub fn clear_user_preference() -> Option<ThemeState> {
    mutate("clear_user_preference", ThemeResolver::clear_user_preference)
}

pub fn subscribe(listener: impl Fn(ThemeState) + 'static) -> SubscriptionId {
    BROADCAST.with(|b| b.subscribe(listener))
}

pub fn unsubscribe(id: SubscriptionId) -> bool {
    BROADCAST.with(|b| b.unsubscribe(id))
}

#[cfg(test)]
pub(crate) fn subscriber_count() -> usize {
    BROADCAST.with(ThemeBroadcast::len)
}

#[cfg(any(test, feature = "hydrate"))]
pub(crate) fn handle_storage_change(key: Option<&str>, new_value: Option<&str>) -> Option<ThemeState> {
    mutate("storage", |r| r.handle_storage_change(key, new_value))
}

#[cfg(any(test, feature = "hydrate"))]
pub(crate) fn handle_system_change(prefers_dark: bool) -> Option<ThemeState> {
    mutate("system", |r| r.handle_system_change(prefers_dark))
}

#[cfg(any(test, feature = "hydrate"))]
pub(crate) fn handle_visibility_change(visible: bool) -> Option<ThemeState> {
    mutate("visibility", |r| r.handle_visibility_change(visible))
}

fn mutate(op: &str, f: impl FnOnce(&mut DynResolver) -> Option<ThemeState>) -> Option<ThemeState> {
    let changed = RESOLVER.with(|slot| {
        let mut slot = slot.borrow_mut();
        let Some(resolver) = slot.as_mut() else {
            debug!("theme: {op} before init; ignoring");
            return None;
        };
        f(resolver)
    })?;
    BROADCAST.with(|b| b.publish(changed));
    Some(changed)
}
