//! Same-tab publish/subscribe over [`ThemeState`].
//!
//! DESIGN
//! ======
//! Decoupled UI parts (the navbar, anything that styles itself from the theme)
//! subscribe here instead of re-deriving the theme or listening for a
//! string-named DOM event. `publish` iterates over a snapshot, so a callback
//! may subscribe, unsubscribe, or trigger another theme change.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use super::resolver::ThemeState;

#[cfg(test)]
#[path = "broadcast_test.rs"]
mod broadcast_test;

/// Handle returned by [`ThemeBroadcast::subscribe`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

type Listener = Rc<dyn Fn(ThemeState)>;

#[derive(Default)]
pub struct ThemeBroadcast {
    next_id: Cell<u64>,
    listeners: RefCell<Vec<(SubscriptionId, Listener)>>,
}

impl ThemeBroadcast {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn subscribe(&self, listener: impl Fn(ThemeState) + 'static) -> SubscriptionId {
        let id = SubscriptionId(self.next_id.get());
        self.next_id.set(self.next_id.get() + 1);
        self.listeners.borrow_mut().push((id, Rc::new(listener)));
        id
    }

    /// Remove a listener. Returns `false` if `id` was not subscribed.
    pub fn unsubscribe(&self, id: SubscriptionId) -> bool {
        let mut listeners = self.listeners.borrow_mut();
        let before = listeners.len();
        listeners.retain(|(existing, _)| *existing != id);
        listeners.len() != before
    }

    pub fn publish(&self, state: ThemeState) {
        let snapshot: Vec<Listener> = self.listeners.borrow().iter().map(|(_, l)| Rc::clone(l)).collect();
        for listener in snapshot {
            listener(state);
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.listeners.borrow().len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.listeners.borrow().is_empty()
    }

    pub fn clear(&self) {
        self.listeners.borrow_mut().clear();
    }
}

impl std::fmt::Debug for ThemeBroadcast {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ThemeBroadcast")
            .field("listeners", &self.len())
            .finish_non_exhaustive()
    }
}
