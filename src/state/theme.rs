//! Reactive theme handle for components.
//!
//! DESIGN
//! ======
//! Components never hold the resolver. They read a signal mirrored from the
//! runtime broadcast and call back into the runtime to change the theme, so
//! the resolver stays the single source of truth.

use leptos::prelude::*;

use crate::theme::{ThemeState, runtime};

#[cfg(test)]
#[path = "theme_test.rs"]
mod theme_test;

#[derive(Clone, Copy, Debug)]
pub struct ThemeContext {
    state: RwSignal<ThemeState>,
}

impl ThemeContext {
    /// Current theme state (tracked).
    pub fn state(&self) -> ThemeState {
        self.state.get()
    }

    pub fn is_dark(&self) -> bool {
        self.state.get().is_dark
    }

    pub fn has_user_preference(&self) -> bool {
        self.state.get().has_user_preference
    }

    pub fn toggle(&self) {
        runtime::toggle_dark_mode();
    }

    pub fn set_dark_mode(&self, dark: bool, persist: bool) {
        runtime::set_dark_mode(dark, persist);
    }

    pub fn clear_user_preference(&self) {
        runtime::clear_user_preference();
    }
}

/// Mirror the runtime theme into a signal and provide it as context.
///
/// The signal starts at the default light state on both server and client so
/// hydration sees the tree the server rendered. The resolved state is copied
/// in by an effect, which only runs in the browser after hydration.
pub fn provide_theme_context() -> ThemeContext {
    let state = RwSignal::new(ThemeState::default());
    Effect::new(move || sync_from_runtime(state));
    let subscription = runtime::subscribe(move |next| state.set(next));
    on_cleanup(move || {
        runtime::unsubscribe(subscription);
    });

    let ctx = ThemeContext { state };
    provide_context(ctx);
    ctx
}

fn sync_from_runtime(state: RwSignal<ThemeState>) {
    if let Some(current) = runtime::current() {
        state.set(current);
    }
}
