//! Light/dark toggle and "follow system" reset.
//!
//! Both buttons go through [`ThemeContext`]; neither touches the document root.

use leptos::prelude::*;

use crate::state::theme::ThemeContext;

#[cfg(test)]
#[path = "theme_toggle_test.rs"]
mod theme_toggle_test;

fn toggle_icon(is_dark: bool) -> &'static str {
    if is_dark { "☀" } else { "☾" }
}

fn toggle_title(is_dark: bool) -> &'static str {
    if is_dark { "Switch to light mode" } else { "Switch to dark mode" }
}

/// Theme toggle button, plus a reset shown while an explicit choice is stored.
#[component]
pub fn ThemeToggle() -> impl IntoView {
    let theme = expect_context::<ThemeContext>();

    view! {
        <button
            class="btn navbar__theme-toggle"
            on:click=move |_| theme.toggle()
            title=move || toggle_title(theme.is_dark())
        >
            {move || toggle_icon(theme.is_dark())}
        </button>
        <Show when=move || theme.has_user_preference()>
            <button
                class="btn navbar__theme-follow"
                on:click=move |_| theme.clear_user_preference()
                title="Follow system theme"
            >
                "⟲"
            </button>
        </Show>
    }
}
