//! Top bar with the product name and theme controls.
//!
//! SYSTEM CONTEXT
//! ==============
//! The navbar is the main consumer of the theme outside the root element. It
//! reads the theme from context rather than from props or the DOM, so it stays
//! in sync with changes from other tabs and the OS.

use leptos::prelude::*;

use crate::components::theme_toggle::ThemeToggle;
use crate::state::theme::ThemeContext;

#[component]
pub fn Navbar() -> impl IntoView {
    let theme = expect_context::<ThemeContext>();

    view! {
        <nav class={move || if theme.is_dark() { "navbar navbar--dark" } else { "navbar" }}>
            <span class="navbar__brand">"OpsDesk"</span>
            <span class="navbar__spacer"></span>
            <ThemeToggle/>
        </nav>
    }
}
