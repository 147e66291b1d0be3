//! Root application component and SSR shell.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};

use crate::components::navbar::Navbar;
use crate::state::theme::provide_theme_context;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides the theme context; the theme itself was resolved by
/// `theme::init` before mounting.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();
    provide_theme_context();

    view! {
        <Stylesheet id="leptos" href="/pkg/opsdesk.css"/>
        <Title text="OpsDesk"/>

        <Navbar/>
        <main class="app__content"></main>
    }
}
