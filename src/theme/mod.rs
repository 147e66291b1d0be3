//! Light/dark theme resolution.
//!
//! SYSTEM CONTEXT
//! ==============
//! The dashboard renders dark or light based on three inputs: an explicit
//! persisted user choice, the OS color-scheme preference, and changes made in
//! other tabs of the same origin. This module owns that decision.
//!
//! - [`resolver`]: the state machine over [`ThemeState`]
//! - [`preference`]: persisted encoding, including legacy boolean values
//! - [`host`]: the environment seam; `browser` implements it over `web_sys`
//! - [`broadcast`]: typed same-tab publish/subscribe
//! - [`runtime`]: the single process-wide instance and its entry points

pub mod broadcast;
#[cfg(feature = "hydrate")]
pub mod browser;
pub mod config;
pub mod error;
pub mod host;
pub mod preference;
pub mod resolver;
pub mod runtime;

#[cfg(test)]
pub(crate) mod memory_host;

pub use broadcast::{SubscriptionId, ThemeBroadcast};
pub use config::{RootMarker, ThemeConfig};
pub use error::ThemeError;
pub use host::ThemeHost;
pub use preference::ThemePreference;
pub use resolver::{ThemeResolver, ThemeState};
#[cfg(feature = "hydrate")]
pub use runtime::init;
