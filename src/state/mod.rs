//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! Each module exposes a small `Copy` handle provided through Leptos context,
//! so components depend only on the state they render.

pub mod theme;
