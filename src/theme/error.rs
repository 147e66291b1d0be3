//! Errors raised by theme hosts and configuration.
//!
//! ERROR HANDLING
//! ==============
//! Host failures never escape the resolver: they are logged and the resolver
//! falls back to the OS signal or the last in-memory value. The type exists so
//! hosts can describe what went wrong and tests can inject failures.

/// Failure reported by a [`ThemeHost`](super::host::ThemeHost) or config loader.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ThemeError {
    /// No global `window` (non-browser environment or worker).
    #[error("window unavailable")]
    WindowUnavailable,
    /// `localStorage` is disabled or blocked by privacy settings.
    #[error("local storage unavailable")]
    StorageUnavailable,
    /// A storage operation threw (quota exceeded, security error).
    #[error("storage {op} failed: {detail}")]
    Storage { op: &'static str, detail: String },
    /// `matchMedia` is missing or rejected the query.
    #[error("media query failed: {0}")]
    MediaQuery(String),
    /// The document or its root element could not be reached.
    #[error("document root unavailable: {0}")]
    Document(String),
    /// Event listener registration failed.
    #[error("listener registration failed: {0}")]
    Listener(String),
    /// Theme configuration was rejected.
    #[error("invalid theme config: {0}")]
    Config(String),
}

impl ThemeError {
    /// Build a [`ThemeError::Storage`] for the named operation.
    pub fn storage(op: &'static str, detail: impl Into<String>) -> Self {
        Self::Storage { op, detail: detail.into() }
    }
}

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;
