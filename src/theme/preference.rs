//! Persisted theme preference encoding.
//!
//! The current format is the literal string `"dark"` or `"light"`. Earlier
//! releases stored a boolean (`"true"`/`"false"`, possibly JSON-encoded with
//! surrounding whitespace); those still decode, and are rewritten in the
//! current format on the next write.

use serde::Deserialize;

#[cfg(test)]
#[path = "preference_test.rs"]
mod preference_test;

/// An explicit light/dark choice.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemePreference {
    #[default]
    Light,
    Dark,
}

impl ThemePreference {
    /// Map a resolved `is_dark` flag to a preference.
    #[must_use]
    pub fn from_dark(is_dark: bool) -> Self {
        if is_dark { Self::Dark } else { Self::Light }
    }

    #[must_use]
    pub fn is_dark(self) -> bool {
        matches!(self, Self::Dark)
    }

    /// The storage encoding written by this release.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Dark => "dark",
            Self::Light => "light",
        }
    }

    /// Decode a raw stored value, accepting legacy boolean encodings.
    ///
    /// Returns `None` for anything unrecognized; callers treat that the same
    /// as an absent value.
    #[must_use]
    pub fn decode(raw: &str) -> Option<Self> {
        match raw {
            "dark" => return Some(Self::Dark),
            "light" => return Some(Self::Light),
            _ => {}
        }
        if let Ok(flag) = serde_json::from_str::<bool>(raw) {
            return Some(Self::from_dark(flag));
        }
        None
    }

    /// Whether `raw` is already in the current encoding for this preference.
    #[must_use]
    pub fn is_current_encoding(self, raw: &str) -> bool {
        raw == self.as_str()
    }
}

impl std::fmt::Display for ThemePreference {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
