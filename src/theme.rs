//! Theme controller core — the light/dark presentation state machine.
//!
//! DESIGN
//! ======
//! Two states, one transition: `toggled` connects `Light` and `Dark` in
//! both directions and is its own inverse. The visual treatment of every
//! element is a pure function of this single flag, reflected as a class on
//! the document root. The flag is persisted per client in a cookie; an
//! absent or unrecognized cookie value falls back to `Light` rather than
//! failing the request.

use serde::{Deserialize, Serialize};

/// Cookie carrying the persisted theme preference.
pub const THEME_COOKIE_NAME: &str = "vv_theme";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    /// Flip the theme. Total, and its own inverse.
    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    /// Parse a persisted cookie value. Anything unrecognized is `Light`.
    #[must_use]
    pub fn from_cookie_value(raw: &str) -> Self {
        match raw.trim() {
            "dark" => Self::Dark,
            _ => Self::Light,
        }
    }

    #[must_use]
    pub fn cookie_value(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    /// Class applied to the document root. Empty for light so all dark
    /// styling hangs off a single `.dark` marker.
    #[must_use]
    pub fn html_class(self) -> &'static str {
        match self {
            Self::Light => "",
            Self::Dark => "dark",
        }
    }

    /// Label for the toggle control, naming the state a click moves to.
    #[must_use]
    pub fn toggle_label(self) -> &'static str {
        match self {
            Self::Light => "Dark mode",
            Self::Dark => "Light mode",
        }
    }
}

#[cfg(test)]
#[path = "theme_test.rs"]
mod tests;
