//! Theme endpoints — toggle and inspection.
//!
//! DESIGN
//! ======
//! The toggle is a plain POST so the control works as a form submit with
//! no client script: read the current theme from the cookie, flip it,
//! re-issue the cookie, and send the browser back to the page it came
//! from. The flip itself cannot fail; a missing or malformed cookie just
//! means the current theme is `Light`.

use axum::Json;
use axum::extract::State;
use axum::response::{IntoResponse, Redirect};
use axum_extra::extract::cookie::{Cookie, CookieJar, SameSite};
use serde::Serialize;
use time::Duration;
use tracing::debug;

use crate::state::AppState;
use crate::theme::{THEME_COOKIE_NAME, Theme};

/// How long the persisted preference outlives the session.
const THEME_COOKIE_MAX_AGE_DAYS: i64 = 365;

/// Read the theme from the request's cookie jar, defaulting to `Light`.
pub(crate) fn theme_from_jar(jar: &CookieJar) -> Theme {
    jar.get(THEME_COOKIE_NAME)
        .map(Cookie::value)
        .map_or(Theme::Light, Theme::from_cookie_value)
}

fn theme_cookie(theme: Theme, secure: bool) -> Cookie<'static> {
    Cookie::build((THEME_COOKIE_NAME, theme.cookie_value()))
        .path("/")
        .http_only(true)
        .same_site(SameSite::Lax)
        .secure(secure)
        .max_age(Duration::days(THEME_COOKIE_MAX_AGE_DAYS))
        .build()
}

/// `POST /theme/toggle` — flip the theme and return to the page.
pub async fn toggle(State(state): State<AppState>, jar: CookieJar) -> impl IntoResponse {
    let current = theme_from_jar(&jar);
    let next = current.toggled();
    debug!(from = current.cookie_value(), to = next.cookie_value(), "theme toggled");

    let jar = jar.add(theme_cookie(next, state.config.cookie_secure));
    (jar, Redirect::to("/"))
}

#[derive(Debug, Serialize)]
pub struct ThemeInfo {
    pub theme: Theme,
}

/// `GET /api/theme` — current theme as seen by the server.
pub async fn current(jar: CookieJar) -> Json<ThemeInfo> {
    Json(ThemeInfo { theme: theme_from_jar(&jar) })
}

#[cfg(test)]
#[path = "theme_test.rs"]
mod tests;
