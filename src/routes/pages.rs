//! Page handlers.

use axum::extract::State;
use axum::response::Html;
use axum_extra::extract::cookie::CookieJar;

use crate::routes::theme::theme_from_jar;
use crate::state::AppState;
use crate::view;

/// `GET /` — render the landing document with the client's theme.
pub async fn landing(State(state): State<AppState>, jar: CookieJar) -> Html<String> {
    let theme = theme_from_jar(&jar);
    Html(view::render_document(theme, &state.config))
}

#[cfg(test)]
#[path = "pages_test.rs"]
mod tests;
