use super::*;
use std::path::PathBuf;

use axum_extra::extract::cookie::Cookie;

use crate::config::SiteConfig;
use crate::theme::THEME_COOKIE_NAME;

fn test_state() -> AppState {
    AppState::new(SiteConfig {
        bind_addr: "127.0.0.1".to_string(),
        port: 0,
        assets_dir: PathBuf::from("assets"),
        bot_url: "https://t.me/vidyavrikshbot".to_string(),
        cookie_secure: false,
    })
}

#[tokio::test]
async fn landing_defaults_to_light_without_a_cookie() {
    let Html(body) = landing(State(test_state()), CookieJar::new()).await;
    assert!(body.starts_with("<!DOCTYPE html>"));
    assert!(!body.contains(r#"class="dark""#));
}

#[tokio::test]
async fn landing_honors_a_dark_cookie() {
    let jar = CookieJar::new().add(Cookie::new(THEME_COOKIE_NAME, "dark"));
    let Html(body) = landing(State(test_state()), jar).await;
    assert!(body.contains(r#"class="dark""#));
}
