use super::*;
use std::path::PathBuf;

use crate::config::DEFAULT_BOT_URL;

fn test_config() -> SiteConfig {
    SiteConfig {
        bind_addr: "127.0.0.1".to_string(),
        port: 0,
        assets_dir: PathBuf::from("assets"),
        bot_url: DEFAULT_BOT_URL.to_string(),
        cookie_secure: false,
    }
}

#[test]
fn document_starts_with_doctype() {
    let body = render_document(Theme::Light, &test_config());
    assert!(body.starts_with("<!DOCTYPE html>"));
}

#[test]
fn light_document_has_no_dark_marker() {
    let body = render_document(Theme::Light, &test_config());
    assert!(!body.contains(r#"class="dark""#));
}

#[test]
fn dark_document_carries_the_root_marker() {
    let body = render_document(Theme::Dark, &test_config());
    assert!(body.contains(r#"class="dark""#));
}

#[test]
fn bot_link_appears_in_hero_and_call_to_action() {
    let body = render_document(Theme::Light, &test_config());
    assert_eq!(body.matches(DEFAULT_BOT_URL).count(), 2);
    assert!(body.contains(&format!(r#"class="hero__cta" href="{DEFAULT_BOT_URL}""#)));
    assert!(body.contains(&format!(r#"class="cta__button" href="{DEFAULT_BOT_URL}""#)));
}

#[test]
fn configured_bot_link_overrides_the_default() {
    let config = SiteConfig { bot_url: "https://t.me/example_bot".to_string(), ..test_config() };
    let body = render_document(Theme::Light, &config);
    assert_eq!(body.matches("https://t.me/example_bot").count(), 2);
    assert!(!body.contains(DEFAULT_BOT_URL));
}

#[test]
fn every_structural_section_renders_once() {
    let body = render_document(Theme::Light, &test_config());
    for class in [
        r#"class="site-header""#,
        r#"class="hero""#,
        r#"class="features""#,
        r#"class="how-it-works""#,
        r#"class="use-cases""#,
        r#"class="cta""#,
        r#"class="site-footer""#,
    ] {
        assert_eq!(body.matches(class).count(), 1, "section {class}");
    }
}

#[test]
fn toggle_control_is_a_plain_form_post() {
    let body = render_document(Theme::Light, &test_config());
    assert!(body.contains(r#"method="post""#));
    assert!(body.contains(r#"action="/theme/toggle""#));
    assert!(!body.contains("<script"));
}

#[test]
fn toggle_label_names_the_destination_state() {
    let light = render_document(Theme::Light, &test_config());
    assert!(light.contains("Dark mode"));
    let dark = render_document(Theme::Dark, &test_config());
    assert!(dark.contains("Light mode"));
}

#[test]
fn stylesheet_is_served_from_assets() {
    let body = render_document(Theme::Light, &test_config());
    assert!(body.contains(r#"href="/assets/style.css""#));
}
