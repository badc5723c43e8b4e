//! Server-rendered page views.
//!
//! ARCHITECTURE
//! ============
//! Components are plain Leptos views rendered to a string on the server;
//! there is no hydration and no client script. `render_document` is the
//! single entry point used by the page handler. Every visual difference
//! between light and dark mode hangs off the root class, so the markup is
//! a pure function of the theme flag and the configured bot link.

pub mod landing;
pub mod layout;

use leptos::prelude::*;

use crate::config::SiteConfig;
use crate::theme::Theme;

/// Render the full landing document, doctype included.
pub fn render_document(theme: Theme, config: &SiteConfig) -> String {
    let bot_url = config.bot_url.clone();
    let markup = view! { <layout::Document theme=theme bot_url=bot_url/> }.to_html();
    format!("<!DOCTYPE html>{markup}")
}

#[cfg(test)]
#[path = "mod_test.rs"]
mod tests;
