//! Document shell: root element, head, and body wrapper.

use leptos::prelude::*;

use crate::theme::Theme;
use crate::view::landing;

/// The `<html>` document. The theme class on the root element is the only
/// place the theme touches the markup structure.
#[component]
pub fn Document(theme: Theme, bot_url: String) -> impl IntoView {
    view! {
        <html lang="en" class={theme.html_class()}>
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <title>"VidyaVriksh: learn anything on Telegram"</title>
                <meta
                    name="description"
                    content="VidyaVriksh delivers curated courses, notes, and study material straight to your Telegram chat."
                />
                <link rel="preconnect" href="https://fonts.googleapis.com"/>
                <link
                    rel="stylesheet"
                    href="https://fonts.googleapis.com/css2?family=Inter:wght@400;600;800&display=swap"
                />
                <link rel="stylesheet" href="/assets/style.css"/>
            </head>
            <body>
                <landing::LandingPage theme=theme bot_url=bot_url/>
            </body>
        </html>
    }
}
