//! Landing page sections.
//!
//! ARCHITECTURE
//! ============
//! One component per structural section: header with the theme toggle,
//! hero, feature grid, step-by-step guide, use-case grid, call-to-action,
//! footer. The outbound bot link appears exactly twice, in the hero and in
//! the final call-to-action.

use leptos::prelude::*;

use crate::theme::Theme;

#[component]
pub fn LandingPage(theme: Theme, bot_url: String) -> impl IntoView {
    view! {
        <div class="page">
            <SiteHeader theme=theme/>
            <main>
                <Hero bot_url=bot_url.clone()/>
                <FeatureGrid/>
                <HowItWorks/>
                <UseCases/>
                <CallToAction bot_url=bot_url/>
            </main>
            <SiteFooter/>
        </div>
    }
}

/// Brand row plus the one actionable control on the page.
#[component]
pub fn SiteHeader(theme: Theme) -> impl IntoView {
    view! {
        <header class="site-header">
            <div class="site-header__brand">
                <span class="site-header__mark">"VV"</span>
                <span class="site-header__name">"VidyaVriksh"</span>
            </div>
            <form class="theme-toggle" method="post" action="/theme/toggle">
                <button class="theme-toggle__button" type="submit" aria-label="Toggle theme">
                    {theme.toggle_label()}
                </button>
            </form>
        </header>
    }
}

#[component]
pub fn Hero(bot_url: String) -> impl IntoView {
    view! {
        <section class="hero">
            <h1 class="hero__title">"Grow your knowledge, one chat at a time"</h1>
            <p class="hero__subtitle">
                "VidyaVriksh delivers curated courses, organized notes, and exam-ready study \
                 material straight to your Telegram chat. No new app to install, no account to \
                 create, nothing to configure."
            </p>
            <a class="hero__cta" href=bot_url>"Start learning on Telegram"</a>
            <p class="hero__hint">"Free to start. Works on any device that runs Telegram."</p>
        </section>
    }
}

#[component]
pub fn FeatureGrid() -> impl IntoView {
    view! {
        <section class="features">
            <h2 class="section-title">"Why learners pick VidyaVriksh"</h2>
            <div class="features__grid">
                <article class="feature-card">
                    <h3>"Curated courses"</h3>
                    <p>"Hand-picked material for every topic, reviewed and kept current so you never study from stale notes."</p>
                </article>
                <article class="feature-card">
                    <h3>"Instant delivery"</h3>
                    <p>"Ask for a course and the files arrive in seconds, right in the chat you already have open."</p>
                </article>
                <article class="feature-card">
                    <h3>"Organized batches"</h3>
                    <p>"Related lessons travel together, in order, so a single link gives you the whole series."</p>
                </article>
                <article class="feature-card">
                    <h3>"Any device"</h3>
                    <p>"Phone, tablet, desktop, or browser: wherever Telegram runs, your library follows."</p>
                </article>
                <article class="feature-card">
                    <h3>"Zero friction"</h3>
                    <p>"No sign-ups, no passwords, no installs. Your Telegram account is all you need."</p>
                </article>
                <article class="feature-card">
                    <h3>"Always on"</h3>
                    <p>"The bot answers at 3 in the afternoon and 3 in the morning alike. Study on your schedule."</p>
                </article>
            </div>
        </section>
    }
}

#[component]
pub fn HowItWorks() -> impl IntoView {
    view! {
        <section class="how-it-works">
            <h2 class="section-title">"How it works"</h2>
            <ol class="how-it-works__steps">
                <li class="step">
                    <span class="step__number">"1"</span>
                    <p>"Open Telegram and tap the VidyaVriksh link."</p>
                </li>
                <li class="step">
                    <span class="step__number">"2"</span>
                    <p>"Press Start to wake the bot up."</p>
                </li>
                <li class="step">
                    <span class="step__number">"3"</span>
                    <p>"Browse the catalog or paste a course link you were given."</p>
                </li>
                <li class="step">
                    <span class="step__number">"4"</span>
                    <p>"Receive the material and start learning."</p>
                </li>
            </ol>
        </section>
    }
}

#[component]
pub fn UseCases() -> impl IntoView {
    view! {
        <section class="use-cases">
            <h2 class="section-title">"Made for every kind of learner"</h2>
            <div class="use-cases__grid">
                <article class="use-case">
                    <h3>"Exam preparation"</h3>
                    <p>"Past papers, solved examples, and revision notes bundled by subject."</p>
                </article>
                <article class="use-case">
                    <h3>"Skill building"</h3>
                    <p>"Bite-sized lessons for picking up a new language, tool, or craft."</p>
                </article>
                <article class="use-case">
                    <h3>"Classrooms"</h3>
                    <p>"Teachers share one link and every student gets the same complete packet."</p>
                </article>
                <article class="use-case">
                    <h3>"Self-paced study"</h3>
                    <p>"Material waits in your chat history, so you pick it up whenever you have time."</p>
                </article>
            </div>
        </section>
    }
}

#[component]
pub fn CallToAction(bot_url: String) -> impl IntoView {
    view! {
        <section class="cta">
            <h2 class="cta__title">"Your next course is one message away"</h2>
            <p class="cta__subtitle">"Join the learners already growing with VidyaVriksh."</p>
            <a class="cta__button" href=bot_url>"Open the bot"</a>
        </section>
    }
}

#[component]
pub fn SiteFooter() -> impl IntoView {
    view! {
        <footer class="site-footer">
            <p class="site-footer__name">"VidyaVriksh"</p>
            <p class="site-footer__note">"An educational content bot for Telegram."</p>
        </footer>
    }
}
