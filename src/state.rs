//! Shared application state.
//!
//! DESIGN
//! ======
//! `AppState` is injected into Axum handlers via the `State` extractor.
//! It holds only the immutable site configuration: the single piece of
//! mutable presentation state (the theme flag) lives in each client's
//! cookie, so requests share nothing and need no locking.

use std::sync::Arc;

use crate::config::SiteConfig;

/// Shared application state, injected into Axum handlers via State extractor.
/// Clone is required by Axum; the config is Arc-wrapped.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<SiteConfig>,
}

impl AppState {
    #[must_use]
    pub fn new(config: SiteConfig) -> Self {
        Self { config: Arc::new(config) }
    }
}
