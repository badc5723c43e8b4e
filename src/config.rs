//! Site configuration parsed from environment variables.
//!
//! DESIGN
//! ======
//! All knobs are optional with sensible defaults so `cargo run` works with
//! no environment at all. Parsing is split into pure helpers that take the
//! raw value, keeping the env lookups at the edge.

use std::path::PathBuf;

pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_BIND_ADDR: &str = "0.0.0.0";
pub const DEFAULT_BOT_URL: &str = "https://t.me/vidyavrikshbot";

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid PORT: {0}")]
    InvalidPort(String),
}

/// Typed site configuration.
///
/// Optional env vars:
/// - `PORT`: listen port, default 3000
/// - `BIND_ADDR`: listen address, default `0.0.0.0`
/// - `ASSETS_DIR`: stylesheet/image directory, default `<crate>/assets`
/// - `BOT_URL`: outbound Telegram bot link, default the VidyaVriksh bot
/// - `COOKIE_SECURE`: mark the theme cookie `Secure` (`1/true/yes/on`)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SiteConfig {
    pub bind_addr: String,
    pub port: u16,
    pub assets_dir: PathBuf,
    pub bot_url: String,
    pub cookie_secure: bool,
}

impl SiteConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            bind_addr: std::env::var("BIND_ADDR").unwrap_or_else(|_| DEFAULT_BIND_ADDR.to_string()),
            port: parse_port(std::env::var("PORT").ok().as_deref())?,
            assets_dir: std::env::var("ASSETS_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|_| default_assets_dir()),
            bot_url: std::env::var("BOT_URL").unwrap_or_else(|_| DEFAULT_BOT_URL.to_string()),
            cookie_secure: env_bool("COOKIE_SECURE").unwrap_or(false),
        })
    }
}

/// Resolve the default path to the bundled assets directory.
fn default_assets_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("assets")
}

fn parse_port(raw: Option<&str>) -> Result<u16, ConfigError> {
    match raw {
        None => Ok(DEFAULT_PORT),
        Some(raw) => raw.trim().parse().map_err(|_| ConfigError::InvalidPort(raw.to_string())),
    }
}

pub(crate) fn env_bool(key: &str) -> Option<bool> {
    std::env::var(key).ok().and_then(|raw| parse_bool(&raw))
}

fn parse_bool(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
