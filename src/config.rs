//! Host configuration from environment variables.
//!
//! DESIGN
//! ======
//! Every setting has a default so `cargo leptos watch` works with no `.env`.
//! Malformed values fall back to the default rather than aborting startup.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use std::path::PathBuf;

pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_AUDIO_DIR: &str = "public/audio";

#[derive(Debug, thiserror::Error)]
pub enum HostError {
    #[error("leptos configuration: {0}")]
    Leptos(String),
    #[error("failed to bind: {0}")]
    Bind(#[source] std::io::Error),
    #[error("server failed: {0}")]
    Serve(#[source] std::io::Error),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HostConfig {
    pub port: u16,
    /// Overrides the Leptos `site-root` (where `/pkg` is served from).
    pub site_root: Option<PathBuf>,
    /// Directory served at `/audio` (bundled background music).
    pub audio_dir: PathBuf,
}

impl HostConfig {
    #[must_use]
    pub fn from_env() -> Self {
        Self {
            port: env_parse("PORT", DEFAULT_PORT),
            site_root: env_path("SITE_ROOT"),
            audio_dir: env_path("AUDIO_DIR").unwrap_or_else(|| PathBuf::from(DEFAULT_AUDIO_DIR)),
        }
    }
}

pub(crate) fn env_parse<T>(key: &str, default: T) -> T
where
    T: std::str::FromStr + Copy,
{
    std::env::var(key)
        .ok()
        .and_then(|v| v.parse::<T>().ok())
        .unwrap_or(default)
}

fn env_path(key: &str) -> Option<PathBuf> {
    std::env::var(key)
        .ok()
        .filter(|v| !v.trim().is_empty())
        .map(PathBuf::from)
}
