//! Host configuration parsed from environment variables.
//!
//! `.env` is loaded by `main` before this runs. Leptos reads its own
//! settings from `[package.metadata.leptos]`; `PORT` and `SITE_ROOT` are
//! applied on top so the same build can run behind different hosts.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use std::net::SocketAddr;

use leptos::prelude::LeptosOptions;

pub const DEFAULT_PORT: u16 = 3000;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid PORT '{value}': {reason}")]
    InvalidPort { value: String, reason: String },
    #[error("leptos configuration: {0}")]
    Leptos(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HostConfig {
    pub port: u16,
    pub site_root: Option<String>,
}

impl HostConfig {
    /// Build host config from environment variables.
    ///
    /// Optional:
    /// - `PORT`: listen port, default 3000
    /// - `SITE_ROOT`: directory holding `pkg/`, default from Leptos metadata
    pub fn from_env() -> Result<Self, ConfigError> {
        let port = parse_port(std::env::var("PORT").ok().as_deref())?;
        let site_root = non_blank(std::env::var("SITE_ROOT").ok());
        Ok(Self { port, site_root })
    }

    pub fn addr(&self) -> SocketAddr {
        SocketAddr::from(([0, 0, 0, 0], self.port))
    }

    /// Load Leptos options and apply this config's overrides.
    ///
    /// # Errors
    ///
    /// Returns an error if `[package.metadata.leptos]` is missing or malformed.
    pub fn leptos_options(&self) -> Result<LeptosOptions, ConfigError> {
        let conf = leptos::config::get_configuration(None).map_err(|e| ConfigError::Leptos(e.to_string()))?;
        Ok(self.apply(conf.leptos_options))
    }

    fn apply(&self, mut options: LeptosOptions) -> LeptosOptions {
        options.site_addr = self.addr();
        if let Some(root) = &self.site_root {
            options.site_root = root.as_str().into();
        }
        options
    }
}

fn parse_port(raw: Option<&str>) -> Result<u16, ConfigError> {
    let Some(value) = raw.map(str::trim).filter(|v| !v.is_empty()) else {
        return Ok(DEFAULT_PORT);
    };
    value
        .parse::<u16>()
        .map_err(|e| ConfigError::InvalidPort { value: value.to_owned(), reason: e.to_string() })
}

fn non_blank(raw: Option<String>) -> Option<String> {
    raw.map(|v| v.trim().to_owned()).filter(|v| !v.is_empty())
}
