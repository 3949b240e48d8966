//! Client configuration: where the analysis API lives.
//!
//! The base URL is baked in at build time from `ANALYST_API_URL` and can be
//! overridden per browser by setting the `analyst_api_url` localStorage key.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

/// Fallback when `ANALYST_API_URL` is not set at build time.
pub const DEFAULT_API_URL: &str = "http://localhost:8000";

/// localStorage key holding a per-browser base URL override.
pub const API_URL_STORAGE_KEY: &str = "analyst_api_url";

/// Base URL of the analysis API, without a trailing slash.
pub fn api_base_url() -> String {
    resolve_base_url(stored_override().as_deref(), option_env!("ANALYST_API_URL"))
}

fn resolve_base_url(stored: Option<&str>, build_time: Option<&str>) -> String {
    [stored, build_time]
        .into_iter()
        .flatten()
        .map(str::trim)
        .find(|url| !url.is_empty())
        .unwrap_or(DEFAULT_API_URL)
        .trim_end_matches('/')
        .to_owned()
}

fn stored_override() -> Option<String> {
    #[cfg(feature = "hydrate")]
    {
        let storage = web_sys::window().and_then(|w| w.local_storage().ok().flatten())?;
        storage.get_item(API_URL_STORAGE_KEY).ok().flatten()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        None
    }
}
