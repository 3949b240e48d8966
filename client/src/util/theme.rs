//! Theme initialization and toggle.
//!
//! Reads the stored preference from `localStorage` and toggles the
//! `dark-mode` class on `<body>`. Toggle writes back to `localStorage`.
//! Requires a browser environment.
//!
//! TRADE-OFFS
//! ==========
//! Preference persistence is best-effort browser-only behavior; SSR paths
//! safely no-op to keep server rendering deterministic. Charts are not told
//! about changes: they read the theme when they are created.

#[cfg(test)]
#[path = "theme_test.rs"]
mod theme_test;

use crate::state::session::Theme;

/// localStorage key holding `"light"` or `"dark"`.
pub const STORAGE_KEY: &str = "theme";

/// CSS class on `<body>` that switches the page to the dark palette.
pub const DARK_CLASS: &str = "dark-mode";

/// Read the stored theme; light when nothing (or garbage) is stored.
pub fn read_preference() -> Theme {
    #[cfg(feature = "hydrate")]
    {
        let stored = web_sys::window()
            .and_then(|w| w.local_storage().ok().flatten())
            .and_then(|s| s.get_item(STORAGE_KEY).ok().flatten());
        Theme::from_stored(stored.as_deref())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Theme::Light
    }
}

/// Apply `theme` to `<body>`.
pub fn apply(theme: Theme) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(body) = web_sys::window().and_then(|w| w.document()).and_then(|d| d.body()) {
            let _ = body.class_list().toggle_with_force(DARK_CLASS, theme.is_dark());
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = theme;
    }
}

/// Apply `theme` and persist it.
pub fn set(theme: Theme) {
    apply(theme);
    #[cfg(feature = "hydrate")]
    {
        if let Some(storage) = web_sys::window().and_then(|w| w.local_storage().ok().flatten()) {
            let _ = storage.set_item(STORAGE_KEY, theme.as_str());
        }
    }
}

/// Flip the theme, persist the new preference, and return it.
pub fn toggle(current: Theme) -> Theme {
    let next = current.toggled();
    set(next);
    next
}
