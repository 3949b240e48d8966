//! Page-lifetime session state for the chat controller.
//!
//! DESIGN
//! ======
//! Everything the controller used to keep in ambient globals (active
//! conversation, last rendered chart, theme) lives in one struct provided via
//! context, so transitions in `state::chat` can be exercised without a DOM.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use crate::net::types::{ChartDescriptor, ConversationId};

/// Colour scheme for the page and for newly rendered charts.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    /// Value persisted in browser storage.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    /// Parse a stored preference; anything but `"dark"` means light.
    pub fn from_stored(raw: Option<&str>) -> Self {
        match raw.map(str::trim) {
            Some("dark") => Self::Dark,
            _ => Self::Light,
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    pub fn is_dark(self) -> bool {
        self == Self::Dark
    }
}

/// UI session state: which conversation is open, the chart the full-screen
/// modal shows, and the active theme.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SessionState {
    /// Server id of the open conversation; `None` for a fresh chat that has
    /// not been answered yet.
    pub current_conversation_id: Option<ConversationId>,
    /// Most recently rendered or clicked chart.
    pub current_chart: Option<ChartDescriptor>,
    pub theme: Theme,
}

impl SessionState {
    pub fn with_theme(theme: Theme) -> Self {
        Self { theme, ..Self::default() }
    }

    /// Whether `id` is the conversation currently open.
    pub fn is_active(&self, id: &ConversationId) -> bool {
        self.current_conversation_id.as_ref() == Some(id)
    }
}
