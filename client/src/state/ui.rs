//! Local UI chrome state (chart modal, voice picker).
//!
//! DESIGN
//! ======
//! Keeps transient presentation concerns out of `session` so controls can
//! evolve independently of conversation data.

#[cfg(test)]
#[path = "ui_test.rs"]
mod ui_test;

use crate::net::types::ChartDescriptor;
use crate::state::audio::DEFAULT_VOICE;
use crate::state::session::SessionState;

/// UI state for the full-screen chart modal and the speech voice.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UiState {
    pub chart_modal_open: bool,
    pub voice: String,
}

impl Default for UiState {
    fn default() -> Self {
        Self { chart_modal_open: false, voice: DEFAULT_VOICE.to_owned() }
    }
}

impl UiState {
    /// Show `chart` full-screen; it becomes the session's current chart.
    pub fn open_chart_modal(&mut self, session: &mut SessionState, chart: ChartDescriptor) {
        session.current_chart = Some(chart);
        self.chart_modal_open = true;
    }

    /// Re-open the modal on the session's current chart. No-op without one.
    pub fn reopen_chart_modal(&mut self, session: &SessionState) -> bool {
        if session.current_chart.is_none() {
            return false;
        }
        self.chart_modal_open = true;
        true
    }

    pub fn close_chart_modal(&mut self) {
        self.chart_modal_open = false;
    }
}
