use super::*;
use serde_json::json;

// =============================================================
// UiState defaults
// =============================================================

#[test]
fn ui_state_default_modal_closed() {
    let state = UiState::default();
    assert!(!state.chart_modal_open);
}

#[test]
fn ui_state_default_voice() {
    assert_eq!(UiState::default().voice, DEFAULT_VOICE);
}

// =============================================================
// Chart modal
// =============================================================

#[test]
fn open_chart_modal_sets_current_chart() {
    let mut ui = UiState::default();
    let mut session = SessionState::default();
    let chart = ChartDescriptor::from_value(&json!({ "type": "doughnut", "data": {} })).unwrap();

    ui.open_chart_modal(&mut session, chart.clone());
    assert!(ui.chart_modal_open);
    assert_eq!(session.current_chart, Some(chart));

    ui.close_chart_modal();
    assert!(!ui.chart_modal_open);
    assert!(session.current_chart.is_some());
}

#[test]
fn reopen_without_chart_is_noop() {
    let mut ui = UiState::default();
    let session = SessionState::default();
    assert!(!ui.reopen_chart_modal(&session));
    assert!(!ui.chart_modal_open);
}
