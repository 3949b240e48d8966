use super::*;
use serde_json::json;

fn message(content: &str, sender: Sender, chart: Option<serde_json::Value>) -> Message {
    Message { content: content.to_owned(), sender, chart_data: chart }
}

fn texts(state: &TranscriptState) -> Vec<String> {
    state
        .entries
        .iter()
        .map(|e| match &e.kind {
            EntryKind::Message { text, .. } => text.clone(),
            EntryKind::Chart(chart) => format!("chart:{}", chart.kind),
            EntryKind::Pending => "pending".to_owned(),
        })
        .collect()
}

// =============================================================
// Basics
// =============================================================

#[test]
fn transcript_default_is_empty() {
    let state = TranscriptState::default();
    assert!(state.entries.is_empty());
    assert_eq!(state.generation(), 0);
    assert!(!state.is_pending());
}

#[test]
fn entry_ids_are_unique_and_increasing() {
    let mut state = TranscriptState::default();
    let a = state.push_message(Sender::User, "a");
    let b = state.push_pending();
    let c = state.push_message(Sender::Assistant, "c");
    assert!(a < b && b < c);
}

#[test]
fn reset_to_greeting_shows_single_assistant_bubble() {
    let mut state = TranscriptState::default();
    state.push_message(Sender::User, "old");
    state.reset_to_greeting();
    assert_eq!(texts(&state), vec![GREETING.to_owned()]);
    assert!(state.entries[0].has_audio());
    assert_eq!(state.generation(), 1);
}

#[test]
fn remove_placeholder_reports_presence() {
    let mut state = TranscriptState::default();
    let pending = state.push_pending();
    assert!(state.is_pending());
    assert!(state.remove(pending));
    assert!(!state.remove(pending));
    assert!(!state.is_pending());
}

#[test]
fn only_assistant_messages_have_audio() {
    let mut state = TranscriptState::default();
    state.push_message(Sender::User, "q");
    state.push_pending();
    state.push_message(Sender::Assistant, "a");
    let audio: Vec<bool> = state.entries.iter().map(Entry::has_audio).collect();
    assert_eq!(audio, vec![false, false, true]);
}

// =============================================================
// Charts
// =============================================================

#[test]
fn empty_chart_payloads_never_render() {
    let mut state = TranscriptState::default();
    assert!(state.push_chart_value(None).is_none());
    assert!(state.push_chart_value(Some(&json!({}))).is_none());
    assert!(state.push_chart_value(Some(&json!(null))).is_none());
    assert!(state.entries.is_empty());
}

#[test]
fn chart_payload_renders_bubble() {
    let mut state = TranscriptState::default();
    let chart = state.push_chart_value(Some(&json!({ "type": "line", "data": { "labels": [] } })));
    assert_eq!(chart.map(|c| c.kind), Some("line".to_owned()));
    assert_eq!(texts(&state), vec!["chart:line".to_owned()]);
}

// =============================================================
// History
// =============================================================

#[test]
fn empty_history_shows_greeting() {
    let mut state = TranscriptState::default();
    let _ = state.begin_history_load();
    assert!(state.show_history(&[]).is_none());
    assert_eq!(texts(&state), vec![GREETING.to_owned()]);
}

#[test]
fn history_renders_in_order_with_inline_chart() {
    let mut state = TranscriptState::default();
    let messages = vec![
        message("hi", Sender::User, None),
        message("hello", Sender::Assistant, Some(json!({ "type": "bar", "data": { "labels": ["jan"] } }))),
    ];
    let last = state.show_history(&messages);

    assert_eq!(texts(&state), vec!["hi".to_owned(), "hello".to_owned(), "chart:bar".to_owned()]);
    assert!(!state.entries[0].has_audio());
    assert!(state.entries[1].has_audio());
    assert_eq!(last.map(|c| c.kind), Some("bar".to_owned()));
}

#[test]
fn history_skips_empty_chart_data() {
    let mut state = TranscriptState::default();
    let messages = vec![message("sem gráfico", Sender::Assistant, Some(json!({})))];
    assert!(state.show_history(&messages).is_none());
    assert_eq!(state.entries.len(), 1);
}

#[test]
fn history_ticket_superseded_by_newer_load() {
    let mut state = TranscriptState::default();
    let first = state.begin_history_load();
    let second = state.begin_history_load();
    assert!(!state.accepts_history(first));
    assert!(state.accepts_history(second));
    assert_eq!(state.generation(), 2);
}

#[test]
fn reset_rejects_pending_history_load() {
    let mut state = TranscriptState::default();
    let ticket = state.begin_history_load();
    state.reset_to_greeting();
    assert!(!state.accepts_history(ticket));
}
