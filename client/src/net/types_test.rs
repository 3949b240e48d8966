use super::*;
use serde_json::json;

// =============================================================
// ConversationId
// =============================================================

#[test]
fn conversation_id_accepts_integer_and_string() {
    let int: ConversationId = serde_json::from_value(json!(42)).unwrap();
    let text: ConversationId = serde_json::from_value(json!("abc-1")).unwrap();
    assert_eq!(int.as_str(), "42");
    assert_eq!(text.as_str(), "abc-1");
}

#[test]
fn conversation_id_rejects_empty_and_null() {
    assert!(serde_json::from_value::<ConversationId>(json!("")).is_err());
    assert!(serde_json::from_value::<ConversationId>(json!(null)).is_err());
    assert!(serde_json::from_value::<ConversationId>(json!(1.5)).is_err());
}

#[test]
fn conversation_id_serializes_integer_ids_as_numbers() {
    assert_eq!(serde_json::to_value(ConversationId::new("7")).unwrap(), json!(7));
    assert_eq!(serde_json::to_value(ConversationId::new("c-7")).unwrap(), json!("c-7"));
}

// =============================================================
// Conversation
// =============================================================

#[test]
fn conversation_deserializes_list_payload() {
    let list: Vec<Conversation> = serde_json::from_value(json!([
        { "id": 3, "title": "Gastos de março", "created_at": "2025-03-14 10:22:01", "is_deleted": 0 },
        { "id": 1, "title": "Nova Conversa", "created_at": "2025-02-01 08:00:00" }
    ]))
    .unwrap();
    assert_eq!(list.len(), 2);
    assert_eq!(list[0].id, ConversationId::new("3"));
    assert_eq!(list[0].title, "Gastos de março");
    assert_eq!(list[1].display_date(), "01/02/2025");
}

#[test]
fn format_created_date_handles_iso_and_falls_back() {
    assert_eq!(format_created_date("2024-12-31T23:59:59Z"), "31/12/2024");
    assert_eq!(format_created_date("yesterday"), "yesterday");
    assert_eq!(format_created_date("20x4-12-31 00:00"), "20x4-12-31 00:00");
    assert_eq!(format_created_date(""), "");
}

// =============================================================
// Message
// =============================================================

#[test]
fn message_sender_defaults_unknown_to_assistant() {
    let msgs: Vec<Message> = serde_json::from_value(json!([
        { "content": "hi", "sender": "user" },
        { "content": "hello", "sender": "assistant" },
        { "content": "??", "sender": "bot" }
    ]))
    .unwrap();
    assert_eq!(msgs[0].sender, Sender::User);
    assert_eq!(msgs[1].sender, Sender::Assistant);
    assert_eq!(msgs[2].sender, Sender::Assistant);
    assert!(msgs[0].chart_data.is_none());
}

// =============================================================
// ChartDescriptor
// =============================================================

#[test]
fn chart_descriptor_requires_non_empty_object_with_type() {
    assert!(ChartDescriptor::from_value(&json!({})).is_none());
    assert!(ChartDescriptor::from_value(&json!(null)).is_none());
    assert!(ChartDescriptor::from_value(&json!([1, 2])).is_none());
    assert!(ChartDescriptor::from_value(&json!({ "data": {} })).is_none());
    assert!(ChartDescriptor::from_value(&json!({ "type": "  " })).is_none());
}

#[test]
fn chart_descriptor_keeps_data_verbatim() {
    let raw = json!({ "type": "bar", "data": { "labels": ["jan"], "datasets": [{ "data": [10] }] } });
    let chart = ChartDescriptor::from_value(&raw).unwrap();
    assert_eq!(chart.kind, "bar");
    assert_eq!(chart.data, raw["data"]);
    assert!(!chart.is_radial());
}

#[test]
fn chart_descriptor_radial_kinds() {
    for kind in ["pie", "doughnut"] {
        let chart = ChartDescriptor::from_value(&json!({ "type": kind, "data": {} })).unwrap();
        assert!(chart.is_radial(), "{kind} should be radial");
    }
    let line = ChartDescriptor::from_value(&json!({ "type": "line", "data": {} })).unwrap();
    assert!(!line.is_radial());
}

// =============================================================
// Ask request/response
// =============================================================

#[test]
fn ask_request_includes_account_kind_and_null_id() {
    let body = serde_json::to_value(AskRequest::new("Quanto gastei?", None)).unwrap();
    assert_eq!(
        body,
        json!({ "pergunta": "Quanto gastei?", "tipo_conta": "conta-corrente", "conversation_id": null })
    );
}

#[test]
fn ask_request_carries_existing_conversation_id() {
    let body = serde_json::to_value(AskRequest::new("E abril?", Some(ConversationId::new("12")))).unwrap();
    assert_eq!(body["conversation_id"], json!(12));
}

#[test]
fn ask_response_tolerates_missing_fields() {
    let resp: AskResponse = serde_json::from_value(json!({})).unwrap();
    assert_eq!(resp, AskResponse::default());
    assert!(resp.chart().is_none());
}

#[test]
fn ask_response_empty_grafico_has_no_chart() {
    let resp: AskResponse = serde_json::from_value(json!({
        "analise_texto": "Seus gastos caíram.",
        "grafico": {},
        "conversation_id": 9,
        "sql_gerado": "SELECT 1",
        "dados": []
    }))
    .unwrap();
    assert!(resp.chart().is_none());
    assert_eq!(resp.conversation_id, Some(ConversationId::new("9")));
    assert_eq!(resp.sql_gerado.as_deref(), Some("SELECT 1"));
}

#[test]
fn error_body_detail_is_optional() {
    let with: ErrorBody = serde_json::from_value(json!({ "detail": "voz inválida" })).unwrap();
    let without: ErrorBody = serde_json::from_value(json!({ "message": "x" })).unwrap();
    assert_eq!(with.detail.as_deref(), Some("voz inválida"));
    assert!(without.detail.is_none());
}
