use super::*;

// =============================================================
// Theme
// =============================================================

#[test]
fn theme_default_is_light() {
    assert_eq!(Theme::default(), Theme::Light);
    assert!(!Theme::default().is_dark());
}

#[test]
fn theme_from_stored_only_dark_is_dark() {
    assert_eq!(Theme::from_stored(Some("dark")), Theme::Dark);
    assert_eq!(Theme::from_stored(Some(" dark ")), Theme::Dark);
    assert_eq!(Theme::from_stored(Some("light")), Theme::Light);
    assert_eq!(Theme::from_stored(Some("purple")), Theme::Light);
    assert_eq!(Theme::from_stored(None), Theme::Light);
}

#[test]
fn theme_stored_value_round_trips() {
    for theme in [Theme::Light, Theme::Dark] {
        assert_eq!(Theme::from_stored(Some(theme.as_str())), theme);
    }
}

#[test]
fn theme_toggled_flips() {
    assert_eq!(Theme::Light.toggled(), Theme::Dark);
    assert_eq!(Theme::Dark.toggled(), Theme::Light);
}

// =============================================================
// SessionState
// =============================================================

#[test]
fn session_default_has_no_conversation_or_chart() {
    let session = SessionState::default();
    assert!(session.current_conversation_id.is_none());
    assert!(session.current_chart.is_none());
    assert_eq!(session.theme, Theme::Light);
}

#[test]
fn session_is_active_matches_current_id() {
    let mut session = SessionState::with_theme(Theme::Dark);
    let id = ConversationId::new("4");
    assert!(!session.is_active(&id));
    session.current_conversation_id = Some(id.clone());
    assert!(session.is_active(&id));
    assert!(!session.is_active(&ConversationId::new("5")));
}
