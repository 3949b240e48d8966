use super::*;

#[test]
fn toast_lifecycle_push_fade_remove() {
    let mut state = ToastState::default();
    let a = state.push("Erro 500");
    let b = state.push("Áudio vazio recebido");
    assert_ne!(a, b);

    state.start_fade(a);
    assert!(state.items[0].fading);
    assert!(!state.items[1].fading);

    state.remove(a);
    assert_eq!(state.items.len(), 1);
    assert_eq!(state.items[0].message, "Áudio vazio recebido");
}

#[test]
fn toast_unknown_id_is_ignored() {
    let mut state = ToastState::default();
    state.push("x");
    state.start_fade(99);
    state.remove(99);
    assert_eq!(state.items.len(), 1);
    assert!(!state.items[0].fading);
}
