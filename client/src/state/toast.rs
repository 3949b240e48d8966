//! Transient error toasts.

#[cfg(test)]
#[path = "toast_test.rs"]
mod toast_test;

/// Time a toast stays fully visible before fading.
pub const TOAST_VISIBLE_MS: u32 = 3_000;
/// Fade-out duration before removal.
pub const TOAST_FADE_MS: u32 = 300;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Toast {
    pub id: u64,
    pub message: String,
    pub fading: bool,
}

/// Stack of toasts shown in the corner of the page.
#[derive(Clone, Debug, Default)]
pub struct ToastState {
    pub items: Vec<Toast>,
    next_id: u64,
}

impl ToastState {
    pub fn push(&mut self, message: impl Into<String>) -> u64 {
        self.next_id += 1;
        let id = self.next_id;
        self.items.push(Toast { id, message: message.into(), fading: false });
        id
    }

    pub fn start_fade(&mut self, id: u64) {
        if let Some(toast) = self.items.iter_mut().find(|t| t.id == id) {
            toast.fading = true;
        }
    }

    pub fn remove(&mut self, id: u64) {
        self.items.retain(|t| t.id != id);
    }
}
