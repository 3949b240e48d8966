//! Transient error toasts pinned to the bottom of the page.

use leptos::prelude::*;

use crate::state::toast::{TOAST_FADE_MS, TOAST_VISIBLE_MS, ToastState};
use crate::util::task::{sleep_ms, spawn};

/// Show `message` as a toast that fades out and is removed on its own.
pub fn show_toast(toasts: RwSignal<ToastState>, message: impl Into<String>) {
    let message = message.into();
    let Some(id) = toasts.try_update(|t| t.push(message)) else {
        return;
    };
    spawn(async move {
        sleep_ms(TOAST_VISIBLE_MS).await;
        toasts.try_update(|t| t.start_fade(id));
        sleep_ms(TOAST_FADE_MS).await;
        toasts.try_update(|t| t.remove(id));
    });
}

#[component]
pub fn ToastStack() -> impl IntoView {
    let toasts = expect_context::<RwSignal<ToastState>>();

    view! {
        <div class="toast-stack" aria-live="polite">
            <For each=move || toasts.get().items key=|toast| toast.id let:toast>
                {
                    let id = toast.id;
                    view! {
                        <div
                            class="toast"
                            class:toast--fading=move || {
                                toasts.with(|t| t.items.iter().any(|item| item.id == id && item.fading))
                            }
                        >
                            {format!("❌ {}", toast.message)}
                        </div>
                    }
                }
            </For>
        </div>
    }
}
