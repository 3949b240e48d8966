//! Text-to-speech control attached to assistant bubbles.
//!
//! SYSTEM CONTEXT
//! ==============
//! Each bubble owns an `AudioControl`. Activation asks the API for speech,
//! turns the bytes into a blob URL, and swaps the trigger for an inline
//! `<audio>` player. Failures surface as a tooltip and a toast, and the
//! trigger resets itself after `ERROR_RESET_MS`.
//!
//! RESOURCES
//! =========
//! The blob URL is revoked when the bubble unmounts, not when playback ends,
//! so the player can be replayed while it is on screen.

use std::sync::{Arc, Mutex};

use leptos::prelude::*;

use crate::components::toast_stack::show_toast;
use crate::net::api;
use crate::state::audio::{AudioControl, AudioPhase, ERROR_RESET_MS};
use crate::state::toast::ToastState;
use crate::state::ui::UiState;
use crate::util::audio;
use crate::util::task::{sleep_ms, spawn};

/// Speaker button that becomes an audio player once speech arrives.
#[component]
pub fn AudioButton(text: String) -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();
    let toasts = expect_context::<RwSignal<ToastState>>();

    let control = RwSignal::new(AudioControl::default());
    let text = StoredValue::new(text);
    let player_url = Arc::new(Mutex::new(None::<String>));

    let cleanup_url = player_url.clone();
    on_cleanup(move || {
        if let Some(url) = cleanup_url.lock().ok().and_then(|mut slot| slot.take()) {
            audio::revoke(&url);
        }
    });

    let activate = Callback::new(move |()| {
        let Some(attempt) = control.try_update(AudioControl::activate).flatten() else {
            return;
        };
        let voice = ui.with_untracked(|u| u.voice.clone());
        let text = text.get_value();
        let player_url = player_url.clone();

        spawn(async move {
            let result = api::synthesize_speech(&text, &voice)
                .await
                .and_then(|speech| audio::object_url(&speech));
            match result {
                Ok(url) => {
                    let shown = control.try_update(|c| c.succeed(attempt, url.clone())).unwrap_or(false);
                    if !shown {
                        audio::revoke(&url);
                        return;
                    }
                    if let Ok(mut slot) = player_url.lock() {
                        *slot = Some(url);
                    }
                }
                Err(e) => {
                    log::error!("speech synthesis failed: {e}");
                    let message = e.to_string();
                    control.try_update(|c| c.fail(attempt, message.clone()));
                    show_toast(toasts, message);
                    sleep_ms(ERROR_RESET_MS).await;
                    control.try_update(|c| c.reset_after_error(attempt));
                }
            }
        });
    });

    view! {
        <span class="audio-control">
            {move || match control.get().phase {
                AudioPhase::Playing { url } => {
                    view! { <audio class="audio-player" controls=true autoplay=true src=url></audio> }.into_any()
                }
                phase => {
                    let loading = phase == AudioPhase::Loading;
                    let failed = matches!(phase, AudioPhase::Error { .. });
                    view! {
                        <button
                            class="audio-btn"
                            class:audio-btn--loading=loading
                            class:audio-btn--error=failed
                            title=move || control.get().label()
                            aria-label=move || control.get().label()
                            on:click=move |_| activate.run(())
                        >
                            {if loading {
                                view! { <span class="spinner" aria-hidden="true"></span> }.into_any()
                            } else if failed {
                                view! { <span aria-hidden="true">"⚠"</span> }.into_any()
                            } else {
                                view! { <span aria-hidden="true">"🔊"</span> }.into_any()
                            }}
                        </button>
                    }
                        .into_any()
                }
            }}
        </span>
    }
}
