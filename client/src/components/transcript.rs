//! Chat transcript: message bubbles, chart bubbles, and the pending marker.

use leptos::prelude::*;

use crate::components::audio_button::AudioButton;
use crate::components::chart_bubble::ChartBubble;
use crate::net::types::Sender;
use crate::state::transcript::{Entry, EntryKind, PENDING_TEXT, TranscriptState};

/// Scrollable transcript. Entries are keyed by id so per-bubble state (the
/// audio control) survives later appends.
#[component]
pub fn Transcript() -> impl IntoView {
    let transcript = expect_context::<RwSignal<TranscriptState>>();
    let list_ref = NodeRef::<leptos::html::Div>::new();

    Effect::new(move || {
        let _ = transcript.with(|t| t.entries.len());

        #[cfg(feature = "hydrate")]
        {
            if let Some(el) = list_ref.get() {
                el.set_scroll_top(el.scroll_height());
            }
        }
    });

    view! {
        <div class="chat-box" node_ref=list_ref>
            <For each=move || transcript.get().entries key=|entry| entry.id let:entry>
                <TranscriptEntry entry=entry />
            </For>
        </div>
    }
}

#[component]
fn TranscriptEntry(entry: Entry) -> impl IntoView {
    let has_audio = entry.has_audio();
    match entry.kind {
        EntryKind::Message { sender, text } => {
            let is_user = sender == Sender::User;
            let audio = has_audio.then(|| view! { <AudioButton text=text.clone() /> });
            view! {
                <div class="message" class:message--user=is_user class:message--bot=!is_user>
                    <span class="message__text">{text}</span>
                    {audio}
                </div>
            }
                .into_any()
        }
        EntryKind::Chart(chart) => view! { <ChartBubble chart=chart /> }.into_any(),
        EntryKind::Pending => {
            view! { <div class="message message--bot message--pending">{PENDING_TEXT}</div> }.into_any()
        }
    }
}
