//! Chat page: conversation sidebar, transcript, and composer.
//!
//! SYSTEM CONTEXT
//! ==============
//! This is the only route. It wires component callbacks to the API and runs
//! every flow as `begin_*` (sync, in `state::chat`) -> request -> `finish_*`.
//!
//! CONCURRENCY
//! ===========
//! List refreshes and history loads are ticketed, and the superseded request
//! is aborted when a newer one starts. Sends are never cancelled; their
//! replies are dropped if the transcript was replaced in the meantime.

use leptos::prelude::*;

use crate::components::chart_modal::ChartModal;
use crate::components::chat_header::ChatHeader;
use crate::components::composer::Composer;
use crate::components::conversation_list::ConversationList;
use crate::components::toast_stack::ToastStack;
use crate::components::transcript::Transcript;
use crate::net::api;
use crate::net::request::InFlight;
use crate::net::types::ConversationId;
use crate::state::chat::{self, DELETE_CONFIRM_TEXT, DELETE_ERROR_TEXT, DeleteOutcome, RENAME_ERROR_TEXT, RENAME_PROMPT_TEXT};
use crate::state::conversations::ConversationsState;
use crate::state::session::SessionState;
use crate::state::transcript::TranscriptState;
use crate::util::dialog;
use crate::util::task::spawn;

/// Signals and request slots shared by the page's flows.
#[derive(Clone, Copy)]
struct ChatHandles {
    session: RwSignal<SessionState>,
    conversations: RwSignal<ConversationsState>,
    transcript: RwSignal<TranscriptState>,
    list_fetch: StoredValue<InFlight, LocalStorage>,
    history_fetch: StoredValue<InFlight, LocalStorage>,
}

impl ChatHandles {
    /// Run `f` with both the session and the transcript borrowed mutably.
    fn with_chat<R>(self, f: impl FnOnce(&mut SessionState, &mut TranscriptState) -> R) -> Option<R> {
        self.session
            .try_update(|session| self.transcript.try_update(|transcript| f(session, transcript)))
            .flatten()
    }
}

#[component]
pub fn ChatPage() -> impl IntoView {
    let h = ChatHandles {
        session: expect_context::<RwSignal<SessionState>>(),
        conversations: expect_context::<RwSignal<ConversationsState>>(),
        transcript: expect_context::<RwSignal<TranscriptState>>(),
        list_fetch: StoredValue::new_local(InFlight::default()),
        history_fetch: StoredValue::new_local(InFlight::default()),
    };

    Effect::new(move || refresh_conversations(h));
    on_cleanup(move || {
        h.list_fetch.try_update_value(InFlight::cancel);
        h.history_fetch.try_update_value(InFlight::cancel);
    });

    let on_open = Callback::new(move |id: ConversationId| open_conversation(h, id));
    let on_rename = Callback::new(move |id: ConversationId| rename_conversation(h, id));
    let on_delete = Callback::new(move |id: ConversationId| delete_conversation(h, id));
    let on_new_chat = Callback::new(move |()| new_chat(h));
    let on_send = Callback::new(move |text: String| send_message(h, &text));

    view! {
        <div class="app">
            <ConversationList on_open=on_open on_rename=on_rename on_delete=on_delete on_new_chat=on_new_chat />
            <main class="chat">
                <ChatHeader />
                <Transcript />
                <Composer on_send=on_send />
            </main>
            <ChartModal />
            <ToastStack />
        </div>
    }
}

/// Re-fetch the sidebar. Only the most recently issued refresh is applied.
fn refresh_conversations(h: ChatHandles) {
    let Some(ticket) = h.conversations.try_update(ConversationsState::begin_refresh) else {
        return;
    };
    let Some(abort) = h.list_fetch.try_update_value(InFlight::replace) else {
        return;
    };
    spawn(async move {
        let result = api::fetch_conversations(Some(abort.as_ref())).await;
        h.conversations.try_update(|c| c.finish_refresh(ticket, result));
    });
}

fn open_conversation(h: ChatHandles, id: ConversationId) {
    let Some(ticket) = h.with_chat(|s, t| chat::begin_open_conversation(s, t, id.clone())) else {
        return;
    };
    let Some(abort) = h.history_fetch.try_update_value(InFlight::replace) else {
        return;
    };
    spawn(async move {
        let result = api::fetch_messages(&id, Some(abort.as_ref())).await;
        h.with_chat(|s, t| chat::finish_open_conversation(s, t, ticket, result));
    });
    refresh_conversations(h);
}

fn new_chat(h: ChatHandles) {
    h.history_fetch.update_value(InFlight::cancel);
    h.with_chat(chat::start_new_chat);
    refresh_conversations(h);
}

fn send_message(h: ChatHandles, input: &str) {
    let Some(pending) = h
        .session
        .with_untracked(|s| h.transcript.try_update(|t| chat::begin_send(s, t, input)))
        .flatten()
    else {
        return;
    };
    spawn(async move {
        let result = api::ask(&pending.request).await;
        let outcome = h
            .with_chat(|s, t| chat::finish_send(s, t, &pending, result))
            .unwrap_or_default();
        if outcome.refresh_conversations {
            refresh_conversations(h);
        }
    });
}

fn rename_conversation(h: ChatHandles, id: ConversationId) {
    let current = h
        .conversations
        .with_untracked(|c| c.title_of(&id).unwrap_or_default().to_owned());
    let proposed = dialog::prompt(RENAME_PROMPT_TEXT, &current);
    let Some(title) = chat::rename_target(&current, proposed.as_deref()) else {
        return;
    };
    spawn(async move {
        match api::rename_conversation(&id, &title).await {
            Ok(()) => refresh_conversations(h),
            Err(e) => {
                log::error!("rename failed: id={id} error={e}");
                dialog::alert(RENAME_ERROR_TEXT);
            }
        }
    });
}

fn delete_conversation(h: ChatHandles, id: ConversationId) {
    if !dialog::confirm(DELETE_CONFIRM_TEXT) {
        return;
    }
    spawn(async move {
        match api::delete_conversation(&id).await {
            Ok(()) => {
                let outcome = h.with_chat(|s, t| chat::finish_delete(s, t, &id));
                if outcome == Some(DeleteOutcome::ResetToNewChat) {
                    h.history_fetch.try_update_value(InFlight::cancel);
                }
                refresh_conversations(h);
            }
            Err(e) => {
                log::error!("delete failed: id={id} error={e}");
                dialog::alert(DELETE_ERROR_TEXT);
            }
        }
    });
}
