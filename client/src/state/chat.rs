//! Chat controller transitions.
//!
//! SYSTEM CONTEXT
//! ==============
//! Page handlers split every user action into a synchronous `begin_*` step,
//! an API call, and a synchronous `finish_*` step. Both steps live here and
//! only touch `SessionState`/`TranscriptState`, so the whole flow
//! (optimistic append, placeholder, id adoption, error fallback) is testable
//! without a browser.

#[cfg(test)]
#[path = "chat_test.rs"]
mod chat_test;

use crate::net::error::ApiError;
use crate::net::request::Ticket;
use crate::net::types::{AskRequest, AskResponse, ConversationId, Message, Sender};
use crate::state::session::SessionState;
use crate::state::transcript::{EntryId, HISTORY_ERROR_TEXT, NO_REPLY_TEXT, SEND_ERROR_TEXT, TranscriptState};

/// A question that has been appended and is waiting for the API.
#[derive(Clone, Debug, PartialEq)]
pub struct PendingSend {
    pub request: AskRequest,
    pub placeholder: EntryId,
    generation: u64,
}

/// What the caller must do after a send completes.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SendOutcome {
    /// The reply landed in the transcript.
    pub applied: bool,
    /// The sidebar must be re-fetched (a conversation was just created).
    pub refresh_conversations: bool,
}

/// Append the user's question and the placeholder.
///
/// Returns `None` for blank input; then nothing is appended and no request
/// must be issued.
pub fn begin_send(session: &SessionState, transcript: &mut TranscriptState, input: &str) -> Option<PendingSend> {
    let question = input.trim();
    if question.is_empty() {
        return None;
    }
    transcript.push_message(Sender::User, question);
    let placeholder = transcript.push_pending();
    Some(PendingSend {
        request: AskRequest::new(question, session.current_conversation_id.clone()),
        placeholder,
        generation: transcript.generation(),
    })
}

/// Apply the API result of a send.
///
/// If the transcript was cleared while the request was in flight (the user
/// opened another conversation), the reply is dropped; the sidebar is still
/// refreshed when the server created a conversation for it.
pub fn finish_send(
    session: &mut SessionState,
    transcript: &mut TranscriptState,
    pending: &PendingSend,
    result: Result<AskResponse, ApiError>,
) -> SendOutcome {
    if transcript.generation() != pending.generation {
        let created = pending.request.conversation_id.is_none()
            && result.as_ref().is_ok_and(|resp| resp.conversation_id.is_some());
        log::debug!("dropping reply for a transcript that is no longer shown");
        return SendOutcome { applied: false, refresh_conversations: created };
    }

    transcript.remove(pending.placeholder);

    let resp = match result {
        Ok(resp) => resp,
        Err(e) => {
            log::error!("analysis request failed: {e}");
            transcript.push_message(Sender::Assistant, SEND_ERROR_TEXT);
            return SendOutcome { applied: true, refresh_conversations: false };
        }
    };

    let mut refresh_conversations = false;
    if session.current_conversation_id.is_none() {
        if let Some(id) = resp.conversation_id.clone() {
            session.current_conversation_id = Some(id);
            refresh_conversations = true;
        }
    }

    let text = resp
        .analise_texto
        .as_deref()
        .filter(|t| !t.is_empty())
        .unwrap_or(NO_REPLY_TEXT);
    transcript.push_message(Sender::Assistant, text);

    if let Some(chart) = transcript.push_chart_value(resp.grafico.as_ref()) {
        session.current_chart = Some(chart);
    }

    SendOutcome { applied: true, refresh_conversations }
}

/// Open conversation `id`: make it current, clear the screen, and return the
/// ticket its history load must present.
pub fn begin_open_conversation(session: &mut SessionState, transcript: &mut TranscriptState, id: ConversationId) -> Ticket {
    session.current_conversation_id = Some(id);
    transcript.begin_history_load()
}

/// Apply a history load. Returns `false` if the load was superseded.
pub fn finish_open_conversation(
    session: &mut SessionState,
    transcript: &mut TranscriptState,
    ticket: Ticket,
    result: Result<Vec<Message>, ApiError>,
) -> bool {
    if !transcript.accepts_history(ticket) {
        log::debug!("dropping superseded history response");
        return false;
    }
    match result {
        Ok(messages) => {
            if let Some(chart) = transcript.show_history(&messages) {
                session.current_chart = Some(chart);
            }
        }
        Err(e) => {
            log::error!("failed to load messages: {e}");
            transcript.push_message(Sender::Assistant, HISTORY_ERROR_TEXT);
        }
    }
    true
}

/// Reset to a fresh, unsaved chat showing the greeting.
pub fn start_new_chat(session: &mut SessionState, transcript: &mut TranscriptState) {
    session.current_conversation_id = None;
    transcript.reset_to_greeting();
}

/// What the screen does after a successful delete.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DeleteOutcome {
    /// The open conversation was deleted; the screen is now a new chat.
    ResetToNewChat,
    /// Another conversation was deleted; only the sidebar changes.
    RefreshList,
}

/// Apply a successful delete of `deleted`.
pub fn finish_delete(session: &mut SessionState, transcript: &mut TranscriptState, deleted: &ConversationId) -> DeleteOutcome {
    if session.is_active(deleted) {
        start_new_chat(session, transcript);
        DeleteOutcome::ResetToNewChat
    } else {
        DeleteOutcome::RefreshList
    }
}

/// Decide whether a rename prompt result warrants a `PATCH`.
///
/// `proposed` is `None` when the prompt was cancelled. Blank titles and
/// unchanged titles are ignored.
pub fn rename_target(current: &str, proposed: Option<&str>) -> Option<String> {
    let title = proposed?.trim();
    if title.is_empty() || title == current {
        return None;
    }
    Some(title.to_owned())
}

/// Confirmation text shown before deleting.
pub const DELETE_CONFIRM_TEXT: &str = "Tem certeza que deseja excluir esta conversa?";
/// Prompt label for renaming.
pub const RENAME_PROMPT_TEXT: &str = "Novo nome da conversa:";
/// Alert shown when a rename fails.
pub const RENAME_ERROR_TEXT: &str = "Erro ao renomear conversa.";
/// Alert shown when a delete fails.
pub const DELETE_ERROR_TEXT: &str = "Erro ao excluir conversa.";
