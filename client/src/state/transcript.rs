//! Transcript state: the ordered bubbles currently on screen.
//!
//! DESIGN
//! ======
//! Entries are append-only apart from the transient "analyzing" placeholder.
//! Clearing bumps `generation`, which lets in-flight sends notice that the
//! screen they were issued for is gone.

#[cfg(test)]
#[path = "transcript_test.rs"]
mod transcript_test;

use crate::net::request::{Latest, Ticket};
use crate::net::types::{ChartDescriptor, Message, Sender};

/// Canned assistant greeting shown for empty conversations and new chats.
pub const GREETING: &str = "Olá! Sou seu analista financeiro. Envie sua pergunta para começar.";
/// Placeholder text while a question is being analyzed.
pub const PENDING_TEXT: &str = "Analisando...";
/// Assistant text used when a reply carries no analysis.
pub const NO_REPLY_TEXT: &str = "Sem resposta.";
/// Shown when the analysis request fails.
pub const SEND_ERROR_TEXT: &str = "Erro ao consultar API.";
/// Shown in place of the transcript when history cannot be loaded.
pub const HISTORY_ERROR_TEXT: &str = "Erro ao carregar histórico.";

/// Stable key of one transcript entry.
pub type EntryId = u64;

/// What a transcript entry renders as.
#[derive(Clone, Debug, PartialEq)]
pub enum EntryKind {
    /// A text bubble. Assistant bubbles carry an audio control.
    Message { sender: Sender, text: String },
    /// An inline chart bubble.
    Chart(ChartDescriptor),
    /// The transient "analyzing" placeholder.
    Pending,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Entry {
    pub id: EntryId,
    pub kind: EntryKind,
}

impl Entry {
    /// Whether this entry shows the text-to-speech control.
    pub fn has_audio(&self) -> bool {
        matches!(self.kind, EntryKind::Message { sender: Sender::Assistant, .. })
    }
}

/// Bubbles on screen plus the bookkeeping needed to discard stale results.
#[derive(Clone, Debug, Default)]
pub struct TranscriptState {
    pub entries: Vec<Entry>,
    next_id: EntryId,
    generation: u64,
    history_requests: Latest,
}

impl TranscriptState {
    /// Counter bumped on every clear.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Remove every entry and invalidate in-flight results, including any
    /// pending history load.
    pub fn clear(&mut self) {
        self.entries.clear();
        self.generation += 1;
        self.history_requests.issue();
    }

    /// Clear and show the greeting, as for a brand-new chat.
    pub fn reset_to_greeting(&mut self) {
        self.clear();
        self.push_message(Sender::Assistant, GREETING);
    }

    /// Clear and issue the ticket a history load must present to apply.
    pub fn begin_history_load(&mut self) -> Ticket {
        self.clear();
        self.history_requests.issue()
    }

    /// Whether a history response with `ticket` may still apply.
    pub fn accepts_history(&self, ticket: Ticket) -> bool {
        self.history_requests.is_current(ticket)
    }

    fn push(&mut self, kind: EntryKind) -> EntryId {
        self.next_id += 1;
        let id = self.next_id;
        self.entries.push(Entry { id, kind });
        id
    }

    pub fn push_message(&mut self, sender: Sender, text: impl Into<String>) -> EntryId {
        self.push(EntryKind::Message { sender, text: text.into() })
    }

    pub fn push_chart(&mut self, chart: ChartDescriptor) -> EntryId {
        self.push(EntryKind::Chart(chart))
    }

    /// Render a raw chart payload if it describes a chart.
    ///
    /// Returns the descriptor that was rendered; empty or malformed payloads
    /// produce no bubble.
    pub fn push_chart_value(&mut self, raw: Option<&serde_json::Value>) -> Option<ChartDescriptor> {
        let chart = raw.and_then(ChartDescriptor::from_value)?;
        self.push_chart(chart.clone());
        Some(chart)
    }

    pub fn push_pending(&mut self) -> EntryId {
        self.push(EntryKind::Pending)
    }

    /// Remove one entry. Returns `false` if it was already gone.
    pub fn remove(&mut self, id: EntryId) -> bool {
        let before = self.entries.len();
        self.entries.retain(|e| e.id != id);
        self.entries.len() != before
    }

    /// Render stored history in order.
    ///
    /// An empty history shows the greeting. Returns the last chart rendered,
    /// which becomes the session's current chart.
    pub fn show_history(&mut self, messages: &[Message]) -> Option<ChartDescriptor> {
        if messages.is_empty() {
            self.push_message(Sender::Assistant, GREETING);
            return None;
        }
        let mut last_chart = None;
        for msg in messages {
            self.push_message(msg.sender, msg.content.clone());
            if let Some(chart) = self.push_chart_value(msg.chart_data.as_ref()) {
                last_chart = Some(chart);
            }
        }
        last_chart
    }

    pub fn is_pending(&self) -> bool {
        self.entries.iter().any(|e| e.kind == EntryKind::Pending)
    }
}
