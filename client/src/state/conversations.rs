//! Conversation-list state for the sidebar.
//!
//! DESIGN
//! ======
//! The client never holds an authoritative copy: every mutation is followed
//! by a full re-fetch. Refreshes are ticketed so that when two mutations race,
//! the most recently *issued* refresh decides what is shown.

#[cfg(test)]
#[path = "conversations_test.rs"]
mod conversations_test;

use crate::net::error::ApiError;
use crate::net::request::{Latest, Ticket};
use crate::net::types::Conversation;

/// Sidebar list of conversations.
#[derive(Clone, Debug, Default)]
pub struct ConversationsState {
    pub items: Vec<Conversation>,
    pub loading: bool,
    requests: Latest,
}

impl ConversationsState {
    /// Start a refresh and return the ticket its result must present.
    pub fn begin_refresh(&mut self) -> Ticket {
        self.loading = true;
        self.requests.issue()
    }

    /// Apply a refresh result.
    ///
    /// Superseded results are dropped. Failures are logged and leave the
    /// previous list on screen. Returns `true` when the list was replaced.
    pub fn finish_refresh(&mut self, ticket: Ticket, result: Result<Vec<Conversation>, ApiError>) -> bool {
        if !self.requests.is_current(ticket) {
            log::debug!("dropping superseded conversation list response");
            return false;
        }
        self.loading = false;
        match result {
            Ok(items) => {
                self.items = items;
                true
            }
            Err(e) => {
                log::error!("failed to load conversations: {e}");
                false
            }
        }
    }

    /// Current title of conversation `id`, if listed.
    pub fn title_of(&self, id: &crate::net::types::ConversationId) -> Option<&str> {
        self.items.iter().find(|c| &c.id == id).map(|c| c.title.as_str())
    }
}
