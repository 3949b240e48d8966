//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render the chat chrome (sidebar, header, transcript, modal,
//! toasts) while reading/writing shared state from Leptos context providers.
//! Actions that hit the API are passed in as callbacks by the page.

pub mod audio_button;
pub mod chart_bubble;
pub mod chart_modal;
pub mod chat_header;
pub mod composer;
pub mod conversation_list;
pub mod toast_stack;
pub mod transcript;
