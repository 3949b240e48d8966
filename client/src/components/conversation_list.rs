//! Sidebar listing saved conversations.
//!
//! SYSTEM CONTEXT
//! ==============
//! Reads `ConversationsState` and highlights the session's active id. All
//! mutations are delegated to page callbacks, which re-fetch the list.

use leptos::prelude::*;

use crate::net::types::{Conversation, ConversationId};
use crate::state::conversations::ConversationsState;
use crate::state::session::SessionState;

#[component]
pub fn ConversationList(
    on_open: Callback<ConversationId>,
    on_rename: Callback<ConversationId>,
    on_delete: Callback<ConversationId>,
    on_new_chat: Callback<()>,
) -> impl IntoView {
    let conversations = expect_context::<RwSignal<ConversationsState>>();

    view! {
        <aside class="sidebar">
            <button class="btn btn--primary sidebar__new" on:click=move |_| on_new_chat.run(())>
                "+ Nova conversa"
            </button>
            <ul class="sidebar__list">
                {move || {
                    let state = conversations.get();
                    if state.items.is_empty() {
                        let label = if state.loading { "Carregando..." } else { "Nenhuma conversa ainda" };
                        return view! { <li class="sidebar__empty">{label}</li> }.into_any();
                    }
                    state
                        .items
                        .into_iter()
                        .map(|conversation| {
                            view! {
                                <ConversationItem
                                    conversation=conversation
                                    on_open=on_open
                                    on_rename=on_rename
                                    on_delete=on_delete
                                />
                            }
                        })
                        .collect_view()
                        .into_any()
                }}
            </ul>
        </aside>
    }
}

#[component]
fn ConversationItem(
    conversation: Conversation,
    on_open: Callback<ConversationId>,
    on_rename: Callback<ConversationId>,
    on_delete: Callback<ConversationId>,
) -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let date = conversation.display_date();
    let id = StoredValue::new(conversation.id);
    let active = move || id.with_value(|id| session.with(|s| s.is_active(id)));

    view! {
        <li class="sidebar__item" class:sidebar__item--active=active on:click=move |_| on_open.run(id.get_value())>
            <div class="sidebar__item-text">
                <span class="sidebar__title">{conversation.title}</span>
                <span class="sidebar__date">{date}</span>
            </div>
            <div class="sidebar__actions">
                <button
                    class="sidebar__action"
                    title="Renomear"
                    on:click=move |ev| {
                        ev.stop_propagation();
                        on_rename.run(id.get_value());
                    }
                >
                    "✎"
                </button>
                <button
                    class="sidebar__action sidebar__action--danger"
                    title="Excluir"
                    on:click=move |ev| {
                        ev.stop_propagation();
                        on_delete.run(id.get_value());
                    }
                >
                    "🗑"
                </button>
            </div>
        </li>
    }
}
