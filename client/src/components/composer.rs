//! Question input row.

use leptos::prelude::*;

/// Text input plus send button. Enter sends; blank input is ignored.
#[component]
pub fn Composer(on_send: Callback<String>) -> impl IntoView {
    let input = RwSignal::new(String::new());

    let submit = move || {
        let text = input.get_untracked();
        if text.trim().is_empty() {
            return;
        }
        input.set(String::new());
        on_send.run(text);
    };

    let on_keydown = move |ev: leptos::ev::KeyboardEvent| {
        if ev.key() == "Enter" && !ev.shift_key() {
            ev.prevent_default();
            submit();
        }
    };

    view! {
        <div class="composer">
            <input
                class="composer__input"
                type="text"
                placeholder="Digite sua pergunta..."
                prop:value=move || input.get()
                on:input=move |ev| input.set(event_target_value(&ev))
                on:keydown=on_keydown
            />
            <button class="btn btn--primary composer__send" on:click=move |_| submit()>
                "Enviar"
            </button>
        </div>
    }
}
