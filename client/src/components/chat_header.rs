//! Chat header: title, voice picker, chart shortcut, theme toggle.

use leptos::prelude::*;

use crate::state::audio::VOICES;
use crate::state::session::SessionState;
use crate::state::ui::UiState;
use crate::util::theme;

#[component]
pub fn ChatHeader() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let ui = expect_context::<RwSignal<UiState>>();

    let on_toggle_theme = move |_| {
        let next = theme::toggle(session.with_untracked(|s| s.theme));
        session.update(|s| s.theme = next);
    };

    let on_voice_change = move |ev: leptos::ev::Event| {
        let voice = event_target_value(&ev);
        ui.update(|u| u.voice = voice);
    };

    let on_show_chart = move |_| {
        let current = session.get_untracked();
        ui.update(|u| {
            u.reopen_chart_modal(&current);
        });
    };

    let has_chart = move || session.with(|s| s.current_chart.is_some());
    let theme_icon = move || if session.with(|s| s.theme.is_dark()) { "☀" } else { "🌙" };

    view! {
        <header class="chat-header">
            <h1 class="chat-header__title">"Analista Financeiro"</h1>
            <div class="chat-header__controls">
                <select
                    class="chat-header__voice"
                    title="Voz da leitura"
                    prop:value=move || ui.with(|u| u.voice.clone())
                    on:change=on_voice_change
                >
                    {VOICES.iter().map(|voice| view! { <option value=*voice>{*voice}</option> }).collect_view()}
                </select>
                <Show when=has_chart>
                    <button class="btn chat-header__chart" title="Ver último gráfico" on:click=on_show_chart>
                        "📊"
                    </button>
                </Show>
                <button class="btn chat-header__theme" title="Alternar tema" on:click=on_toggle_theme>
                    {theme_icon}
                </button>
            </div>
        </header>
    }
}
