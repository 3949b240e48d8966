//! Full-screen chart modal with PNG download.
//!
//! SYSTEM CONTEXT
//! ==============
//! The modal stays in the DOM so its canvas is always mounted. Opening draws
//! a fresh Chart.js instance for `SessionState::current_chart` with the
//! current theme; closing (button, backdrop, Escape) destroys it.

use leptos::prelude::*;

#[cfg(feature = "hydrate")]
use crate::state::session::SessionState;
use crate::state::ui::UiState;
#[cfg(feature = "hydrate")]
use crate::util::chart::{ChartSlot, ChartSurface};
#[cfg(feature = "hydrate")]
use crate::util::chart_js::{self, ChartInstance};

#[component]
pub fn ChartModal() -> impl IntoView {
    #[cfg(feature = "hydrate")]
    let session = expect_context::<RwSignal<SessionState>>();
    let ui = expect_context::<RwSignal<UiState>>();
    let canvas_ref = NodeRef::<leptos::html::Canvas>::new();
    let dialog_ref = NodeRef::<leptos::html::Div>::new();

    let is_open = Memo::new(move |_| ui.with(|u| u.chart_modal_open));

    #[cfg(feature = "hydrate")]
    {
        let slot = StoredValue::new_local(ChartSlot::<ChartInstance>::default());
        let current_chart = Memo::new(move |_| session.with(|s| s.current_chart.clone()));

        Effect::new(move || {
            let open = is_open.get();
            let chart = current_chart.get();
            slot.update_value(ChartSlot::clear);
            if !open {
                return;
            }
            let (Some(canvas), Some(chart)) = (canvas_ref.get(), chart) else {
                return;
            };
            let theme = session.with_untracked(|s| s.theme);
            if let Some(instance) = chart_js::render(&canvas, &chart, theme, ChartSurface::Fullscreen) {
                slot.update_value(|s| s.replace(instance));
            }
            if let Some(dialog) = dialog_ref.get_untracked() {
                let _ = dialog.focus();
            }
        });
        on_cleanup(move || {
            slot.try_update_value(ChartSlot::clear);
        });
    }

    let close = move || ui.update(UiState::close_chart_modal);
    let on_backdrop = move |_| close();
    let on_close_click = move |_| close();
    let on_keydown = move |ev: leptos::ev::KeyboardEvent| {
        if ev.key() == "Escape" {
            ev.prevent_default();
            close();
        }
    };

    let on_download = move |_| {
        #[cfg(feature = "hydrate")]
        {
            if let Some(canvas) = canvas_ref.get_untracked() {
                chart_js::export_png(&canvas, session.with_untracked(|s| s.theme));
            }
        }
    };

    view! {
        <div class="chart-modal" class:chart-modal--open=move || is_open.get() on:click=on_backdrop>
            <div
                class="chart-modal__dialog"
                node_ref=dialog_ref
                tabindex="-1"
                on:click=move |ev| ev.stop_propagation()
                on:keydown=on_keydown
            >
                <div class="chart-modal__actions">
                    <button class="btn" on:click=on_download title="Baixar gráfico">"Baixar"</button>
                    <button class="btn" on:click=on_close_click title="Fechar">"✕"</button>
                </div>
                <div class="chart-modal__canvas">
                    <canvas node_ref=canvas_ref></canvas>
                </div>
            </div>
        </div>
    }
}
