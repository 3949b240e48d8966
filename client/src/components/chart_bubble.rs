//! Inline chart bubble in the transcript.

use leptos::prelude::*;

use crate::net::types::ChartDescriptor;
use crate::state::session::SessionState;
use crate::state::ui::UiState;
#[cfg(feature = "hydrate")]
use crate::util::chart::{ChartSlot, ChartSurface};
#[cfg(feature = "hydrate")]
use crate::util::chart_js::{self, ChartInstance};

/// Bounded chart drawn with the theme active at mount time. Clicking opens
/// the same descriptor full-screen.
#[component]
pub fn ChartBubble(chart: ChartDescriptor) -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let ui = expect_context::<RwSignal<UiState>>();
    let canvas_ref = NodeRef::<leptos::html::Canvas>::new();
    let chart = StoredValue::new(chart);

    #[cfg(feature = "hydrate")]
    {
        let slot = StoredValue::new_local(ChartSlot::<ChartInstance>::default());
        Effect::new(move || {
            let Some(canvas) = canvas_ref.get() else {
                return;
            };
            if slot.with_value(ChartSlot::is_occupied) {
                return;
            }
            let theme = session.with_untracked(|s| s.theme);
            if let Some(instance) = chart.with_value(|c| chart_js::render(&canvas, c, theme, ChartSurface::Inline)) {
                slot.update_value(|s| s.replace(instance));
            }
        });
        on_cleanup(move || {
            slot.try_update_value(ChartSlot::clear);
        });
    }

    let open = move |_| {
        let desc = chart.get_value();
        ui.update(|u| session.update(|s| u.open_chart_modal(s, desc)));
    };

    view! {
        <div class="message message--bot chart-bubble" title="Clique para ampliar" on:click=open>
            <div class="chart-bubble__frame">
                <canvas node_ref=canvas_ref></canvas>
            </div>
        </div>
    }
}
