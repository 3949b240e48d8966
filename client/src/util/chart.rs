//! Chart configuration and instance lifetime.
//!
//! DESIGN
//! ======
//! Building the Chart.js config is pure so theme handling and radial-kind
//! rules can be tested natively. The JS handle itself lives behind the
//! [`Destroy`] trait; [`ChartSlot`] owns at most one instance and destroys it
//! before replacement or on clear.

#[cfg(test)]
#[path = "chart_test.rs"]
mod chart_test;

use serde_json::{Value, json};

use crate::net::types::ChartDescriptor;
use crate::state::session::Theme;

/// File name offered when downloading the full-screen chart.
pub const EXPORT_FILE_NAME: &str = "grafico-analise-financeira.png";

/// Legend font size used by the full-screen chart.
pub const FULLSCREEN_LEGEND_FONT_SIZE: u32 = 14;

/// Where a chart is drawn.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ChartSurface {
    /// Bounded chart inside a transcript bubble.
    Inline,
    /// Chart inside the full-screen modal.
    Fullscreen,
}

/// Axis and legend text color for `theme`.
pub fn text_color(theme: Theme) -> &'static str {
    if theme.is_dark() { "#e9edef" } else { "#111111" }
}

/// Opaque fill painted behind the chart when exporting it as PNG.
pub fn export_background(theme: Theme) -> &'static str {
    if theme.is_dark() { "#202c33" } else { "#ffffff" }
}

/// Full Chart.js configuration for `desc`, colored for `theme`.
///
/// The descriptor's `data` is passed through untouched. Radial kinds get an
/// empty `scales` object so no axes are drawn.
pub fn chart_config(desc: &ChartDescriptor, theme: Theme, surface: ChartSurface) -> Value {
    let color = text_color(theme);

    let mut labels = json!({ "color": color });
    if surface == ChartSurface::Fullscreen {
        labels["font"] = json!({ "size": FULLSCREEN_LEGEND_FONT_SIZE });
    }

    let scales = if desc.is_radial() {
        json!({})
    } else {
        json!({
            "x": { "ticks": { "color": color } },
            "y": { "ticks": { "color": color } },
        })
    };

    json!({
        "type": desc.kind,
        "data": desc.data,
        "options": {
            "responsive": true,
            "maintainAspectRatio": false,
            "plugins": { "legend": { "labels": labels } },
            "scales": scales,
        },
    })
}

/// A rendered chart that holds resources until destroyed.
pub trait Destroy {
    fn destroy(&self);
}

/// Owner of at most one live chart instance.
pub struct ChartSlot<C: Destroy> {
    current: Option<C>,
}

impl<C: Destroy> Default for ChartSlot<C> {
    fn default() -> Self {
        Self { current: None }
    }
}

impl<C: Destroy> ChartSlot<C> {
    /// Install `next`, destroying whatever instance was there first.
    pub fn replace(&mut self, next: C) {
        self.clear();
        self.current = Some(next);
    }

    /// Destroy the held instance, if any. Calling twice is harmless.
    pub fn clear(&mut self) {
        if let Some(chart) = self.current.take() {
            chart.destroy();
        }
    }

    pub fn is_occupied(&self) -> bool {
        self.current.is_some()
    }

    pub fn get(&self) -> Option<&C> {
        self.current.as_ref()
    }
}

impl<C: Destroy> Drop for ChartSlot<C> {
    fn drop(&mut self) {
        self.clear();
    }
}
