use super::*;
use std::cell::Cell;
use std::rc::Rc;

fn descriptor(kind: &str) -> ChartDescriptor {
    ChartDescriptor::from_value(&json!({
        "type": kind,
        "data": { "labels": ["jan", "fev"], "datasets": [{ "data": [1, 2] }] },
    }))
    .unwrap()
}

struct CountingChart {
    destroyed: Rc<Cell<u32>>,
}

impl Destroy for CountingChart {
    fn destroy(&self) {
        self.destroyed.set(self.destroyed.get() + 1);
    }
}

// =============================================================
// Colors
// =============================================================

#[test]
fn text_color_follows_theme() {
    assert_eq!(text_color(Theme::Dark), "#e9edef");
    assert_eq!(text_color(Theme::Light), "#111111");
}

#[test]
fn export_background_follows_theme() {
    assert_eq!(export_background(Theme::Dark), "#202c33");
    assert_eq!(export_background(Theme::Light), "#ffffff");
}

// =============================================================
// chart_config
// =============================================================

#[test]
fn config_passes_type_and_data_through() {
    let desc = descriptor("bar");
    let config = chart_config(&desc, Theme::Light, ChartSurface::Inline);
    assert_eq!(config["type"], "bar");
    assert_eq!(config["data"], desc.data);
    assert_eq!(config["options"]["responsive"], true);
    assert_eq!(config["options"]["maintainAspectRatio"], false);
}

#[test]
fn config_colors_axes_for_cartesian_kinds() {
    let config = chart_config(&descriptor("line"), Theme::Dark, ChartSurface::Inline);
    assert_eq!(config["options"]["scales"]["x"]["ticks"]["color"], "#e9edef");
    assert_eq!(config["options"]["scales"]["y"]["ticks"]["color"], "#e9edef");
    assert_eq!(config["options"]["plugins"]["legend"]["labels"]["color"], "#e9edef");
}

#[test]
fn config_suppresses_scales_for_radial_kinds() {
    for kind in ["pie", "doughnut"] {
        let config = chart_config(&descriptor(kind), Theme::Light, ChartSurface::Inline);
        assert_eq!(config["options"]["scales"], json!({}), "{kind}");
    }
}

#[test]
fn fullscreen_legend_uses_larger_font() {
    let inline = chart_config(&descriptor("bar"), Theme::Light, ChartSurface::Inline);
    let full = chart_config(&descriptor("bar"), Theme::Light, ChartSurface::Fullscreen);
    assert!(inline["options"]["plugins"]["legend"]["labels"].get("font").is_none());
    assert_eq!(full["options"]["plugins"]["legend"]["labels"]["font"]["size"], 14);
}

#[test]
fn config_built_before_toggle_keeps_old_colors() {
    let desc = descriptor("bar");
    let mut theme = Theme::Light;
    let inline = chart_config(&desc, theme, ChartSurface::Inline);
    theme = theme.toggled();
    let reopened = chart_config(&desc, theme, ChartSurface::Fullscreen);

    assert_eq!(inline["options"]["scales"]["x"]["ticks"]["color"], "#111111");
    assert_eq!(reopened["options"]["scales"]["x"]["ticks"]["color"], "#e9edef");
}

// =============================================================
// ChartSlot
// =============================================================

#[test]
fn replace_destroys_previous_instance() {
    let first = Rc::new(Cell::new(0));
    let second = Rc::new(Cell::new(0));
    let mut slot = ChartSlot::default();

    slot.replace(CountingChart { destroyed: first.clone() });
    assert!(slot.is_occupied());
    slot.replace(CountingChart { destroyed: second.clone() });

    assert_eq!(first.get(), 1);
    assert_eq!(second.get(), 0);
}

#[test]
fn clear_twice_destroys_once() {
    let count = Rc::new(Cell::new(0));
    let mut slot = ChartSlot::default();
    slot.replace(CountingChart { destroyed: count.clone() });

    slot.clear();
    slot.clear();

    assert_eq!(count.get(), 1);
    assert!(!slot.is_occupied());
}

#[test]
fn drop_destroys_held_instance() {
    let count = Rc::new(Cell::new(0));
    {
        let mut slot = ChartSlot::default();
        slot.replace(CountingChart { destroyed: count.clone() });
    }
    assert_eq!(count.get(), 1);
}

#[test]
fn empty_slot_clear_is_noop() {
    let mut slot: ChartSlot<CountingChart> = ChartSlot::default();
    slot.clear();
    assert!(slot.get().is_none());
}
