//! Chart.js bindings and PNG export.
//!
//! Chart.js is loaded globally by the page shell; this module only binds the
//! `Chart` constructor and `destroy` method it needs.

use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{CanvasRenderingContext2d, HtmlAnchorElement, HtmlCanvasElement};

use super::chart::{ChartSurface, Destroy, EXPORT_FILE_NAME, chart_config, export_background};
use crate::net::types::ChartDescriptor;
use crate::state::session::Theme;

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_name = Chart)]
    type JsChart;

    #[wasm_bindgen(constructor, js_class = "Chart", catch)]
    fn new(canvas: &HtmlCanvasElement, config: &JsValue) -> Result<JsChart, JsValue>;

    #[wasm_bindgen(method)]
    fn destroy(this: &JsChart);
}

/// Live Chart.js instance bound to a canvas.
pub struct ChartInstance(JsChart);

impl Destroy for ChartInstance {
    fn destroy(&self) {
        self.0.destroy();
    }
}

/// Draw `desc` onto `canvas`, colored for `theme`.
///
/// Returns `None` (after logging) when Chart.js is missing or rejects the
/// config; the bubble then stays empty rather than breaking the transcript.
pub fn render(canvas: &HtmlCanvasElement, desc: &ChartDescriptor, theme: Theme, surface: ChartSurface) -> Option<ChartInstance> {
    let config = chart_config(desc, theme, surface);
    let config = match js_sys::JSON::parse(&config.to_string()) {
        Ok(value) => value,
        Err(e) => {
            log::error!("chart config rejected: {e:?}");
            return None;
        }
    };
    match JsChart::new(canvas, &config) {
        Ok(chart) => Some(ChartInstance(chart)),
        Err(e) => {
            log::error!("chart render failed: kind={} error={e:?}", desc.kind);
            None
        }
    }
}

/// Download `source` as a PNG composed over an opaque background.
///
/// Chart.js leaves the canvas transparent, so the image is redrawn onto an
/// off-screen canvas that was first filled with the theme's background.
pub fn export_png(source: &HtmlCanvasElement, theme: Theme) {
    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        return;
    };
    let Some(offscreen) = document
        .create_element("canvas")
        .ok()
        .and_then(|el| el.dyn_into::<HtmlCanvasElement>().ok())
    else {
        return;
    };
    offscreen.set_width(source.width());
    offscreen.set_height(source.height());

    let Some(ctx_value) = offscreen.get_context("2d").ok().flatten() else {
        return;
    };
    let Some(ctx) = ctx_value.dyn_into::<CanvasRenderingContext2d>().ok() else {
        return;
    };
    ctx.set_fill_style_str(export_background(theme));
    ctx.fill_rect(0.0, 0.0, f64::from(source.width()), f64::from(source.height()));
    if let Err(e) = ctx.draw_image_with_html_canvas_element(source, 0.0, 0.0) {
        log::error!("chart export draw failed: {e:?}");
        return;
    }

    let href = match offscreen.to_data_url_with_type("image/png") {
        Ok(href) => href,
        Err(e) => {
            log::error!("chart export encode failed: {e:?}");
            return;
        }
    };
    let Some(anchor) = document
        .create_element("a")
        .ok()
        .and_then(|el| el.dyn_into::<HtmlAnchorElement>().ok())
    else {
        return;
    };
    anchor.set_href(&href);
    anchor.set_download(EXPORT_FILE_NAME);
    anchor.click();
}
