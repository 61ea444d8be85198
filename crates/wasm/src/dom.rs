//! Small DOM helpers shared by the mount path.

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys as web;

pub fn window() -> Result<web::Window, JsValue> {
    web::window().ok_or_else(|| JsValue::from_str("no window"))
}

/// Looks up a canvas element by id.
pub fn canvas_by_id(canvas_id: &str) -> Result<web::HtmlCanvasElement, JsValue> {
    let document = window()?
        .document()
        .ok_or_else(|| JsValue::from_str("no document"))?;
    document
        .get_element_by_id(canvas_id)
        .ok_or_else(|| JsValue::from_str(&format!("missing #{canvas_id}")))?
        .dyn_into::<web::HtmlCanvasElement>()
        .map_err(|_| JsValue::from_str(&format!("#{canvas_id} is not a canvas")))
}

/// Current viewport size in logical (CSS) pixels.
pub fn viewport_size(window: &web::Window) -> (f64, f64) {
    let width = window
        .inner_width()
        .ok()
        .and_then(|v| v.as_f64())
        .unwrap_or(0.0);
    let height = window
        .inner_height()
        .ok()
        .and_then(|v| v.as_f64())
        .unwrap_or(0.0);
    (width, height)
}

/// Styles the canvas as a fixed full-viewport backdrop behind the page
/// content, transparent to pointer input.
pub fn style_as_backdrop(canvas: &web::HtmlCanvasElement) -> Result<(), JsValue> {
    let style = canvas.style();
    style.set_property("position", "fixed")?;
    style.set_property("inset", "0")?;
    style.set_property("width", "100vw")?;
    style.set_property("height", "100vh")?;
    style.set_property("z-index", "-1")?;
    style.set_property("pointer-events", "none")?;
    Ok(())
}
