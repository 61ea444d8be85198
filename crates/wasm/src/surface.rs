//! 2D canvas implementation of the core `Surface` trait.

use starfield_core::{Srgb, Surface, Viewport};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Paints into a `CanvasRenderingContext2d`, sizing the canvas backing store
/// from the viewport and scaling logical units through the context
/// transform.
#[derive(Debug)]
pub struct CanvasSurface {
    canvas: web::HtmlCanvasElement,
    ctx: web::CanvasRenderingContext2d,
    viewport: Viewport,
}

impl CanvasSurface {
    pub fn new(canvas: &web::HtmlCanvasElement) -> Result<Self, JsValue> {
        let ctx = canvas
            .get_context("2d")?
            .ok_or_else(|| JsValue::from_str("no 2d context"))?
            .dyn_into::<web::CanvasRenderingContext2d>()?;
        Ok(Self {
            canvas: canvas.clone(),
            ctx,
            viewport: Viewport::new(0.0, 0.0, 1.0),
        })
    }
}

/// CSS `rgba(...)` string for a fill at the given opacity.
fn css_rgba(color: Srgb, alpha: f64) -> String {
    let [r, g, b] = color.to_bytes();
    format!("rgba({r},{g},{b},{:.3})", alpha.clamp(0.0, 1.0))
}

impl Surface for CanvasSurface {
    fn set_viewport(&mut self, viewport: Viewport) {
        self.viewport = viewport;
        self.canvas.set_width(viewport.backing_width());
        self.canvas.set_height(viewport.backing_height());
        // One logical unit = pixel_ratio backing pixels.
        let s = viewport.pixel_ratio();
        let _ = self.ctx.set_transform(s, 0.0, 0.0, s, 0.0, 0.0);
    }

    fn clear(&mut self, color: Srgb) {
        self.ctx.set_fill_style_str(&color.to_hex());
        self.ctx
            .fill_rect(0.0, 0.0, self.viewport.width(), self.viewport.height());
    }

    fn fill_circle(&mut self, x: f64, y: f64, radius: f64, color: Srgb, alpha: f64) {
        self.ctx.set_fill_style_str(&css_rgba(color, alpha));
        self.ctx.begin_path();
        let _ = self.ctx.arc(x, y, radius, 0.0, std::f64::consts::TAU);
        self.ctx.fill();
    }
}
