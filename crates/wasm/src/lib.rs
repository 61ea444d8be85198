#![cfg(target_arch = "wasm32")]
//! Browser bindings for the starfield particle field.
//!
//! [`Starfield::mount`] styles a canvas as a full-viewport backdrop, builds
//! the animator over its 2D context, wires the window resize listener, and
//! drives the field from `requestAnimationFrame`. [`Starfield::unmount`]
//! cancels the scheduled frame and removes the listener; no canvas writes
//! happen afterwards.

mod dom;
mod surface;

use starfield_core::{Animator, FieldConfig};
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use surface::CanvasSurface;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys as web;

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    Ok(())
}

type SharedAnimator = Rc<RefCell<Animator<CanvasSurface>>>;

/// Handle to a mounted, animating field.
///
/// Keep it alive for the duration of the visual; call
/// [`unmount`](Starfield::unmount) to tear it down.
#[wasm_bindgen]
pub struct Starfield {
    animator: SharedAnimator,
    active: Rc<Cell<bool>>,
    raf_id: Rc<Cell<i32>>,
    resize_closure: Closure<dyn FnMut()>,
    // Kept alive so the scheduled callback stays valid until unmount.
    _tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>>,
}

#[wasm_bindgen]
impl Starfield {
    /// Mounts the field onto the canvas with the given element id and
    /// starts the animation loop.
    pub fn mount(canvas_id: &str) -> Result<Starfield, JsValue> {
        let window = dom::window()?;
        let canvas = dom::canvas_by_id(canvas_id)?;
        dom::style_as_backdrop(&canvas)?;

        let (width, height) = dom::viewport_size(&window);
        let dpr = window.device_pixel_ratio();
        // Seed from the wall clock so each page load drifts differently.
        let seed = js_sys::Date::now() as u64;
        let animator: SharedAnimator = Rc::new(RefCell::new(Animator::new(
            FieldConfig::default(),
            width,
            height,
            dpr,
            seed,
            CanvasSurface::new(&canvas)?,
        )));

        let active = Rc::new(Cell::new(true));
        let raf_id = Rc::new(Cell::new(0));

        let resize_closure = {
            let animator = animator.clone();
            let active = active.clone();
            Closure::wrap(Box::new(move || {
                if !active.get() {
                    return;
                }
                if let Some(window) = web::window() {
                    let (width, height) = dom::viewport_size(&window);
                    let dpr = window.device_pixel_ratio();
                    animator.borrow_mut().resize(width, height, dpr);
                }
            }) as Box<dyn FnMut()>)
        };
        window
            .add_event_listener_with_callback("resize", resize_closure.as_ref().unchecked_ref())?;

        let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
        {
            let tick_inner = tick.clone();
            let animator = animator.clone();
            let active = active.clone();
            let raf_id = raf_id.clone();
            *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
                if !active.get() {
                    return;
                }
                let Some(window) = web::window() else {
                    return;
                };
                let now = window.performance().map_or(0.0, |p| p.now());
                animator.borrow_mut().step(now);
                if let Ok(id) = window.request_animation_frame(
                    tick_inner.borrow().as_ref().unwrap().as_ref().unchecked_ref(),
                ) {
                    raf_id.set(id);
                }
            }) as Box<dyn FnMut()>));
        }
        let first =
            window.request_animation_frame(tick.borrow().as_ref().unwrap().as_ref().unchecked_ref())?;
        raf_id.set(first);

        log::info!("starfield mounted on #{canvas_id} ({width}x{height} @ {dpr})");
        Ok(Starfield {
            animator,
            active,
            raf_id,
            resize_closure,
            _tick: tick,
        })
    }

    /// Stops the animation loop and removes the resize listener.
    ///
    /// Idempotent; after the first call no further canvas writes occur.
    pub fn unmount(&self) {
        if !self.active.replace(false) {
            return;
        }
        self.animator.borrow_mut().stop();
        if let Some(window) = web::window() {
            let _ = window.cancel_animation_frame(self.raf_id.get());
            let _ = window.remove_event_listener_with_callback(
                "resize",
                self.resize_closure.as_ref().unchecked_ref(),
            );
        }
        log::info!("starfield unmounted");
    }
}
