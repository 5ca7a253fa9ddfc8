//! Resize wiring: the canvas backing store tracks every resize event
//! immediately, while the expensive rebuild is debounced behind a short
//! quiet period, as bursts of resize events arrive faster than rebuilds
//! are worth doing.

use crate::dom;
use crate::frame::App;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

const RESIZE_DEBOUNCE_MS: i32 = 50;

pub fn wire_resize(slot: Rc<RefCell<Option<App>>>) {
    let fire = make_debounce_fire(slot.clone());
    let resize_closure = Closure::wrap(Box::new(move || {
        let mut guard = slot.borrow_mut();
        let Some(app) = guard.as_mut() else {
            return;
        };
        let bounds = dom::sync_canvas_backing_size(&app.canvas, &app.ctx);
        // Rebuilds are gated on the width: only a width change can flip a
        // breakpoint.
        if bounds.width == app.engine.bounds().width {
            return;
        }
        app.debounce.restart(dom::clear_timeout, || {
            dom::set_timeout(&fire, RESIZE_DEBOUNCE_MS)
        });
    }) as Box<dyn FnMut()>);
    if let Some(window) = web::window() {
        let _ = window
            .add_event_listener_with_callback("resize", resize_closure.as_ref().unchecked_ref());
    }
    resize_closure.forget();
}

fn make_debounce_fire(slot: Rc<RefCell<Option<App>>>) -> Rc<Closure<dyn FnMut()>> {
    Rc::new(Closure::wrap(Box::new(move || {
        let mut guard = slot.borrow_mut();
        let Some(app) = guard.as_mut() else {
            return;
        };
        if !app.debounce.fire() {
            return;
        }
        let bounds = dom::canvas_css_bounds(&app.canvas);
        log::debug!("[resize] settled at {:.0}x{:.0}", bounds.width, bounds.height);
        app.engine.resize(bounds);
        // One immediate redraw outside the rAF cadence; the driver's
        // pending registration is untouched.
        app.render_frame();
    }) as Box<dyn FnMut()>))
}
