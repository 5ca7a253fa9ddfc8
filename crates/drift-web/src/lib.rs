#![cfg(target_arch = "wasm32")]
//! Web shell for the drift particle background: canvas acquisition, JS
//! option parsing, requestAnimationFrame scheduling and resize wiring. All
//! simulation logic lives in `drift-core`.

use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;

mod dom;
mod events;
mod frame;
mod options;

use frame::App;

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    Ok(())
}

/// Public engine handle. Everything is driven through `init`,
/// `pauseAnimation` and `resumeAnimation`; no other state is observable.
#[wasm_bindgen]
pub struct Particles {
    app: Rc<RefCell<Option<App>>>,
}

impl Default for Particles {
    fn default() -> Self {
        Self::new()
    }
}

#[wasm_bindgen]
impl Particles {
    #[wasm_bindgen(constructor)]
    pub fn new() -> Particles {
        Particles {
            app: Rc::new(RefCell::new(None)),
        }
    }

    /// Initialize from a plain JS options object and start animating.
    /// Configuration errors (missing selector, malformed color, selector
    /// matching no canvas) are logged as warnings and leave the engine
    /// inert; nothing is thrown at the host page.
    pub fn init(&self, options: JsValue) {
        if self.app.borrow().is_some() {
            log::warn!("[init] already initialized; ignoring");
            return;
        }
        let settings = options::parse_settings(&options);
        match App::create(&settings) {
            Ok(app) => {
                *self.app.borrow_mut() = Some(app);
                events::wire_resize(self.app.clone());
                App::start(&self.app);
            }
            Err(e) => log::warn!("[init] {e}; particle background disabled"),
        }
    }

    /// Cancel the pending frame registration. No-op when already paused.
    #[wasm_bindgen(js_name = pauseAnimation)]
    pub fn pause_animation(&self) {
        if let Some(app) = self.app.borrow_mut().as_mut() {
            app.pause();
        }
    }

    /// Reschedule frames. No-op when already running.
    #[wasm_bindgen(js_name = resumeAnimation)]
    pub fn resume_animation(&self) {
        App::resume(&self.app);
    }
}
