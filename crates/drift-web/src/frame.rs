//! The per-frame loop: translate engine draw commands to 2D canvas calls
//! and keep exactly one requestAnimationFrame registration alive while
//! running.

use crate::dom;
use drift_core::{ConfigError, DebounceTimer, DrawCommand, Engine, Settings, TickDriver};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use web_sys as web;

pub struct App {
    pub engine: Engine,
    pub canvas: web::HtmlCanvasElement,
    pub ctx: web::CanvasRenderingContext2d,
    pub driver: TickDriver<i32>,
    pub debounce: DebounceTimer<i32>,
    commands: Vec<DrawCommand>,
    tick: Option<Rc<Closure<dyn FnMut()>>>,
}

impl App {
    /// Build the engine against the canvas the selector names. Seeded from
    /// host entropy; tests construct `Engine` directly with fixed seeds.
    pub fn create(settings: &Settings) -> anyhow::Result<App> {
        let selector = settings
            .selector
            .as_deref()
            .ok_or(ConfigError::MissingSelector)?;
        let (canvas, ctx) = dom::acquire_canvas(selector)?;
        let bounds = dom::sync_canvas_backing_size(&canvas, &ctx);
        let engine = Engine::new(settings, bounds, rand::random())?;
        log::info!(
            "[init] {} particles on {:?} ({:.0}x{:.0})",
            engine.particle_count(),
            selector,
            bounds.width,
            bounds.height
        );
        Ok(App {
            engine,
            canvas,
            ctx,
            driver: TickDriver::new(),
            debounce: DebounceTimer::new(),
            commands: Vec::new(),
            tick: None,
        })
    }

    /// Install the tick closure and schedule the first frame.
    pub fn start(slot: &Rc<RefCell<Option<App>>>) {
        let tick = make_tick(slot.clone());
        if let Some(app) = slot.borrow_mut().as_mut() {
            app.tick = Some(tick.clone());
            app.driver.start(|| dom::request_frame(&tick));
        }
    }

    pub fn resume(slot: &Rc<RefCell<Option<App>>>) {
        if let Some(app) = slot.borrow_mut().as_mut() {
            if let Some(tick) = app.tick.clone() {
                app.driver.resume(|| dom::request_frame(&tick));
            }
        }
    }

    pub fn pause(&mut self) {
        self.driver.pause(dom::cancel_frame);
    }

    /// Emit and draw one frame. Does not touch the scheduler, so it also
    /// serves as the immediate post-resize redraw.
    pub fn render_frame(&mut self) {
        let mut commands = std::mem::take(&mut self.commands);
        self.engine.frame(&mut commands);
        self.draw(&commands);
        self.commands = commands;
    }

    fn draw(&self, commands: &[DrawCommand]) {
        for command in commands {
            match command {
                DrawCommand::Clear => {
                    let bounds = self.engine.bounds();
                    self.ctx
                        .clear_rect(0.0, 0.0, bounds.width as f64, bounds.height as f64);
                }
                DrawCommand::Disc { pos, radius, color } => {
                    self.ctx.set_fill_style_str(&color.css());
                    self.ctx.begin_path();
                    let _ = self.ctx.arc(
                        pos.x as f64,
                        pos.y as f64,
                        *radius as f64,
                        0.0,
                        std::f64::consts::TAU,
                    );
                    self.ctx.fill();
                }
                DrawCommand::Edge(edge) => {
                    self.ctx
                        .set_stroke_style_str(&edge.color.css_with_alpha(edge.opacity));
                    self.ctx.begin_path();
                    self.ctx.move_to(edge.a.x as f64, edge.a.y as f64);
                    self.ctx.line_to(edge.b.x as f64, edge.b.y as f64);
                    self.ctx.stroke();
                }
            }
        }
    }
}

fn make_tick(slot: Rc<RefCell<Option<App>>>) -> Rc<Closure<dyn FnMut()>> {
    Rc::new(Closure::wrap(Box::new(move || {
        let mut guard = slot.borrow_mut();
        let Some(app) = guard.as_mut() else {
            return;
        };
        if !app.driver.begin_tick() {
            return;
        }
        app.render_frame();
        if let Some(tick) = app.tick.clone() {
            app.driver.rearm(|| dom::request_frame(&tick));
        }
    }) as Box<dyn FnMut()>))
}
