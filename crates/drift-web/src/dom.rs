//! DOM and scheduling glue: canvas lookup, backing-store sizing and the
//! requestAnimationFrame/setTimeout collaborators.

use anyhow::anyhow;
use drift_core::Bounds;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Look up the target canvas by selector and grab its 2D context. Any
/// failure here is a configuration error from the engine's point of view.
pub fn acquire_canvas(
    selector: &str,
) -> anyhow::Result<(web::HtmlCanvasElement, web::CanvasRenderingContext2d)> {
    let window = web::window().ok_or_else(|| anyhow!("no window"))?;
    let document = window.document().ok_or_else(|| anyhow!("no document"))?;
    let element = document
        .query_selector(selector)
        .map_err(|e| anyhow!("{e:?}"))?
        .ok_or_else(|| anyhow!("selector {selector:?} matches no element"))?;
    let canvas: web::HtmlCanvasElement = element
        .dyn_into()
        .map_err(|_| anyhow!("selector {selector:?} is not a canvas"))?;
    let ctx = canvas
        .get_context("2d")
        .map_err(|e| anyhow!("{e:?}"))?
        .ok_or_else(|| anyhow!("2d context unavailable"))?
        .dyn_into::<web::CanvasRenderingContext2d>()
        .map_err(|_| anyhow!("2d context has unexpected type"))?;
    Ok((canvas, ctx))
}

/// Match the canvas backing store to its CSS size times devicePixelRatio
/// and scale the context so all drawing stays in CSS pixels. Returns the
/// CSS-pixel bounds the engine simulates in.
pub fn sync_canvas_backing_size(
    canvas: &web::HtmlCanvasElement,
    ctx: &web::CanvasRenderingContext2d,
) -> Bounds {
    let rect = canvas.get_bounding_client_rect();
    let dpr = web::window().map_or(1.0, |w| w.device_pixel_ratio());
    let w_px = (rect.width() * dpr) as u32;
    let h_px = (rect.height() * dpr) as u32;
    canvas.set_width(w_px.max(1));
    canvas.set_height(h_px.max(1));
    let _ = ctx.set_transform(dpr, 0.0, 0.0, dpr, 0.0, 0.0);
    Bounds::new(rect.width() as f32, rect.height() as f32)
}

/// Current CSS-pixel bounds without touching the backing store.
pub fn canvas_css_bounds(canvas: &web::HtmlCanvasElement) -> Bounds {
    let rect = canvas.get_bounding_client_rect();
    Bounds::new(rect.width() as f32, rect.height() as f32)
}

pub fn request_frame(callback: &Closure<dyn FnMut()>) -> i32 {
    web::window()
        .and_then(|w| {
            w.request_animation_frame(callback.as_ref().unchecked_ref())
                .ok()
        })
        .unwrap_or(0)
}

pub fn cancel_frame(handle: i32) {
    if let Some(w) = web::window() {
        let _ = w.cancel_animation_frame(handle);
    }
}

pub fn set_timeout(callback: &Closure<dyn FnMut()>, millis: i32) -> i32 {
    web::window()
        .and_then(|w| {
            w.set_timeout_with_callback_and_timeout_and_arguments_0(
                callback.as_ref().unchecked_ref(),
                millis,
            )
            .ok()
        })
        .unwrap_or(0)
}

pub fn clear_timeout(handle: i32) {
    if let Some(w) = web::window() {
        w.clear_timeout_with_handle(handle);
    }
}
