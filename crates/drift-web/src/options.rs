//! Translate a plain JS options object into core `Settings`. Unknown keys
//! are ignored; malformed values are treated as absent and fall back to the
//! defaults, except colors, which the resolver validates itself.

use drift_core::{Breakpoint, ColorSetting, Settings};
use wasm_bindgen::JsValue;

pub fn parse_settings(options: &JsValue) -> Settings {
    let mut settings = Settings::default();
    if !options.is_object() {
        return settings;
    }
    settings.selector = get_string(options, "selector");
    settings.max_particles = get_f64(options, "maxParticles").map(|v| v.max(0.0) as usize);
    settings.size_variations = get_f64(options, "sizeVariations").map(|v| v as f32);
    settings.speed = get_f64(options, "speed").map(|v| v as f32);
    settings.color = parse_color(options);
    settings.min_distance = get_f64(options, "minDistance").map(|v| v as f32);
    settings.connect_particles = get_bool(options, "connectParticles");
    settings.show_particles = get_bool(options, "showParticles");
    settings.responsive = parse_responsive(options);
    settings
}

fn get(obj: &JsValue, key: &str) -> Option<JsValue> {
    js_sys::Reflect::get(obj, &JsValue::from_str(key))
        .ok()
        .filter(|v| !v.is_undefined() && !v.is_null())
}

fn get_string(obj: &JsValue, key: &str) -> Option<String> {
    get(obj, key).and_then(|v| v.as_string())
}

fn get_f64(obj: &JsValue, key: &str) -> Option<f64> {
    get(obj, key).and_then(|v| v.as_f64())
}

fn get_bool(obj: &JsValue, key: &str) -> Option<bool> {
    get(obj, key).and_then(|v| v.as_bool())
}

/// `color` is either one hex string or an array of them (a palette).
fn parse_color(obj: &JsValue) -> Option<ColorSetting> {
    let value = get(obj, "color")?;
    if let Some(hex) = value.as_string() {
        return Some(ColorSetting::Hex(hex));
    }
    if js_sys::Array::is_array(&value) {
        let list: Vec<String> = js_sys::Array::from(&value)
            .iter()
            .filter_map(|entry| entry.as_string())
            .collect();
        return Some(ColorSetting::HexList(list));
    }
    None
}

/// `responsive` is an ordered list of `{ breakpoint, options }` entries.
fn parse_responsive(obj: &JsValue) -> Vec<Breakpoint> {
    let Some(value) = get(obj, "responsive") else {
        return Vec::new();
    };
    if !js_sys::Array::is_array(&value) {
        return Vec::new();
    }
    js_sys::Array::from(&value)
        .iter()
        .filter_map(|entry| {
            let width = get_f64(&entry, "breakpoint")?.max(0.0) as u32;
            let settings = get(&entry, "options")
                .map(|o| parse_settings(&o))
                .unwrap_or_default();
            Some(Breakpoint { width, settings })
        })
        .collect()
}
