//! WASM bridge for Stick: exposes the input engine to JavaScript.
//!
//! Compiled via `wasm-pack build --target web`. A page creates one `InputJs`
//! per surface element and polls it once per frame.

mod console;
mod dom;

use dom::DomSource;
use stick_core::model::Vector2;
use stick_core::options::Options;
use stick_input::Input;
use wasm_bindgen::prelude::*;

/// Input instance bound to a DOM surface.
///
/// Listeners are attached on construction and removed by `destroy()` (or
/// when the JS wrapper is freed).
#[wasm_bindgen]
pub struct InputJs {
    input: Input<DomSource>,
}

#[wasm_bindgen]
impl InputJs {
    /// Attach to `target`. `options_json` is an optional JSON object, e.g.
    /// `{"threshold":80,"normalization":"canonical"}`; unreadable options
    /// are logged and replaced by the defaults.
    #[wasm_bindgen(constructor)]
    pub fn new(target: web_sys::EventTarget, options_json: Option<String>) -> Result<InputJs, JsValue> {
        console::setup();

        let options = parse_options(options_json.as_deref());
        let source = DomSource::new(target, options.pointer_events);
        if let Err(e) = source.disable_touch_action() {
            log::warn!("could not set touch-action: {e}");
        }
        let input = Input::attach(source, options).map_err(|e| JsValue::from(js_sys::Error::new(&e)))?;
        log::debug!("{} DOM listeners registered", input.source().listener_count());
        Ok(Self { input })
    }

    /// Full joystick snapshot as JSON:
    /// `{"active","start","current","move","axis":{...}}`.
    #[wasm_bindgen(js_name = joystickJson)]
    pub fn joystick_json(&self) -> String {
        serde_json::to_string(&self.input.joystick()).unwrap_or_else(|_| "{}".to_string())
    }

    pub fn horizontal(&self) -> f64 {
        self.input.axis().horizontal
    }

    pub fn vertical(&self) -> f64 {
        self.input.axis().vertical
    }

    /// Whether a pointer gesture is in progress.
    pub fn active(&self) -> bool {
        self.input.joystick().active
    }

    #[wasm_bindgen(js_name = isKeyDown)]
    pub fn is_key_down(&self, code: &str) -> bool {
        self.input.is_key_down(code)
    }

    /// Code of the most recent keydown, or `""` if none since the last blur.
    #[wasm_bindgen(js_name = lastKeyPressed)]
    pub fn last_key_pressed(&self) -> String {
        self.input
            .last_key_pressed()
            .map(|code| code.as_str().to_string())
            .unwrap_or_default()
    }

    #[wasm_bindgen(js_name = isButtonDown)]
    pub fn is_button_down(&self, button: i16) -> bool {
        self.input.is_button_down(button)
    }

    /// Last pointer position as JSON `{"x":..,"y":..}`.
    #[wasm_bindgen(js_name = mousePositionJson)]
    pub fn mouse_position_json(&self) -> String {
        position_json(self.input.mouse_position())
    }

    /// Remove every listener. The last snapshot stays readable.
    pub fn destroy(&mut self) {
        self.input.destroy();
    }
}

fn parse_options(json: Option<&str>) -> Options {
    match json {
        None => Options::default(),
        Some(json) => Options::from_json(json).unwrap_or_else(|e| {
            log::warn!("{e}; using defaults");
            Options::default()
        }),
    }
}

fn position_json(position: Vector2) -> String {
    serde_json::to_string(&position).unwrap_or_else(|_| r#"{"x":0,"y":0}"#.to_string())
}

// ─── Standalone functions (no instance needed) ───────────────────────────

/// Check an options object. Returns JSON: `{"ok":true}` or `{"ok":false,"error":"..."}`.
#[wasm_bindgen]
pub fn validate_options(json: &str) -> String {
    match Options::from_json(json) {
        Ok(_) => r#"{"ok":true}"#.to_string(),
        Err(e) => serde_json::json!({ "ok": false, "error": e }).to_string(),
    }
}

/// Set the console log level (`"off"` … `"trace"`). Returns `false` for an
/// unknown level.
#[wasm_bindgen]
pub fn set_log_level(level: &str) -> bool {
    console::setup();
    match console::parse_level(level) {
        Some(filter) => {
            log::set_max_level(filter);
            true
        }
        None => false,
    }
}
