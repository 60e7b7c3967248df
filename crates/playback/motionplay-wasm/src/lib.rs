use js_sys::JSON;
use serde::Serialize;
use serde_wasm_bindgen as swb;
use wasm_bindgen::prelude::*;

use motionplay_core::{Config, MotionPlayer, SessionId};

#[wasm_bindgen]
pub struct MotionPlayerWasm {
    core: MotionPlayer,
}

fn jsvalue_is_undefined_or_null(v: &JsValue) -> bool {
    v.is_undefined() || v.is_null()
}

/// Serialize as plain JS objects (not `Map`), so flattened rows read as `{ time, height }`.
fn to_js<T: Serialize + ?Sized>(value: &T, what: &str) -> Result<JsValue, JsError> {
    value
        .serialize(&swb::Serializer::json_compatible())
        .map_err(|e| JsError::new(&format!("{what} error: {e}")))
}

#[wasm_bindgen]
impl MotionPlayerWasm {
    /// Create a player. Pass a partial config object or undefined/null for defaults.
    /// Example:
    ///   new MotionPlayerWasm({ viewport: { width: 400, height: 300, padding: 20 } })
    #[wasm_bindgen(constructor)]
    pub fn new(config: JsValue) -> Result<MotionPlayerWasm, JsError> {
        console_error_panic_hook::set_once();

        let cfg: Config = if jsvalue_is_undefined_or_null(&config) {
            Config::default()
        } else {
            swb::from_value(config).map_err(|e| JsError::new(&format!("config error: {e}")))?
        };
        let core = MotionPlayer::try_new(cfg).map_err(|e| JsError::new(&e.to_string()))?;
        Ok(MotionPlayerWasm { core })
    }

    /// Replace the active result with a service response object. `slug` names the
    /// simulation kind (e.g. "caida-libre"). Returns the new session id.
    #[wasm_bindgen(js_name = load_result)]
    pub fn load_result(&mut self, response: JsValue, slug: String) -> Result<u32, JsError> {
        if jsvalue_is_undefined_or_null(&response) {
            return Err(JsError::new("load_result: response is null/undefined"));
        }
        // Stringify so the core parser handles both key vocabularies in one place.
        let s = JSON::stringify(&response)
            .map_err(|e| JsError::new(&format!("load_result stringify error: {:?}", e)))?
            .as_string()
            .ok_or_else(|| JsError::new("load_result: stringify produced non-string"))?;
        self.load_result_json(s, slug)
    }

    /// Same as `load_result`, from JSON text.
    #[wasm_bindgen(js_name = load_result_json)]
    pub fn load_result_json(&mut self, text: String, slug: String) -> Result<u32, JsError> {
        let id = self
            .core
            .load_response_json(&text, &slug)
            .map_err(|e| JsError::new(&format!("load_result parse error: {e}")))?;
        Ok(id.0)
    }

    pub fn unload(&mut self) {
        self.core.unload();
    }

    pub fn play(&mut self) {
        self.core.play();
    }

    pub fn pause(&mut self) {
        self.core.pause();
    }

    /// Rewind to the first frame. Returns the render update for that frame, or null.
    pub fn reset(&mut self) -> Result<JsValue, JsError> {
        to_js(&self.core.reset(), "reset")
    }

    /// Scrub to `time` seconds (clamped). Returns the render update, or null.
    pub fn seek(&mut self, time: f64) -> Result<JsValue, JsError> {
        to_js(&self.core.seek(time), "seek")
    }

    #[wasm_bindgen(js_name = set_speed)]
    pub fn set_speed(&mut self, speed: f64) {
        self.core.set_speed(speed);
    }

    /// Advance by `dt` seconds. Returns `{ session, update, events }`.
    pub fn update(&mut self, dt: f64) -> Result<JsValue, JsError> {
        let out = self.core.update(dt);
        to_js(out, "outputs")
    }

    /// Advance only if `session` is still the active one; otherwise returns null.
    #[wasm_bindgen(js_name = update_for)]
    pub fn update_for(&mut self, session: u32, dt: f64) -> Result<JsValue, JsError> {
        match self.core.update_for(SessionId(session), dt) {
            Some(out) => to_js(out, "outputs"),
            None => Ok(JsValue::NULL),
        }
    }

    /// Flat chart rows `[{ time, field: value, ... }]` for the active result.
    #[wasm_bindgen(js_name = chart_rows)]
    pub fn chart_rows(&self) -> Result<JsValue, JsError> {
        to_js(self.core.chart_rows(), "chart_rows")
    }

    #[wasm_bindgen(js_name = chart_columns)]
    pub fn chart_columns(&self) -> Result<JsValue, JsError> {
        let cols = self
            .core
            .session()
            .map(|s| s.chart_columns())
            .unwrap_or_default();
        to_js(&cols, "chart_columns")
    }

    /// False for kinds that are animated only (collisions, energy diagrams) or when nothing is loaded.
    #[wasm_bindgen(js_name = is_chartable)]
    pub fn is_chartable(&self) -> bool {
        self.core.is_chartable()
    }

    /// Timeline state name: "idle" | "playing" | "paused" | "completed".
    pub fn state(&self) -> String {
        self.core.timeline_state().name().to_string()
    }

    /// Player status name: "not_loaded" | "empty" | "ready".
    pub fn status(&self) -> String {
        self.core.status().name().to_string()
    }

    pub fn notices(&self) -> Result<JsValue, JsError> {
        to_js(self.core.notices(), "notices")
    }

    /// Axis lines and labels for the active layout, or null when nothing is loaded.
    #[wasm_bindgen(js_name = axis_guides)]
    pub fn axis_guides(&self) -> Result<JsValue, JsError> {
        to_js(&self.core.axis_guides(), "axis_guides")
    }

    /// SVG path data for the full trajectory ("" when nothing is animated).
    #[wasm_bindgen(js_name = trajectory_path)]
    pub fn trajectory_path(&self) -> String {
        self.core
            .session()
            .map(|s| s.timeline().trajectory().to_svg_path())
            .unwrap_or_default()
    }
}

/// Numeric ABI version for compatibility checks at init.
#[wasm_bindgen]
pub fn abi_version() -> u32 {
    1
}
