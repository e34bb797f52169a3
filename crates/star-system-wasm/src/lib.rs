//! WASM bindings for star system rendering.
//!
//! The rendering host loads a catalog once, then each animation frame asks
//! for positions, zone overlays and camera parameters. Loaded systems, the
//! mode store and the view configuration live in thread-local storage (WASM
//! is single-threaded); functions hand out opaque system IDs.
//!
//! ## Quick Start (JavaScript)
//!
//! ```javascript
//! import init, { system_load, system_frame, mode_set_view_mode } from 'star-system-wasm';
//!
//! await init();
//!
//! const id = system_load(catalog);
//! mode_set_view_mode("navigational");
//!
//! const frame = system_frame(id, clock.seconds);
//! for (const body of frame.bodies) {
//!   meshes[body.id].position.set(...body.position);
//! }
//! ```

use wasm_bindgen::prelude::*;

mod mode;
mod system;
mod zones;

// Unit types serialize as plain numbers via serde(transparent)
#[wasm_bindgen(typescript_custom_section)]
const TS_UNIT_TYPES: &'static str = r#"
/** Length in AU (astronomical units) */
export type Length = number;
/** Time in seconds */
export type Time = number;
/** Angle in degrees */
export type Angle = number;
/** Catalog body identifier */
export type BodyId = string;
"#;

#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
}

fn to_js<T: serde::Serialize>(value: &T) -> Result<JsValue, JsError> {
    serde_wasm_bindgen::to_value(value).map_err(|e| JsError::new(&e.to_string()))
}

fn from_js<T: serde::de::DeserializeOwned>(value: JsValue) -> Result<T, JsError> {
    serde_wasm_bindgen::from_value(value).map_err(|e| JsError::new(&e.to_string()))
}
