//! WASM bindings for stateless stellar and camera calculations.

use wasm_bindgen::prelude::*;

use stellar::{StellarHost, luminosity_for_spectral_type, zones_for_luminosity};

use crate::to_js;

/// Luminosity (L☉) for a main-sequence spectral type such as "G2V".
///
/// Throws for unknown codes rather than guessing.
#[wasm_bindgen]
pub fn spectral_luminosity(spectral_type: &str) -> Result<f64, JsError> {
    luminosity_for_spectral_type(spectral_type).map_err(|e| JsError::new(&e.to_string()))
}

/// Sublimation, habitable and frost line zones (AU) for a luminosity.
#[wasm_bindgen]
pub fn zones_for_star_luminosity(luminosity: f64) -> Result<JsValue, JsError> {
    let zones = zones_for_luminosity(luminosity).map_err(|e| JsError::new(&e.to_string()))?;
    to_js(&zones)
}

/// Zones (AU) for a single star or binary pair.
///
/// # Arguments
/// * `primary` - Spectral type of the primary
/// * `secondary` - Optional spectral type of a companion
#[wasm_bindgen]
pub fn zones_for_spectral_types(
    primary: &str,
    secondary: Option<String>,
) -> Result<JsValue, JsError> {
    let host = match secondary {
        Some(secondary) => StellarHost::binary(primary, secondary),
        None => StellarHost::single(primary),
    };
    let zones = host.zones().map_err(|e| JsError::new(&e.to_string()))?;
    to_js(&zones)
}

/// Scale-adaptive camera parameters for an object radius and camera distance
/// (both in render units), using the active view configuration.
///
/// # Returns
/// Object with gridSpacing, depthThreshold, nearPlane, minCameraDistance
#[wasm_bindgen]
pub fn derive_render_parameters(
    object_radius: f64,
    camera_distance: f64,
) -> Result<JsValue, JsError> {
    let params = crate::mode::with_config(|config| {
        config.thresholds.derive(object_radius, camera_distance)
    });
    to_js(&params)
}
