//! WASM bindings for loaded star systems.

use std::cell::RefCell;
use std::collections::HashMap;

use serde::Serialize;
use wasm_bindgen::prelude::*;

use orbits::{BodyId, BodyKind, CelestialBody};
use star_system::{Frame, OrbitLine, StarSystem};
use stellar::ZoneResult;
use view_scaling::{DisplayMode, RenderParameters, ViewMode};

use crate::mode::{current_state, with_config};
use crate::{from_js, to_js};

// Thread-local storage for loaded systems (WASM is single-threaded)
thread_local! {
    static SYSTEMS: RefCell<HashMap<u32, StarSystem>> = RefCell::new(HashMap::new());
    static NEXT_SYSTEM_ID: RefCell<u32> = const { RefCell::new(0) };
}

fn insert_system(system: StarSystem) -> u32 {
    let id = NEXT_SYSTEM_ID.with(|next_id| {
        let mut id = next_id.borrow_mut();
        let current = *id;
        *id += 1;
        current
    });

    SYSTEMS.with(|systems| {
        systems.borrow_mut().insert(id, system);
    });

    id
}

fn with_system<R>(
    system_id: u32,
    f: impl FnOnce(&StarSystem) -> Result<R, JsError>,
) -> Result<R, JsError> {
    SYSTEMS.with(|systems| {
        let systems = systems.borrow();
        let system = systems
            .get(&system_id)
            .ok_or_else(|| JsError::new(&format!("System {} not found", system_id)))?;
        f(system)
    })
}

// =============================================================================
// Serializable types for JavaScript interop
// =============================================================================

/// Body as the renderer should draw it
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BodySnapshot {
    pub id: String,
    pub kind: BodyKind,
    pub parent: Option<String>,
    /// Render-space position [x, y, z]
    pub position: [f64; 3],
    pub render_radius: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub glow_radius: Option<f64>,
}

/// Everything needed to draw one frame
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FrameSnapshot {
    pub time_seconds: f64,
    pub mode: DisplayMode,
    pub view_mode: ViewMode,
    pub bodies: Vec<BodySnapshot>,
    pub zones: Vec<ZoneResult>,
}

impl From<Frame> for FrameSnapshot {
    fn from(frame: Frame) -> Self {
        Self {
            time_seconds: frame.time_seconds,
            mode: frame.mode,
            view_mode: frame.view_mode,
            bodies: frame
                .bodies
                .into_iter()
                .map(|body| BodySnapshot {
                    id: body.id.0,
                    kind: body.kind,
                    parent: body.parent.map(|p| p.0),
                    position: body.position.coords.into(),
                    render_radius: body.render_radius,
                    glow_radius: body.glow_radius,
                })
                .collect(),
            zones: frame.zones,
        }
    }
}

/// Camera target and parameters for a focused body
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FocusSnapshot {
    pub id: String,
    pub target: [f64; 3],
    pub render_radius: f64,
    pub params: RenderParameters,
}

#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OrbitLineSnapshot {
    pub body_id: String,
    /// Flat [x0, y0, z0, x1, y1, z1, ...] for direct upload as a line buffer
    pub points: Vec<f64>,
}

impl From<OrbitLine> for OrbitLineSnapshot {
    fn from(line: OrbitLine) -> Self {
        Self {
            body_id: line.body_id.0,
            points: line
                .points
                .iter()
                .flat_map(|p| [p.x, p.y, p.z])
                .collect(),
        }
    }
}

// =============================================================================
// System management
// =============================================================================

/// Load a star system from a catalog tree.
///
/// Validates orbits, radii and spectral types once; returns a system ID for
/// use with the per-frame functions.
///
/// # Arguments
/// * `catalog` - Root CelestialBody object with nested children
#[wasm_bindgen]
pub fn system_load(catalog: JsValue) -> Result<u32, JsError> {
    let root: CelestialBody = from_js(catalog)?;
    let system = StarSystem::load(root).map_err(|e| JsError::new(&e.to_string()))?;
    Ok(insert_system(system))
}

/// Load a star system from a catalog JSON string.
#[wasm_bindgen]
pub fn system_load_json(json: &str) -> Result<u32, JsError> {
    let system = StarSystem::from_json(json).map_err(|e| JsError::new(&e.to_string()))?;
    Ok(insert_system(system))
}

/// Delete a system to free memory.
#[wasm_bindgen]
pub fn system_delete(system_id: u32) {
    SYSTEMS.with(|systems| {
        systems.borrow_mut().remove(&system_id);
    });
}

/// Combined luminosity of the system's host stars (L☉).
#[wasm_bindgen]
pub fn system_luminosity(system_id: u32) -> Result<f64, JsError> {
    with_system(system_id, |system| Ok(system.luminosity()))
}

// =============================================================================
// Per-frame queries
// =============================================================================

/// Render-space positions, radii and zone overlays under the current modes.
///
/// # Arguments
/// * `system_id` - System ID from `system_load`
/// * `time_seconds` - Simulation time in seconds
#[wasm_bindgen]
pub fn system_frame(system_id: u32, time_seconds: f64) -> Result<JsValue, JsError> {
    let state = current_state();
    with_system(system_id, |system| {
        let frame = with_config(|config| system.frame(&state, config, time_seconds))
            .map_err(|e| JsError::new(&e.to_string()))?;
        to_js(&FrameSnapshot::from(frame))
    })
}

/// Camera target and render parameters for a focused body.
///
/// # Arguments
/// * `system_id` - System ID
/// * `body_id` - Catalog ID of the focused body
/// * `time_seconds` - Simulation time in seconds
/// * `camera_distance` - Current camera distance from the target
#[wasm_bindgen]
pub fn system_focus(
    system_id: u32,
    body_id: &str,
    time_seconds: f64,
    camera_distance: f64,
) -> Result<JsValue, JsError> {
    let state = current_state();
    let body_id = BodyId::new(body_id);
    with_system(system_id, |system| {
        let focus = with_config(|config| {
            system.focus(&body_id, &state, config, time_seconds, camera_distance)
        })
        .map_err(|e| JsError::new(&e.to_string()))?;

        to_js(&FocusSnapshot {
            id: focus.id.0,
            target: focus.target.coords.into(),
            render_radius: focus.render_radius,
            params: focus.params,
        })
    })
}

/// Orbit lines for every orbiting body; empty in profile mode.
#[wasm_bindgen]
pub fn system_orbit_lines(system_id: u32, time_seconds: f64) -> Result<JsValue, JsError> {
    let state = current_state();
    with_system(system_id, |system| {
        let lines: Vec<OrbitLineSnapshot> =
            with_config(|config| system.orbit_lines(&state, config, time_seconds))
                .into_iter()
                .map(OrbitLineSnapshot::from)
                .collect();
        to_js(&lines)
    })
}

/// Zone overlays scaled by the active orbital scale.
#[wasm_bindgen]
pub fn system_zones(system_id: u32) -> Result<JsValue, JsError> {
    let state = current_state();
    with_system(system_id, |system| {
        let orbital_scale = with_config(|config| state.scaling(&config.scaling).orbital_scale);
        let zones = system
            .zones(orbital_scale)
            .map_err(|e| JsError::new(&e.to_string()))?;
        to_js(&zones)
    })
}
