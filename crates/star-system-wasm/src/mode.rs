//! WASM bindings for the view mode store and view configuration.

use std::cell::RefCell;

use wasm_bindgen::prelude::*;

use star_system::ViewConfig;
use view_scaling::{DetailLevel, DisplayMode, ViewMode};
use view_state::{Feature, ModeAction, ModeState, ModeStore};

use crate::{from_js, to_js};

thread_local! {
    static MODE_STORE: ModeStore = ModeStore::new();
    static VIEW_CONFIG: RefCell<ViewConfig> = RefCell::new(ViewConfig::default());
}

/// Current mode state snapshot, used by the other binding modules
pub(crate) fn current_state() -> std::sync::Arc<ModeState> {
    MODE_STORE.with(ModeStore::snapshot)
}

pub(crate) fn with_config<R>(f: impl FnOnce(&ViewConfig) -> R) -> R {
    VIEW_CONFIG.with(|config| f(&config.borrow()))
}

fn dispatch(action: ModeAction) -> Result<JsValue, JsError> {
    let state = MODE_STORE.with(|store| store.dispatch(&action));
    to_js(&*state)
}

// =============================================================================
// Mode state
// =============================================================================

/// Get the current mode state.
///
/// # Returns
/// Object with mode, viewMode, features, dataSource and detailLevel
#[wasm_bindgen]
pub fn mode_state() -> Result<JsValue, JsError> {
    to_js(&*current_state())
}

/// Apply a mode action and return the new state.
///
/// # Arguments
/// * `action` - Tagged action, e.g. `{ type: "setViewMode", payload: "profile" }`
#[wasm_bindgen]
pub fn mode_dispatch(action: JsValue) -> Result<JsValue, JsError> {
    let action: ModeAction = from_js(action)?;
    dispatch(action)
}

/// Switch the display mode ("realistic", "navigational" or "profile").
#[wasm_bindgen]
pub fn mode_set_display_mode(mode: &str) -> Result<JsValue, JsError> {
    let mode: DisplayMode = mode.parse::<DisplayMode>().map_err(|e| JsError::new(&e.to_string()))?;
    dispatch(ModeAction::SetMode(mode))
}

/// Switch the view mode.
///
/// Unknown names fall back to "explorational".
#[wasm_bindgen]
pub fn mode_set_view_mode(view_mode: &str) -> Result<JsValue, JsError> {
    dispatch(ModeAction::SetViewMode(ViewMode::parse_lenient(view_mode)))
}

/// Toggle a feature flag by name (e.g. "scientificInfo").
#[wasm_bindgen]
pub fn mode_toggle_feature(feature: &str) -> Result<JsValue, JsError> {
    let feature: Feature = feature.parse::<Feature>().map_err(|e| JsError::new(&e.to_string()))?;
    dispatch(ModeAction::ToggleFeature(feature))
}

/// Set the render detail level ("low", "medium" or "high").
#[wasm_bindgen]
pub fn mode_set_detail_level(level: &str) -> Result<JsValue, JsError> {
    let level: DetailLevel = level.parse::<DetailLevel>().map_err(|e| JsError::new(&e.to_string()))?;
    dispatch(ModeAction::SetDetailLevel(level))
}

/// Restore the initial mode state.
#[wasm_bindgen]
pub fn mode_reset() -> Result<JsValue, JsError> {
    dispatch(ModeAction::Reset)
}

/// Number of state changes so far.
///
/// Hosts can compare revisions to drop values memoized for an older state.
#[wasm_bindgen]
pub fn mode_revision() -> u32 {
    let revision = MODE_STORE.with(ModeStore::revision);
    u32::try_from(revision).unwrap_or(u32::MAX)
}

// =============================================================================
// View configuration
// =============================================================================

/// Get the active view configuration (scaling table, thresholds, segments).
#[wasm_bindgen]
pub fn config_get() -> Result<JsValue, JsError> {
    with_config(to_js)
}

/// Replace the view configuration.
///
/// Missing sections keep their built-in values.
///
/// # Arguments
/// * `json` - Configuration as a JSON string
#[wasm_bindgen]
pub fn config_set_json(json: &str) -> Result<(), JsError> {
    let config = ViewConfig::from_json(json).map_err(|e| JsError::new(&e.to_string()))?;
    log::debug!("view config replaced");
    VIEW_CONFIG.with(|current| *current.borrow_mut() = config);
    Ok(())
}

/// Restore the built-in view configuration.
#[wasm_bindgen]
pub fn config_reset() {
    VIEW_CONFIG.with(|current| *current.borrow_mut() = ViewConfig::default());
}

/// Scaling record for the active view mode.
///
/// # Returns
/// Object with starScale, planetScale, moonScale, orbitalScale, starShaderScale
#[wasm_bindgen]
pub fn active_scaling() -> Result<JsValue, JsError> {
    let state = current_state();
    with_config(|config| to_js(state.scaling(&config.scaling)))
}
