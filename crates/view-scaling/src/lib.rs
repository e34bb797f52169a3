//! Render-space scaling for multi-scale star systems.
//!
//! Orbits span five orders of magnitude and bodies even more, so positions
//! and camera parameters are never taken from physical values directly:
//! - [`transform`] remaps solver output per [`DisplayMode`]
//! - [`ScalingTable`] holds the body and orbit scales per [`ViewMode`]
//! - [`derive`] picks near plane, camera distance and grid thresholds from
//!   the size of the focused object

pub mod error;
pub mod modes;
pub mod render_params;
pub mod scaling;
pub mod transform;

#[cfg(test)]
mod render_params_test;
#[cfg(test)]
mod transform_test;

pub use error::ScalingError;
pub use modes::{DetailLevel, DisplayMode, ViewMode};
pub use render_params::{
    NEAR_PLANE_FLOOR, RenderParameters, RenderThresholds, TINY_OBJECT_THRESHOLD, derive,
};
pub use scaling::{ScalingTable, ViewModeScaling};
pub use transform::{
    BASE_SPACING_RATIO, OrbitSlot, base_spacing, equidistant_radius, profile_focus_point,
    system_max_realistic_radius, transform,
};
