//! Scale-adaptive camera and shader parameters.
//!
//! Depth precision collapses when the near plane is a fixed distance and the
//! focused object is a 1e-4 moon, so every threshold here is proportional to
//! the object or camera distance and clamped from below.

use serde::{Deserialize, Serialize};

#[cfg(feature = "tsify")]
use tsify_next::Tsify;

use crate::error::ScalingError;

/// Camera distance below which the tiny-object ratios apply
pub const TINY_OBJECT_THRESHOLD: f64 = 0.001;

/// Absolute lower bound on the near plane.
///
/// Small enough that the tiny regime's 1% ratio is honoured down to camera
/// distances of 1e-6.
pub const NEAR_PLANE_FLOOR: f64 = 1e-8;

/// Output consumed by the renderer's camera and grid shaders
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "tsify", derive(Tsify))]
#[cfg_attr(feature = "tsify", tsify(into_wasm_abi, from_wasm_abi))]
pub struct RenderParameters {
    pub grid_spacing: f64,
    pub depth_threshold: f64,
    pub near_plane: f64,
    pub min_camera_distance: f64,
}

/// Ratios and floors used by [`RenderThresholds::derive`].
///
/// Every field has a default, so a partial JSON object overrides only what it
/// names.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct RenderThresholds {
    pub tiny_object_threshold: f64,

    pub near_ratio: f64,
    pub min_distance_ratio: f64,
    pub tiny_near_ratio: f64,
    pub tiny_min_distance_ratio: f64,
    pub near_plane_floor: f64,

    pub grid_spacing_ratio: f64,
    pub grid_spacing_floor: f64,
    pub depth_threshold_ratio: f64,
    pub depth_threshold_floor: f64,
}

impl Default for RenderThresholds {
    fn default() -> Self {
        Self {
            tiny_object_threshold: TINY_OBJECT_THRESHOLD,
            near_ratio: 0.10,
            min_distance_ratio: 0.50,
            tiny_near_ratio: 0.01,
            tiny_min_distance_ratio: 0.10,
            near_plane_floor: NEAR_PLANE_FLOOR,
            grid_spacing_ratio: 2.0,
            grid_spacing_floor: 0.001,
            depth_threshold_ratio: 0.65,
            depth_threshold_floor: 0.0001,
        }
    }
}

impl RenderThresholds {
    /// Checks that every ratio and floor is finite and positive and that each
    /// near ratio stays below its minimum distance ratio.
    pub fn validate(&self) -> Result<(), ScalingError> {
        let fields = [
            ("tinyObjectThreshold", self.tiny_object_threshold),
            ("nearRatio", self.near_ratio),
            ("minDistanceRatio", self.min_distance_ratio),
            ("tinyNearRatio", self.tiny_near_ratio),
            ("tinyMinDistanceRatio", self.tiny_min_distance_ratio),
            ("nearPlaneFloor", self.near_plane_floor),
            ("gridSpacingRatio", self.grid_spacing_ratio),
            ("gridSpacingFloor", self.grid_spacing_floor),
            ("depthThresholdRatio", self.depth_threshold_ratio),
            ("depthThresholdFloor", self.depth_threshold_floor),
        ];
        if let Some((field, value)) = fields
            .into_iter()
            .find(|(_, value)| !(value.is_finite() && *value > 0.0))
        {
            return Err(ScalingError::InvalidThreshold { field, value });
        }

        let pairs = [
            (
                ("nearRatio", self.near_ratio),
                ("minDistanceRatio", self.min_distance_ratio),
            ),
            (
                ("tinyNearRatio", self.tiny_near_ratio),
                ("tinyMinDistanceRatio", self.tiny_min_distance_ratio),
            ),
        ];
        for ((near_field, near), (min_field, min)) in pairs {
            if near >= min {
                return Err(ScalingError::NearRatioTooLarge {
                    near_field,
                    near,
                    min_field,
                    min,
                });
            }
        }

        Ok(())
    }

    pub fn is_tiny(&self, camera_distance: f64) -> bool {
        camera_distance < self.tiny_object_threshold
    }

    /// Derives render parameters for an object of `object_radius` viewed from
    /// `camera_distance` (both in render units).
    ///
    /// The near plane never exceeds half the minimum camera distance, so
    /// `near_plane < min_camera_distance < camera_distance` for any positive
    /// camera distance.
    pub fn derive(&self, object_radius: f64, camera_distance: f64) -> RenderParameters {
        let (near_ratio, min_ratio) = if self.is_tiny(camera_distance) {
            (self.tiny_near_ratio, self.tiny_min_distance_ratio)
        } else {
            (self.near_ratio, self.min_distance_ratio)
        };

        let min_camera_distance = camera_distance * min_ratio;
        let near_plane = (camera_distance * near_ratio)
            .max(self.near_plane_floor)
            .min(min_camera_distance * 0.5);

        RenderParameters {
            grid_spacing: (object_radius * self.grid_spacing_ratio).max(self.grid_spacing_floor),
            depth_threshold: (object_radius * self.depth_threshold_ratio)
                .max(self.depth_threshold_floor),
            near_plane,
            min_camera_distance,
        }
    }
}

/// [`RenderThresholds::derive`] with the default thresholds.
///
/// # Examples
/// ```
/// use view_scaling::derive;
///
/// let moon = derive(0.0001, 0.0004);
/// assert_eq!(moon.grid_spacing, 0.001);
/// assert!(moon.near_plane < moon.min_camera_distance);
/// ```
pub fn derive(object_radius: f64, camera_distance: f64) -> RenderParameters {
    RenderThresholds::default().derive(object_radius, camera_distance)
}
