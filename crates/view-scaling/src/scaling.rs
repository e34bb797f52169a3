//! Scale constants per view mode.
//!
//! Physical radii are far too small to see next to orbital distances, so each
//! view mode inflates bodies and compresses orbits by its own factors. The
//! explorational record is the identity: what you see is the catalog.

use serde::{Deserialize, Serialize};

#[cfg(feature = "tsify")]
use tsify_next::Tsify;

use crate::error::ScalingError;
use crate::modes::ViewMode;

/// Complete set of scale constants for one view mode
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "tsify", derive(Tsify))]
#[cfg_attr(feature = "tsify", tsify(into_wasm_abi, from_wasm_abi))]
pub struct ViewModeScaling {
    /// Multiplier on star radii
    pub star_scale: f64,
    /// Multiplier on planet radii
    pub planet_scale: f64,
    /// Multiplier on moon radii
    pub moon_scale: f64,
    /// Multiplier on orbital distances
    pub orbital_scale: f64,
    /// Multiplier on the star glow shader radius
    pub star_shader_scale: f64,
}

impl ViewModeScaling {
    pub const EXPLORATIONAL: Self = Self {
        star_scale: 1.0,
        planet_scale: 1.0,
        moon_scale: 1.0,
        orbital_scale: 1.0,
        star_shader_scale: 1.0,
    };

    // Navigation shrinks stars so inner planets stay visible
    pub const NAVIGATIONAL: Self = Self {
        star_scale: 0.25,
        planet_scale: 40.0,
        moon_scale: 60.0,
        orbital_scale: 10.0,
        star_shader_scale: 0.5,
    };

    pub const PROFILE: Self = Self {
        star_scale: 0.1,
        planet_scale: 80.0,
        moon_scale: 120.0,
        orbital_scale: 20.0,
        star_shader_scale: 0.25,
    };

    /// Built-in constants for a view mode
    pub fn for_view_mode(mode: ViewMode) -> Self {
        match mode {
            ViewMode::Explorational => Self::EXPLORATIONAL,
            ViewMode::Navigational => Self::NAVIGATIONAL,
            ViewMode::Profile => Self::PROFILE,
        }
    }

    fn fields(&self) -> [(&'static str, f64); 5] {
        [
            ("starScale", self.star_scale),
            ("planetScale", self.planet_scale),
            ("moonScale", self.moon_scale),
            ("orbitalScale", self.orbital_scale),
            ("starShaderScale", self.star_shader_scale),
        ]
    }

    /// Rejects zero, negative and non-finite scales.
    pub fn validate(&self, mode: ViewMode) -> Result<(), ScalingError> {
        match self
            .fields()
            .into_iter()
            .find(|(_, value)| !(value.is_finite() && *value > 0.0))
        {
            Some((field, value)) => Err(ScalingError::InvalidScale { mode, field, value }),
            None => Ok(()),
        }
    }
}

impl Default for ViewModeScaling {
    fn default() -> Self {
        Self::EXPLORATIONAL
    }
}

/// Lookup table from view mode to scaling record.
///
/// Deserializes from JSON with any subset of modes present; missing modes keep
/// the built-in constants.
///
/// # Examples
/// ```
/// use view_scaling::{ScalingTable, ViewMode};
///
/// let table = ScalingTable::from_json(r#"{"profile": {
///     "starScale": 0.2, "planetScale": 50.0, "moonScale": 75.0,
///     "orbitalScale": 15.0, "starShaderScale": 0.3
/// }}"#).unwrap();
///
/// assert_eq!(table.get(ViewMode::Profile).orbital_scale, 15.0);
/// assert_eq!(table.get(ViewMode::Explorational).orbital_scale, 1.0);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ScalingTable {
    pub explorational: ViewModeScaling,
    pub navigational: ViewModeScaling,
    pub profile: ViewModeScaling,
}

impl Default for ScalingTable {
    fn default() -> Self {
        Self {
            explorational: ViewModeScaling::EXPLORATIONAL,
            navigational: ViewModeScaling::NAVIGATIONAL,
            profile: ViewModeScaling::PROFILE,
        }
    }
}

impl ScalingTable {
    /// Parses and validates a JSON table
    pub fn from_json(json: &str) -> Result<Self, ScalingError> {
        let table: Self = serde_json::from_str(json)?;
        table.validate()?;
        Ok(table)
    }

    pub fn validate(&self) -> Result<(), ScalingError> {
        ViewMode::ALL
            .into_iter()
            .try_for_each(|mode| self.get(mode).validate(mode))
    }

    pub fn get(&self, mode: ViewMode) -> &ViewModeScaling {
        match mode {
            ViewMode::Explorational => &self.explorational,
            ViewMode::Navigational => &self.navigational,
            ViewMode::Profile => &self.profile,
        }
    }

    /// Lookup by name; unknown names get the explorational record.
    pub fn get_by_name(&self, name: &str) -> &ViewModeScaling {
        self.get(ViewMode::parse_lenient(name))
    }
}
