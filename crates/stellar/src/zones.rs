//! Stellar zone boundaries
//!
//! All radii are in AU and scale with the square root of luminosity, since
//! stellar flux falls off with the square of distance.

use serde::{Deserialize, Serialize};

#[cfg(feature = "tsify")]
use tsify_next::Tsify;

use crate::error::StellarError;
use crate::luminosity::{combined_luminosity, luminosity_for_spectral_type};

/// Inner habitable zone edge for 1 L☉ (AU)
pub const HABITABLE_ZONE_INNER_AU: f64 = 0.95;
/// Outer habitable zone edge for 1 L☉ (AU)
pub const HABITABLE_ZONE_OUTER_AU: f64 = 1.37;
/// Water ice condensation distance for 1 L☉ (AU)
pub const SNOW_LINE_AU: f64 = 2.7;
/// Dust sublimation distance (~1500 K grains) for 1 L☉ (AU)
pub const SUBLIMATION_AU: f64 = 0.034;

pub fn habitable_zone_inner(luminosity: f64) -> f64 {
    HABITABLE_ZONE_INNER_AU * luminosity.sqrt()
}

pub fn habitable_zone_outer(luminosity: f64) -> f64 {
    HABITABLE_ZONE_OUTER_AU * luminosity.sqrt()
}

/// Snow line location in AU
pub fn snow_line(luminosity: f64) -> f64 {
    SNOW_LINE_AU * luminosity.sqrt()
}

/// Innermost distance at which dust survives, in AU
pub fn sublimation_radius(luminosity: f64) -> f64 {
    SUBLIMATION_AU * luminosity.sqrt()
}

/// Habitable zone boundaries
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HabitableZone {
    pub inner_edge: f64,
    pub outer_edge: f64,
}

impl HabitableZone {
    pub fn from_luminosity(luminosity: f64) -> Self {
        Self {
            inner_edge: habitable_zone_inner(luminosity),
            outer_edge: habitable_zone_outer(luminosity),
        }
    }

    pub fn contains(&self, distance_au: f64) -> bool {
        (self.inner_edge..=self.outer_edge).contains(&distance_au)
    }

    pub fn width(&self) -> f64 {
        self.outer_edge - self.inner_edge
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "tsify", derive(Tsify))]
#[cfg_attr(feature = "tsify", tsify(into_wasm_abi, from_wasm_abi))]
pub enum ZoneKind {
    Habitable,
    Frostline,
    Sublimation,
}

/// A zone boundary (or band) for overlay rendering.
///
/// Lines such as the snow line only have an inner radius; bands such as the
/// habitable zone carry both edges with `inner_radius < outer_radius`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "tsify", derive(Tsify))]
#[cfg_attr(feature = "tsify", tsify(into_wasm_abi, from_wasm_abi))]
pub struct ZoneResult {
    #[serde(rename = "type")]
    pub kind: ZoneKind,
    pub inner_radius: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub outer_radius: Option<f64>,
}

impl ZoneResult {
    /// Multiplies both radii, e.g. by the active orbital scale.
    pub fn scaled(&self, factor: f64) -> Self {
        Self {
            kind: self.kind,
            inner_radius: self.inner_radius * factor,
            outer_radius: self.outer_radius.map(|r| r * factor),
        }
    }
}

/// All zones for a host of the given luminosity, innermost first.
///
/// # Errors
/// [`StellarError::InvalidLuminosity`] for non-finite or non-positive input.
pub fn zones_for_luminosity(luminosity: f64) -> Result<Vec<ZoneResult>, StellarError> {
    if !(luminosity.is_finite() && luminosity > 0.0) {
        return Err(StellarError::InvalidLuminosity(luminosity));
    }

    let hz = HabitableZone::from_luminosity(luminosity);

    Ok(vec![
        ZoneResult {
            kind: ZoneKind::Sublimation,
            inner_radius: sublimation_radius(luminosity),
            outer_radius: None,
        },
        ZoneResult {
            kind: ZoneKind::Habitable,
            inner_radius: hz.inner_edge,
            outer_radius: Some(hz.outer_edge),
        },
        ZoneResult {
            kind: ZoneKind::Frostline,
            inner_radius: snow_line(luminosity),
            outer_radius: None,
        },
    ])
}

/// Stellar host of a planetary system
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase", rename_all_fields = "camelCase")]
pub enum StellarHost {
    Single { spectral_type: String },
    Binary { primary: String, secondary: String },
}

impl StellarHost {
    pub fn single(spectral_type: impl Into<String>) -> Self {
        Self::Single {
            spectral_type: spectral_type.into(),
        }
    }

    pub fn binary(primary: impl Into<String>, secondary: impl Into<String>) -> Self {
        Self::Binary {
            primary: primary.into(),
            secondary: secondary.into(),
        }
    }

    /// Total luminosity of all components (L☉)
    pub fn luminosity(&self) -> Result<f64, StellarError> {
        match self {
            Self::Single { spectral_type } => luminosity_for_spectral_type(spectral_type),
            Self::Binary { primary, secondary } => combined_luminosity(&[primary, secondary]),
        }
    }

    pub fn habitable_zone(&self) -> Result<HabitableZone, StellarError> {
        Ok(HabitableZone::from_luminosity(self.luminosity()?))
    }

    pub fn snow_line(&self) -> Result<f64, StellarError> {
        Ok(snow_line(self.luminosity()?))
    }

    pub fn zones(&self) -> Result<Vec<ZoneResult>, StellarError> {
        zones_for_luminosity(self.luminosity()?)
    }
}
