//! Display, view and detail enums shared by the transforms and mode state.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

#[cfg(feature = "tsify")]
use tsify_next::Tsify;

use crate::error::ScalingError;

/// Spatial semantics of rendered orbits
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "tsify", derive(Tsify))]
#[cfg_attr(feature = "tsify", tsify(into_wasm_abi, from_wasm_abi))]
pub enum DisplayMode {
    /// True relative distances
    #[default]
    Realistic,
    /// Equidistant orbit slots, footprint preserved
    Navigational,
    /// Equidistant slots on a single horizontal lane
    Profile,
}

impl DisplayMode {
    pub const ALL: [DisplayMode; 3] = [Self::Realistic, Self::Navigational, Self::Profile];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Realistic => "realistic",
            Self::Navigational => "navigational",
            Self::Profile => "profile",
        }
    }
}

impl fmt::Display for DisplayMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DisplayMode {
    type Err = ScalingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|mode| mode.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| ScalingError::UnknownDisplayMode(s.to_string()))
    }
}

/// Which scaling constants are active
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "tsify", derive(Tsify))]
#[cfg_attr(feature = "tsify", tsify(into_wasm_abi, from_wasm_abi))]
pub enum ViewMode {
    #[default]
    Explorational,
    Navigational,
    Profile,
}

impl ViewMode {
    pub const ALL: [ViewMode; 3] = [Self::Explorational, Self::Navigational, Self::Profile];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Explorational => "explorational",
            Self::Navigational => "navigational",
            Self::Profile => "profile",
        }
    }

    /// Parses a view mode, falling back to [`ViewMode::Explorational`] for
    /// anything unrecognized.
    pub fn parse_lenient(s: &str) -> Self {
        s.parse().unwrap_or_else(|_| {
            log::warn!("unknown view mode {s:?}, using explorational");
            Self::Explorational
        })
    }

    /// Detail level the renderer should drop to for this view
    pub fn preferred_detail(&self) -> DetailLevel {
        match self {
            Self::Explorational => DetailLevel::Medium,
            Self::Navigational | Self::Profile => DetailLevel::Low,
        }
    }
}

impl fmt::Display for ViewMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ViewMode {
    type Err = ScalingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|mode| mode.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| ScalingError::UnknownViewMode(s.to_string()))
    }
}

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize,
)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "tsify", derive(Tsify))]
#[cfg_attr(feature = "tsify", tsify(into_wasm_abi, from_wasm_abi))]
pub enum DetailLevel {
    Low,
    #[default]
    Medium,
    High,
}

impl FromStr for DetailLevel {
    type Err = ScalingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "low" => Ok(Self::Low),
            "medium" => Ok(Self::Medium),
            "high" => Ok(Self::High),
            _ => Err(ScalingError::UnknownDetailLevel(s.to_string())),
        }
    }
}
