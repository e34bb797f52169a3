use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

#[cfg(feature = "tsify")]
use tsify_next::Tsify;

use crate::error::StateError;

/// Optional overlays and info panels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "tsify", derive(Tsify))]
#[cfg_attr(feature = "tsify", tsify(into_wasm_abi, from_wasm_abi))]
pub enum Feature {
    ScientificInfo,
    EducationalContent,
    /// Profile panels; older hosts call this `profileInfo`
    #[serde(alias = "profileInfo")]
    GameInfo,
    JumpPointInfo,
}

impl Feature {
    pub const ALL: [Feature; 4] = [
        Self::ScientificInfo,
        Self::EducationalContent,
        Self::GameInfo,
        Self::JumpPointInfo,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::ScientificInfo => "scientificInfo",
            Self::EducationalContent => "educationalContent",
            Self::GameInfo => "gameInfo",
            Self::JumpPointInfo => "jumpPointInfo",
        }
    }
}

impl fmt::Display for Feature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Feature {
    type Err = StateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "profileInfo" => Ok(Self::GameInfo),
            _ => Self::ALL
                .into_iter()
                .find(|feature| feature.as_str() == s)
                .ok_or_else(|| StateError::UnknownFeature(s.to_string())),
        }
    }
}

/// On/off switch per [`Feature`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "tsify", derive(Tsify))]
#[cfg_attr(feature = "tsify", tsify(into_wasm_abi, from_wasm_abi))]
pub struct FeatureFlags {
    pub scientific_info: bool,
    pub educational_content: bool,
    pub game_info: bool,
    pub jump_point_info: bool,
}

impl Default for FeatureFlags {
    fn default() -> Self {
        Self {
            scientific_info: true,
            educational_content: true,
            game_info: false,
            jump_point_info: false,
        }
    }
}

impl FeatureFlags {
    pub fn get(&self, feature: Feature) -> bool {
        match feature {
            Feature::ScientificInfo => self.scientific_info,
            Feature::EducationalContent => self.educational_content,
            Feature::GameInfo => self.game_info,
            Feature::JumpPointInfo => self.jump_point_info,
        }
    }

    fn slot(&mut self, feature: Feature) -> &mut bool {
        match feature {
            Feature::ScientificInfo => &mut self.scientific_info,
            Feature::EducationalContent => &mut self.educational_content,
            Feature::GameInfo => &mut self.game_info,
            Feature::JumpPointInfo => &mut self.jump_point_info,
        }
    }

    /// Copy with `feature` set to `enabled` (builder pattern)
    pub fn with(mut self, feature: Feature, enabled: bool) -> Self {
        *self.slot(feature) = enabled;
        self
    }

    pub fn toggled(mut self, feature: Feature) -> Self {
        let slot = self.slot(feature);
        *slot = !*slot;
        self
    }

    /// Features currently switched on
    pub fn enabled(&self) -> impl Iterator<Item = Feature> + '_ {
        Feature::ALL.into_iter().filter(|f| self.get(*f))
    }
}
