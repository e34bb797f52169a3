use serde::{Deserialize, Serialize};
use view_scaling::{RenderThresholds, ScalingTable};

use crate::error::SystemError;

/// Default number of segments per orbit line
pub const DEFAULT_ORBIT_SEGMENTS: usize = 128;

/// Tunable view configuration.
///
/// Every section is optional in JSON and falls back to the built-in values.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ViewConfig {
    pub scaling: ScalingTable,
    pub thresholds: RenderThresholds,
    pub orbit_segments: usize,
}

impl Default for ViewConfig {
    fn default() -> Self {
        Self {
            scaling: ScalingTable::default(),
            thresholds: RenderThresholds::default(),
            orbit_segments: DEFAULT_ORBIT_SEGMENTS,
        }
    }
}

impl ViewConfig {
    pub fn from_json(json: &str) -> Result<Self, SystemError> {
        let config: Self = serde_json::from_str(json)?;
        config.scaling.validate()?;
        config.thresholds.validate()?;
        Ok(config)
    }
}
