use thiserror::Error;

use crate::modes::ViewMode;

#[derive(Debug, Error)]
pub enum ScalingError {
    #[error("unknown display mode: {0:?}")]
    UnknownDisplayMode(String),

    #[error("unknown view mode: {0:?}")]
    UnknownViewMode(String),

    #[error("unknown detail level: {0:?}")]
    UnknownDetailLevel(String),

    /// Every scale constant must be finite and strictly positive
    #[error("invalid {field} for {mode} view: {value}")]
    InvalidScale {
        mode: ViewMode,
        field: &'static str,
        value: f64,
    },

    /// Render threshold ratios and floors must be finite and strictly positive
    #[error("invalid render threshold {field}: {value}")]
    InvalidThreshold { field: &'static str, value: f64 },

    /// The near plane ratio must stay below the minimum camera distance ratio
    #[error("{near_field} ({near}) must be below {min_field} ({min})")]
    NearRatioTooLarge {
        near_field: &'static str,
        near: f64,
        min_field: &'static str,
        min: f64,
    },

    #[error("failed to parse scaling configuration: {0}")]
    Config(#[from] serde_json::Error),
}
