use orbits::{BodyId, OrbitError};
use stellar::StellarError;
use thiserror::Error;
use view_scaling::ScalingError;

#[derive(Debug, Error)]
pub enum SystemError {
    #[error(transparent)]
    Stellar(#[from] StellarError),

    #[error(transparent)]
    Orbit(#[from] OrbitError),

    #[error(transparent)]
    Scaling(#[from] ScalingError),

    #[error("failed to parse system: {0}")]
    Parse(#[from] serde_json::Error),

    /// Neither the root nor its direct children are stars
    #[error("system {0} has no host star")]
    NoHostStar(BodyId),

    #[error("unknown body: {0}")]
    UnknownBody(BodyId),
}
