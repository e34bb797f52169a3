use thiserror::Error;

use crate::body::BodyId;

/// Errors raised while validating catalog orbits and body trees.
///
/// None of these are produced by the position solver itself: elements are
/// validated once when a system is loaded, not on every frame.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum OrbitError {
    /// Non-finite or out-of-range orbital element
    #[error("invalid orbital elements: {field} = {value}")]
    InvalidOrbitalElements { field: &'static str, value: f64 },

    /// Body radius must be finite and strictly positive
    #[error("invalid radius for body {body}: {value}")]
    InvalidRadius { body: BodyId, value: f64 },

    /// Orbital elements name a parent other than the enclosing body
    #[error("body {body} orbits {declared} but is nested under {actual}")]
    ParentMismatch {
        body: BodyId,
        declared: BodyId,
        actual: BodyId,
    },

    /// A non-root body without orbital elements cannot be placed
    #[error("body {0} has no orbital elements")]
    MissingOrbit(BodyId),

    #[error("unknown body category: {0:?}")]
    UnknownBodyCategory(String),

    #[error("star category needs a spectral type")]
    MissingSpectralType,

    #[error("duplicate body id: {0}")]
    DuplicateBodyId(BodyId),
}
