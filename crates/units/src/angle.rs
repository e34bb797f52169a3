use serde::{Deserialize, Serialize};

/// A plane angle stored in degrees, the unit catalog data uses.
///
/// Trigonometry always goes through [`Angle::to_radians`].
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Angle(f64); // Base unit: degrees

impl Angle {
    pub fn zero() -> Self {
        Self(0.0)
    }

    pub fn from_degrees(value: f64) -> Self {
        Self(value)
    }

    pub fn from_radians(value: f64) -> Self {
        Self(value.to_degrees())
    }

    pub fn to_degrees(&self) -> f64 {
        self.0
    }

    pub fn to_radians(&self) -> f64 {
        self.0.to_radians()
    }

    pub fn is_finite(&self) -> bool {
        self.0.is_finite()
    }
}
