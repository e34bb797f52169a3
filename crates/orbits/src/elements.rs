//! Keplerian orbital elements as loaded from catalog data.

use std::f64::consts::TAU;

use serde::{Deserialize, Serialize};
use units::{Angle, Length, Time};

use crate::body::BodyId;
use crate::error::OrbitError;

/// Keplerian orbital elements of a body around its parent.
///
/// Only closed orbits are supported (`0 ≤ e < 1`). Angles are stored in
/// degrees as catalogs provide them. The node, periapsis and epoch angles are
/// optional in serialized form and default to zero.
///
/// # Examples
/// ```
/// use orbits::{BodyId, OrbitalElements};
/// use units::{Length, Time};
///
/// let earth = OrbitalElements::new(
///     Length::from_au(1.0),
///     0.0167,
///     0.0,
///     Time::from_days(365.25),
///     BodyId::new("sol"),
/// );
/// assert!(earth.validate().is_ok());
/// assert!(earth.periapsis() < earth.apoapsis());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrbitalElements {
    /// Semi-major axis (AU)
    pub semi_major_axis: Length,

    /// Eccentricity (dimensionless, 0 ≤ e < 1)
    pub eccentricity: f64,

    /// Inclination relative to the parent's reference plane
    #[serde(rename = "inclinationDeg")]
    pub inclination: Angle,

    /// Time for one full revolution
    pub orbital_period: Time,

    /// Body this orbit is centered on
    pub parent_id: BodyId,

    /// Longitude of ascending node
    #[serde(default, rename = "longitudeOfAscendingNodeDeg")]
    pub longitude_of_ascending_node: Angle,

    /// Argument of periapsis, measured in the orbital plane from the node
    #[serde(default, rename = "argumentOfPeriapsisDeg")]
    pub argument_of_periapsis: Angle,

    /// Mean anomaly at t = 0
    #[serde(default, rename = "meanAnomalyAtEpochDeg")]
    pub mean_anomaly_at_epoch: Angle,
}

impl OrbitalElements {
    /// Elements with node, periapsis and epoch angles at zero
    pub fn new(
        semi_major_axis: Length,
        eccentricity: f64,
        inclination_deg: f64,
        orbital_period: Time,
        parent_id: BodyId,
    ) -> Self {
        Self {
            semi_major_axis,
            eccentricity,
            inclination: Angle::from_degrees(inclination_deg),
            orbital_period,
            parent_id,
            longitude_of_ascending_node: Angle::zero(),
            argument_of_periapsis: Angle::zero(),
            mean_anomaly_at_epoch: Angle::zero(),
        }
    }

    pub fn with_longitude_of_ascending_node(mut self, degrees: f64) -> Self {
        self.longitude_of_ascending_node = Angle::from_degrees(degrees);
        self
    }

    pub fn with_argument_of_periapsis(mut self, degrees: f64) -> Self {
        self.argument_of_periapsis = Angle::from_degrees(degrees);
        self
    }

    pub fn with_mean_anomaly_at_epoch(mut self, degrees: f64) -> Self {
        self.mean_anomaly_at_epoch = Angle::from_degrees(degrees);
        self
    }

    /// Checks the invariants the position solver relies on.
    ///
    /// Callers validate once at load time; the solver does not re-check.
    pub fn validate(&self) -> Result<(), OrbitError> {
        let invalid = |field: &'static str, value: f64| {
            Err(OrbitError::InvalidOrbitalElements { field, value })
        };

        if !self.semi_major_axis.is_positive_finite() {
            return invalid("semiMajorAxis", self.semi_major_axis.to_au());
        }
        if !(self.eccentricity.is_finite() && (0.0..1.0).contains(&self.eccentricity)) {
            return invalid("eccentricity", self.eccentricity);
        }
        if !self.orbital_period.is_positive_finite() {
            return invalid("orbitalPeriod", self.orbital_period.to_seconds());
        }

        let angles = [
            ("inclinationDeg", self.inclination),
            ("longitudeOfAscendingNodeDeg", self.longitude_of_ascending_node),
            ("argumentOfPeriapsisDeg", self.argument_of_periapsis),
            ("meanAnomalyAtEpochDeg", self.mean_anomaly_at_epoch),
        ];
        for (field, angle) in angles {
            if !angle.is_finite() {
                return invalid(field, angle.to_degrees());
            }
        }

        Ok(())
    }

    /// Closest approach to the parent
    pub fn periapsis(&self) -> Length {
        self.semi_major_axis * (1.0 - self.eccentricity)
    }

    /// Farthest distance from the parent
    pub fn apoapsis(&self) -> Length {
        self.semi_major_axis * (1.0 + self.eccentricity)
    }

    /// Mean motion n = 2π/T in radians per second
    pub fn mean_motion(&self) -> f64 {
        TAU / self.orbital_period.to_seconds()
    }

    /// Mean anomaly in `[0, 2π)` at the given simulation time.
    ///
    /// Time is reduced modulo the period before scaling so that large clock
    /// values do not lose phase precision.
    pub fn mean_anomaly_at(&self, time_seconds: f64) -> f64 {
        let phase = Time::from_seconds(time_seconds).phase_in(self.orbital_period);
        (self.mean_anomaly_at_epoch.to_radians() + TAU * phase).rem_euclid(TAU)
    }
}
