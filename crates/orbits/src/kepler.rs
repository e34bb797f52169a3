//! Orbital position solver.
//!
//! Converts orbital elements and a simulation time into a parent-centered
//! position. The scene is y-up: an orbit with zero inclination lies in the
//! xz-plane with periapsis on +x.

use std::f64::consts::PI;

use nalgebra::{Point3, Rotation3, Vector3};

use crate::elements::OrbitalElements;

/// Newton-Raphson iteration cap; bounds the cost for e close to 1
pub const MAX_ITERATIONS: usize = 8;

/// Residual |E − e·sin E − M| accepted as converged
pub const TOLERANCE: f64 = 1e-9;

/// Result of solving Kepler's equation
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct KeplerSolution {
    /// Eccentric anomaly E (radians)
    pub eccentric_anomaly: f64,
    /// Newton steps taken
    pub iterations: usize,
    /// Final |E − e·sin E − M|
    pub residual: f64,
}

impl KeplerSolution {
    pub fn converged(&self) -> bool {
        self.residual < TOLERANCE
    }
}

/// Solve Kepler's equation M = E − e·sin(E) for the eccentric anomaly.
///
/// Stops after [`MAX_ITERATIONS`] Newton steps or once the residual drops
/// below [`TOLERANCE`], whichever comes first. For `e = 0` the initial guess
/// is already exact.
///
/// # Arguments
/// * `mean_anomaly` - Mean anomaly M (radians, any range)
/// * `eccentricity` - Eccentricity e in `[0, 1)`
pub fn solve_kepler(mean_anomaly: f64, eccentricity: f64) -> KeplerSolution {
    let m = mean_anomaly.rem_euclid(std::f64::consts::TAU);
    let e = eccentricity;

    // Starting from π keeps highly eccentric orbits away from the flat
    // region of f(E) near periapsis.
    let mut ecc_anomaly = if e < 0.8 { m } else { PI };
    let mut residual = ecc_anomaly - e * ecc_anomaly.sin() - m;
    let mut iterations = 0;

    while residual.abs() >= TOLERANCE && iterations < MAX_ITERATIONS {
        let f_prime = 1.0 - e * ecc_anomaly.cos();
        ecc_anomaly -= residual / f_prime;
        residual = ecc_anomaly - e * ecc_anomaly.sin() - m;
        iterations += 1;
    }

    if residual.abs() >= TOLERANCE {
        log::trace!(
            "kepler solver stopped at iteration cap: M={m}, e={e}, residual={residual:e}"
        );
    }

    KeplerSolution {
        eccentric_anomaly: ecc_anomaly,
        iterations,
        residual: residual.abs(),
    }
}

/// True anomaly ν from eccentric anomaly E.
///
/// Uses the half-angle form, which stays well conditioned for every E.
pub fn true_anomaly(eccentric_anomaly: f64, eccentricity: f64) -> f64 {
    let half = eccentric_anomaly / 2.0;
    2.0 * ((1.0 + eccentricity).sqrt() * half.sin())
        .atan2((1.0 - eccentricity).sqrt() * half.cos())
}

/// Parent-centered position (AU) of a body at `time_seconds`.
///
/// Elements must satisfy [`OrbitalElements::validate`]; the solver itself
/// never fails and never loops unboundedly.
///
/// # Examples
/// ```
/// use orbits::{BodyId, OrbitalElements, position_at};
/// use units::{Length, Time};
///
/// let elements = OrbitalElements::new(
///     Length::from_au(2.0),
///     0.0,
///     0.0,
///     Time::from_days(100.0),
///     BodyId::new("star"),
/// );
///
/// let quarter = Time::from_days(25.0).to_seconds();
/// let position = position_at(&elements, quarter);
/// assert!(position.x.abs() < 1e-9);
/// assert!((position.z - 2.0).abs() < 1e-9);
/// ```
pub fn position_at(elements: &OrbitalElements, time_seconds: f64) -> Point3<f64> {
    let a = elements.semi_major_axis.to_au();
    let e = elements.eccentricity;

    let mean_anomaly = elements.mean_anomaly_at(time_seconds);
    let solution = solve_kepler(mean_anomaly, e);
    let ecc_anomaly = solution.eccentric_anomaly;

    let nu = true_anomaly(ecc_anomaly, e);
    let r = a * (1.0 - e * ecc_anomaly.cos());

    // Argument of latitude: angle from the ascending node within the plane
    let u = nu + elements.argument_of_periapsis.to_radians();
    let in_plane = Vector3::new(r * u.cos(), 0.0, r * u.sin());

    let tilt = Rotation3::from_axis_angle(&Vector3::x_axis(), elements.inclination.to_radians());
    let node = Rotation3::from_axis_angle(
        &Vector3::y_axis(),
        -elements.longitude_of_ascending_node.to_radians(),
    );

    Point3::from(node * tilt * in_plane)
}

/// Sampled closed orbit path for drawing orbit lines.
///
/// Samples are evenly spaced in eccentric anomaly so that points crowd near
/// periapsis less than with time sampling.
pub fn orbit_path(elements: &OrbitalElements, segments: usize) -> Vec<Point3<f64>> {
    let segments = segments.max(3);
    let e = elements.eccentricity;
    let period = elements.orbital_period.to_seconds();
    let epoch = elements.mean_anomaly_at_epoch.to_radians();

    (0..=segments)
        .map(|i| {
            let ecc_anomaly = std::f64::consts::TAU * i as f64 / segments as f64;
            let mean_anomaly = ecc_anomaly - e * ecc_anomaly.sin();
            let time = (mean_anomaly - epoch) / std::f64::consts::TAU * period;
            position_at(elements, time)
        })
        .collect()
}
