use std::f64::consts::{PI, TAU};

use approx::assert_relative_eq;
use units::{Length, Time};

use crate::body::BodyId;
use crate::elements::OrbitalElements;
use crate::error::OrbitError;

fn elements(a: f64, e: f64) -> OrbitalElements {
    OrbitalElements::new(
        Length::from_au(a),
        e,
        0.0,
        Time::from_days(100.0),
        BodyId::new("star"),
    )
}

#[test]
fn valid_elements_pass() {
    assert!(elements(1.0, 0.0).validate().is_ok());
    assert!(elements(1e-4, 0.99).validate().is_ok());
    assert!(elements(100.0, 0.5).with_argument_of_periapsis(270.0).validate().is_ok());
}

#[test]
fn rejects_non_positive_semi_major_axis() {
    for a in [0.0, -1.0, f64::NAN, f64::INFINITY] {
        let result = elements(a, 0.1).validate();
        assert!(
            matches!(
                result,
                Err(OrbitError::InvalidOrbitalElements { field: "semiMajorAxis", .. })
            ),
            "a = {a} should be rejected, got {result:?}"
        );
    }
}

#[test]
fn rejects_open_or_invalid_eccentricity() {
    for e in [1.0, 1.5, -0.1, f64::NAN] {
        let result = elements(1.0, e).validate();
        assert!(
            matches!(
                result,
                Err(OrbitError::InvalidOrbitalElements { field: "eccentricity", .. })
            ),
            "e = {e} should be rejected, got {result:?}"
        );
    }
}

#[test]
fn rejects_invalid_period_and_angles() {
    let mut bad_period = elements(1.0, 0.1);
    bad_period.orbital_period = Time::zero();
    assert!(matches!(
        bad_period.validate(),
        Err(OrbitError::InvalidOrbitalElements { field: "orbitalPeriod", .. })
    ));

    let bad_angle = elements(1.0, 0.1).with_longitude_of_ascending_node(f64::NAN);
    assert!(matches!(
        bad_angle.validate(),
        Err(OrbitError::InvalidOrbitalElements {
            field: "longitudeOfAscendingNodeDeg",
            ..
        })
    ));
}

#[test]
fn periapsis_and_apoapsis() {
    let orbit = elements(1.0, 0.3);
    assert_relative_eq!(orbit.periapsis().to_au(), 0.7);
    assert_relative_eq!(orbit.apoapsis().to_au(), 1.3);

    let circular = elements(5.0, 0.0);
    assert_relative_eq!(circular.periapsis().to_au(), 5.0);
    assert_relative_eq!(circular.apoapsis().to_au(), 5.0);
}

#[test]
fn mean_motion_times_period_is_full_turn() {
    let orbit = elements(5.2, 0.05);
    let product = orbit.mean_motion() * orbit.orbital_period.to_seconds();
    assert_relative_eq!(product, TAU, max_relative = 1e-12);
}

#[test]
fn mean_anomaly_wraps_with_time() {
    let orbit = elements(1.0, 0.0);
    let period = orbit.orbital_period.to_seconds();

    assert_relative_eq!(orbit.mean_anomaly_at(0.0), 0.0);
    assert_relative_eq!(orbit.mean_anomaly_at(period / 2.0), PI);
    assert_relative_eq!(
        orbit.mean_anomaly_at(1000.0 * period + period / 4.0),
        PI / 2.0,
        epsilon = 1e-9
    );
    assert_relative_eq!(orbit.mean_anomaly_at(-period / 4.0), 1.5 * PI, epsilon = 1e-12);

    let shifted = elements(1.0, 0.0).with_mean_anomaly_at_epoch(90.0);
    assert_relative_eq!(shifted.mean_anomaly_at(0.0), PI / 2.0, epsilon = 1e-12);
}

#[test]
fn deserializes_catalog_record_with_defaults() {
    let json = r#"{
        "semiMajorAxis": 0.00257,
        "eccentricity": 0.0549,
        "inclinationDeg": 5.145,
        "orbitalPeriod": 2360591.5,
        "parentId": "earth"
    }"#;

    let orbit: OrbitalElements = serde_json::from_str(json).unwrap();
    assert_eq!(orbit.parent_id, BodyId::new("earth"));
    assert_relative_eq!(orbit.inclination.to_degrees(), 5.145);
    assert_eq!(orbit.argument_of_periapsis.to_degrees(), 0.0);
    assert!(orbit.validate().is_ok());
}
